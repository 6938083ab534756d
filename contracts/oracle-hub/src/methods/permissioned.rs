use oracle_hub_interface::types::permission::Permission;
use soroban_sdk::{Address, Env, Vec};

use crate::storage::read_permission_owners;

pub fn permissioned(env: &Env, permission: &Permission) -> Vec<Address> {
    read_permission_owners(env, permission)
}
