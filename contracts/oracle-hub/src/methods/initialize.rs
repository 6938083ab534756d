use oracle_hub_interface::types::error::Error;
use oracle_hub_interface::types::permission::Permission;
use soroban_sdk::{vec, Address, Env};

use crate::event;
use crate::storage::{write_default_heartbeat, write_permission_owners};

use super::utils::validation::require_not_initialized;

pub fn initialize(env: &Env, admin: &Address, default_heartbeat: u64) -> Result<(), Error> {
    require_not_initialized(env);

    write_permission_owners(env, &vec![env, admin.clone()], &Permission::Permission);
    write_default_heartbeat(env, default_heartbeat);

    event::initialized(env, admin, default_heartbeat);

    Ok(())
}
