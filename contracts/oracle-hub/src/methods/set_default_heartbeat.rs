use oracle_hub_interface::types::{error::Error, permission::Permission};
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_default_heartbeat;

use super::utils::validation::require_permission;

pub fn set_default_heartbeat(env: &Env, who: &Address, heartbeat: u64) -> Result<(), Error> {
    require_permission(env, who, &Permission::SetDefaultHeartbeat)?;

    write_default_heartbeat(env, heartbeat);

    event::default_heartbeat_set(env, heartbeat);

    Ok(())
}
