use oracle_hub_interface::types::{error::Error, permission::Permission};
use soroban_sdk::{Address, Env, Vec};

use crate::event;
use crate::storage::{read_feed_entry, write_feed_entry};

use super::utils::heartbeat::sample_heartbeat;
use super::utils::validation::require_permission;

pub fn recalibrate(env: &Env, who: &Address, token: &Address) -> Result<(), Error> {
    require_permission(env, who, &Permission::Recalibrate)?;

    recalibrate_token(env, token)
}

pub fn recalibrate_bulk(env: &Env, who: &Address, tokens: &Vec<Address>) -> Result<(), Error> {
    require_permission(env, who, &Permission::Recalibrate)?;

    for token in tokens.iter() {
        recalibrate_token(env, &token)?;
    }

    Ok(())
}

pub fn recalibrate_preview(env: &Env, token: &Address) -> Result<u64, Error> {
    let entry = read_feed_entry(env, token)?;

    Ok(sample_heartbeat(env, &entry.feed)?.unwrap_or(entry.heartbeat))
}

fn recalibrate_token(env: &Env, token: &Address) -> Result<(), Error> {
    let mut entry = read_feed_entry(env, token)?;

    if let Some(heartbeat) = sample_heartbeat(env, &entry.feed)? {
        entry.heartbeat = heartbeat;
        write_feed_entry(env, token, &entry);
    }

    event::heartbeat_recalibrated(env, token, entry.heartbeat);

    Ok(())
}
