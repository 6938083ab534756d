use oracle_hub_interface::types::error::Error;
use oracle_hub_interface::types::feed_entry::FeedEntry;
use soroban_sdk::Env;

use crate::storage::read_feed_entry;

use super::heartbeat::is_dead;

/// A derivative is dead as soon as one of its constituents is dead.
/// Stops on the first dead constituent, the rest of the feeds are not queried.
pub fn is_dead_underlying(env: &Env, entry: &FeedEntry) -> Result<bool, Error> {
    for token in entry.underlying_feed_tokens.iter() {
        let underlying = read_feed_entry(env, &token)?;

        if is_dead(env, &underlying)? {
            return Ok(true);
        }
    }

    Ok(false)
}

pub fn is_dead_derivative(env: &Env, entry: &FeedEntry) -> Result<bool, Error> {
    if entry.is_derivative() {
        is_dead_underlying(env, entry)
    } else {
        is_dead(env, entry)
    }
}
