use common::{SecondLargest, MAX_ROUND_COUNT};
use oracle_hub_interface::types::error::Error;
use oracle_hub_interface::types::feed_entry::FeedEntry;
use price_feed_interface::types::round_data::RoundData;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{Address, Env};

pub fn latest_round(env: &Env, feed: &Address) -> Result<RoundData, Error> {
    PriceFeedClient::new(env, feed)
        .latest_round_data()
        .ok_or(Error::NoPriceForAsset)
}

/// Returns true if more than `heartbeat` seconds passed since the round was updated.
/// A round stamped ahead of the ledger time counts as fresh.
pub fn is_stale(env: &Env, entry: &FeedEntry, round: &RoundData) -> bool {
    env.ledger()
        .timestamp()
        .saturating_sub(round.updated_at)
        > entry.heartbeat
}

pub fn is_dead(env: &Env, entry: &FeedEntry) -> Result<bool, Error> {
    let latest = latest_round(env, &entry.feed)?;

    Ok(is_stale(env, entry, &latest))
}

/// Walks back over the last `MAX_ROUND_COUNT` rounds of the feed and returns the second
/// largest time delta between two adjacent rounds. The largest one is treated as an outage.
/// Returns `None` when history has less than two deltas.
pub fn sample_heartbeat(env: &Env, feed: &Address) -> Result<Option<u64>, Error> {
    let client = PriceFeedClient::new(env, feed);
    let latest = client
        .latest_round_data()
        .ok_or(Error::NoPriceForAsset)?;

    let rounds = latest.round_id.min(u128::from(MAX_ROUND_COUNT));

    let mut deltas = SecondLargest::new();
    let mut newer_updated_at = latest.updated_at;

    for i in 1..rounds {
        let older = match client.round_data(&(latest.round_id - i)) {
            Some(round) => round,
            None => break,
        };

        let delta = newer_updated_at
            .checked_sub(older.updated_at)
            .ok_or(Error::MathOverflowError)?;

        deltas.push(delta);
        newer_updated_at = older.updated_at;
    }

    Ok(deltas.second())
}
