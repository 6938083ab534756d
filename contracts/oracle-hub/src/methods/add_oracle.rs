use oracle_hub_interface::types::feed_entry::FeedEntry;
use oracle_hub_interface::types::oracle_input::OracleInput;
use oracle_hub_interface::types::{error::Error, permission::Permission};
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{token, Address, Env, Vec};

use crate::event;
use crate::storage::{read_default_heartbeat, write_feed_entry};

use super::utils::heartbeat::sample_heartbeat;
use super::utils::validation::{
    require_permission, require_unregistered, require_valid_decimals, require_valid_underlying,
};

pub fn add_oracle(
    env: &Env,
    who: &Address,
    token: &Address,
    feed: &Address,
    underlying_feed_tokens: &Vec<Address>,
) -> Result<(), Error> {
    require_permission(env, who, &Permission::AddOracle)?;

    register(env, token, feed, underlying_feed_tokens)
}

pub fn add_oracle_bulk(env: &Env, who: &Address, inputs: &Vec<OracleInput>) -> Result<(), Error> {
    require_permission(env, who, &Permission::AddOracle)?;

    for input in inputs.iter() {
        register(env, &input.token, &input.feed, &input.underlying_feed_tokens)?;
    }

    Ok(())
}

fn register(
    env: &Env,
    token: &Address,
    feed: &Address,
    underlying_feed_tokens: &Vec<Address>,
) -> Result<(), Error> {
    require_unregistered(env, token);
    require_valid_underlying(env, token, underlying_feed_tokens);

    let token_decimals = token::Client::new(env, token).decimals();
    let feed_decimals = PriceFeedClient::new(env, feed).decimals();

    require_valid_decimals(env, token_decimals);
    require_valid_decimals(env, feed_decimals);

    let heartbeat = match sample_heartbeat(env, feed)? {
        Some(heartbeat) => heartbeat,
        None => read_default_heartbeat(env)?,
    };

    let entry = FeedEntry {
        feed: feed.clone(),
        token_decimals,
        feed_decimals,
        underlying_feed_tokens: underlying_feed_tokens.clone(),
        heartbeat,
    };

    write_feed_entry(env, token, &entry);

    event::oracle_added(env, token, &entry);

    Ok(())
}
