use oracle_hub_interface::types::error::Error;
use soroban_sdk::{Address, Env, Vec};

use crate::storage::read_feed_entry;

use super::utils::derivative::is_dead_derivative;

pub fn chainlink_is_dead(env: &Env, token: &Address) -> Result<bool, Error> {
    is_dead_derivative(env, &read_feed_entry(env, token)?)
}

pub fn chainlink_is_dead_bulk(env: &Env, tokens: &Vec<Address>) -> Result<Vec<bool>, Error> {
    let mut states = Vec::new(env);

    for token in tokens.iter() {
        states.push_back(chainlink_is_dead(env, &token)?);
    }

    Ok(states)
}
