#![deny(warnings)]
#![no_std]

use methods::{
    add_oracle::{add_oracle, add_oracle_bulk},
    chainlink_is_dead::{chainlink_is_dead, chainlink_is_dead_bulk},
    get_tokens_from_usd::get_tokens_from_usd,
    get_tokens_in_usd::get_tokens_in_usd,
    grant_permission::grant_permission,
    initialize::initialize,
    latest_price::latest_price,
    permissioned::permissioned,
    recalibrate::{recalibrate, recalibrate_bulk, recalibrate_preview},
    revoke_permission::revoke_permission,
    set_default_heartbeat::set_default_heartbeat,
};
use oracle_hub_interface::types::{
    error::Error, feed_entry::FeedEntry, oracle_input::OracleInput, permission::Permission,
};
use oracle_hub_interface::OracleHubTrait;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct OracleHub;

#[contractimpl]
impl OracleHubTrait for OracleHub {
    fn initialize(env: Env, admin: Address, default_heartbeat: u64) -> Result<(), Error> {
        initialize(&env, &admin, default_heartbeat)
    }

    fn version() -> u32 {
        1
    }

    fn grant_permission(
        env: Env,
        who: Address,
        receiver: Address,
        permission: Permission,
    ) -> Result<(), Error> {
        grant_permission(&env, &who, &receiver, &permission)
    }

    fn revoke_permission(
        env: Env,
        who: Address,
        owner: Address,
        permission: Permission,
    ) -> Result<(), Error> {
        revoke_permission(&env, &who, &owner, &permission)
    }

    fn permissioned(env: Env, permission: Permission) -> Vec<Address> {
        permissioned(&env, &permission)
    }

    fn set_default_heartbeat(env: Env, who: Address, heartbeat: u64) -> Result<(), Error> {
        set_default_heartbeat(&env, &who, heartbeat)
    }

    fn default_heartbeat(env: Env) -> Result<u64, Error> {
        read_default_heartbeat(&env)
    }

    fn add_oracle(
        env: Env,
        who: Address,
        token: Address,
        feed: Address,
        underlying_feed_tokens: Vec<Address>,
    ) -> Result<(), Error> {
        add_oracle(&env, &who, &token, &feed, &underlying_feed_tokens)
    }

    fn add_oracle_bulk(env: Env, who: Address, inputs: Vec<OracleInput>) -> Result<(), Error> {
        add_oracle_bulk(&env, &who, &inputs)
    }

    fn price_feed(env: Env, token: Address) -> Option<FeedEntry> {
        read_feed_entry(&env, &token).ok()
    }

    fn recalibrate(env: Env, who: Address, token: Address) -> Result<(), Error> {
        recalibrate(&env, &who, &token)
    }

    fn recalibrate_bulk(env: Env, who: Address, tokens: Vec<Address>) -> Result<(), Error> {
        recalibrate_bulk(&env, &who, &tokens)
    }

    fn recalibrate_preview(env: Env, token: Address) -> Result<u64, Error> {
        recalibrate_preview(&env, &token)
    }

    fn chainlink_is_dead(env: Env, token: Address) -> Result<bool, Error> {
        chainlink_is_dead(&env, &token)
    }

    fn chainlink_is_dead_bulk(env: Env, tokens: Vec<Address>) -> Result<Vec<bool>, Error> {
        chainlink_is_dead_bulk(&env, &tokens)
    }

    fn latest_price(env: Env, token: Address) -> Result<i128, Error> {
        latest_price(&env, &token)
    }

    fn get_tokens_in_usd(env: Env, token: Address, amount: i128) -> Result<i128, Error> {
        get_tokens_in_usd(&env, &token, amount)
    }

    fn get_tokens_from_usd(env: Env, token: Address, usd_value: i128) -> Result<i128, Error> {
        get_tokens_from_usd(&env, &token, usd_value)
    }
}
