#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Vec};
use types::error::Error;
use types::feed_entry::FeedEntry;
use types::oracle_input::OracleInput;
use types::permission::Permission;

pub mod types;

pub struct Spec;

/// Interface for OracleHub
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "OracleHubClient")]
pub trait OracleHubTrait {
    fn initialize(env: Env, admin: Address, default_heartbeat: u64) -> Result<(), Error>;

    fn version() -> u32;

    fn grant_permission(
        env: Env,
        who: Address,
        receiver: Address,
        permission: Permission,
    ) -> Result<(), Error>;

    fn revoke_permission(
        env: Env,
        who: Address,
        owner: Address,
        permission: Permission,
    ) -> Result<(), Error>;

    fn permissioned(env: Env, permission: Permission) -> Vec<Address>;

    fn set_default_heartbeat(env: Env, who: Address, heartbeat: u64) -> Result<(), Error>;

    fn default_heartbeat(env: Env) -> Result<u64, Error>;

    /// Binds `feed` to `token`. A token can be bound only once.
    fn add_oracle(
        env: Env,
        who: Address,
        token: Address,
        feed: Address,
        underlying_feed_tokens: Vec<Address>,
    ) -> Result<(), Error>;

    fn add_oracle_bulk(env: Env, who: Address, inputs: Vec<OracleInput>) -> Result<(), Error>;

    fn price_feed(env: Env, token: Address) -> Option<FeedEntry>;

    /// Sets token heartbeat to the second largest delta between the recent rounds of its feed
    fn recalibrate(env: Env, who: Address, token: Address) -> Result<(), Error>;

    fn recalibrate_bulk(env: Env, who: Address, tokens: Vec<Address>) -> Result<(), Error>;

    /// Returns heartbeat `recalibrate` would set without writing it
    fn recalibrate_preview(env: Env, token: Address) -> Result<u64, Error>;

    /// Returns true if the feed of the token, or any of its underlying feeds, missed its heartbeat
    fn chainlink_is_dead(env: Env, token: Address) -> Result<bool, Error>;

    fn chainlink_is_dead_bulk(env: Env, tokens: Vec<Address>) -> Result<Vec<bool>, Error>;

    /// Returns latest answer of the token feed in feed decimals
    fn latest_price(env: Env, token: Address) -> Result<i128, Error>;

    /// Converts token amount into USD value with 18 decimals
    fn get_tokens_in_usd(env: Env, token: Address, amount: i128) -> Result<i128, Error>;

    /// Converts USD value with 18 decimals into token amount
    fn get_tokens_from_usd(env: Env, token: Address, usd_value: i128) -> Result<i128, Error>;
}
