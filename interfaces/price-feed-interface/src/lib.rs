//! Round-based price feed interface.
//! A feed publishes answers in rounds, every round has an increasing id starting from 1
//! and the timestamp of the moment it was updated.

#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env};
use types::round_data::RoundData;

pub mod types;

pub struct Spec;

/// Price feed interface description
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedTrait {
    /// Return the number of decimals of the answers
    fn decimals(env: Env) -> u32;

    /// Get the most recent round, `None` if nothing was published yet
    fn latest_round_data(env: Env) -> Option<RoundData>;

    /// Get round by id, `None` if round is unknown
    fn round_data(env: Env, round_id: u128) -> Option<RoundData>;
}
