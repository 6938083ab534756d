#![deny(warnings)]
#![no_std]

mod storage;

use crate::storage::*;
use price_feed_interface::{types::round_data::RoundData, PriceFeedTrait};
use soroban_sdk::{contract, contractimpl, Env};

#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn decimals(env: Env) -> u32 {
        read_decimals(&env)
    }

    fn latest_round_data(env: Env) -> Option<RoundData> {
        write_latest_round_calls(&env, read_latest_round_calls(&env) + 1);

        match read_latest_round_id(&env) {
            0 => None,
            round_id => read_round(&env, round_id),
        }
    }

    fn round_data(env: Env, round_id: u128) -> Option<RoundData> {
        read_round(&env, round_id)
    }
}

/// Not a part of the feed interface, used to drive the mock from tests.
#[contractimpl]
impl PriceFeedMock {
    pub fn init(env: Env, decimals: u32) {
        write_decimals(&env, decimals);
    }

    /// Publishes new round and returns its id
    pub fn push_round(env: Env, answer: i128, updated_at: u64) -> u128 {
        let round_id = read_latest_round_id(&env) + 1;

        write_round(
            &env,
            &RoundData {
                round_id,
                answer,
                started_at: updated_at,
                updated_at,
                answered_in_round: round_id,
            },
        );
        write_latest_round_id(&env, round_id);

        round_id
    }

    pub fn latest_round_calls(env: Env) -> u32 {
        read_latest_round_calls(&env)
    }
}
