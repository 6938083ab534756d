use price_feed_interface::types::round_data::RoundData;
use soroban_sdk::{contracttype, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Decimals,
    LatestRoundId,
    Round(u128),
    LatestRoundCalls,
}

pub fn read_decimals(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .unwrap_or(8)
}

pub fn write_decimals(env: &Env, decimals: u32) {
    env.storage().instance().set(&DataKey::Decimals, &decimals);
}

pub fn read_latest_round_id(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::LatestRoundId)
        .unwrap_or(0)
}

pub fn write_latest_round_id(env: &Env, round_id: u128) {
    env.storage()
        .instance()
        .set(&DataKey::LatestRoundId, &round_id);
}

pub fn read_round(env: &Env, round_id: u128) -> Option<RoundData> {
    env.storage().instance().get(&DataKey::Round(round_id))
}

pub fn write_round(env: &Env, round: &RoundData) {
    env.storage()
        .instance()
        .set(&DataKey::Round(round.round_id), round);
}

pub fn read_latest_round_calls(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::LatestRoundCalls)
        .unwrap_or(0)
}

pub fn write_latest_round_calls(env: &Env, calls: u32) {
    env.storage()
        .instance()
        .set(&DataKey::LatestRoundCalls, &calls);
}
