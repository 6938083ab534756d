#![deny(warnings)]
#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Env};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Decimals,
}

/// Exposes only `decimals` of the token interface, enough to be read as token metadata.
#[contract]
pub struct TokenMock;

#[contractimpl]
impl TokenMock {
    pub fn init(env: Env, decimals: u32) {
        env.storage().instance().set(&DataKey::Decimals, &decimals);
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Decimals)
            .unwrap_or(7)
    }
}
