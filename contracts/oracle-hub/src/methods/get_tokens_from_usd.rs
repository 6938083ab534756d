use oracle_hub_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_resolver::PriceResolver;

pub fn get_tokens_from_usd(env: &Env, token: &Address, usd_value: i128) -> Result<i128, Error> {
    PriceResolver::new(env).convert_from_usd(token, usd_value)
}
