use oracle_hub_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_resolver::PriceResolver;

pub fn latest_price(env: &Env, token: &Address) -> Result<i128, Error> {
    PriceResolver::new(env).latest_price(token)
}
