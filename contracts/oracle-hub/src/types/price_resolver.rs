use common::USD_DECIMALS;
use oracle_hub_interface::types::error::Error;
use oracle_hub_interface::types::feed_entry::FeedEntry;
use soroban_sdk::{Address, Env, Map, U256};

use crate::methods::utils::derivative::is_dead_underlying;
use crate::methods::utils::heartbeat::{is_stale, latest_round};
use crate::storage::read_feed_entry;

/// Resolves feed answers and converts token amounts to and from USD with 18 decimals.
///
/// Multiplication and division order depends on the gap between token and USD decimals:
/// for tokens with more than 18 decimals the price is scaled down before it is multiplied,
/// otherwise the amount is scaled up first and divided last.
pub struct PriceResolver<'a> {
    env: &'a Env,
    entries: Map<Address, FeedEntry>,
}

impl<'a> PriceResolver<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self {
            env,
            entries: Map::new(env),
        }
    }

    /// Latest feed answer in feed decimals, fails if the feed or any of its constituents is dead
    pub fn latest_price(&mut self, token: &Address) -> Result<i128, Error> {
        let entry = self.entry(token)?;

        if entry.is_derivative() && is_dead_underlying(self.env, &entry)? {
            return Err(Error::OracleIsDead);
        }

        let latest = latest_round(self.env, &entry.feed)?;

        if !entry.is_derivative() && is_stale(self.env, &entry, &latest) {
            return Err(Error::OracleIsDead);
        }

        if latest.answer <= 0 {
            return Err(Error::InvalidAssetPrice);
        }

        Ok(latest.answer)
    }

    pub fn convert_to_usd(&mut self, token: &Address, amount: i128) -> Result<i128, Error> {
        let entry = self.entry(token)?;
        let price = self.latest_price(token)?;
        let price = self.to_u256(price)?;
        let amount = self.to_u256(amount)?;
        let feed_denom = self.pow10(entry.feed_decimals);

        let usd = if entry.token_decimals > USD_DECIMALS {
            let scaled_price = price.div(&self.pow10(entry.token_decimals - USD_DECIMALS));

            self.checked_mul(&scaled_price, &amount)?.div(&feed_denom)
        } else {
            let scaled_amount =
                self.checked_mul(&amount, &self.pow10(USD_DECIMALS - entry.token_decimals))?;

            self.checked_mul(&scaled_amount, &price)?.div(&feed_denom)
        };

        Self::to_i128(&usd)
    }

    pub fn convert_from_usd(&mut self, token: &Address, usd_value: i128) -> Result<i128, Error> {
        let entry = self.entry(token)?;
        let price = self.latest_price(token)?;
        let price = self.to_u256(price)?;
        let usd_value = self.to_u256(usd_value)?;
        let feed_denom = self.pow10(entry.feed_decimals);

        let amount = if entry.token_decimals > USD_DECIMALS {
            let scaled_price = price.div(&self.pow10(entry.token_decimals - USD_DECIMALS));

            if scaled_price == U256::from_u32(self.env, 0) {
                return Err(Error::InvalidAssetPrice);
            }

            self.checked_mul(&usd_value, &feed_denom)?.div(&scaled_price)
        } else {
            self.checked_mul(&usd_value, &feed_denom)?
                .div(&price)
                .div(&self.pow10(USD_DECIMALS - entry.token_decimals))
        };

        Self::to_i128(&amount)
    }

    fn entry(&mut self, token: &Address) -> Result<FeedEntry, Error> {
        match self.entries.get(token.clone()) {
            Some(entry) => Ok(entry),
            None => {
                let entry = read_feed_entry(self.env, token)?;
                self.entries.set(token.clone(), entry.clone());

                Ok(entry)
            }
        }
    }

    fn pow10(&self, decimals: u32) -> U256 {
        U256::from_u32(self.env, 10).pow(decimals)
    }

    fn checked_mul(&self, lhs: &U256, rhs: &U256) -> Result<U256, Error> {
        let max = U256::from_parts(self.env, u64::MAX, u64::MAX, u64::MAX, u64::MAX);

        if *lhs != U256::from_u32(self.env, 0) && *rhs > max.div(lhs) {
            return Err(Error::MathOverflowError);
        }

        Ok(lhs.mul(rhs))
    }

    fn to_u256(&self, value: i128) -> Result<U256, Error> {
        let value = u128::try_from(value).map_err(|_| Error::MustBeNonNegative)?;

        Ok(U256::from_u128(self.env, value))
    }

    fn to_i128(value: &U256) -> Result<i128, Error> {
        value
            .to_u128()
            .and_then(|value| i128::try_from(value).ok())
            .ok_or(Error::MathOverflowError)
    }
}
