use common::MAX_DECIMALS;
use oracle_hub_interface::types::error::Error;
use oracle_hub_interface::types::permission::Permission;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env, Vec};

use crate::storage::{has_default_heartbeat, has_feed_entry, read_permission_owners};

pub fn require_not_initialized(env: &Env) {
    if has_default_heartbeat(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_permission(env: &Env, who: &Address, permission: &Permission) -> Result<(), Error> {
    who.require_auth();

    let owners = read_permission_owners(env, permission);

    assert_with_error!(
        env,
        owners.binary_search(who).is_ok(),
        Error::Unauthorized
    );

    Ok(())
}

pub fn require_unregistered(env: &Env, token: &Address) {
    assert_with_error!(env, !has_feed_entry(env, token), Error::AlreadyRegistered);
}

pub fn require_valid_decimals(env: &Env, decimals: u32) {
    assert_with_error!(env, decimals <= MAX_DECIMALS, Error::InvalidDecimals);
}

/// Constituents must be bound before the derivative token, and never to the token itself
pub fn require_valid_underlying(env: &Env, token: &Address, underlying_feed_tokens: &Vec<Address>) {
    for underlying in underlying_feed_tokens.iter() {
        assert_with_error!(
            env,
            underlying != *token && has_feed_entry(env, &underlying),
            Error::InvalidUnderlyingFeed
        );
    }
}
