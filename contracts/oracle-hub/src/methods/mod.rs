pub mod add_oracle;
pub mod chainlink_is_dead;
pub mod get_tokens_from_usd;
pub mod get_tokens_in_usd;
pub mod grant_permission;
pub mod initialize;
pub mod latest_price;
pub mod permissioned;
pub mod recalibrate;
pub mod revoke_permission;
pub mod set_default_heartbeat;

pub mod utils;
