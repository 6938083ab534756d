use soroban_sdk::{contracttype, Address, Vec};

#[derive(Clone, Debug)]
#[contracttype]
pub struct OracleInput {
    pub token: Address,
    pub feed: Address,
    pub underlying_feed_tokens: Vec<Address>,
}
