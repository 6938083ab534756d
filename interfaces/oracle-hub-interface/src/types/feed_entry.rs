use soroban_sdk::{contracttype, Address, Vec};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FeedEntry {
    pub feed: Address,
    pub token_decimals: u32,
    pub feed_decimals: u32,
    /// Constituents of a derivative token, empty for a simple feed
    pub underlying_feed_tokens: Vec<Address>,
    /// Max seconds between rounds before the feed is considered dead
    pub heartbeat: u64,
}

impl FeedEntry {
    pub fn is_derivative(&self) -> bool {
        !self.underlying_feed_tokens.is_empty()
    }
}
