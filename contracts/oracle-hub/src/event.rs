use oracle_hub_interface::types::feed_entry::FeedEntry;
use oracle_hub_interface::types::permission::Permission;
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address, default_heartbeat: u64) {
    let topics = (Symbol::new(e, "initialize"), admin.clone());
    e.events().publish(topics, default_heartbeat);
}

pub(crate) fn oracle_added(e: &Env, token: &Address, entry: &FeedEntry) {
    let topics = (Symbol::new(e, "oracle_added"), token.clone());
    e.events().publish(
        topics,
        (
            entry.feed.clone(),
            entry.token_decimals,
            entry.feed_decimals,
            entry.heartbeat,
        ),
    );
}

pub(crate) fn heartbeat_recalibrated(e: &Env, token: &Address, heartbeat: u64) {
    let topics = (Symbol::new(e, "heartbeat_recalibrated"), token.clone());
    e.events().publish(topics, heartbeat);
}

pub(crate) fn default_heartbeat_set(e: &Env, heartbeat: u64) {
    let topics = (Symbol::new(e, "default_heartbeat_set"),);
    e.events().publish(topics, heartbeat);
}

pub(crate) fn permission_granted(e: &Env, receiver: &Address, permission: &Permission) {
    let topics = (Symbol::new(e, "permission_granted"), receiver.clone());
    e.events().publish(topics, permission.clone());
}

pub(crate) fn permission_revoked(e: &Env, owner: &Address, permission: &Permission) {
    let topics = (Symbol::new(e, "permission_revoked"), owner.clone());
    e.events().publish(topics, permission.clone());
}
