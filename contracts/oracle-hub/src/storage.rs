use oracle_hub_interface::types::error::Error;
use oracle_hub_interface::types::feed_entry::FeedEntry;
use oracle_hub_interface::types::permission::Permission;
use soroban_sdk::{contracttype, vec, Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_FEED_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_FEED_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    DefaultHeartbeat,
    FeedEntry(Address),
    Permission(Permission),
}

pub fn has_default_heartbeat(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().has(&DataKey::DefaultHeartbeat)
}

pub fn write_default_heartbeat(env: &Env, heartbeat: u64) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::DefaultHeartbeat, &heartbeat);
}

pub fn read_default_heartbeat(env: &Env) -> Result<u64, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::DefaultHeartbeat)
        .ok_or(Error::Uninitialized)
}

pub fn write_permission_owners(env: &Env, owners: &Vec<Address>, permission: &Permission) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::Permission(permission.clone()), owners);
}

pub fn read_permission_owners(env: &Env, permission: &Permission) -> Vec<Address> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Permission(permission.clone()))
        .unwrap_or(vec![env])
}

pub fn has_feed_entry(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::FeedEntry(token.clone()))
}

pub fn read_feed_entry(env: &Env, token: &Address) -> Result<FeedEntry, Error> {
    let key = DataKey::FeedEntry(token.clone());
    let entry = env.storage().persistent().get(&key);

    if entry.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_FEED_DATA_BUMP_LEDGERS,
            HIGH_FEED_DATA_BUMP_LEDGERS,
        );
    }

    entry.ok_or(Error::NoPriceFeed)
}

pub fn write_feed_entry(env: &Env, token: &Address, entry: &FeedEntry) {
    let key = DataKey::FeedEntry(token.clone());
    env.storage().persistent().set(&key, entry);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_FEED_DATA_BUMP_LEDGERS,
        HIGH_FEED_DATA_BUMP_LEDGERS,
    );
}
