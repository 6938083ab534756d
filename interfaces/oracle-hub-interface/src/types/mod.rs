pub mod error;
pub mod feed_entry;
pub mod oracle_input;
pub mod permission;
