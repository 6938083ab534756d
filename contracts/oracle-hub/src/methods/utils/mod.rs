pub mod derivative;
pub mod heartbeat;
pub mod validation;
