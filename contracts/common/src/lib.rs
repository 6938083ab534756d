#![deny(warnings)]
#![no_std]

mod second_largest;

pub use second_largest::*;

/// Decimals of the canonical USD representation
pub const USD_DECIMALS: u32 = 18;

/// Max number of rounds sampled when recalibrating a heartbeat
pub const MAX_ROUND_COUNT: u32 = 50;

/// Max decimals accepted for a token or a feed. 10^38 still fits into u128
pub const MAX_DECIMALS: u32 = 38;
