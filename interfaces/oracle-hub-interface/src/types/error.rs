use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Unauthorized = 2,

    OracleIsDead = 100,
    AlreadyRegistered = 101,
    NoPriceFeed = 102,
    NoPriceForAsset = 103,
    InvalidAssetPrice = 104,
    InvalidUnderlyingFeed = 105,
    InvalidDecimals = 106,

    MathOverflowError = 400,
    MustBeNonNegative = 405,
}
