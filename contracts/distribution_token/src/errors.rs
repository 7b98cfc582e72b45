use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization ---
    NotAdmin = 3,
    NotMinter = 4,

    // --- Input validation ---
    InvalidAmount = 5,
    InvalidDecimals = 6,
    InvalidExpiration = 7,

    // --- Supply groups ---
    GroupExists = 8,
    UnknownGroup = 9,
    GroupCapExceeded = 10,
    SupplyCapExceeded = 11,

    // --- Balances ---
    InsufficientBalance = 12,
    InsufficientAllowance = 13,

    MathOverflow = 14,
}
