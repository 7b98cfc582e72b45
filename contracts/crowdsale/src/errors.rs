use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3–4) ---
    NotOperator = 3,
    NotMinter = 4,

    // --- Input validation (5–8) ---
    InvalidAmount = 5,
    InvalidDecimals = 6,
    InvalidEndTime = 7,
    VerificationRequired = 8,

    // --- Sale state (9–15) ---
    SaleNotOpen = 9,
    AlreadyOpened = 10,
    NotOpened = 11,
    SaleClosed = 12,
    SaleNotEnded = 13,
    LastPhaseExpired = 14,
    PaymentTokenLocked = 15,

    // --- Capacity (16–18) ---
    SoldOut = 16,
    InsufficientSaleSupply = 17,
    AllocationMismatch = 18,

    // --- Custody thresholds (19–22) ---
    SoftcapReached = 19,
    SoftcapNotReached = 20,
    WithdrawLimitExceeded = 21,
    NoPurchase = 22,

    Reentrant = 23,
    MathOverflow = 24,
}
