use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3–4) ---
    NotAdmin = 3,
    NotGranter = 4,

    // --- Groups (5–7) ---
    GroupExists = 5,
    GroupNotFound = 6,
    InvalidDuration = 7,

    // --- Grants (8–9) ---
    InvalidAmount = 8,
    InvalidBeneficiary = 9,

    // --- Release (10–11) ---
    NothingToRelease = 10,
    OverRelease = 11,

    MathOverflow = 12,
}
