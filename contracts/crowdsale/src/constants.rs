use soroban_sdk::{symbol_short, Symbol};

/// One whole sale token (18 decimals).
pub const TOKEN_SCALE: i128 = 1_000_000_000_000_000_000;

pub const PHASE_COUNT: u32 = 4;

/// Sale tokens received per whole unit of payment currency, 18-decimal fixed
/// point. Each phase is a worse rate than the one before it.
pub const PHASE_RATES: [i128; 4] = [
    22_222_222_222_222_000_000,
    18_181_818_181_818_000_000,
    15_384_615_384_615_000_000,
    12_500_000_000_000_000_000,
];

pub const PHASE_CAPACITIES: [i128; 4] = [
    6_000_000 * TOKEN_SCALE,
    8_000_000 * TOKEN_SCALE,
    10_000_000 * TOKEN_SCALE,
    12_000_000 * TOKEN_SCALE,
];

pub const TOTAL_SALE_SUPPLY: i128 = 36_000_000 * TOKEN_SCALE;

const DAY: u64 = 24 * 60 * 60;

/// Phase end times, measured from the moment the sale is opened.
pub const PHASE_END_OFFSETS: [u64; 4] = [30 * DAY, 60 * DAY, 90 * DAY, 120 * DAY];

/// Softcap in whole payment-currency units.
pub const SOFTCAP_UNITS: i128 = 150_000;

/// Share of lifetime inflow the operator may withdraw before the softcap.
pub const WITHDRAW_LIMIT_PERCENT: i128 = 20;

/// Share of a contribution paid back by `refund_me`.
pub const REFUND_PERCENT: i128 = 80;

/// Share of purchased tokens delivered immediately; the rest vests.
pub const IMMEDIATE_PERCENT: i128 = 20;

pub const MAX_PAYMENT_DECIMALS: u32 = 18;

pub const CROWDSALE_VESTING_GROUP: Symbol = symbol_short!("crowdsale");
