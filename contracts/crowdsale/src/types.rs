use soroban_sdk::{contracttype, Address};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Phase {
    pub max_supply: i128,
    pub unit_rate: i128, // sale tokens per whole payment unit, 18 decimals
    pub sold_supply: i128,
    pub end_time: u64, // 0 until the sale is opened
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub operator: Address,
    pub minter: Address,         // minting authority allowed to open the sale
    pub sale_token: Address,     // distributed asset
    pub payment_token: Address,  // USD stablecoin
    pub payment_decimals: u32,   // read from `payment_token` when it is set
    pub treasury: Address,       // receives operator withdrawals
    pub vesting: Address,        // vesting engine holding the locked share
    pub identity_verifier: Address,
    pub verification_threshold: i128, // whole payment units
}

#[contracttype]
pub enum DataKey {
    Config,
    Phases,
    IsOpen,
    Closed,
    TotalWithdrawn,
    Entered,
    Contribution(Address),
}
