use soroban_sdk::{contracttype, Address, String, Symbol};

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

/// A partition of the global supply cap. `minted` only ever grows: burning
/// supply does not free room in the group it was minted from.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SupplyGroup {
    pub cap: i128,
    pub minted: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Metadata,
    SupplyCap,
    AllocatedCap,
    TotalSupply,
    Groups,
    Group(Symbol),
    Minter(Address),
    Balance(Address),
    Allowance(Address, Address),
}
