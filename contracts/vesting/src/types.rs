use soroban_sdk::{contracttype, Address, Symbol};

/// Cliff and linear-release duration shared by every grant in a group.
/// Fixed at creation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingGroup {
    pub cliff_months: u32,
    pub duration_months: u32,
}

/// One grant event. `cliff_end` and `end` are fixed from the group
/// parameters at grant time.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingSchedule {
    pub amount: i128,
    pub released: i128,
    pub start: u64,
    pub cliff_end: u64,
    pub end: u64,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    Groups,
    TotalOutstanding,
    Group(Symbol),
    Granter(Address),
    Schedules(Symbol, Address), // Vec<VestingSchedule>, oldest first
    Outstanding(Symbol),
    Released(Address),
}
