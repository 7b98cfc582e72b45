use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const TOPIC: Symbol = symbol_short!("VEST");

#[derive(Clone)]
#[contracttype]
pub struct GroupCreatedEvent {
    pub group: Symbol,
    pub cliff_months: u32,
    pub duration_months: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct GrantedEvent {
    pub group: Symbol,
    pub beneficiary: Address,
    pub granter: Address,
    pub amount: i128,
    pub start: u64,
    pub end: u64,
    /// Position of the new schedule in the beneficiary's list.
    pub index: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct ReleasedEvent {
    pub group: Symbol,
    pub beneficiary: Address,
    pub amount: i128,
    pub lifetime_released: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct GranterEvent {
    pub granter: Address,
    pub enabled: bool,
}

pub fn group_created(env: &Env, event: GroupCreatedEvent) {
    env.events().publish((TOPIC, symbol_short!("group")), event);
}

pub fn granted(env: &Env, event: GrantedEvent) {
    env.events().publish((TOPIC, symbol_short!("grant")), event);
}

pub fn released(env: &Env, event: ReleasedEvent) {
    env.events().publish((TOPIC, symbol_short!("release")), event);
}

pub fn granter_changed(env: &Env, granter: &Address, enabled: bool) {
    env.events().publish(
        (TOPIC, symbol_short!("granter")),
        GranterEvent {
            granter: granter.clone(),
            enabled,
        },
    );
}
