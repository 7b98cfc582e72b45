use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// Topics are ("SALE", <action>); payloads are the structs below.
const TOPIC: Symbol = symbol_short!("SALE");

#[derive(Clone)]
#[contracttype]
pub struct SaleOpenedEvent {
    pub opened_at: u64,
    pub last_end: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct DistributionEvent {
    pub buyer: Address,
    pub amount_in: i128,
    pub remainder: i128,
    pub tokens_out: i128,
    pub immediate: i128,
    pub vested: i128,
    /// Phase the purchase started in.
    pub phase: u32,
    /// Buyer's cumulative contribution in whole payment units.
    pub contribution: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct WithdrawalEvent {
    pub to: Address,
    pub amount: i128,
    pub total_withdrawn: i128,
    pub softcap_reached: bool,
}

#[derive(Clone)]
#[contracttype]
pub struct RefundEvent {
    pub buyer: Address,
    pub contribution: i128,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleClosedEvent {
    pub unsold: i128,
    pub burned: i128,
    pub transferred: i128,
    pub disposal_target: Address,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleStateEvent {
    pub is_open: bool,
    pub last_end: u64,
}

pub fn opened(env: &Env, opened_at: u64, last_end: u64) {
    env.events().publish(
        (TOPIC, symbol_short!("open")),
        SaleOpenedEvent {
            opened_at,
            last_end,
        },
    );
}

pub fn distributed(env: &Env, event: DistributionEvent) {
    env.events().publish((TOPIC, symbol_short!("buy")), event);
}

pub fn withdrawn(env: &Env, event: WithdrawalEvent) {
    env.events().publish((TOPIC, symbol_short!("withdraw")), event);
}

pub fn refunded(env: &Env, buyer: &Address, contribution: i128, amount: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("refund")),
        RefundEvent {
            buyer: buyer.clone(),
            contribution,
            amount,
        },
    );
}

pub fn closed(env: &Env, event: SaleClosedEvent) {
    env.events().publish((TOPIC, symbol_short!("close")), event);
}

pub fn state_changed(env: &Env, action: Symbol, is_open: bool, last_end: u64) {
    env.events()
        .publish((TOPIC, action), SaleStateEvent { is_open, last_end });
}
