use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const TOPIC: Symbol = symbol_short!("TOKEN");

#[derive(Clone)]
#[contracttype]
pub struct MintEvent {
    pub minter: Address,
    pub to: Address,
    pub group: Symbol,
    pub amount: i128,
    pub group_minted: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct ApproveEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct BurnEvent {
    pub from: Address,
    pub amount: i128,
    pub total_supply: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct SupplyGroupEvent {
    pub group: Symbol,
    pub cap: i128,
}

pub fn minted(env: &Env, event: MintEvent) {
    env.events().publish((TOPIC, symbol_short!("mint")), event);
}

pub fn transferred(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("transfer")),
        TransferEvent {
            from: from.clone(),
            to: to.clone(),
            amount,
        },
    );
}

pub fn approved(env: &Env, event: ApproveEvent) {
    env.events().publish((TOPIC, symbol_short!("approve")), event);
}

pub fn burned(env: &Env, from: &Address, amount: i128, total_supply: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("burn")),
        BurnEvent {
            from: from.clone(),
            amount,
            total_supply,
        },
    );
}

pub fn group_added(env: &Env, group: &Symbol, cap: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("group")),
        SupplyGroupEvent {
            group: group.clone(),
            cap,
        },
    );
}
