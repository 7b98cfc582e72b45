use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Symbol, Vec};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(Error::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_supply_cap(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::SupplyCap)
        .unwrap_or(0)
}

pub fn set_supply_cap(env: &Env, cap: i128) {
    env.storage().instance().set(&DataKey::SupplyCap, &cap);
}

pub fn get_allocated_cap(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::AllocatedCap)
        .unwrap_or(0)
}

pub fn set_allocated_cap(env: &Env, allocated: i128) {
    env.storage()
        .instance()
        .set(&DataKey::AllocatedCap, &allocated);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_group_keys(env: &Env) -> Vec<Symbol> {
    env.storage()
        .instance()
        .get(&DataKey::Groups)
        .unwrap_or(Vec::new(env))
}

pub fn get_group(env: &Env, group: &Symbol) -> Option<SupplyGroup> {
    env.storage()
        .persistent()
        .get(&DataKey::Group(group.clone()))
}

pub fn set_group(env: &Env, group: &Symbol, value: &SupplyGroup) {
    if !env
        .storage()
        .persistent()
        .has(&DataKey::Group(group.clone()))
    {
        let mut keys = get_group_keys(env);
        keys.push_back(group.clone());
        env.storage().instance().set(&DataKey::Groups, &keys);
    }
    env.storage()
        .persistent()
        .set(&DataKey::Group(group.clone()), value);
}

pub fn is_minter(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Minter(account.clone()))
        .unwrap_or(false)
}

pub fn set_minter(env: &Env, account: &Address, enabled: bool) {
    if enabled {
        env.storage()
            .persistent()
            .set(&DataKey::Minter(account.clone()), &true);
    } else {
        env.storage()
            .persistent()
            .remove(&DataKey::Minter(account.clone()));
    }
}

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(account.clone()), &amount);
}

/// Returns the live allowance, treating an expired one as zero.
pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let stored: Option<AllowanceValue> = env
        .storage()
        .persistent()
        .get(&DataKey::Allowance(from.clone(), spender.clone()));
    match stored {
        Some(value) if value.expiration_ledger >= env.ledger().sequence() => value,
        _ => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, value: &AllowanceValue) {
    env.storage()
        .persistent()
        .set(&DataKey::Allowance(from.clone(), spender.clone()), value);
}
