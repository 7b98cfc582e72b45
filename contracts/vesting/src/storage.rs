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

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn is_granter(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Granter(account.clone()))
        .unwrap_or(false)
}

pub fn set_granter(env: &Env, account: &Address, enabled: bool) {
    if enabled {
        env.storage()
            .persistent()
            .set(&DataKey::Granter(account.clone()), &true);
    } else {
        env.storage()
            .persistent()
            .remove(&DataKey::Granter(account.clone()));
    }
}

pub fn get_group_keys(env: &Env) -> Vec<Symbol> {
    env.storage()
        .instance()
        .get(&DataKey::Groups)
        .unwrap_or(Vec::new(env))
}

pub fn get_group(env: &Env, key: &Symbol) -> Option<VestingGroup> {
    env.storage()
        .persistent()
        .get(&DataKey::Group(key.clone()))
}

/// Groups are only ever added; an existing key is never rewritten.
pub fn add_group(env: &Env, key: &Symbol, group: &VestingGroup) {
    let mut keys = get_group_keys(env);
    keys.push_back(key.clone());
    env.storage().instance().set(&DataKey::Groups, &keys);
    env.storage()
        .persistent()
        .set(&DataKey::Group(key.clone()), group);
}

pub fn get_schedules(env: &Env, group: &Symbol, beneficiary: &Address) -> Vec<VestingSchedule> {
    env.storage()
        .persistent()
        .get(&DataKey::Schedules(group.clone(), beneficiary.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn set_schedules(
    env: &Env,
    group: &Symbol,
    beneficiary: &Address,
    schedules: &Vec<VestingSchedule>,
) {
    env.storage().persistent().set(
        &DataKey::Schedules(group.clone(), beneficiary.clone()),
        schedules,
    );
}

pub fn get_outstanding(env: &Env, group: &Symbol) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Outstanding(group.clone()))
        .unwrap_or(0)
}

pub fn set_outstanding(env: &Env, group: &Symbol, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Outstanding(group.clone()), &amount);
}

pub fn get_total_outstanding(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalOutstanding)
        .unwrap_or(0)
}

pub fn set_total_outstanding(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalOutstanding, &amount);
}

pub fn get_released(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Released(account.clone()))
        .unwrap_or(0)
}

pub fn set_released(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Released(account.clone()), &amount);
}
