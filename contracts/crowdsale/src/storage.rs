use crate::errors::Error;
use crate::phases::PhaseSchedule;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_schedule(env: &Env) -> Result<PhaseSchedule, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Phases)
        .map(PhaseSchedule::from_phases)
        .ok_or(Error::NotInitialized)
}

pub fn set_schedule(env: &Env, schedule: &PhaseSchedule) {
    env.storage()
        .instance()
        .set(&DataKey::Phases, schedule.phases());
}

pub fn is_open(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::IsOpen)
        .unwrap_or(false)
}

pub fn set_open(env: &Env, open: bool) {
    env.storage().instance().set(&DataKey::IsOpen, &open);
}

pub fn is_closed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Closed)
        .unwrap_or(false)
}

pub fn set_closed(env: &Env) {
    env.storage().instance().set(&DataKey::Closed, &true);
}

pub fn get_total_withdrawn(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalWithdrawn)
        .unwrap_or(0)
}

pub fn set_total_withdrawn(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalWithdrawn, &amount);
}

pub fn get_contribution(env: &Env, buyer: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(buyer.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, buyer: &Address, units: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(buyer.clone()), &units);
}
