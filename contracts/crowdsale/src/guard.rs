use crate::errors::Error;
use crate::types::DataKey;
use soroban_sdk::Env;

/// Holds the purchase entry lock for as long as it lives.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn enter(env: &'a Env) -> Result<Self, Error> {
        if env.storage().instance().has(&DataKey::Entered) {
            return Err(Error::Reentrant);
        }
        env.storage().instance().set(&DataKey::Entered, &true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::Entered);
    }
}
