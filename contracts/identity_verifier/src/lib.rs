#![no_std]

//! # Identity Verifier
//!
//! Answers a single question for other contracts: has a trusted off-chain
//! identity provider vouched for this caller until this deadline?
//!
//! A proof is an ed25519 signature, by one of the trusted signer keys, over
//! the caller's XDR encoding followed by the big-endian deadline.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, xdr::ToXdr, Address, Bytes,
    BytesN, Env, Symbol,
};

// ============================================================================
// Error Definitions
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    Expired = 4,
    UntrustedSigner = 5,
}

// ============================================================================
// Data Structures
// ============================================================================

#[contracttype]
pub enum DataKey {
    Admin,
    Signer(BytesN<32>),
}

#[derive(Clone)]
#[contracttype]
pub struct SignerEvent {
    pub signer: BytesN<32>,
    pub trusted: bool,
}

const TOPIC: Symbol = symbol_short!("IDENTITY");

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct IdentityVerifier;

#[contractimpl]
impl IdentityVerifier {
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        Ok(())
    }

    pub fn add_signer(env: Env, admin: Address, signer: BytesN<32>) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        env.storage()
            .persistent()
            .set(&DataKey::Signer(signer.clone()), &true);
        Self::publish_signer(&env, signer, true);
        Ok(())
    }

    pub fn remove_signer(env: Env, admin: Address, signer: BytesN<32>) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        env.storage()
            .persistent()
            .remove(&DataKey::Signer(signer.clone()));
        Self::publish_signer(&env, signer, false);
        Ok(())
    }

    pub fn is_trusted(env: Env, signer: BytesN<32>) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Signer(signer))
            .unwrap_or(false)
    }

    /// Payload a trusted signer signs to vouch for `caller` until `deadline`.
    pub fn message(env: Env, caller: Address, deadline: u64) -> Bytes {
        let mut payload = caller.to_xdr(&env);
        payload.append(&Bytes::from_slice(&env, &deadline.to_be_bytes()));
        payload
    }

    /// Fails unless `signature` is a valid proof for `caller`. An invalid
    /// signature traps the host, aborting the calling operation.
    pub fn check_authorization(
        env: Env,
        caller: Address,
        deadline: u64,
        signer: BytesN<32>,
        signature: BytesN<64>,
    ) -> Result<(), Error> {
        if env.ledger().timestamp() > deadline {
            return Err(Error::Expired);
        }
        if !Self::is_trusted(env.clone(), signer.clone()) {
            return Err(Error::UntrustedSigner);
        }

        let message = Self::message(env.clone(), caller, deadline);
        env.crypto().ed25519_verify(&signer, &message, &signature);
        Ok(())
    }
}

impl IdentityVerifier {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        if *caller != admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn publish_signer(env: &Env, signer: BytesN<32>, trusted: bool) {
        env.events()
            .publish((TOPIC, symbol_short!("signer")), SignerEvent { signer, trusted });
    }
}

#[cfg(test)]
mod test;
