#![allow(clippy::unwrap_used)]

extern crate std;

use ed25519_dalek::{Signer, SigningKey};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, BytesN, Env,
};

use crate::{Error, IdentityVerifier, IdentityVerifierClient};

const NOW: u64 = 1_700_000_000;

fn setup(env: &Env) -> (IdentityVerifierClient<'_>, Address, SigningKey) {
    env.mock_all_auths();
    env.ledger().with_mut(|l| l.timestamp = NOW);

    let contract_id = env.register_contract(None, IdentityVerifier);
    let client = IdentityVerifierClient::new(env, &contract_id);
    let admin = Address::generate(env);
    client.initialize(&admin);

    let key = SigningKey::from_bytes(&[7u8; 32]);
    client.add_signer(&admin, &public_key(env, &key));
    (client, admin, key)
}

fn public_key(env: &Env, key: &SigningKey) -> BytesN<32> {
    BytesN::from_array(env, &key.verifying_key().to_bytes())
}

fn sign(
    env: &Env,
    client: &IdentityVerifierClient,
    key: &SigningKey,
    caller: &Address,
    deadline: u64,
) -> BytesN<64> {
    let message = client.message(caller, &deadline);
    let raw: std::vec::Vec<u8> = message.iter().collect();
    BytesN::from_array(env, &key.sign(&raw).to_bytes())
}

#[test]
fn test_valid_proof_passes() {
    let env = Env::default();
    let (client, _admin, key) = setup(&env);
    let caller = Address::generate(&env);
    let deadline = NOW + 600;

    let signature = sign(&env, &client, &key, &caller, deadline);
    client.check_authorization(&caller, &deadline, &public_key(&env, &key), &signature);
}

#[test]
fn test_expired_proof_is_rejected() {
    let env = Env::default();
    let (client, _admin, key) = setup(&env);
    let caller = Address::generate(&env);
    let deadline = NOW - 1;

    let signature = sign(&env, &client, &key, &caller, deadline);
    assert_eq!(
        client.try_check_authorization(&caller, &deadline, &public_key(&env, &key), &signature),
        Err(Ok(Error::Expired))
    );
}

#[test]
fn test_untrusted_signer_is_rejected() {
    let env = Env::default();
    let (client, admin, _key) = setup(&env);
    let caller = Address::generate(&env);
    let deadline = NOW + 600;
    let rogue = SigningKey::from_bytes(&[9u8; 32]);

    let signature = sign(&env, &client, &rogue, &caller, deadline);
    assert_eq!(
        client.try_check_authorization(&caller, &deadline, &public_key(&env, &rogue), &signature),
        Err(Ok(Error::UntrustedSigner))
    );

    client.add_signer(&admin, &public_key(&env, &rogue));
    client.check_authorization(&caller, &deadline, &public_key(&env, &rogue), &signature);

    client.remove_signer(&admin, &public_key(&env, &rogue));
    assert!(!client.is_trusted(&public_key(&env, &rogue)));
}

#[test]
fn test_proof_is_bound_to_caller() {
    let env = Env::default();
    let (client, _admin, key) = setup(&env);
    let caller = Address::generate(&env);
    let other = Address::generate(&env);
    let deadline = NOW + 600;

    let signature = sign(&env, &client, &key, &caller, deadline);
    let result =
        client.try_check_authorization(&other, &deadline, &public_key(&env, &key), &signature);
    assert!(result.is_err());

    let extended = deadline + 1;
    let result =
        client.try_check_authorization(&caller, &extended, &public_key(&env, &key), &signature);
    assert!(result.is_err());
}

#[test]
fn test_signer_management_requires_admin() {
    let env = Env::default();
    let (client, _admin, key) = setup(&env);
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_add_signer(&stranger, &public_key(&env, &key)),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(client.try_initialize(&stranger), Err(Ok(Error::AlreadyInitialized)));
}
