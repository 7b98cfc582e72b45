// tests/integration/identity_gate.rs
//
// Purchases above the verification threshold, checked by the real
// identity verifier with ed25519 proofs.

use ed25519_dalek::SigningKey;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use crate::utils::constants::*;
use crate::utils::{sign_proof, Deployment};
use crate::{assert_aborted, assert_contract_error};

const LARGE: i128 = 50_000 * USD;

#[test]
fn test_large_purchase_needs_proof() {
    let d = Deployment::new();
    let buyer = d.funded_buyer(LARGE);

    assert_contract_error!(
        d.sale.try_purchase(&buyer, &LARGE),
        crowdsale::Error::VerificationRequired
    );

    let deadline = START + 600;
    let (signer, signature) = d.proof(&buyer, deadline);
    let tokens = d
        .sale
        .purchase_verified(&buyer, &LARGE, &deadline, &signer, &signature);

    assert_eq!(tokens, d.sale.total_sold());
    assert_eq!(d.usdc.balance(&buyer), 0);
    assert_eq!(d.sale.contribution_of(&buyer), 50_000);
}

#[test]
fn test_proof_is_not_transferable() {
    let d = Deployment::new();
    let buyer = d.funded_buyer(LARGE);
    let friend = d.funded_buyer(LARGE);

    let deadline = START + 600;
    let (signer, signature) = d.proof(&buyer, deadline);
    assert_aborted!(d
        .sale
        .try_purchase_verified(&friend, &LARGE, &deadline, &signer, &signature));
    assert_eq!(d.sale.total_sold(), 0);
    assert_eq!(d.usdc.balance(&friend), LARGE);
}

#[test]
fn test_expired_proof_is_rejected() {
    let d = Deployment::new();
    let buyer = d.funded_buyer(LARGE);

    let deadline = START + 600;
    let (signer, signature) = d.proof(&buyer, deadline);
    d.warp(deadline + 1);

    assert_aborted!(d
        .sale
        .try_purchase_verified(&buyer, &LARGE, &deadline, &signer, &signature));
    assert_eq!(d.sale.contribution_of(&buyer), 0);
}

#[test]
fn test_untrusted_signer_is_rejected() {
    let d = Deployment::new();
    let buyer = d.funded_buyer(LARGE);
    let rogue = SigningKey::from_bytes(&[13u8; 32]);

    let deadline = START + 600;
    let (signer, signature) = sign_proof(&d.env, &d.verifier, &rogue, &buyer, deadline);
    assert_aborted!(d
        .sale
        .try_purchase_verified(&buyer, &LARGE, &deadline, &signer, &signature));

    // once trusted, the same proof goes through
    d.verifier.add_signer(&d.admin, &signer);
    d.sale
        .purchase_verified(&buyer, &LARGE, &deadline, &signer, &signature);
    assert!(d.sale.total_sold() > 0);
}

#[test]
fn test_verifier_outage_does_not_block_small_purchases() {
    let d = Deployment::new();
    let buyer = d.funded_buyer(VERIFICATION_THRESHOLD * USD);
    let stranger = Address::generate(&d.env);

    d.verifier
        .remove_signer(&d.admin, &crate::utils::public_key(&d.env, &d.signer));
    assert!(!d.verifier.is_trusted(&crate::utils::public_key(&d.env, &d.signer)));

    d.sale.purchase(&buyer, &(VERIFICATION_THRESHOLD * USD));
    assert_eq!(d.sale.contribution_of(&buyer), VERIFICATION_THRESHOLD);
    assert_eq!(d.sale.contribution_of(&stranger), 0);
}
