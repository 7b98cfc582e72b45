// tests/integration/token_vesting.rs
//
// The distribution token minting straight into the vesting engine, and the
// engine paying out over time.

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{symbol_short, Address};
use vesting::MONTH;

use crate::utils::constants::*;
use crate::utils::Deployment;
use crate::{assert_aborted, assert_contract_error};

const GRANT: i128 = 4_000_000_000_000_000_000_000;

#[test]
fn test_mint_vested_registers_grant() {
    let d = Deployment::new();
    let alice = Address::generate(&d.env);
    let supply_before = d.token.total_supply();

    d.token
        .mint_vested(&d.admin, &d.vesting.address, &TEAM, &alice, &GRANT, &TEAM);

    assert_eq!(d.token.total_supply(), supply_before + GRANT);
    assert_eq!(d.token.group_minted(&TEAM), GRANT);
    assert_eq!(d.token.balance(&d.vesting.address), GRANT);
    assert_eq!(d.token.balance(&alice), 0);

    let schedules = d.vesting.schedules(&TEAM, &alice);
    assert_eq!(schedules.len(), 1);
    let schedule = schedules.get(0).unwrap();
    assert_eq!(schedule.amount, GRANT);
    assert_eq!(schedule.start, START);
    assert_eq!(
        schedule.end,
        START + (TEAM_CLIFF_MONTHS + TEAM_DURATION_MONTHS) as u64 * MONTH
    );
    assert_eq!(d.vesting.total_outstanding(), GRANT);
}

#[test]
fn test_team_grant_vests_after_cliff() {
    let d = Deployment::new();
    let alice = Address::generate(&d.env);
    d.token
        .mint_vested(&d.admin, &d.vesting.address, &TEAM, &alice, &GRANT, &TEAM);

    d.warp(START + 12 * MONTH);
    assert_contract_error!(
        d.vesting.try_release_all(&alice, &TEAM),
        vesting::Error::NothingToRelease
    );

    d.warp(START + 13 * MONTH);
    assert_eq!(d.vesting.release_all(&alice, &TEAM), GRANT / 40);
    assert_eq!(d.token.balance(&alice), GRANT / 40);

    d.warp(START + 52 * MONTH);
    d.vesting.release_all(&alice, &TEAM);
    assert_eq!(d.token.balance(&alice), GRANT);
    assert_eq!(d.token.balance(&d.vesting.address), 0);
    assert_eq!(d.vesting.released_of(&alice), GRANT);
    assert_eq!(d.vesting.total_outstanding(), 0);
}

#[test]
fn test_mint_vested_requires_minter() {
    let d = Deployment::new();
    let alice = Address::generate(&d.env);

    assert_contract_error!(
        d.token
            .try_mint_vested(&alice, &d.vesting.address, &TEAM, &alice, &GRANT, &TEAM),
        distribution_token::Error::NotMinter
    );
}

#[test]
fn test_failed_grant_rolls_back_mint() {
    let d = Deployment::new();
    let alice = Address::generate(&d.env);
    let supply_before = d.token.total_supply();

    // no such vesting group
    assert_aborted!(d.token.try_mint_vested(
        &d.admin,
        &d.vesting.address,
        &symbol_short!("advisors"),
        &alice,
        &GRANT,
        &TEAM,
    ));

    // the ledger is no longer allowed to grant
    d.vesting.remove_granter(&d.admin, &d.token.address);
    assert_aborted!(d
        .token
        .try_mint_vested(&d.admin, &d.vesting.address, &TEAM, &alice, &GRANT, &TEAM));

    assert_eq!(d.token.total_supply(), supply_before);
    assert_eq!(d.token.group_minted(&TEAM), 0);
    assert_eq!(d.token.balance(&d.vesting.address), 0);
    assert_eq!(d.vesting.schedules(&TEAM, &alice).len(), 0);
}

#[test]
fn test_team_group_cap_holds_across_grants() {
    let d = Deployment::new();
    let alice = Address::generate(&d.env);
    let bob = Address::generate(&d.env);

    d.token.mint_vested(
        &d.admin,
        &d.vesting.address,
        &TEAM,
        &alice,
        &(TEAM_CAP - GRANT),
        &TEAM,
    );
    d.token
        .mint_vested(&d.admin, &d.vesting.address, &TEAM, &bob, &GRANT, &TEAM);
    assert_contract_error!(
        d.token
            .try_mint_vested(&d.admin, &d.vesting.address, &TEAM, &bob, &1i128, &TEAM),
        distribution_token::Error::GroupCapExceeded
    );
    assert_eq!(d.vesting.outstanding(&TEAM), TEAM_CAP);
}
