// tests/integration/sale_lifecycle.rs
//
// The crowdsale driving the real token and vesting engine end to end.

use crowdsale::constants::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use vesting::MONTH;

use crate::assert_contract_error;
use crate::utils::constants::*;
use crate::utils::Deployment;

const DAY: u64 = 24 * 60 * 60;

#[test]
fn test_purchase_vests_through_real_engine() {
    let d = Deployment::new();
    let buyer = d.funded_buyer(100 * USD);

    let tokens = d.buy(&buyer, 100 * USD);
    assert_eq!(tokens, 2_222_222_222_222_200_000_000);

    let immediate = tokens * IMMEDIATE_PERCENT / 100;
    let vested = tokens - immediate;
    assert_eq!(d.token.balance(&buyer), immediate);
    assert_eq!(d.token.balance(&d.vesting.address), vested);

    let schedules = d.vesting.schedules(&CROWDSALE_VESTING_GROUP, &buyer);
    assert_eq!(schedules.len(), 1);
    let schedule = schedules.get(0).unwrap();
    assert_eq!(schedule.amount, vested);
    assert_eq!(schedule.start, START);
    assert_eq!(d.vesting.outstanding(&CROWDSALE_VESTING_GROUP), vested);

    // nothing before the cliff
    d.warp(START + SALE_CLIFF_MONTHS as u64 * MONTH - 1);
    assert_eq!(
        d.vesting.releasable(&CROWDSALE_VESTING_GROUP, &buyer),
        0
    );

    // halfway through the linear part
    d.warp(START + (SALE_CLIFF_MONTHS + SALE_DURATION_MONTHS / 2) as u64 * MONTH);
    let half = d.vesting.release_all(&buyer, &CROWDSALE_VESTING_GROUP);
    assert_eq!(half, vested / 2);

    d.warp(START + (SALE_CLIFF_MONTHS + SALE_DURATION_MONTHS) as u64 * MONTH);
    d.vesting.release_all(&buyer, &CROWDSALE_VESTING_GROUP);
    assert_eq!(d.token.balance(&buyer), tokens);
    assert_eq!(d.vesting.released_of(&buyer), vested);
}

#[test]
fn test_repeat_buyer_gets_one_schedule_per_purchase() {
    let d = Deployment::new();
    let buyer = d.funded_buyer(300 * USD);

    d.buy(&buyer, 100 * USD);
    d.warp(START + DAY);
    d.buy(&buyer, 200 * USD);

    let schedules = d.vesting.schedules(&CROWDSALE_VESTING_GROUP, &buyer);
    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules.get(1).unwrap().start, START + DAY);
    assert_eq!(
        schedules.get(1).unwrap().amount,
        2 * schedules.get(0).unwrap().amount
    );
    assert_eq!(d.sale.contribution_of(&buyer), 300);
}

#[test]
fn test_successful_sale_end_to_end() {
    let d = Deployment::new();
    let dao = Address::generate(&d.env);
    let whale = d.funded_buyer(1_000_000 * USD);
    let retail = d.funded_buyer(5_000 * USD);

    let bought_whale = d.buy(&whale, 1_000_000 * USD);
    let bought_retail = d.buy(&retail, 5_000 * USD);
    assert!(d.sale.softcap_reached());
    assert_eq!(d.sale.total_sold(), bought_whale + bought_retail);

    // operator sweeps everything once the softcap is in
    let raised = d.usdc.balance(&d.sale.address);
    d.sale.withdraw(&d.operator, &raised);
    assert_eq!(d.usdc.balance(&d.treasury), 1_005_000 * USD);
    assert!(d.sale.softcap_reached());

    d.warp(d.last_end());
    let unsold = TOTAL_SALE_SUPPLY - d.sale.total_sold();
    d.sale.close_sale(&d.operator, &dao);

    assert_eq!(d.token.balance(&dao), unsold - unsold / 2);
    assert_eq!(d.token.balance(&d.sale.address), 0);
    assert_eq!(d.token.total_supply(), TOTAL_SALE_SUPPLY - unsold / 2);

    // every token minted for the sale is accounted for
    let held = d.token.balance(&whale)
        + d.token.balance(&retail)
        + d.token.balance(&d.vesting.address)
        + d.token.balance(&dao);
    assert_eq!(held, d.token.total_supply());
    assert_eq!(
        d.vesting.total_outstanding(),
        d.token.balance(&d.vesting.address)
    );

    d.warp(d.last_end() + 1);
    assert_contract_error!(
        d.sale.try_refund_me(&retail),
        crowdsale::Error::SoftcapReached
    );
}

#[test]
fn test_failed_sale_refunds_everyone() {
    let d = Deployment::new();
    let amounts = [1_000 * USD, 2_500 * USD, 6_500 * USD];
    let buyers: Vec<Address> =
        amounts.iter().map(|amount| d.funded_buyer(*amount)).collect();

    for (buyer, amount) in buyers.iter().zip(amounts.iter()) {
        d.buy(buyer, *amount);
    }
    let raised: i128 = amounts.iter().sum();
    assert!(!d.sale.softcap_reached());

    // the operator takes the full pre-softcap allowance
    let allowance = raised * WITHDRAW_LIMIT_PERCENT / 100;
    d.sale.withdraw(&d.operator, &allowance);
    assert_contract_error!(
        d.sale.try_withdraw(&d.operator, &1i128),
        crowdsale::Error::WithdrawLimitExceeded
    );

    d.warp(d.last_end() + 1);
    for (buyer, amount) in buyers.iter().zip(amounts.iter()) {
        assert_eq!(d.sale.refund_me(buyer), amount * REFUND_PERCENT / 100);
        assert_contract_error!(d.sale.try_refund_me(buyer), crowdsale::Error::NoPurchase);
    }

    // 20% withdrawn plus 80% refunded drains custody exactly
    assert_eq!(d.usdc.balance(&d.sale.address), 0);
    assert_eq!(d.usdc.balance(&d.treasury), allowance);

    assert_contract_error!(
        d.sale.try_close_sale(&d.operator, &d.treasury),
        crowdsale::Error::SoftcapNotReached
    );
}

#[test]
fn test_open_requires_full_sale_supply() {
    let d = Deployment::unopened();

    d.token.mint(
        &d.admin,
        &d.sale.address,
        &(TOTAL_SALE_SUPPLY - 1),
        &soroban_sdk::symbol_short!("crowdsale"),
    );
    assert_contract_error!(
        d.sale.try_open_sale(&d.admin),
        crowdsale::Error::InsufficientSaleSupply
    );
    assert_contract_error!(
        d.sale.try_open_sale(&d.operator),
        crowdsale::Error::NotMinter
    );

    d.token.mint(
        &d.admin,
        &d.sale.address,
        &1i128,
        &soroban_sdk::symbol_short!("crowdsale"),
    );
    d.sale.open_sale(&d.admin);
    assert!(d.sale.is_open());
    assert_eq!(d.last_end(), START + PHASE_END_OFFSETS[3]);
}
