use crate::constants::*;
use crate::errors::Error;
use crate::events::{self, DistributionEvent, SaleClosedEvent, WithdrawalEvent};
use crate::guard::ReentrancyGuard;
use crate::interfaces::{IdentityVerifierClient, VestingGrantClient};
use crate::phases::PhaseSchedule;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, token, Address, BytesN, Env, Vec,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Four-phase crowdsale with softcap-gated custody and vested delivery"
);

#[contract]
pub struct CrowdsaleContract;

#[contractimpl]
impl CrowdsaleContract {
    /// Initialize the sale. All phases start closed with no end time; the
    /// minting authority opens the sale once the supply has been minted in.
    pub fn initialize(
        env: Env,
        operator: Address,
        minter: Address,
        sale_token: Address,
        payment_token: Address,
        treasury: Address,
        vesting: Address,
        identity_verifier: Address,
        verification_threshold: i128,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        operator.require_auth();

        if verification_threshold <= 0 {
            return Err(Error::InvalidAmount);
        }
        let payment_decimals = Self::read_decimals(&env, &payment_token)?;

        set_config(
            &env,
            &SaleConfig {
                operator,
                minter,
                sale_token,
                payment_token,
                payment_decimals,
                treasury,
                vesting,
                identity_verifier,
                verification_threshold,
            },
        );
        set_schedule(&env, &PhaseSchedule::initial(&env));
        set_open(&env, false);
        set_total_withdrawn(&env, 0);
        Ok(())
    }

    /// Open the sale and fix every phase's end time. Only the minting
    /// authority may call this, once, after minting the sale supply here.
    pub fn open_sale(env: Env, minter: Address) -> Result<(), Error> {
        minter.require_auth();
        let config = get_config(&env)?;
        if minter != config.minter {
            return Err(Error::NotMinter);
        }

        let mut schedule = get_schedule(&env)?;
        if schedule.is_opened() {
            return Err(Error::AlreadyOpened);
        }

        let held = token::Client::new(&env, &config.sale_token)
            .balance(&env.current_contract_address());
        if held < schedule.total_supply() {
            return Err(Error::InsufficientSaleSupply);
        }

        let now = env.ledger().timestamp();
        schedule.open(now)?;
        set_schedule(&env, &schedule);
        set_open(&env, true);

        events::opened(&env, now, schedule.last_end());
        Ok(())
    }

    /// Buy with `amount_in` payment units, up to the verification threshold.
    /// Returns the number of sale tokens bought.
    pub fn purchase(env: Env, buyer: Address, amount_in: i128) -> Result<i128, Error> {
        buyer.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;

        let config = get_config(&env)?;
        Self::require_purchasable(&env, amount_in)?;

        let ceiling = config
            .verification_threshold
            .checked_mul(Self::payment_scale(&config)?)
            .ok_or(Error::MathOverflow)?;
        if amount_in > ceiling {
            return Err(Error::VerificationRequired);
        }

        Self::execute_purchase(&env, &config, &buyer, amount_in)
    }

    /// Buy any amount, backed by an identity proof for `buyer`.
    pub fn purchase_verified(
        env: Env,
        buyer: Address,
        amount_in: i128,
        deadline: u64,
        signer: BytesN<32>,
        signature: BytesN<64>,
    ) -> Result<i128, Error> {
        buyer.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;

        let config = get_config(&env)?;
        Self::require_purchasable(&env, amount_in)?;

        IdentityVerifierClient::new(&env, &config.identity_verifier).check_authorization(
            &buyer,
            &deadline,
            &signer,
            &signature,
        );

        Self::execute_purchase(&env, &config, &buyer, amount_in)
    }

    /// Move collected funds to the treasury. Before the softcap is reached
    /// lifetime withdrawals are held to a share of lifetime inflow.
    pub fn withdraw(env: Env, operator: Address, amount: i128) -> Result<(), Error> {
        let config = Self::require_operator(&env, &operator)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let this = env.current_contract_address();
        let payment = token::Client::new(&env, &config.payment_token);
        let withdrawn = get_total_withdrawn(&env);
        let raised = payment
            .balance(&this)
            .checked_add(withdrawn)
            .ok_or(Error::MathOverflow)?;
        let total_withdrawn = withdrawn.checked_add(amount).ok_or(Error::MathOverflow)?;

        let softcap_reached = raised >= Self::softcap_amount(&config)?;
        if !softcap_reached {
            let ceiling = raised
                .checked_mul(WITHDRAW_LIMIT_PERCENT)
                .ok_or(Error::MathOverflow)?
                / 100;
            if total_withdrawn > ceiling {
                return Err(Error::WithdrawLimitExceeded);
            }
        }

        set_total_withdrawn(&env, total_withdrawn);
        payment.transfer(&this, &config.treasury, &amount);

        events::withdrawn(
            &env,
            WithdrawalEvent {
                to: config.treasury,
                amount,
                total_withdrawn,
                softcap_reached,
            },
        );
        Ok(())
    }

    /// Self-service refund once the sale has ended below the softcap.
    pub fn refund_me(env: Env, buyer: Address) -> Result<i128, Error> {
        buyer.require_auth();
        let config = get_config(&env)?;
        let schedule = get_schedule(&env)?;

        if !schedule.is_opened() || env.ledger().timestamp() <= schedule.last_end() {
            return Err(Error::SaleNotEnded);
        }
        if Self::softcap_reached_for(&env, &config)? {
            return Err(Error::SoftcapReached);
        }

        let contribution = get_contribution(&env, &buyer);
        if contribution == 0 {
            return Err(Error::NoPurchase);
        }
        let amount = contribution
            .checked_mul(Self::payment_scale(&config)?)
            .and_then(|v| v.checked_mul(REFUND_PERCENT))
            .ok_or(Error::MathOverflow)?
            / 100;

        set_contribution(&env, &buyer, 0);
        token::Client::new(&env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &buyer,
            &amount,
        );

        events::refunded(&env, &buyer, contribution, amount);
        Ok(amount)
    }

    /// End the sale after sell-out or the last phase's end. Half of the
    /// unsold supply is burned, the other half goes to `disposal_target`.
    pub fn close_sale(env: Env, operator: Address, disposal_target: Address) -> Result<(), Error> {
        let config = Self::require_operator(&env, &operator)?;
        if !Self::softcap_reached_for(&env, &config)? {
            return Err(Error::SoftcapNotReached);
        }
        if !is_open(&env) {
            return Err(Error::SaleNotOpen);
        }

        let schedule = get_schedule(&env)?;
        let now = env.ledger().timestamp();
        if schedule.current(now).is_some() && now < schedule.last_end() {
            return Err(Error::SaleNotEnded);
        }

        set_open(&env, false);
        set_closed(&env);

        let unsold = schedule.total_supply() - schedule.total_sold();
        let burned = unsold / 2;
        let transferred = unsold - burned;

        if unsold > 0 {
            let this = env.current_contract_address();
            let sale_token = token::Client::new(&env, &config.sale_token);
            if burned > 0 {
                sale_token.burn(&this, &burned);
            }
            sale_token.transfer(&this, &disposal_target, &transferred);
        }

        log!(&env, "sale closed", unsold, burned, transferred);
        events::closed(
            &env,
            SaleClosedEvent {
                unsold,
                burned,
                transferred,
                disposal_target,
            },
        );
        Ok(())
    }

    pub fn pause(env: Env, operator: Address) -> Result<(), Error> {
        Self::require_operator(&env, &operator)?;
        if !is_open(&env) {
            return Err(Error::SaleNotOpen);
        }

        set_open(&env, false);
        let last_end = get_schedule(&env)?.last_end();
        events::state_changed(&env, symbol_short!("pause"), false, last_end);
        Ok(())
    }

    pub fn unpause(env: Env, operator: Address) -> Result<(), Error> {
        Self::require_operator(&env, &operator)?;
        if is_closed(&env) {
            return Err(Error::SaleClosed);
        }

        let schedule = get_schedule(&env)?;
        if !schedule.is_opened() {
            return Err(Error::NotOpened);
        }
        if env.ledger().timestamp() >= schedule.last_end() {
            return Err(Error::LastPhaseExpired);
        }

        set_open(&env, true);
        events::state_changed(&env, symbol_short!("unpause"), true, schedule.last_end());
        Ok(())
    }

    /// Extend the last phase to `new_end` and reopen the sale.
    pub fn delay_sale(env: Env, operator: Address, new_end: u64) -> Result<(), Error> {
        Self::require_operator(&env, &operator)?;
        if is_closed(&env) {
            return Err(Error::SaleClosed);
        }

        let mut schedule = get_schedule(&env)?;
        if !schedule.is_opened() {
            return Err(Error::NotOpened);
        }
        schedule.delay(new_end)?;
        set_schedule(&env, &schedule);
        set_open(&env, true);

        events::state_changed(&env, symbol_short!("delay"), true, new_end);
        Ok(())
    }

    /// Switch the payment currency. Only before the sale opens; the new
    /// token's precision is read and stored with it.
    pub fn set_payment_token(
        env: Env,
        operator: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        let mut config = Self::require_operator(&env, &operator)?;
        if get_schedule(&env)?.is_opened() {
            return Err(Error::PaymentTokenLocked);
        }

        config.payment_decimals = Self::read_decimals(&env, &payment_token)?;
        config.payment_token = payment_token;
        set_config(&env, &config);
        Ok(())
    }

    pub fn set_treasury(env: Env, operator: Address, treasury: Address) -> Result<(), Error> {
        let mut config = Self::require_operator(&env, &operator)?;
        config.treasury = treasury;
        set_config(&env, &config);
        Ok(())
    }

    // View functions
    pub fn quote(env: Env, amount_in: i128) -> Result<(i128, i128), Error> {
        if amount_in < 0 {
            return Err(Error::InvalidAmount);
        }
        let config = get_config(&env)?;
        get_schedule(&env)?.quote(
            amount_in,
            env.ledger().timestamp(),
            Self::payment_scale(&config)?,
        )
    }

    pub fn current_phase(env: Env) -> Result<Option<u32>, Error> {
        Ok(get_schedule(&env)?.current(env.ledger().timestamp()))
    }

    pub fn phases(env: Env) -> Result<Vec<Phase>, Error> {
        Ok(get_schedule(&env)?.phases().clone())
    }

    pub fn total_sold(env: Env) -> Result<i128, Error> {
        Ok(get_schedule(&env)?.total_sold())
    }

    pub fn total_sale_supply(env: Env) -> Result<i128, Error> {
        Ok(get_schedule(&env)?.total_supply())
    }

    pub fn softcap_reached(env: Env) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Self::softcap_reached_for(&env, &config)
    }

    pub fn total_withdrawn(env: Env) -> i128 {
        get_total_withdrawn(&env)
    }

    pub fn contribution_of(env: Env, buyer: Address) -> i128 {
        get_contribution(&env, &buyer)
    }

    pub fn is_open(env: Env) -> bool {
        is_open(&env)
    }

    pub fn is_closed(env: Env) -> bool {
        is_closed(&env)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }
}

impl CrowdsaleContract {
    fn require_operator(env: &Env, caller: &Address) -> Result<SaleConfig, Error> {
        caller.require_auth();
        let config = get_config(env)?;
        if *caller != config.operator {
            return Err(Error::NotOperator);
        }
        Ok(config)
    }

    fn require_purchasable(env: &Env, amount_in: i128) -> Result<(), Error> {
        if !is_open(env) {
            return Err(Error::SaleNotOpen);
        }
        if amount_in <= 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }

    fn read_decimals(env: &Env, payment_token: &Address) -> Result<u32, Error> {
        let decimals = token::Client::new(env, payment_token).decimals();
        if decimals > MAX_PAYMENT_DECIMALS {
            return Err(Error::InvalidDecimals);
        }
        Ok(decimals)
    }

    fn payment_scale(config: &SaleConfig) -> Result<i128, Error> {
        10i128
            .checked_pow(config.payment_decimals)
            .ok_or(Error::MathOverflow)
    }

    fn softcap_amount(config: &SaleConfig) -> Result<i128, Error> {
        SOFTCAP_UNITS
            .checked_mul(Self::payment_scale(config)?)
            .ok_or(Error::MathOverflow)
    }

    /// Current custody balance plus everything ever withdrawn.
    fn softcap_reached_for(env: &Env, config: &SaleConfig) -> Result<bool, Error> {
        let balance = token::Client::new(env, &config.payment_token)
            .balance(&env.current_contract_address());
        let raised = balance
            .checked_add(get_total_withdrawn(env))
            .ok_or(Error::MathOverflow)?;
        Ok(raised >= Self::softcap_amount(config)?)
    }

    fn execute_purchase(
        env: &Env,
        config: &SaleConfig,
        buyer: &Address,
        amount_in: i128,
    ) -> Result<i128, Error> {
        let now = env.ledger().timestamp();
        let scale = Self::payment_scale(config)?;
        let mut schedule = get_schedule(env)?;

        let (tokens_out, remainder) = schedule.quote(amount_in, now, scale)?;
        let phase = schedule.current(now).ok_or(Error::SoldOut)?;

        let this = env.current_contract_address();
        let payment = token::Client::new(env, &config.payment_token);
        payment.transfer(buyer, &this, &amount_in);

        schedule.allocate(tokens_out, phase, now)?;
        set_schedule(env, &schedule);

        let contribution = get_contribution(env, buyer)
            .checked_add((amount_in - remainder) / scale)
            .ok_or(Error::MathOverflow)?;
        set_contribution(env, buyer, contribution);

        let immediate = tokens_out
            .checked_mul(IMMEDIATE_PERCENT)
            .ok_or(Error::MathOverflow)?
            / 100;
        let vested = tokens_out - immediate;

        let sale_token = token::Client::new(env, &config.sale_token);
        if immediate > 0 {
            sale_token.transfer(&this, buyer, &immediate);
        }
        if vested > 0 {
            sale_token.transfer(&this, &config.vesting, &vested);
            VestingGrantClient::new(env, &config.vesting).grant(
                &this,
                &CROWDSALE_VESTING_GROUP,
                buyer,
                &vested,
            );
        }
        if remainder > 0 && remainder <= amount_in {
            payment.transfer(&this, buyer, &remainder);
        }

        log!(env, "purchase", buyer.clone(), tokens_out, remainder);
        events::distributed(
            env,
            DistributionEvent {
                buyer: buyer.clone(),
                amount_in,
                remainder,
                tokens_out,
                immediate,
                vested,
                phase,
                contribution,
            },
        );
        Ok(tokens_out)
    }
}
