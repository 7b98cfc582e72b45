use crate::errors::Error;
use crate::events::{self, ApproveEvent, MintEvent};
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{
    contract, contractclient, contractimpl, contractmeta, log, Address, Env, String, Symbol, Vec,
};

contractmeta!(
    key = "Description",
    val = "Fixed-supply distribution token with capped supply groups"
);

const MAX_DECIMALS: u32 = 18;

/// The slice of the vesting engine the ledger calls when it mints straight
/// into a vesting group.
#[contractclient(name = "VestingGrantClient")]
pub trait VestingGrantInterface {
    fn grant(env: Env, granter: Address, group: Symbol, beneficiary: Address, amount: i128);
}

#[contract]
pub struct DistributionToken;

#[contractimpl]
impl DistributionToken {
    /// Initialize the ledger. `supply_cap` is the global cap that supply
    /// groups partition; the admin starts out as the only minter.
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        supply_cap: i128,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if decimal > MAX_DECIMALS {
            return Err(Error::InvalidDecimals);
        }
        if supply_cap <= 0 {
            return Err(Error::InvalidAmount);
        }

        set_admin(&env, &admin);
        set_metadata(
            &env,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        set_supply_cap(&env, supply_cap);
        set_minter(&env, &admin, true);
        Ok(())
    }

    /// Carve a new supply group out of the unallocated part of the global cap.
    pub fn add_supply_group(
        env: Env,
        admin: Address,
        group: Symbol,
        cap: i128,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if cap <= 0 {
            return Err(Error::InvalidAmount);
        }
        if get_group(&env, &group).is_some() {
            return Err(Error::GroupExists);
        }

        let allocated = get_allocated_cap(&env)
            .checked_add(cap)
            .ok_or(Error::MathOverflow)?;
        if allocated > get_supply_cap(&env) {
            return Err(Error::SupplyCapExceeded);
        }

        set_allocated_cap(&env, allocated);
        set_group(&env, &group, &SupplyGroup { cap, minted: 0 });
        events::group_added(&env, &group, cap);
        Ok(())
    }

    pub fn set_minter(
        env: Env,
        admin: Address,
        minter: Address,
        enabled: bool,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        set_minter(&env, &minter, enabled);
        Ok(())
    }

    /// Mint `amount` to `to`, charged against `group`'s cap.
    pub fn mint(
        env: Env,
        minter: Address,
        to: Address,
        amount: i128,
        group: Symbol,
    ) -> Result<(), Error> {
        minter.require_auth();
        if !is_minter(&env, &minter) {
            return Err(Error::NotMinter);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut supply_group = get_group(&env, &group).ok_or(Error::UnknownGroup)?;
        let group_minted = supply_group
            .minted
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        if group_minted > supply_group.cap {
            return Err(Error::GroupCapExceeded);
        }
        supply_group.minted = group_minted;
        set_group(&env, &group, &supply_group);

        let total = get_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        set_total_supply(&env, total);
        Self::credit(&env, &to, amount)?;

        log!(&env, "mint", group, amount, group_minted);
        events::minted(
            &env,
            MintEvent {
                minter,
                to,
                group,
                amount,
                group_minted,
            },
        );
        Ok(())
    }

    /// Mint into the vesting engine and register the grant for `beneficiary`.
    /// This contract must be a registered granter of `vesting`.
    pub fn mint_vested(
        env: Env,
        minter: Address,
        vesting: Address,
        vesting_group: Symbol,
        beneficiary: Address,
        amount: i128,
        supply_group: Symbol,
    ) -> Result<(), Error> {
        Self::mint(env.clone(), minter, vesting.clone(), amount, supply_group)?;
        VestingGrantClient::new(&env, &vesting).grant(
            &env.current_contract_address(),
            &vesting_group,
            &beneficiary,
            &amount,
        );
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(Error::InvalidExpiration);
        }

        set_allowance(
            &env,
            &from,
            &spender,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );
        events::approved(
            &env,
            ApproveEvent {
                from,
                spender,
                amount,
                expiration_ledger,
            },
        );
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::move_balance(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        Self::spend_allowance(&env, &from, &spender, amount)?;
        Self::move_balance(&env, &from, &to, amount)
    }

    /// Burn from the caller's own balance.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::destroy(&env, &from, amount)
    }

    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) -> Result<(), Error> {
        spender.require_auth();
        Self::spend_allowance(&env, &from, &spender, amount)?;
        Self::destroy(&env, &from, amount)
    }

    // View functions
    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(get_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env)?.symbol)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn supply_cap(env: Env) -> i128 {
        get_supply_cap(&env)
    }

    pub fn supply_groups(env: Env) -> Vec<Symbol> {
        get_group_keys(&env)
    }

    pub fn group_cap(env: Env, group: Symbol) -> Result<i128, Error> {
        Ok(get_group(&env, &group).ok_or(Error::UnknownGroup)?.cap)
    }

    pub fn group_minted(env: Env, group: Symbol) -> Result<i128, Error> {
        Ok(get_group(&env, &group).ok_or(Error::UnknownGroup)?.minted)
    }

    pub fn is_minter(env: Env, account: Address) -> bool {
        is_minter(&env, &account)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }
}

impl DistributionToken {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != get_admin(env)? {
            return Err(Error::NotAdmin);
        }
        Ok(())
    }

    fn credit(env: &Env, account: &Address, amount: i128) -> Result<(), Error> {
        let balance = get_balance(env, account)
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        set_balance(env, account, balance);
        Ok(())
    }

    fn debit(env: &Env, account: &Address, amount: i128) -> Result<(), Error> {
        let balance = get_balance(env, account);
        if balance < amount {
            return Err(Error::InsufficientBalance);
        }
        set_balance(env, account, balance - amount);
        Ok(())
    }

    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        Self::debit(env, from, amount)?;
        Self::credit(env, to, amount)?;
        events::transferred(env, from, to, amount);
        Ok(())
    }

    fn spend_allowance(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        let mut allowance = get_allowance(env, from, spender);
        if allowance.amount < amount {
            return Err(Error::InsufficientAllowance);
        }
        if amount > 0 {
            allowance.amount -= amount;
            set_allowance(env, from, spender, &allowance);
        }
        Ok(())
    }

    fn destroy(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        Self::debit(env, from, amount)?;
        let total = get_total_supply(env) - amount;
        set_total_supply(env, total);
        events::burned(env, from, amount, total);
        Ok(())
    }
}
