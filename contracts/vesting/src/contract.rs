use crate::errors::Error;
use crate::events::{self, GrantedEvent, GroupCreatedEvent, ReleasedEvent};
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Symbol, Vec};

contractmeta!(
    key = "Description",
    val = "Multi-schedule cliff and linear vesting engine"
);

#[contract]
pub struct VestingContract;

#[contractimpl]
impl VestingContract {
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_token(&env, &token);
        Ok(())
    }

    /// Allow `granter` (the crowdsale, the token ledger) to register grants.
    pub fn add_granter(env: Env, admin: Address, granter: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        set_granter(&env, &granter, true);
        events::granter_changed(&env, &granter, true);
        Ok(())
    }

    pub fn remove_granter(env: Env, admin: Address, granter: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        set_granter(&env, &granter, false);
        events::granter_changed(&env, &granter, false);
        Ok(())
    }

    pub fn create_group(
        env: Env,
        admin: Address,
        key: Symbol,
        cliff_months: u32,
        duration_months: u32,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if get_group(&env, &key).is_some() {
            return Err(Error::GroupExists);
        }
        if duration_months == 0 {
            return Err(Error::InvalidDuration);
        }

        add_group(
            &env,
            &key,
            &VestingGroup {
                cliff_months,
                duration_months,
            },
        );
        events::group_created(
            &env,
            GroupCreatedEvent {
                group: key,
                cliff_months,
                duration_months,
            },
        );
        Ok(())
    }

    /// Append a new schedule for `beneficiary` starting now. The tokens must
    /// already sit in this contract; the granter moves them in first.
    pub fn grant(
        env: Env,
        granter: Address,
        group: Symbol,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), Error> {
        granter.require_auth();
        if !is_granter(&env, &granter) {
            return Err(Error::NotGranter);
        }

        let config = get_group(&env, &group).ok_or(Error::GroupNotFound)?;
        if beneficiary == env.current_contract_address() {
            return Err(Error::InvalidBeneficiary);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let schedule = VestingSchedule::new(amount, env.ledger().timestamp(), &config)?;
        let (start, end) = (schedule.start, schedule.end);

        let mut schedules = get_schedules(&env, &group, &beneficiary);
        schedules.push_back(schedule);
        set_schedules(&env, &group, &beneficiary, &schedules);

        let outstanding = get_outstanding(&env, &group)
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        set_outstanding(&env, &group, outstanding);
        let total = get_total_outstanding(&env)
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        set_total_outstanding(&env, total);

        events::granted(
            &env,
            GrantedEvent {
                group,
                beneficiary,
                granter,
                amount,
                start,
                end,
                index: schedules.len() - 1,
            },
        );
        Ok(())
    }

    /// Release up to `amount` from the caller's schedules in `group`,
    /// draining the oldest schedule first. Returns what was paid out.
    pub fn release(
        env: Env,
        beneficiary: Address,
        group: Symbol,
        amount: i128,
    ) -> Result<i128, Error> {
        beneficiary.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        Self::release_from(&env, &beneficiary, &group, amount)
    }

    pub fn release_all(env: Env, beneficiary: Address, group: Symbol) -> Result<i128, Error> {
        beneficiary.require_auth();
        let releasable = Self::releasable(env.clone(), group.clone(), beneficiary.clone())?;
        if releasable == 0 {
            return Err(Error::NothingToRelease);
        }
        Self::release_from(&env, &beneficiary, &group, releasable)
    }

    // View functions
    pub fn releasable(env: Env, group: Symbol, beneficiary: Address) -> Result<i128, Error> {
        get_group(&env, &group).ok_or(Error::GroupNotFound)?;
        let now = env.ledger().timestamp();

        let mut total: i128 = 0;
        for schedule in get_schedules(&env, &group, &beneficiary).iter() {
            total = total
                .checked_add(schedule.releasable_at(now))
                .ok_or(Error::MathOverflow)?;
        }
        Ok(total)
    }

    pub fn group(env: Env, key: Symbol) -> Result<VestingGroup, Error> {
        get_group(&env, &key).ok_or(Error::GroupNotFound)
    }

    pub fn groups(env: Env) -> Vec<Symbol> {
        get_group_keys(&env)
    }

    pub fn schedules(env: Env, group: Symbol, beneficiary: Address) -> Vec<VestingSchedule> {
        get_schedules(&env, &group, &beneficiary)
    }

    pub fn outstanding(env: Env, group: Symbol) -> i128 {
        get_outstanding(&env, &group)
    }

    pub fn total_outstanding(env: Env) -> i128 {
        get_total_outstanding(&env)
    }

    pub fn released_of(env: Env, account: Address) -> i128 {
        get_released(&env, &account)
    }

    pub fn is_granter(env: Env, account: Address) -> bool {
        is_granter(&env, &account)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        get_token(&env)
    }
}

impl VestingContract {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != get_admin(env)? {
            return Err(Error::NotAdmin);
        }
        Ok(())
    }

    fn release_from(
        env: &Env,
        beneficiary: &Address,
        group: &Symbol,
        requested: i128,
    ) -> Result<i128, Error> {
        get_group(env, group).ok_or(Error::GroupNotFound)?;
        let now = env.ledger().timestamp();

        let mut schedules = get_schedules(env, group, beneficiary);
        let mut remaining = requested;
        let mut released: i128 = 0;

        for index in 0..schedules.len() {
            if remaining == 0 {
                break;
            }
            let Some(mut schedule) = schedules.get(index) else {
                break;
            };

            let take = schedule.releasable_at(now).min(remaining);
            if take == 0 {
                continue;
            }

            schedule.released += take;
            schedules.set(index, schedule);
            remaining -= take;
            released += take;
        }

        if released == 0 {
            return Err(Error::NothingToRelease);
        }
        if released > requested {
            return Err(Error::OverRelease);
        }

        set_schedules(env, group, beneficiary, &schedules);
        set_outstanding(env, group, get_outstanding(env, group) - released);
        set_total_outstanding(env, get_total_outstanding(env) - released);
        let lifetime = get_released(env, beneficiary)
            .checked_add(released)
            .ok_or(Error::MathOverflow)?;
        set_released(env, beneficiary, lifetime);

        token::Client::new(env, &get_token(env)?).transfer(
            &env.current_contract_address(),
            beneficiary,
            &released,
        );

        log!(env, "release", group.clone(), released, lifetime);
        events::released(
            env,
            ReleasedEvent {
                group: group.clone(),
                beneficiary: beneficiary.clone(),
                amount: released,
                lifetime_released: lifetime,
            },
        );
        Ok(released)
    }
}
