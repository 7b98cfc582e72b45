//! Phase table of the sale: the four price tiers, how a payment is priced
//! across them and how purchased tokens are booked against them.

use crate::constants::{PHASE_CAPACITIES, PHASE_END_OFFSETS, PHASE_RATES};
use crate::errors::Error;
use crate::types::Phase;
use soroban_sdk::{Env, Vec, I256};

impl Phase {
    pub fn remaining(&self) -> i128 {
        self.max_supply - self.sold_supply
    }

    /// Past its end time. An unopened phase (end time 0) counts as expired
    /// for pricing, so nothing can be quoted before the sale opens.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.end_time
    }
}

/// Floored `a * b / denominator` over a 256-bit intermediate. An 18-decimal
/// amount times an 18-decimal rate does not fit in `i128`.
fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, Error> {
    if denominator <= 0 {
        return Err(Error::MathOverflow);
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, denominator))
        .to_i128()
        .ok_or(Error::MathOverflow)
}

pub struct PhaseSchedule {
    phases: Vec<Phase>,
}

impl PhaseSchedule {
    /// The fixed four-phase table with nothing sold and no end times.
    pub fn initial(env: &Env) -> Self {
        let mut phases = Vec::new(env);
        for (max_supply, unit_rate) in PHASE_CAPACITIES.iter().zip(PHASE_RATES.iter()) {
            phases.push_back(Phase {
                max_supply: *max_supply,
                unit_rate: *unit_rate,
                sold_supply: 0,
                end_time: 0,
            });
        }
        Self { phases }
    }

    pub fn from_phases(phases: Vec<Phase>) -> Self {
        Self { phases }
    }

    pub fn phases(&self) -> &Vec<Phase> {
        &self.phases
    }

    pub fn is_opened(&self) -> bool {
        self.last_end() != 0
    }

    pub fn last_end(&self) -> u64 {
        self.phases.last().map(|p| p.end_time).unwrap_or(0)
    }

    pub fn total_supply(&self) -> i128 {
        self.phases.iter().map(|p| p.max_supply).sum()
    }

    pub fn total_sold(&self) -> i128 {
        self.phases.iter().map(|p| p.sold_supply).sum()
    }

    /// First phase, in definition order, that is neither past its end time
    /// nor fully sold. `None` means the sale is sold out.
    pub fn current(&self, now: u64) -> Option<u32> {
        for (index, phase) in self.phases.iter().enumerate() {
            let live = phase.end_time == 0 || phase.end_time > now;
            if live && phase.sold_supply < phase.max_supply {
                return Some(index as u32);
            }
        }
        None
    }

    /// Fix every phase's end time relative to `now`.
    pub fn open(&mut self, now: u64) -> Result<(), Error> {
        for index in 0..self.phases.len() {
            let Some(mut phase) = self.phases.get(index) else {
                break;
            };
            phase.end_time = now
                .checked_add(PHASE_END_OFFSETS[index as usize])
                .ok_or(Error::MathOverflow)?;
            self.phases.set(index, phase);
        }
        Ok(())
    }

    /// Push the last phase's end time to `new_end`. Only ever later.
    pub fn delay(&mut self, new_end: u64) -> Result<(), Error> {
        let index = self.phases.len() - 1;
        let mut last = self.phases.get(index).ok_or(Error::NotInitialized)?;
        if new_end <= last.end_time {
            return Err(Error::InvalidEndTime);
        }
        last.end_time = new_end;
        self.phases.set(index, last);
        Ok(())
    }

    /// Price `amount_in` (smallest payment units) across the live phases.
    /// Returns the tokens it buys and the part of the input no phase could
    /// absorb. `scale` is `10^payment_decimals`.
    pub fn quote(&self, amount_in: i128, now: u64, scale: i128) -> Result<(i128, i128), Error> {
        let env = self.phases.env();
        let mut remainder = amount_in;
        let mut tokens_out: i128 = 0;

        for phase in self.phases.iter() {
            if remainder == 0 {
                break;
            }
            if phase.is_expired(now) {
                continue;
            }
            let capacity = phase.remaining();
            if capacity <= 0 {
                continue;
            }

            let candidate = mul_div(env, remainder, phase.unit_rate, scale)?;
            if candidate <= capacity {
                tokens_out = tokens_out
                    .checked_add(candidate)
                    .ok_or(Error::MathOverflow)?;
                remainder = 0;
                break;
            }

            let spent = mul_div(env, capacity, scale, phase.unit_rate)?;
            remainder -= spent;
            tokens_out = tokens_out
                .checked_add(capacity)
                .ok_or(Error::MathOverflow)?;
        }

        Ok((tokens_out, remainder))
    }

    /// Book `tokens` as sold, filling phases from `from` onwards and skipping
    /// expired ones, the same way `quote` walks them.
    pub fn allocate(&mut self, tokens: i128, from: u32, now: u64) -> Result<(), Error> {
        let mut left = tokens;

        for index in from..self.phases.len() {
            if left == 0 {
                break;
            }
            let Some(mut phase) = self.phases.get(index) else {
                break;
            };
            if phase.is_expired(now) {
                continue;
            }

            let take = left.min(phase.remaining());
            if take <= 0 {
                continue;
            }
            phase.sold_supply += take;
            self.phases.set(index, phase);
            left -= take;
        }

        if left != 0 {
            return Err(Error::AllocationMismatch);
        }
        Ok(())
    }
}
