//! Linear release curve of a single grant.
//!
//! A schedule releases nothing until `cliff_end`, everything that is left
//! from `end` on, and a straight-line share of `amount` in between. Amounts
//! are integer token units; every division truncates.

use crate::errors::Error;
use crate::types::{VestingGroup, VestingSchedule};

/// Length of a vesting month in seconds (30 days).
pub const MONTH: u64 = 30 * 24 * 60 * 60;

fn months_to_seconds(months: u32) -> Result<u64, Error> {
    (months as u64).checked_mul(MONTH).ok_or(Error::MathOverflow)
}

impl VestingSchedule {
    pub fn new(amount: i128, start: u64, group: &VestingGroup) -> Result<Self, Error> {
        let cliff_end = start
            .checked_add(months_to_seconds(group.cliff_months)?)
            .ok_or(Error::MathOverflow)?;
        let end = cliff_end
            .checked_add(months_to_seconds(group.duration_months)?)
            .ok_or(Error::MathOverflow)?;

        Ok(Self {
            amount,
            released: 0,
            start,
            cliff_end,
            end,
        })
    }

    pub fn remaining(&self) -> i128 {
        self.amount - self.released
    }

    /// Amount that can be paid out of this schedule at `at`.
    pub fn releasable_at(&self, at: u64) -> i128 {
        if at < self.cliff_end {
            return 0;
        }
        if at >= self.end {
            return self.remaining();
        }

        let elapsed = (at - self.cliff_end) as i128;
        let span = (self.end - self.cliff_end) as i128;
        // floor(amount * elapsed / span) without forming the full product
        let vested = (self.amount / span) * elapsed + (self.amount % span) * elapsed / span;

        (vested - self.released).max(0)
    }
}
