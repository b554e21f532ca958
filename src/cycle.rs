use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// a recurring billing window anchored at account opening
///
/// The anchor day counts as day 1, so the last day of each window maps to
/// day 0. The anchor never moves: later cycles are only distinguished by the
/// modulo arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingCycle {
    pub start_date: NaiveDate,
    pub length_days: u32,
}

impl BillingCycle {
    pub fn new(start_date: NaiveDate, length_days: u32) -> Self {
        Self {
            start_date,
            length_days,
        }
    }

    /// `(today - start + 1) mod length`
    pub fn day_in_cycle(&self, today: NaiveDate) -> u32 {
        if self.length_days == 0 {
            return 0;
        }
        let elapsed_inclusive = (today - self.start_date).num_days() + 1;
        elapsed_inclusive.rem_euclid(self.length_days as i64) as u32
    }

    /// days left before payment is due, `None` on the closing day
    pub fn days_until_due(&self, today: NaiveDate) -> Option<u32> {
        match self.day_in_cycle(today) {
            0 => None,
            day => Some(self.length_days - day),
        }
    }

    /// days a transaction recorded on `day` is outstanding through the end of the cycle
    pub fn accruable_days(&self, day: u32) -> u32 {
        (self.length_days + 1).saturating_sub(day)
    }
}
