use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for an account
pub type AccountId = Uuid;

/// direction of a logged transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Deposit,
    Withdraw,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Deposit => write!(f, "Deposit"),
            Direction::Withdraw => write!(f, "Withdraw"),
        }
    }
}

/// a recorded withdrawal or deposit, never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// 0-indexed day within the billing cycle, in [0, cycle length)
    pub day_in_cycle: u32,
    /// negative for withdrawals, positive for deposits
    pub signed_amount: Money,
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    pub fn withdrawal(amount: Money, day_in_cycle: u32, recorded_at: DateTime<Utc>) -> Self {
        Self {
            day_in_cycle,
            signed_amount: -amount.abs(),
            recorded_at,
        }
    }

    pub fn deposit(amount: Money, day_in_cycle: u32, recorded_at: DateTime<Utc>) -> Self {
        Self {
            day_in_cycle,
            signed_amount: amount.abs(),
            recorded_at,
        }
    }

    pub fn direction(&self) -> Direction {
        if self.signed_amount.is_positive() {
            Direction::Deposit
        } else {
            Direction::Withdraw
        }
    }

    pub fn log_entry(&self) -> LogEntry {
        LogEntry {
            day: self.day_in_cycle,
            direction: self.direction(),
            amount: self.signed_amount.abs(),
        }
    }
}

/// human-readable line of the transaction log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub day: u32,
    pub direction: Direction,
    pub amount: Money,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {} - {} ${}", self.day, self.direction, self.amount)
    }
}

/// result of a successful withdrawal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    pub amount: Money,
    pub new_balance: Money,
    pub day_in_cycle: u32,
}

/// answer to a payment-due query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDue {
    /// `None` once the cycle has elapsed and payment is due now
    pub days_remaining: Option<u32>,
    /// credit limit minus balance, before interest
    pub amount_owed: Money,
    /// accrued interest plus amount owed
    pub total_due: Money,
}

impl PaymentDue {
    pub fn is_due_now(&self) -> bool {
        self.days_remaining.is_none()
    }
}

impl fmt::Display for PaymentDue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(days) = self.days_remaining {
            writeln!(f, "Your payment is not due for another {} days", days)?;
            writeln!(f, "You currently owe {}", self.amount_owed)?;
        }
        write!(f, "You have ${} due at this time", self.total_due)
    }
}
