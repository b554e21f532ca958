use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::AccountId;

/// all events that can be emitted by an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    AccountOpened {
        account_id: AccountId,
        credit_limit: Money,
        apr: Rate,
        cycle_start: NaiveDate,
        timestamp: DateTime<Utc>,
    },
    FundsWithdrawn {
        account_id: AccountId,
        amount: Money,
        new_balance: Money,
        day_in_cycle: u32,
        timestamp: DateTime<Utc>,
    },
    WithdrawalRejected {
        account_id: AccountId,
        requested: Money,
        available: Money,
        timestamp: DateTime<Utc>,
    },
    DepositReceived {
        account_id: AccountId,
        amount: Money,
        new_balance: Money,
        day_in_cycle: u32,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
