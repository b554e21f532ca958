use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AccountConfig;
use crate::cycle::BillingCycle;
use crate::decimal::{Money, Rate};
use crate::errors::{AccountError, Result};
use crate::events::{Event, EventStore};
use crate::interest::{InterestBreakdown, InterestCalculator};
use crate::types::{AccountId, LogEntry, PaymentDue, Transaction, WithdrawalReceipt};

/// a single revolving credit account
///
/// The balance starts at the credit limit and represents credit still
/// available. Withdrawals lower it, deposits raise it, and every successful
/// operation appends to an immutable transaction log from which interest is
/// recomputed on demand.
///
/// The account borrows its clock for its whole lifetime; every operation
/// reads the current date from it at call time.
pub struct Account<'t> {
    id: AccountId,
    account_number: String,
    config: AccountConfig,
    balance: Money,
    cycle: BillingCycle,
    transactions: Vec<Transaction>,
    events: EventStore,
    time: &'t SafeTimeProvider,
}

impl<'t> Account<'t> {
    /// open an account, anchoring the billing cycle at today's date
    pub fn open(config: AccountConfig, time: &'t SafeTimeProvider) -> Result<Self> {
        let account_number = format!("CRD-{}", Uuid::new_v4().to_string()[..8].to_uppercase());
        Self::open_with_number(config, account_number, time)
    }

    pub fn open_with_number(
        config: AccountConfig,
        account_number: String,
        time: &'t SafeTimeProvider,
    ) -> Result<Self> {
        config.validate()?;

        let now = time.now();
        let cycle = BillingCycle::new(now.date_naive(), config.cycle_length_days);

        let mut account = Self {
            id: Uuid::new_v4(),
            account_number,
            balance: config.credit_limit,
            cycle,
            transactions: Vec::new(),
            events: EventStore::new(),
            config,
            time,
        };

        account.events.emit(Event::AccountOpened {
            account_id: account.id,
            credit_limit: account.config.credit_limit,
            apr: account.config.apr,
            cycle_start: cycle.start_date,
            timestamp: now,
        });

        info!(
            account_id = %account.id,
            account_number = %account.account_number,
            credit_limit = %account.config.credit_limit,
            apr = %account.config.apr,
            cycle_start = %cycle.start_date,
            "credit account opened"
        );

        Ok(account)
    }

    /// builder for creating accounts
    pub fn builder() -> AccountBuilder<'t> {
        AccountBuilder::new()
    }

    /// draw against the remaining balance
    ///
    /// Rejected without touching the balance or the log when `amount` exceeds
    /// the current balance. The check is against the balance, not the credit
    /// limit, so deposits above the limit can be drawn back down.
    pub fn withdraw(&mut self, amount: Money) -> Result<WithdrawalReceipt> {
        self.ensure_positive(amount)?;

        let now = self.time.now();

        if amount > self.balance {
            warn!(
                account_id = %self.id,
                requested = %amount,
                available = %self.balance,
                "trying to withdraw more than remaining credit"
            );

            self.events.emit(Event::WithdrawalRejected {
                account_id: self.id,
                requested: amount,
                available: self.balance,
                timestamp: now,
            });

            return Err(AccountError::InsufficientCredit {
                available: self.balance,
                requested: amount,
            });
        }

        let day_in_cycle = self.cycle.day_in_cycle(now.date_naive());
        self.balance -= amount;
        self.transactions.push(Transaction::withdrawal(amount, day_in_cycle, now));

        self.events.emit(Event::FundsWithdrawn {
            account_id: self.id,
            amount,
            new_balance: self.balance,
            day_in_cycle,
            timestamp: now,
        });

        info!(
            account_id = %self.id,
            amount = %amount,
            balance = %self.balance,
            day_in_cycle,
            "funds withdrawn"
        );

        Ok(WithdrawalReceipt {
            amount,
            new_balance: self.balance,
            day_in_cycle,
        })
    }

    /// pay back into the account, returning the new balance
    ///
    /// Not capped at the credit limit.
    pub fn deposit(&mut self, amount: Money) -> Result<Money> {
        self.ensure_positive(amount)?;

        let now = self.time.now();
        let day_in_cycle = self.cycle.day_in_cycle(now.date_naive());

        self.balance += amount;
        self.transactions.push(Transaction::deposit(amount, day_in_cycle, now));

        self.events.emit(Event::DepositReceived {
            account_id: self.id,
            amount,
            new_balance: self.balance,
            day_in_cycle,
            timestamp: now,
        });

        info!(
            account_id = %self.id,
            amount = %amount,
            balance = %self.balance,
            day_in_cycle,
            "deposit received"
        );

        Ok(self.balance)
    }

    /// interest owed at the end of the cycle, never negative, rounded to cents
    pub fn accrue_interest(&self) -> Money {
        let breakdown = self.interest_breakdown();

        debug!(
            account_id = %self.id,
            transactions = self.transactions.len(),
            gross = %breakdown.gross,
            total = %breakdown.total,
            clamped = breakdown.was_clamped(),
            "interest accrued"
        );

        breakdown.total
    }

    /// per-transaction view of the accrued interest
    pub fn interest_breakdown(&self) -> InterestBreakdown {
        self.calculator().breakdown(&self.transactions)
    }

    /// days until payment is due and what is owed
    pub fn payment_due_query(&self) -> PaymentDue {
        let today = self.time.now().date_naive();
        let amount_owed = self.amount_owed();
        let total_due = self.accrue_interest() + amount_owed;

        let due = PaymentDue {
            days_remaining: self.cycle.days_until_due(today),
            amount_owed,
            total_due,
        };

        debug!(
            account_id = %self.id,
            days_remaining = ?due.days_remaining,
            amount_owed = %due.amount_owed,
            total_due = %due.total_due,
            "payment due queried"
        );

        due
    }

    /// log entries in the order transactions were recorded
    pub fn transaction_log_view(&self) -> impl Iterator<Item = LogEntry> + '_ {
        self.transactions.iter().map(Transaction::log_entry)
    }

    /// credit limit minus balance, negative when deposits exceed draws
    pub fn amount_owed(&self) -> Money {
        self.config.credit_limit - self.balance
    }

    /// day of the current cycle according to the clock right now
    pub fn current_day_in_cycle(&self) -> u32 {
        self.cycle.day_in_cycle(self.time.now().date_naive())
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    pub fn credit_limit(&self) -> Money {
        self.config.credit_limit
    }

    pub fn apr(&self) -> Rate {
        self.config.apr
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn cycle(&self) -> BillingCycle {
        self.cycle
    }

    pub fn cycle_start_date(&self) -> NaiveDate {
        self.cycle.start_date
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// get json representation of current state
    pub fn to_json_pretty(&self) -> String {
        use crate::serialization::AccountView;

        AccountView::from_account(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }

    fn calculator(&self) -> InterestCalculator {
        InterestCalculator::new(self.config.apr, self.cycle, self.config.year_basis)
    }

    fn ensure_positive(&self, amount: Money) -> Result<()> {
        if amount.is_positive() {
            return Ok(());
        }

        warn!(account_id = %self.id, amount = %amount, "rejected non-positive amount");
        Err(AccountError::InvalidAmount { amount })
    }
}

/// builder for credit accounts
pub struct AccountBuilder<'t> {
    config: Option<AccountConfig>,
    credit_limit: Option<Money>,
    apr: Option<Rate>,
    cycle_length_days: Option<u32>,
    year_basis: Option<u32>,
    account_number: Option<String>,
    time_provider: Option<&'t SafeTimeProvider>,
}

impl<'t> Default for AccountBuilder<'t> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> AccountBuilder<'t> {
    pub fn new() -> Self {
        Self {
            config: None,
            credit_limit: None,
            apr: None,
            cycle_length_days: None,
            year_basis: None,
            account_number: None,
            time_provider: None,
        }
    }

    pub fn set_time(mut self, time: &'t SafeTimeProvider) -> Self {
        self.time_provider = Some(time);
        self
    }

    /// start from a full config; individual setters still override it
    pub fn config(mut self, config: AccountConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn credit_limit(mut self, limit: Money) -> Self {
        self.credit_limit = Some(limit);
        self
    }

    pub fn apr(mut self, apr: Rate) -> Self {
        self.apr = Some(apr);
        self
    }

    pub fn cycle_length_days(mut self, days: u32) -> Self {
        self.cycle_length_days = Some(days);
        self
    }

    pub fn year_basis(mut self, days: u32) -> Self {
        self.year_basis = Some(days);
        self
    }

    pub fn account_number(mut self, account: String) -> Self {
        self.account_number = Some(account);
        self
    }

    pub fn build(self) -> Result<Account<'t>> {
        let time = self.time_provider.ok_or(AccountError::InvalidConfiguration {
            message: "Time provider not set. Call set_time() first".to_string(),
        })?;

        let credit_limit = self
            .credit_limit
            .or(self.config.as_ref().map(|c| c.credit_limit))
            .ok_or(AccountError::InvalidConfiguration {
                message: "Credit limit required".to_string(),
            })?;

        let apr = self
            .apr
            .or(self.config.as_ref().map(|c| c.apr))
            .ok_or(AccountError::InvalidConfiguration {
                message: "APR required".to_string(),
            })?;

        let mut config = self
            .config
            .unwrap_or_else(|| AccountConfig::new(credit_limit, apr));
        config.credit_limit = credit_limit;
        config.apr = apr;
        if let Some(days) = self.cycle_length_days {
            config.cycle_length_days = days;
        }
        if let Some(days) = self.year_basis {
            config.year_basis = days;
        }

        match self.account_number {
            Some(number) => Account::open_with_number(config, number, time),
            None => Account::open(config, time),
        }
    }
}
