/// serialization support for accounts
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::decimal::{Money, Rate};
use crate::types::{AccountId, LogEntry};

/// serializable view of an account's state
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountView {
    pub id: AccountId,
    pub account_number: String,
    pub cycle: CycleView,
    pub financial: FinancialView,
    pub transactions: Vec<LogEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CycleView {
    pub start_date: NaiveDate,
    pub length_days: u32,
    pub current_day: u32,
    pub days_remaining: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FinancialView {
    pub credit_limit: Money,
    pub apr: Rate,
    pub balance: Money,
    pub amount_owed: Money,
    pub accrued_interest: Money,
    pub total_due: Money,
}

impl AccountView {
    pub fn from_account(account: &Account<'_>) -> Self {
        let due = account.payment_due_query();

        AccountView {
            id: account.id(),
            account_number: account.account_number().to_string(),
            cycle: CycleView {
                start_date: account.cycle_start_date(),
                length_days: account.cycle().length_days,
                current_day: account.current_day_in_cycle(),
                days_remaining: due.days_remaining,
            },
            financial: FinancialView {
                credit_limit: account.credit_limit(),
                apr: account.apr(),
                balance: account.balance(),
                amount_owed: due.amount_owed,
                accrued_interest: due.total_due - due.amount_owed,
                total_due: due.total_due,
            },
            transactions: account.transaction_log_view().collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hourglass_rs::{SafeTimeProvider, TimeSource};
    use rust_decimal_macros::dec;

    #[test]
    fn test_view_reflects_account() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        ));

        let mut account = Account::builder()
            .credit_limit(Money::from_major(1_000))
            .apr(Rate::from_decimal(dec!(0.35)))
            .account_number("CRD-VIEW0001".to_string())
            .set_time(&time)
            .build()
            .unwrap();
        account.withdraw(Money::from_major(500)).unwrap();

        let view = AccountView::from_account(&account);
        assert_eq!(view.account_number, "CRD-VIEW0001");
        assert_eq!(view.cycle.current_day, 1);
        assert_eq!(view.cycle.days_remaining, Some(29));
        assert_eq!(view.financial.balance, Money::from_major(500));
        assert_eq!(view.financial.accrued_interest, Money::from_str_exact("14.38").unwrap());
        assert_eq!(view.transactions.len(), 1);

        let json = account.json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["account_number"], "CRD-VIEW0001");
        assert_eq!(parsed["transactions"][0]["direction"], "Withdraw");
    }
}
