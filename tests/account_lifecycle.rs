use chrono::{Duration, TimeZone, Utc};
use credit_account_rs::{
    Account, AccountConfig, AccountError, Direction, Money, Rate, SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn clock() -> SafeTimeProvider {
    SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    ))
}

fn config() -> AccountConfig {
    AccountConfig::new(Money::from_major(1_000), Rate::from_decimal(dec!(0.35)))
}

#[test]
fn full_cycle_with_partial_repayment() {
    let time = clock();
    let control = time.test_control().unwrap();
    let mut account = Account::open(config(), &time).unwrap();

    // day 1: 500 out, day 11: 200 back, day 21: 100 out
    account.withdraw(Money::from_major(500)).unwrap();
    control.advance(Duration::days(10));
    account.deposit(Money::from_major(200)).unwrap();
    control.advance(Duration::days(10));
    account.withdraw(Money::from_major(100)).unwrap();

    assert_eq!(account.balance(), Money::from_major(600));

    // (30 * 500 - 20 * 200 + 10 * 100) * 0.35 / 365 = 11.5068...
    assert_eq!(account.accrue_interest(), Money::from_str_exact("11.51").unwrap());

    let due = account.payment_due_query();
    assert_eq!(due.days_remaining, Some(9));
    assert_eq!(due.amount_owed, Money::from_major(400));
    assert_eq!(due.total_due, Money::from_str_exact("411.51").unwrap());
}

#[test]
fn interest_never_negative() {
    let time = clock();
    let control = time.test_control().unwrap();
    let mut account = Account::open(config(), &time).unwrap();

    let steps: [(i64, i64); 8] = [
        (-300, 0),
        (450, 3),
        (-50, 2),
        (1_000, 7),
        (-1_200, 1),
        (75, 6),
        (-10, 4),
        (900, 5),
    ];

    for (amount, gap) in steps {
        control.advance(Duration::days(gap));
        if amount < 0 {
            account.withdraw(Money::from_major(-amount)).unwrap();
        } else {
            account.deposit(Money::from_major(amount)).unwrap();
        }
        assert!(account.accrue_interest() >= Money::ZERO);
    }

    assert_eq!(account.transaction_log_view().count(), steps.len());
    assert_eq!(account.balance(), Money::from_major(1_865));
}

#[test]
fn log_keeps_growing_across_cycles() {
    let time = clock();
    let control = time.test_control().unwrap();
    let mut account = Account::open(config(), &time).unwrap();

    account.withdraw(Money::from_major(100)).unwrap();
    control.advance(Duration::days(29));
    account.withdraw(Money::from_major(100)).unwrap();
    control.advance(Duration::days(5));
    account.deposit(Money::from_major(50)).unwrap();

    // nothing is reset when a cycle closes
    let days: Vec<u32> = account.transaction_log_view().map(|e| e.day).collect();
    assert_eq!(days, vec![1, 0, 5]);
    assert_eq!(account.cycle_start_date(), time_start_date());
    assert_eq!(account.current_day_in_cycle(), 5);

    // (30 * 100 + 31 * 100 - 26 * 50) * 0.35 / 365 = 4.6027...
    assert_eq!(account.accrue_interest(), Money::from_str_exact("4.60").unwrap());
}

fn time_start_date() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn rejected_withdrawal_reports_balance_not_limit() {
    let time = clock();
    let mut account = Account::open(config(), &time).unwrap();

    account.withdraw(Money::from_major(900)).unwrap();
    let err = account.withdraw(Money::from_major(200)).unwrap_err();

    assert_eq!(
        err,
        AccountError::InsufficientCredit {
            available: Money::from_major(100),
            requested: Money::from_major(200),
        }
    );
    assert!(err.to_string().contains("more than remaining credit"));
    assert_eq!(account.transaction_log_view().count(), 1);
}

#[test]
fn account_from_json_config() {
    let time = clock();
    let config = AccountConfig::from_json_str(
        r#"{"credit_limit": "5000", "apr": "0.1999", "cycle_length_days": 30}"#,
    )
    .unwrap();

    let mut account = Account::builder().config(config).set_time(&time).build().unwrap();
    account.withdraw(Money::from_major(2_500)).unwrap();

    let log: Vec<_> = account.transaction_log_view().collect();
    assert_eq!(log[0].direction, Direction::Withdraw);
    assert_eq!(log[0].amount, Money::from_major(2_500));

    // 30 * 2500 * 0.1999 / 365 = 41.0753...
    assert_eq!(account.accrue_interest(), Money::from_str_exact("41.08").unwrap());
}

#[test]
fn invalid_config_is_rejected_at_open() {
    let time = clock();
    let mut bad = config();
    bad.cycle_length_days = 0;

    assert!(matches!(
        Account::open(bad, &time),
        Err(AccountError::InvalidConfiguration { .. })
    ));
}
