/// billing cycle - the log is never reset, days keep wrapping modulo the cycle
use chrono::{Duration, TimeZone, Utc};
use credit_account_rs::{Account, Money, Rate, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let mut account = Account::builder()
        .credit_limit(Money::from_major(500))
        .apr(Rate::from_percentage(30))
        .set_time(&time)
        .build()?;

    for month in 1..=3 {
        account.withdraw(Money::from_major(50))?;
        controller.advance(Duration::days(30));
        println!(
            "after month {}: {} transactions, interest ${}",
            month,
            account.transactions().len(),
            account.accrue_interest()
        );
    }

    println!("\n{}", account.json());

    Ok(())
}
