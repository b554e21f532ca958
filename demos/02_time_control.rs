/// time control - deterministic billing cycle with a controlled clock
use chrono::{Duration, TimeZone, Utc};
use credit_account_rs::{Account, AccountConfig, Money, Rate, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    // create controlled time for testing
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let config = AccountConfig::new(Money::from_major(2_000), Rate::from_percentage(24));
    let mut account = Account::open(config, &time)?;
    println!("cycle starts: {}", account.cycle_start_date());

    // day 1
    account.withdraw(Money::from_major(1_200))?;
    println!("day {}: drew $1,200, interest so far ${}", account.current_day_in_cycle(), account.accrue_interest());

    // day 16
    controller.advance(Duration::days(15));
    account.deposit(Money::from_major(700))?;
    println!("day {}: repaid $700, interest so far ${}", account.current_day_in_cycle(), account.accrue_interest());

    // closing day of the cycle
    controller.advance(Duration::days(14));
    let due = account.payment_due_query();
    println!("\n{}", due);
    println!("due now: {}", due.is_due_now());

    let breakdown = account.interest_breakdown();
    for (entry, contribution) in account.transaction_log_view().zip(&breakdown.contributions) {
        println!("  {} -> {:.4}", entry, contribution);
    }

    Ok(())
}
