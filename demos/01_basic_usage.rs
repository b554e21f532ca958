/// basic usage - open an account, draw, repay, check what is due
use credit_account_rs::{Account, Money, Rate, SafeTimeProvider, TimeSource};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let time = SafeTimeProvider::new(TimeSource::System);

    let mut account = Account::builder()
        .credit_limit(Money::from_major(1_000))
        .apr(Rate::from_decimal(dec!(0.35)))
        .set_time(&time)
        .build()?;

    let receipt = account.withdraw(Money::from_major(500))?;
    println!("You just withdrew ${}. You have ${} left in your account", receipt.amount, receipt.new_balance);

    match account.withdraw(Money::from_major(5_000)) {
        Ok(_) => println!("unexpected: overdraw accepted"),
        Err(e) => println!("rejected: {}", e),
    }

    let balance = account.deposit(Money::from_major(200))?;
    println!("You just paid $200. You now have ${} in your account", balance);

    for entry in account.transaction_log_view() {
        println!("{}", entry);
    }

    println!("{}", account.payment_due_query());

    Ok(())
}
