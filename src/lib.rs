pub mod account;
pub mod config;
pub mod cycle;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod serialization;
pub mod types;

// re-export key types
pub use account::{Account, AccountBuilder};
pub use config::AccountConfig;
pub use cycle::BillingCycle;
pub use decimal::{Money, Rate};
pub use errors::{AccountError, Result};
pub use events::{Event, EventStore};
pub use interest::{InterestBreakdown, InterestCalculator};
pub use serialization::AccountView;
pub use types::{AccountId, Direction, LogEntry, PaymentDue, Transaction, WithdrawalReceipt};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
