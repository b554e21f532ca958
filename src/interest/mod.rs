pub mod accrual;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

pub use accrual::InterestCalculator;

/// interest over a full transaction log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestBreakdown {
    /// raw signed sum before clamping and rounding
    pub gross: Decimal,
    /// per-transaction contributions, in log order
    pub contributions: Vec<Decimal>,
    /// amount reported to the customer
    pub total: Money,
}

impl InterestBreakdown {
    /// true when deposits outweighed withdrawals and the total was clamped
    pub fn was_clamped(&self) -> bool {
        self.gross < Decimal::ZERO
    }
}
