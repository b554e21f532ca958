use rust_decimal::Decimal;

use crate::cycle::BillingCycle;
use crate::decimal::{Money, Rate};
use crate::interest::InterestBreakdown;
use crate::types::Transaction;

/// cycle-weighted interest over a transaction log
///
/// Each transaction is outstanding from its recording day through the end of
/// the cycle. A withdrawal on day `d` of a 30-day cycle accrues
/// `(31 - d) * amount * apr / 365`; deposits contribute the same weight with
/// the opposite sign, so repaying within the cycle offsets part of the
/// interest of the withdrawal it pays down.
#[derive(Debug, Clone, Copy)]
pub struct InterestCalculator {
    pub apr: Rate,
    pub cycle: BillingCycle,
    pub year_basis: u32,
}

impl InterestCalculator {
    pub fn new(apr: Rate, cycle: BillingCycle, year_basis: u32) -> Self {
        Self {
            apr,
            cycle,
            year_basis,
        }
    }

    /// unrounded signed contribution, positive for withdrawals
    pub fn contribution(&self, transaction: &Transaction) -> Decimal {
        let days = Decimal::from(self.cycle.accruable_days(transaction.day_in_cycle));
        -(days * transaction.signed_amount.as_decimal() * self.apr.as_decimal()
            / Decimal::from(self.year_basis))
    }

    pub fn breakdown(&self, transactions: &[Transaction]) -> InterestBreakdown {
        let contributions: Vec<Decimal> =
            transactions.iter().map(|t| self.contribution(t)).collect();
        let gross: Decimal = contributions.iter().copied().sum();

        let total = if gross < Decimal::ZERO {
            Money::ZERO
        } else {
            Money::from_decimal(gross).round_cents()
        };

        InterestBreakdown {
            gross,
            contributions,
            total,
        }
    }

    /// clamped at zero, rounded to cents
    pub fn total(&self, transactions: &[Transaction]) -> Money {
        self.breakdown(transactions).total
    }
}
