//! Input Validation
//!
//! Turns raw form text into an `AdviceInput` the generator can trust.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::{AdvisorError, Result};
use crate::model::RiskTier;

/// Largest accepted magnitude for income or expenses
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000_000);

/// Smallest accepted income (one cent)
pub const MIN_INCOME: Decimal = dec!(0.01);

/// Validated generator input: income is strictly positive
///
/// Both amounts are bounded so every report computation stays inside the
/// `Decimal` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AdviceInput {
    income: Decimal,
    expenses: Decimal,
    risk_tier: RiskTier,
}

impl AdviceInput {
    /// Validate already-numeric input
    ///
    /// Expenses may be zero, negative or larger than income.
    pub fn new(income: Decimal, expenses: Decimal, risk_tier: RiskTier) -> Result<Self> {
        if income < MIN_INCOME || income > MAX_AMOUNT || expenses.abs() > MAX_AMOUNT {
            return Err(AdvisorError::invalid_input());
        }

        Ok(Self {
            income,
            expenses,
            risk_tier,
        })
    }

    /// Validate the text of the income and expenses fields
    pub fn parse(income: &str, expenses: &str, risk_tier: RiskTier) -> Result<Self> {
        let income = parse_amount(income).ok_or_else(AdvisorError::invalid_input)?;
        let expenses = parse_amount(expenses).ok_or_else(AdvisorError::invalid_input)?;
        Self::new(income, expenses, risk_tier)
    }

    pub const fn income(&self) -> Decimal {
        self.income
    }

    pub const fn expenses(&self) -> Decimal {
        self.expenses
    }

    pub const fn risk_tier(&self) -> RiskTier {
        self.risk_tier
    }
}

/// Whether the generate control should be enabled for these field values
pub fn can_generate(income: &str, expenses: &str) -> bool {
    AdviceInput::parse(income, expenses, RiskTier::Low).is_ok()
}

/// Parse a form amount, accepting plain decimals and scientific notation
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
