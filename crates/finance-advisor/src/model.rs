//! Domain Models
//!
//! Core data types for the budget report.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::AdvisorError;
use crate::validation::AdviceInput;

/// Months covered by `Investment::historical_data`
pub const HISTORY_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Share of income for essentials in the 50/30/20 rule
pub const ESSENTIAL_SHARE: Decimal = dec!(0.5);
pub const DISCRETIONARY_SHARE: Decimal = dec!(0.3);
pub const SAVINGS_SHARE: Decimal = dec!(0.2);

/// Investment risk tolerance chosen by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    #[serde(rename = "Bro Danger", alias = "HighRisk")]
    HighRisk,
}

impl RiskTier {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::HighRisk];

    /// Label shown in the selector and badge
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::HighRisk => "Bro Danger",
        }
    }

    /// CSS modifier for the risk badge
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::HighRisk => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskTier {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "brodanger" | "highrisk" | "high" => Ok(Self::HighRisk),
            _ => Err(AdvisorError::UnknownRiskTier(s.to_string())),
        }
    }
}

/// A canned investment suggestion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Investment {
    pub name: &'static str,

    /// Current yield in percent
    pub current_yield: Decimal,

    /// 0 (safest) to 10 (riskiest)
    pub risk_score: Decimal,

    pub description: &'static str,

    /// Monthly yield, Jan through Jun
    pub historical_data: [Decimal; 6],
}

/// Monthly budget report
///
/// Built fresh on every generate action and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    // Basic financial data
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
    pub savings_percent: Decimal,

    // Budget breakdown (50/30/20 of income, independent of actual expenses)
    pub essential_expenses: Decimal,
    pub discretionary_spending: Decimal,
    pub savings_investments: Decimal,

    // Investment advice
    pub risk_level: RiskTier,
    pub investments: Vec<Investment>,
    pub investment_rationale: &'static str,

    pub pro_tip: &'static str,
}

impl Report {
    /// Compute the report for validated input
    pub fn build(input: &AdviceInput) -> Self {
        let income = input.income();
        let expenses = input.expenses();
        let tier = input.risk_tier();

        let savings = income - expenses;
        let savings_percent = savings_percent(savings, income);

        Self {
            income,
            expenses,
            savings,
            savings_percent,
            essential_expenses: income * ESSENTIAL_SHARE,
            discretionary_spending: income * DISCRETIONARY_SHARE,
            savings_investments: income * SAVINGS_SHARE,
            risk_level: tier,
            investments: catalog::investments_for(tier).to_vec(),
            investment_rationale: catalog::rationale_for(tier),
            pro_tip: catalog::pro_tip_for(tier, savings_percent),
        }
    }

    /// Sum of the three budget buckets (always equals income)
    pub fn budget_total(&self) -> Decimal {
        self.essential_expenses + self.discretionary_spending + self.savings_investments
    }
}

/// `savings / income * 100`, one decimal place, halves away from zero
fn savings_percent(savings: Decimal, income: Decimal) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (savings / income * dec!(100)).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report(income: Decimal, expenses: Decimal, tier: RiskTier) -> Report {
        Report::build(&AdviceInput::new(income, expenses, tier).unwrap())
    }

    #[test]
    fn test_low_risk_scenario() {
        let r = report(dec!(1000), dec!(500), RiskTier::Low);

        assert_eq!(r.savings, dec!(500));
        assert_eq!(r.savings_percent, dec!(50.0));
        assert_eq!(r.essential_expenses, dec!(500));
        assert_eq!(r.discretionary_spending, dec!(300));
        assert_eq!(r.savings_investments, dec!(200));

        let first = &r.investments[0];
        assert_eq!(first.name, "Treasury Bonds (10-Year)");
        assert_eq!(first.current_yield, dec!(4.2));
        assert_eq!(first.risk_score, dec!(1.2));
    }

    #[test]
    fn test_budget_split_sums_to_income() {
        for income in [dec!(1), dec!(1234.56), dec!(0.07), dec!(98765.4321)] {
            let r = report(income, dec!(10), RiskTier::Medium);
            assert_eq!(r.budget_total(), income);
        }
    }

    #[test]
    fn test_extreme_accepted_amounts_build() {
        use crate::validation::{MAX_AMOUNT, MIN_INCOME};

        let r = report(MIN_INCOME, -MAX_AMOUNT, RiskTier::Low);
        assert_eq!(r.savings, MAX_AMOUNT + MIN_INCOME);
        assert_eq!(r.budget_total(), MIN_INCOME);

        let r = report(MAX_AMOUNT, -MAX_AMOUNT, RiskTier::HighRisk);
        assert_eq!(r.savings_percent, dec!(200.0));
    }

    #[test]
    fn test_out_of_range_input_never_builds() {
        for (income, expenses) in [
            ("79228162514264337593543950335", "-1"),
            ("1e-28", "-1"),
        ] {
            assert!(AdviceInput::parse(income, expenses, RiskTier::Low).is_err());
        }
    }

    #[test]
    fn test_split_ignores_actual_expenses() {
        let frugal = report(dec!(4000), dec!(100), RiskTier::Low);
        let lavish = report(dec!(4000), dec!(3900), RiskTier::Low);
        assert_eq!(frugal.essential_expenses, lavish.essential_expenses);
        assert_eq!(frugal.savings_investments, lavish.savings_investments);
    }

    #[test]
    fn test_negative_savings_allowed() {
        let r = report(dec!(1000), dec!(1500), RiskTier::Medium);
        assert_eq!(r.savings, dec!(-500));
        assert_eq!(r.savings_percent, dec!(-50.0));
    }

    #[test]
    fn test_savings_percent_rounds_to_one_decimal() {
        let r = report(dec!(3), dec!(2), RiskTier::Low);
        assert_eq!(r.savings_percent, dec!(33.3));

        let r = report(dec!(3), dec!(1), RiskTier::Low);
        assert_eq!(r.savings_percent, dec!(66.7));

        // 0.05% sits on the midpoint
        let r = report(dec!(2000), dec!(1999), RiskTier::Low);
        assert_eq!(r.savings_percent, dec!(0.1));
    }

    #[test]
    fn test_generic_tip_takes_precedence() {
        for tier in RiskTier::ALL {
            let r = report(dec!(1000), dec!(950), tier);
            assert_eq!(r.savings_percent, dec!(5.0));
            assert_eq!(r.pro_tip, catalog::SAVINGS_RATE_TIP);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = report(dec!(5200), dec!(3100.25), RiskTier::HighRisk);
        let b = report(dec!(5200), dec!(3100.25), RiskTier::HighRisk);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_every_tier_has_three_investments_with_six_months() {
        for tier in RiskTier::ALL {
            let r = report(dec!(1000), dec!(100), tier);
            assert_eq!(r.investments.len(), 3);
            for inv in &r.investments {
                assert_eq!(inv.historical_data.len(), HISTORY_MONTHS.len());
                assert!(inv.risk_score >= Decimal::ZERO && inv.risk_score <= dec!(10));
            }
        }
    }

    #[test]
    fn test_risk_tier_parsing() {
        assert_eq!("Low".parse::<RiskTier>().unwrap(), RiskTier::Low);
        assert_eq!("medium".parse::<RiskTier>().unwrap(), RiskTier::Medium);
        assert_eq!("Bro Danger".parse::<RiskTier>().unwrap(), RiskTier::HighRisk);
        assert_eq!("HighRisk".parse::<RiskTier>().unwrap(), RiskTier::HighRisk);
        assert!(matches!(
            "Extreme".parse::<RiskTier>(),
            Err(AdvisorError::UnknownRiskTier(_))
        ));
    }

    #[test]
    fn test_report_wire_format() {
        let r = report(dec!(1000), dec!(500), RiskTier::HighRisk);
        let json = serde_json::to_value(&r).unwrap();

        assert_eq!(json["risk_level"], "Bro Danger");
        assert_eq!(json["income"], 1000.0);
        assert_eq!(json["savings_percent"], 50.0);
        assert_eq!(json["investments"][0]["name"], "Emerging Tech ETF");
        assert_eq!(json["investments"][0]["historical_data"][5], 12.5);
    }
}
