//! Investment Catalog
//!
//! Static suggestions and advice text keyed by risk tier. Nothing here
//! depends on the user's income or expenses.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{Investment, RiskTier};

/// Tip used whenever the savings rate is below `LOW_SAVINGS_THRESHOLD`
pub const SAVINGS_RATE_TIP: &str =
    "Consider the 50/30/20 rule to increase your savings rate - your future self will thank you.";

/// Savings rate (percent) under which tier-specific tips are skipped
pub const LOW_SAVINGS_THRESHOLD: Decimal = dec!(10);

static LOW_RISK: [Investment; 3] = [
    Investment {
        name: "Treasury Bonds (10-Year)",
        current_yield: dec!(4.2),
        risk_score: dec!(1.2),
        description: "Government-backed bonds with very low risk profile",
        historical_data: [dec!(3.8), dec!(3.9), dec!(4.0), dec!(4.1), dec!(4.2), dec!(4.3)],
    },
    Investment {
        name: "High-Yield Savings Account",
        current_yield: dec!(4.5),
        risk_score: dec!(0.5),
        description: "FDIC-insured savings with competitive interest rates",
        historical_data: [dec!(3.5), dec!(3.8), dec!(4.0), dec!(4.2), dec!(4.5), dec!(4.5)],
    },
    Investment {
        name: "Short-Term Corporate Bonds ETF",
        current_yield: dec!(4.8),
        risk_score: dec!(2.1),
        description: "Diversified exposure to investment-grade corporate bonds",
        historical_data: [dec!(4.0), dec!(4.2), dec!(4.5), dec!(4.6), dec!(4.7), dec!(4.8)],
    },
];

static MEDIUM_RISK: [Investment; 3] = [
    Investment {
        name: "S&P 500 Index Fund",
        current_yield: dec!(1.7),
        risk_score: dec!(5.5),
        description: "Broad market exposure to large US companies",
        historical_data: [dec!(1.5), dec!(1.6), dec!(1.5), dec!(1.6), dec!(1.7), dec!(1.7)],
    },
    Investment {
        name: "Dividend Aristocrats ETF",
        current_yield: dec!(2.8),
        risk_score: dec!(4.2),
        description: "Companies with 25+ years of dividend increases",
        historical_data: [dec!(2.5), dec!(2.6), dec!(2.7), dec!(2.7), dec!(2.8), dec!(2.8)],
    },
    Investment {
        name: "Balanced 60/40 Fund",
        current_yield: dec!(3.2),
        risk_score: dec!(4.8),
        description: "Classic portfolio with 60% stocks and 40% bonds",
        historical_data: [dec!(2.8), dec!(2.9), dec!(3.0), dec!(3.1), dec!(3.2), dec!(3.2)],
    },
];

static HIGH_RISK: [Investment; 3] = [
    Investment {
        name: "Emerging Tech ETF",
        current_yield: dec!(12.5),
        risk_score: dec!(8.5),
        description: "High-growth potential in cutting-edge technologies",
        historical_data: [dec!(8.0), dec!(9.5), dec!(10.0), dec!(11.5), dec!(12.0), dec!(12.5)],
    },
    Investment {
        name: "Small Cap Growth Fund",
        current_yield: dec!(14.0),
        risk_score: dec!(8.9),
        description: "Aggressive growth through smaller companies",
        historical_data: [dec!(10.0), dec!(11.0), dec!(12.0), dec!(12.5), dec!(13.5), dec!(14.0)],
    },
    Investment {
        name: "Crypto-Adjacent Equities",
        current_yield: dec!(18.5),
        risk_score: dec!(9.7),
        description: "Companies with exposure to digital assets ecosystem",
        historical_data: [dec!(12.0), dec!(14.0), dec!(15.0), dec!(16.0), dec!(17.0), dec!(18.5)],
    },
];

/// The three suggestions for a tier
pub fn investments_for(tier: RiskTier) -> &'static [Investment; 3] {
    match tier {
        RiskTier::Low => &LOW_RISK,
        RiskTier::Medium => &MEDIUM_RISK,
        RiskTier::HighRisk => &HIGH_RISK,
    }
}

/// Untyped lookup by tier label; unknown labels yield no suggestions
pub fn lookup(label: &str) -> Vec<Investment> {
    label
        .parse::<RiskTier>()
        .map(|tier| investments_for(tier).to_vec())
        .unwrap_or_default()
}

pub const fn rationale_for(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => {
            "Focus on capital preservation with steady, modest returns and minimal volatility."
        }
        RiskTier::Medium => "Balance between growth and safety with moderate volatility tolerance.",
        RiskTier::HighRisk => {
            "Maximum growth potential with significant volatility. Not for the faint of heart!"
        }
    }
}

/// Pick the pro tip; a low savings rate overrides the tier advice
pub fn pro_tip_for(tier: RiskTier, savings_percent: Decimal) -> &'static str {
    if savings_percent < LOW_SAVINGS_THRESHOLD {
        return SAVINGS_RATE_TIP;
    }

    match tier {
        RiskTier::Low => {
            "Build an emergency fund covering 6 months of expenses before investing elsewhere."
        }
        RiskTier::Medium => "Consider dollar-cost averaging to reduce timing risk in the market.",
        RiskTier::HighRisk => {
            "Only allocate money you can afford to lose to high-risk investments. Diversify across sectors and geographies."
        }
    }
}
