//! Presentation Layer
//!
//! Pure view-models for rendering a `Report`. No DOM access here; the
//! web crate binds these to elements and SVG.

pub mod chart;
pub mod format;
mod view;

pub use chart::{Bar, BarChart, PieChart, PieSlice};
pub use view::{InvestmentCard, MAX_RISK_SCORE, ReportView, RiskBadge};

/// Colors shared by every chart and card
pub mod palette {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::model::RiskTier;

    /// Card borders and pie slices cycle through these
    pub const PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

    pub const GREEN: &str = "#4CAF50";
    pub const BLUE: &str = "#2196F3";
    pub const RED: &str = "#F44336";

    pub const RISK_BAR: &str = "#8884d8";
    pub const YIELD_BAR: &str = "#82ca9d";

    pub const fn cycle(index: usize) -> &'static str {
        PALETTE[index % PALETTE.len()]
    }

    pub const fn tier_color(tier: RiskTier) -> &'static str {
        match tier {
            RiskTier::Low => GREEN,
            RiskTier::Medium => BLUE,
            RiskTier::HighRisk => RED,
        }
    }

    /// Below 3 is green, below 7 blue, anything else red
    pub fn risk_score_color(score: Decimal) -> &'static str {
        if score < dec!(3) {
            GREEN
        } else if score < dec!(7) {
            BLUE
        } else {
            RED
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_cycle_wraps() {
            assert_eq!(cycle(0), "#0088FE");
            assert_eq!(cycle(4), "#0088FE");
            assert_eq!(cycle(7), "#FF8042");
        }

        #[test]
        fn test_risk_thresholds() {
            assert_eq!(risk_score_color(dec!(2.9)), GREEN);
            assert_eq!(risk_score_color(dec!(3)), BLUE);
            assert_eq!(risk_score_color(dec!(6.99)), BLUE);
            assert_eq!(risk_score_color(dec!(7)), RED);
        }
    }
}
