//! Report view-model
//!
//! Everything the advisor page displays for one report, already
//! formatted and colored.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::chart::{BarChart, PieChart};
use super::{format, palette};
use crate::model::{HISTORY_MONTHS, Investment, Report, RiskTier};

/// Upper bound of the risk score axis
pub const MAX_RISK_SCORE: Decimal = dec!(10);

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RiskBadge {
    pub label: &'static str,
    pub css_class: &'static str,
    pub color: &'static str,
}

impl From<RiskTier> for RiskBadge {
    fn from(tier: RiskTier) -> Self {
        Self {
            label: tier.label(),
            css_class: tier.css_class(),
            color: palette::tier_color(tier),
        }
    }
}

/// One investment suggestion card
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvestmentCard {
    pub name: &'static str,
    pub description: &'static str,
    pub border_color: &'static str,
    pub yield_text: String,
    pub risk_text: String,
    pub risk_color: &'static str,
}

impl InvestmentCard {
    pub fn new(index: usize, investment: &Investment) -> Self {
        Self {
            name: investment.name,
            description: investment.description,
            border_color: palette::cycle(index),
            yield_text: format::percent(investment.current_yield),
            risk_text: format!("{}/10", format::plain(investment.risk_score)),
            risk_color: palette::risk_score_color(investment.risk_score),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportView {
    // Overview tab
    pub income: String,
    pub expenses: String,
    pub savings: String,
    /// e.g. ` (50%)`
    pub savings_percent: String,
    pub essential: String,
    pub discretionary: String,
    pub savings_investments: String,
    pub pro_tip: &'static str,
    pub budget_pie: PieChart,

    // Investments tab
    pub badge: RiskBadge,
    pub rationale: &'static str,
    pub cards: Vec<InvestmentCard>,

    // Charts tab
    pub risk_chart: BarChart,
    pub yield_chart: BarChart,
    pub trend_chart: Option<BarChart>,
}

impl ReportView {
    pub fn from_report(report: &Report) -> Self {
        Self {
            income: format::currency(report.income),
            expenses: format::currency(report.expenses),
            savings: format::currency(report.savings),
            savings_percent: format!(" ({})", format::percent(report.savings_percent)),
            essential: format::currency(report.essential_expenses),
            discretionary: format::currency(report.discretionary_spending),
            savings_investments: format::currency(report.savings_investments),
            pro_tip: report.pro_tip,
            budget_pie: budget_pie(report),
            badge: report.risk_level.into(),
            rationale: report.investment_rationale,
            cards: report
                .investments
                .iter()
                .enumerate()
                .map(|(i, inv)| InvestmentCard::new(i, inv))
                .collect(),
            risk_chart: risk_chart(&report.investments),
            yield_chart: yield_chart(&report.investments),
            trend_chart: report.investments.first().map(trend_chart),
        }
    }
}

fn budget_pie(report: &Report) -> PieChart {
    PieChart::new(
        &[
            ("Essential", report.essential_expenses),
            ("Discretionary", report.discretionary_spending),
            ("Savings", report.savings_investments),
        ],
        &palette::PALETTE,
    )
}

fn risk_chart(investments: &[Investment]) -> BarChart {
    BarChart::new(
        "Risk Comparison",
        "Risk Score",
        palette::RISK_BAR,
        investments.iter().map(|i| (i.name.to_string(), i.risk_score)),
        "",
    )
    .with_max(MAX_RISK_SCORE)
}

fn yield_chart(investments: &[Investment]) -> BarChart {
    BarChart::new(
        "Yield Comparison",
        "Current Yield %",
        palette::YIELD_BAR,
        investments.iter().map(|i| (i.name.to_string(), i.current_yield)),
        "%",
    )
}

fn trend_chart(investment: &Investment) -> BarChart {
    BarChart::new(
        format!("6-Month Yield Trend: {}", investment.name),
        "Yield %",
        palette::PALETTE[0],
        HISTORY_MONTHS
            .iter()
            .zip(investment.historical_data)
            .map(|(month, value)| ((*month).to_string(), value)),
        "%",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::AdviceInput;
    use pretty_assertions::assert_eq;

    fn view(income: Decimal, expenses: Decimal, tier: RiskTier) -> ReportView {
        let input = AdviceInput::new(income, expenses, tier).unwrap();
        ReportView::from_report(&Report::build(&input))
    }

    #[test]
    fn test_headline_figures() {
        let v = view(dec!(5250), dec!(3000), RiskTier::Low);
        assert_eq!(v.income, "$5,250");
        assert_eq!(v.expenses, "$3,000");
        assert_eq!(v.savings, "$2,250");
        assert_eq!(v.savings_percent, " (42.9%)");
        assert_eq!(v.essential, "$2,625");
        assert_eq!(v.discretionary, "$1,575");
        assert_eq!(v.savings_investments, "$1,050");
    }

    #[test]
    fn test_badge_colors() {
        assert_eq!(view(dec!(1), dec!(0), RiskTier::Low).badge.color, "#4CAF50");
        assert_eq!(view(dec!(1), dec!(0), RiskTier::Medium).badge.color, "#2196F3");

        let high = view(dec!(1), dec!(0), RiskTier::HighRisk).badge;
        assert_eq!(
            high,
            RiskBadge {
                label: "Bro Danger",
                css_class: "high",
                color: "#F44336",
            }
        );
    }

    #[test]
    fn test_cards() {
        let v = view(dec!(1000), dec!(500), RiskTier::Low);
        assert_eq!(v.cards.len(), 3);

        let first = &v.cards[0];
        assert_eq!(first.border_color, "#0088FE");
        assert_eq!(first.yield_text, "4.2%");
        assert_eq!(first.risk_text, "1.2/10");
        assert_eq!(first.risk_color, "#4CAF50");
        assert_eq!(v.cards[2].border_color, "#FFBB28");

        let medium = view(dec!(1000), dec!(500), RiskTier::Medium);
        assert_eq!(medium.cards[0].risk_color, "#2196F3");

        let high = view(dec!(1000), dec!(500), RiskTier::HighRisk);
        assert_eq!(high.cards[1].yield_text, "14%");
        assert_eq!(high.cards[1].risk_color, "#F44336");
    }

    #[test]
    fn test_charts() {
        let v = view(dec!(1000), dec!(500), RiskTier::HighRisk);

        assert_eq!(v.risk_chart.axis_max(), dec!(10));
        assert_eq!(v.risk_chart.bars.len(), 3);
        assert_eq!(v.yield_chart.bars[2].value, dec!(18.5));

        let trend = v.trend_chart.unwrap();
        assert_eq!(trend.title, "6-Month Yield Trend: Emerging Tech ETF");
        assert_eq!(trend.bars.len(), 6);
        assert_eq!(trend.bars[0].label, "Jan");
        assert_eq!(trend.bars[5].tooltip, "Yield %: 12.5%");
        assert_eq!(trend.color, "#0088FE");
    }

    #[test]
    fn test_pie_follows_split() {
        let v = view(dec!(1000), dec!(950), RiskTier::Medium);
        let labels: Vec<_> = v.budget_pie.slices.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Essential", "Discretionary", "Savings"]);
        assert_eq!(v.budget_pie.total(), dec!(1000));
    }
}
