//! Plain-text report summary, for chat clients and terminals.

use crate::model::Report;

/// Render the report as a short multi-section message
pub fn render(report: &Report) -> String {
    let investments = report
        .investments
        .iter()
        .map(|inv| inv.name)
        .collect::<Vec<_>>()
        .join(", ");

    let mut s = String::new();
    s.push_str("💰 Savings Report:\n");
    s.push_str(&format!("- Monthly Income: ${:.2}\n", report.income));
    s.push_str(&format!("- Monthly Expenses: ${:.2}\n", report.expenses));
    s.push_str(&format!(
        "- Savings: ${:.2} ({:.1}% of Income)\n",
        report.savings, report.savings_percent
    ));
    s.push('\n');

    s.push_str("📊 Budget Breakdown:\n");
    s.push_str(&format!("- Essential Expenses (50%): ${:.2}\n", report.essential_expenses));
    s.push_str(&format!(
        "- Discretionary Spending (30%): ${:.2}\n",
        report.discretionary_spending
    ));
    s.push_str(&format!(
        "- Savings & Investments (20%): ${:.2}\n",
        report.savings_investments
    ));
    s.push('\n');

    s.push_str(&format!("📈 Investment Advice (Risk: {}):\n", report.risk_level));
    s.push_str(&format!("- Suggested investments: {investments}\n"));
    s.push_str(&format!("- Why? {}\n", report.investment_rationale));
    s.push('\n');

    s.push_str(&format!("💡 Pro Tip: {}", report.pro_tip));
    s
}
