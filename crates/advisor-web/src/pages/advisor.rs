//! Advisor Page

use finance_advisor::{ReportView, RiskTier};
use leptos::prelude::*;

use crate::charts::{BarChartView, PieChartView};
use crate::components::{InvestmentCardView, RiskBadgeView, StatCard, TabBar};
use crate::state::{AdvisorState, Tab};

#[component]
pub fn AdvisorPage() -> impl IntoView {
    let state = AdvisorState::new();
    provide_context(state);

    view! {
        <div class="advisor">
            <aside class="sidebar">
                <h2>"Your finances"</h2>
                <AdviceForm />
            </aside>

            <section class="report-area">
                <Show
                    when=move || state.report.with(Option::is_some)
                    fallback=|| view! {
                        <div class="welcome-message">
                            <h2>"Welcome to your finance copilot"</h2>
                            <p>"Enter your monthly income and expenses to get a personalised report."</p>
                        </div>
                    }
                >
                    <ReportPanel />
                </Show>
            </section>
        </div>
    }
}

#[component]
fn AdviceForm() -> impl IntoView {
    let state = expect_context::<AdvisorState>();

    view! {
        <div class="advice-form">
            <div class="field">
                <label for="income">"Monthly income ($)"</label>
                <input
                    id="income"
                    type="number"
                    min="0"
                    placeholder="e.g. 3000"
                    prop:value=move || state.income.get()
                    on:input=move |ev| state.set_income(event_target_value(&ev))
                />
            </div>

            <div class="field">
                <label for="expenses">"Monthly expenses ($)"</label>
                <input
                    id="expenses"
                    type="number"
                    min="0"
                    placeholder="e.g. 2000"
                    prop:value=move || state.expenses.get()
                    on:input=move |ev| state.set_expenses(event_target_value(&ev))
                />
            </div>

            <div class="field">
                <label for="risk-level">"Risk tolerance"</label>
                <select
                    id="risk-level"
                    prop:value=move || state.risk_tier.get().label()
                    on:change=move |ev| state.set_risk_tier(&event_target_value(&ev))
                >
                    {RiskTier::ALL
                        .into_iter()
                        .map(|tier| view! { <option value=tier.label()>{tier.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <button
                class="btn btn-primary generate"
                disabled=move || !state.can_generate()
                on:click=move |_| state.generate()
            >
                {move || {
                    if state.loading.get() {
                        "Generating Advice..."
                    } else {
                        "Generate Financial Advice"
                    }
                }}
            </button>

            <Show when=move || state.error.with(Option::is_some)>
                <p class="error-message">{move || state.error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
fn ReportPanel() -> impl IntoView {
    let state = expect_context::<AdvisorState>();

    view! {
        <div class="report-container">
            <TabBar />
            {move || {
                state
                    .view()
                    .map(|report| match state.tab.get() {
                        Tab::Overview => view! { <OverviewTab report=report /> }.into_any(),
                        Tab::Investments => view! { <InvestmentsTab report=report /> }.into_any(),
                        Tab::Charts => view! { <ChartsTab report=report /> }.into_any(),
                    })
            }}
        </div>
    }
}

#[component]
fn OverviewTab(report: ReportView) -> impl IntoView {
    let state = expect_context::<AdvisorState>();
    let pie = report.budget_pie.clone();

    view! {
        <div class="tab-content overview">
            <div class="stats">
                <StatCard label="Monthly Income" value=report.income />
                <StatCard label="Monthly Expenses" value=report.expenses />
                <StatCard label="Savings" value=report.savings suffix=report.savings_percent />
            </div>

            <div class="budget">
                <h3>"Recommended Budget (50/30/20)"</h3>
                <ul class="budget-lines">
                    <li>"Essential: " {report.essential}</li>
                    <li>"Discretionary: " {report.discretionary}</li>
                    <li>"Savings & Investments: " {report.savings_investments}</li>
                </ul>
                {move || {
                    // Rebuilt whenever the chart epoch changes
                    state.chart_epoch.track();
                    view! { <PieChartView chart=pie.clone() /> }
                }}
            </div>

            <div class="pro-tip">
                <h3>"💡 Pro Tip"</h3>
                <p>{report.pro_tip}</p>
            </div>
        </div>
    }
}

#[component]
fn InvestmentsTab(report: ReportView) -> impl IntoView {
    view! {
        <div class="tab-content investments">
            <div class="risk-header">
                <h3>"Risk Level"</h3>
                <RiskBadgeView badge=report.badge />
            </div>
            <p class="investment-rationale">{report.rationale}</p>
            <div class="investments-list">
                {report
                    .cards
                    .into_iter()
                    .map(|card| view! { <InvestmentCardView card=card /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ChartsTab(report: ReportView) -> impl IntoView {
    let state = expect_context::<AdvisorState>();

    view! {
        <div class="tab-content charts">
            {move || {
                state.chart_epoch.track();
                let trend = report.trend_chart.clone();
                view! {
                    <BarChartView chart=report.risk_chart.clone() />
                    <BarChartView chart=report.yield_chart.clone() />
                    {trend.map(|chart| view! { <BarChartView chart=chart /> })}
                }
            }}
        </div>
    }
}
