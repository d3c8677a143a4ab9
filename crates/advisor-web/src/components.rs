//! UI Components

use finance_advisor::presentation::{InvestmentCard, RiskBadge};
use leptos::prelude::*;

use crate::state::{AdvisorState, Tab};

/// Headline figure on the overview tab
#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    #[prop(optional, into)] suffix: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{label}</p>
            <p class="stat-value">
                {value}
                <span class="stat-suffix">{suffix}</span>
            </p>
        </div>
    }
}

#[component]
pub fn RiskBadgeView(badge: RiskBadge) -> impl IntoView {
    let class = format!("risk-badge {}", badge.css_class);

    view! {
        <span class=class style=format!("background-color: {}", badge.color)>
            {badge.label}
        </span>
    }
}

#[component]
pub fn InvestmentCardView(card: InvestmentCard) -> impl IntoView {
    view! {
        <div class="investment-card" style=format!("border-color: {}", card.border_color)>
            <h3>{card.name}</h3>
            <div class="investment-metrics">
                <div class="investment-metric">
                    <p class="metric-label">"Current Yield"</p>
                    <p class="metric-value yield">{card.yield_text}</p>
                </div>
                <div class="investment-metric">
                    <p class="metric-label">"Risk Score"</p>
                    <p class="metric-value risk" style=format!("color: {}", card.risk_color)>
                        {card.risk_text}
                    </p>
                </div>
            </div>
            <p class="investment-description">{card.description}</p>
        </div>
    }
}

/// Overview / Investments / Charts switcher
#[component]
pub fn TabBar() -> impl IntoView {
    let state = expect_context::<AdvisorState>();

    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab"
                            class:active=move || state.tab.get() == tab
                            on:click=move |_| state.switch_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
