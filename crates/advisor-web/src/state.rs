//! Advisor Page State
//!
//! One owned state handle for the whole advisor page, shared with child
//! components through context.

use std::time::Duration;

use finance_advisor::{
    AdviceInput, DEFAULT_LATENCY, Report, ReportGenerator, ReportView, RiskTier, can_generate,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::delay::BrowserDelay;

/// Wait before rebuilding charts that were hidden during the last render
const CHART_SETTLE_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Investments,
    Charts,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Investments, Self::Charts];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Investments => "Investments",
            Self::Charts => "Charts",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AdvisorState {
    pub income: RwSignal<String>,
    pub expenses: RwSignal<String>,
    pub risk_tier: RwSignal<RiskTier>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub report: RwSignal<Option<Report>>,
    pub tab: RwSignal<Tab>,

    /// Bumped to dispose and rebuild every chart widget
    pub chart_epoch: RwSignal<u32>,
}

impl AdvisorState {
    pub fn new() -> Self {
        Self {
            income: RwSignal::new(String::new()),
            expenses: RwSignal::new(String::new()),
            risk_tier: RwSignal::new(RiskTier::Low),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            report: RwSignal::new(None),
            tab: RwSignal::new(Tab::default()),
            chart_epoch: RwSignal::new(0),
        }
    }

    /// Generate button enabled: input parses, income positive, nothing in flight
    pub fn can_generate(&self) -> bool {
        !self.loading.get() && can_generate(&self.income.get(), &self.expenses.get())
    }

    pub fn view(&self) -> Option<ReportView> {
        self.report.with(|report| report.as_ref().map(ReportView::from_report))
    }

    pub fn set_income(&self, value: String) {
        self.income.set(value);
        self.error.set(None);
    }

    pub fn set_expenses(&self, value: String) {
        self.expenses.set(value);
        self.error.set(None);
    }

    pub fn set_risk_tier(&self, value: &str) {
        if let Ok(tier) = value.parse() {
            self.risk_tier.set(tier);
        }
        self.error.set(None);
    }

    pub fn switch_tab(self, tab: Tab) {
        self.tab.set(tab);

        // Charts were laid out while hidden; rebuild them once visible
        if tab == Tab::Charts {
            set_timeout(
                move || {
                    if self.report.with_untracked(Option::is_some) {
                        self.chart_epoch.update(|epoch| *epoch = epoch.wrapping_add(1));
                    }
                },
                CHART_SETTLE_DELAY,
            );
        }
    }

    /// Validate the form and start a generation
    pub fn generate(self) {
        if self.loading.get_untracked() {
            return;
        }

        let input = match AdviceInput::parse(
            &self.income.get_untracked(),
            &self.expenses.get_untracked(),
            self.risk_tier.get_untracked(),
        ) {
            Ok(input) => input,
            Err(err) => {
                self.error.set(Some(err.user_message()));
                return;
            }
        };

        self.loading.set(true);
        self.error.set(None);

        spawn_local(async move {
            let task = ReportGenerator::new(BrowserDelay, DEFAULT_LATENCY).spawn(input);

            match task.await {
                Ok(report) => {
                    self.report.set(Some(report));
                    self.chart_epoch.update(|epoch| *epoch = epoch.wrapping_add(1));
                    self.switch_tab(Tab::Overview);
                }
                Err(err) => {
                    leptos::logging::error!("Report generation failed: {err}");
                    self.error.set(Some(err.user_message()));
                }
            }

            self.loading.set(false);
        });
    }
}

impl Default for AdvisorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_enabled_only_for_valid_input() {
        let state = AdvisorState::new();
        assert!(!state.can_generate());

        state.set_income("1000".into());
        assert!(!state.can_generate());

        state.set_expenses("500".into());
        assert!(state.can_generate());

        state.loading.set(true);
        assert!(!state.can_generate());
    }

    #[test]
    fn test_editing_clears_error() {
        let state = AdvisorState::new();

        state.error.set(Some("bad".into()));
        state.set_income("12".into());
        assert_eq!(state.error.get_untracked(), None);

        state.error.set(Some("bad".into()));
        state.set_risk_tier("Bro Danger");
        assert_eq!(state.error.get_untracked(), None);
        assert_eq!(state.risk_tier.get_untracked(), RiskTier::HighRisk);
    }

    #[test]
    fn test_invalid_input_sets_error_without_report() {
        let state = AdvisorState::new();
        state.set_income("0".into());
        state.set_expenses("100".into());

        state.generate();

        assert_eq!(
            state.error.get_untracked().as_deref(),
            Some(finance_advisor::error::INVALID_INPUT_MESSAGE)
        );
        assert!(state.report.with_untracked(Option::is_none));
        assert!(!state.loading.get_untracked());
    }

    #[test]
    fn test_view_follows_report() {
        let state = AdvisorState::new();
        assert!(state.view().is_none());

        let input = AdviceInput::parse("1000", "500", RiskTier::Low).unwrap();
        state.report.set(Some(Report::build(&input)));
        assert_eq!(state.view().unwrap().savings, "$500");
    }
}
