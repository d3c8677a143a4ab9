//! # finance-advisor
//!
//! Monthly budget report generator with canned, risk-tiered investment
//! suggestions.
//!
//! ## Pipeline
//!
//! ```text
//! form text ──▶ AdviceInput::parse ──▶ ReportGenerator::generate ──▶ Report
//!                   (validation)          (latency + build)            │
//!                                                                      ▼
//!                                             ReportView / summary::render
//! ```
//!
//! ## Example: $1000 income, $500 expenses, Low risk
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Savings        $500 (50%)                   │
//! ├──────────────────────────────────────────────┤
//! │  Essential      ██████████  $500 (50%)       │
//! │  Discretionary  ██████      $300 (30%)       │
//! │  Savings        ████        $200 (20%)       │
//! ├──────────────────────────────────────────────┤
//! │  Treasury Bonds (10-Year)        4.2%  1.2/10 │
//! │  High-Yield Savings Account      4.5%  0.5/10 │
//! │  Short-Term Corporate Bonds ETF  4.8%  2.1/10 │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The 50/30/20 split is taken from income alone; actual expenses only
//! affect the savings figure.

pub mod catalog;
pub mod error;
pub mod generator;
pub mod model;
pub mod presentation;
pub mod summary;
pub mod validation;

pub use error::{AdvisorError, Result};
#[cfg(feature = "tokio")]
pub use generator::TokioDelay;
pub use generator::{DEFAULT_LATENCY, Delay, GenerationTask, NoDelay, ReportGenerator};
pub use model::{Investment, Report, RiskTier};
pub use presentation::ReportView;
pub use validation::{AdviceInput, can_generate};
