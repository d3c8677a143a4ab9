//! Error Types for Finance Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Message shown inline whenever the form input is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid income and expense values.";

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Income/expenses missing, non-numeric, or income not positive
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown risk tier: {0}")]
    UnknownRiskTier(String),

    /// Generation task was aborted before it completed
    #[error("Report generation cancelled")]
    Cancelled,

    /// Generic failure branch for a real backend round trip
    #[error("Report generation failed: {0}")]
    Generation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdvisorError {
    pub fn invalid_input() -> Self {
        Self::Validation(INVALID_INPUT_MESSAGE.into())
    }

    /// Convert to the message displayed next to the form
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::UnknownRiskTier(tier) => {
                format!("Risk level must be one of: Low, Medium, Bro Danger (got '{tier}')")
            }
            Self::Cancelled => "Report generation was cancelled.".into(),
            Self::Generation(_) | Self::Serialization(_) => {
                "Error fetching financial advice. Please try again.".into()
            }
        }
    }

    /// Whether the user can fix this by editing the form
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownRiskTier(_))
    }
}
