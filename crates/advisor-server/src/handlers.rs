//! HTTP Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finance_advisor::{AdviceInput, AdvisorError, Investment, Report, RiskTier, catalog, summary};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Body of the advice endpoints
#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    /// Monthly income in USD
    pub income: Decimal,
    /// Monthly expenses in USD
    pub expenses: Decimal,
    pub risk_level: String,
}

#[derive(Debug, Serialize)]
pub struct InvestmentOptionsResponse {
    pub risk_level: RiskTier,
    pub investments: &'static [Investment],
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Handlers
// ============================================================================

pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Moneyminder API",
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Generate a full report
pub async fn generate_advice(
    State(state): State<AppState>,
    Json(payload): Json<AdviceRequest>,
) -> Result<Json<Report>, ApiError> {
    let input = advice_input(&payload)?;
    let report = state.generator.generate(input).await.map_err(error_response)?;
    Ok(Json(report))
}

/// Generate a report and return it as chat-style plain text
pub async fn generate_summary(
    State(state): State<AppState>,
    Json(payload): Json<AdviceRequest>,
) -> Result<String, ApiError> {
    let input = advice_input(&payload)?;
    let report = state.generator.generate(input).await.map_err(error_response)?;
    Ok(summary::render(&report))
}

/// Suggested investments for a risk tier
pub async fn investment_options(
    Path(risk_level): Path<String>,
) -> Result<Json<InvestmentOptionsResponse>, ApiError> {
    let tier: RiskTier = risk_level.parse().map_err(error_response)?;

    Ok(Json(InvestmentOptionsResponse {
        risk_level: tier,
        investments: catalog::investments_for(tier),
    }))
}

// ============================================================================
// Helpers
// ============================================================================

fn advice_input(payload: &AdviceRequest) -> Result<AdviceInput, ApiError> {
    let tier: RiskTier = payload.risk_level.parse().map_err(error_response)?;
    AdviceInput::new(payload.income, payload.expenses, tier).map_err(error_response)
}

fn error_response(err: AdvisorError) -> ApiError {
    let (status, code) = match &err {
        AdvisorError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        AdvisorError::UnknownRiskTier(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_RISK_LEVEL"),
        AdvisorError::Cancelled => (StatusCode::SERVICE_UNAVAILABLE, "CANCELLED"),
        AdvisorError::Generation(_) | AdvisorError::Serialization(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "GENERATION_ERROR")
        }
    };

    if err.is_recoverable() {
        tracing::debug!("Rejected advice request: {}", err);
    } else {
        tracing::error!("Advice generation failed: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
        }),
    )
}
