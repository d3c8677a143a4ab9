//! moneyminder HTTP Server
//!
//! Axum-based server providing the advice REST API and serving the
//! compiled Leptos frontend.

mod config;
mod handlers;
mod routes;
mod state;

use finance_advisor::{ReportGenerator, TokioDelay};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    if !config.static_dir.is_dir() {
        tracing::warn!("⚠ Static directory {} not found - frontend disabled", config.static_dir.display());
        tracing::warn!("  Build it with: trunk build --release -d static");
    }

    let generator = ReportGenerator::new(TokioDelay, config.generation_delay);
    let state = AppState::new(generator);
    let app = routes::router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 moneyminder server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                              - Health check");
    tracing::info!("  GET  /api                                 - Welcome message");
    tracing::info!("  POST /api/generate-advice                 - Full report (JSON)");
    tracing::info!("  POST /api/generate-advice/summary         - Report as plain text");
    tracing::info!("  GET  /api/investment-options/{{risk_level}} - Suggestions for a tier");
    tracing::info!("");
    tracing::info!("Generation delay: {} ms", config.generation_delay.as_millis());

    axum::serve(listener, app).await?;

    Ok(())
}
