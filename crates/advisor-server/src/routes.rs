//! Router

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    generate_advice, generate_summary, health_check, investment_options, welcome,
};
use crate::state::AppState;

pub fn router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api", get(welcome))
        .route("/api/generate-advice", post(generate_advice))
        .route("/api/generate-advice/summary", post(generate_summary))
        .route("/api/investment-options/{risk_level}", get(investment_options))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use finance_advisor::{ReportGenerator, TokioDelay};
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        let generator = ReportGenerator::new(TokioDelay, Duration::ZERO);
        router(AppState::new(generator), Path::new("static"))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_generate_advice() {
        let (status, body) = send(post_json(
            "/api/generate-advice",
            &json!({"income": 1000, "expenses": 500, "risk_level": "Low"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["savings"], 500.0);
        assert_eq!(json["savings_percent"], 50.0);
        assert_eq!(json["essential_expenses"], 500.0);
        assert_eq!(json["investments"][0]["name"], "Treasury Bonds (10-Year)");
        assert_eq!(json["investments"][0]["risk_score"], 1.2);
    }

    #[tokio::test]
    async fn test_generate_advice_rejects_zero_income() {
        let (status, body) = send(post_json(
            "/api/generate-advice",
            &json!({"income": 0, "expenses": 500, "risk_level": "Low"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"], "Please enter valid income and expense values.");
    }

    #[tokio::test]
    async fn test_generate_advice_rejects_out_of_range_amounts() {
        for body in [
            json!({"income": 1e20, "expenses": -1, "risk_level": "Low"}),
            json!({"income": 1e-20, "expenses": -1, "risk_level": "Low"}),
            json!({"income": 1000, "expenses": -1e20, "risk_level": "Low"}),
        ] {
            let (status, body) = send(post_json("/api/generate-advice", &body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);

            let json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_generate_advice_rejects_unknown_tier() {
        let (status, body) = send(post_json(
            "/api/generate-advice",
            &json!({"income": 1000, "expenses": 500, "risk_level": "YOLO"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "UNKNOWN_RISK_LEVEL");
    }

    #[tokio::test]
    async fn test_summary_is_plain_text() {
        let (status, body) = send(post_json(
            "/api/generate-advice/summary",
            &json!({"income": 1000, "expenses": 950, "risk_level": "Bro Danger"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);

        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("(Risk: Bro Danger)"));
        assert!(text.contains("50/30/20 rule"));
    }

    #[tokio::test]
    async fn test_investment_options() {
        let (status, body) = send(
            Request::get("/api/investment-options/Medium")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["risk_level"], "Medium");
        assert_eq!(json["investments"].as_array().unwrap().len(), 3);
        assert_eq!(json["investments"][0]["historical_data"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_investment_options_unknown_tier() {
        let (status, _) = send(
            Request::get("/api/investment-options/Extreme")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
