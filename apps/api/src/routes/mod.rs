pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendations::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/recommendations",
            post(handlers::handle_recommendations),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::data::{DataContext, JobRecord, RentRecord};
    use crate::recommendations::handlers::LocationRecommendation;

    fn test_state() -> AppState {
        let data = DataContext::new(
            vec![
                RentRecord::new("Austin", "TX", 1800.0),
                RentRecord::new("Houston", "TX", 2200.0),
            ],
            vec![
                JobRecord::new("Austin, TX", "TX", "Software Engineer"),
                JobRecord::new("Austin", "TX", "Platform Engineer"),
            ],
        );
        AppState {
            data: Arc::new(data),
            config: Config {
                rent_data_path: "fixtures/avg_rent.csv".to_string(),
                jobs_data_path: "fixtures/jobs.csv".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                cors_allowed_origins: Vec::new(),
            },
        }
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/recommendations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["data"]["rent_path"], "fixtures/avg_rent.csv");
        assert_eq!(body["data"]["jobs_path"], "fixtures/jobs.csv");
        assert_eq!(body["data"]["rent_rows"], 2);
        assert_eq!(body["data"]["job_rows"], 2);
    }

    #[tokio::test]
    async fn test_recommendations_ranked() {
        let app = build_router(test_state());
        let response = app
            .oneshot(post_json(r#"{"rent_budget": 2000, "job_title": "engineer"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let recs: Vec<LocationRecommendation> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].city, "Austin");
        assert_eq!(recs[0].job_count, 2);
        assert_eq!(recs[0].score_percentage, "50.0%");
        assert!(recs[0].reason.starts_with("Austin"));
        assert_eq!(recs[1].city, "Houston");
        assert_eq!(recs[1].score_percentage, "0.0%");
    }

    #[tokio::test]
    async fn test_invalid_budget_is_400() {
        let app = build_router(test_state());
        let response = app
            .oneshot(post_json(r#"{"rent_budget": -5, "job_title": "engineer"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_empty_tables_give_empty_array() {
        let mut state = test_state();
        state.data = Arc::new(DataContext::default());
        let app = build_router(state);
        let response = app
            .oneshot(post_json(r#"{"rent_budget": 1000, "job_title": ""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }
}
