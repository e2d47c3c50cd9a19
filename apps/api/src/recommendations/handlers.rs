//! Axum route handlers for the Recommendations API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::recommendations::reasons::city_reason;
use crate::scoring::{
    recommend, RecommendParams, Recommendation, DEFAULT_BUDGET_THRESHOLD, DEFAULT_JOB_WEIGHT,
    DEFAULT_RENT_WEIGHT,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub rent_budget: f64,
    pub job_title: String,
    #[serde(default = "default_rent_weight")]
    pub rent_weight: f64,
    #[serde(default = "default_job_weight")]
    pub job_weight: f64,
    #[serde(default = "default_budget_threshold")]
    pub budget_threshold: f64,
}

fn default_rent_weight() -> f64 {
    DEFAULT_RENT_WEIGHT
}

fn default_job_weight() -> f64 {
    DEFAULT_JOB_WEIGHT
}

fn default_budget_threshold() -> f64 {
    DEFAULT_BUDGET_THRESHOLD
}

impl From<SearchRequest> for RecommendParams {
    fn from(req: SearchRequest) -> Self {
        let mut params = RecommendParams::new(req.rent_budget, req.job_title);
        params.rent_weight = req.rent_weight;
        params.job_weight = req.job_weight;
        params.budget_threshold = req.budget_threshold;
        params
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LocationRecommendation {
    pub city: String,
    pub state: String,
    pub avg_rent: f64,
    pub job_count: u32,
    pub score: f64,
    pub score_percentage: String,
    pub reason: String,
}

impl From<Recommendation> for LocationRecommendation {
    fn from(r: Recommendation) -> Self {
        let reason = city_reason(&r.city, &r.state).to_string();
        Self {
            score_percentage: format_percentage(r.total_score),
            score: r.total_score,
            reason,
            city: r.city,
            state: r.state,
            avg_rent: r.avg_rent,
            job_count: r.job_count,
        }
    }
}

fn format_percentage(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/recommendations
///
/// Ranks locations for a rent budget and job title. An empty array means
/// nothing matched; invalid parameters return 400.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<LocationRecommendation>>, AppError> {
    info!(
        "Recommendation request: budget={} title={:?}",
        request.rent_budget, request.job_title
    );

    let params = RecommendParams::from(request);
    params.validate()?;

    // Full scan of both tables is CPU-bound; keep it off the async executor.
    let data = Arc::clone(&state.data);
    let ranked = tokio::task::spawn_blocking(move || recommend(&data, &params))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in scoring: {e}"))
        })??;

    let response: Vec<LocationRecommendation> =
        ranked.into_iter().map(LocationRecommendation::from).collect();

    info!("Returning {} recommendations", response.len());
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_one_decimal() {
        assert_eq!(format_percentage(0.5), "50.0%");
        assert_eq!(format_percentage(0.12345), "12.3%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let req: SearchRequest =
            serde_json::from_str(r#"{"rent_budget": 1500, "job_title": "nurse"}"#).unwrap();
        let params = RecommendParams::from(req);
        assert_eq!(params, RecommendParams::new(1500.0, "nurse"));
    }

    #[test]
    fn test_response_carries_reason_and_percentage() {
        let rec = LocationRecommendation::from(Recommendation {
            city: "Denver".to_string(),
            state: "CO".to_string(),
            avg_rent: 1750.0,
            job_count: 12,
            total_score: 0.875,
        });
        assert_eq!(rec.score_percentage, "87.5%");
        assert!(rec.reason.starts_with("Denver"));
        assert_eq!(rec.job_count, 12);
    }
}
