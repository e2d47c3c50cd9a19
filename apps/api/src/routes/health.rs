use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health, GET /api/health
/// Returns service status plus the datasets the scorer is serving from.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "locator-api",
        "data": {
            "rent_path": state.config.rent_data_path,
            "jobs_path": state.config.jobs_data_path,
            "rent_rows": state.data.rents.len(),
            "job_rows": state.data.jobs.len(),
        }
    }))
}
