//! Location Scorer: ranks rent regions by budget fit and matching job volume.
//!
//! Pipeline, one pass per call, no state kept between calls:
//! 1. Aggregate postings whose title contains the query, keyed by (normalized city, state)
//! 2. Window rent rows to `budget ± threshold`, falling back to the full table under 10 rows
//! 3. Score rent proximity, left-join job counts, score job volume
//! 4. Weight, stable-sort, keep the top 5
//!
//! Pure and CPU-bound: HTTP callers run it inside `tokio::task::spawn_blocking`.

pub mod jobs;
pub mod normalize;
pub mod ranker;
pub mod rent;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::data::DataContext;

use ranker::LocationCandidate;

pub const DEFAULT_RENT_WEIGHT: f64 = 0.5;
pub const DEFAULT_JOB_WEIGHT: f64 = 0.5;
pub const DEFAULT_BUDGET_THRESHOLD: f64 = 0.3;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Query parameters for a single recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendParams {
    pub rent_budget: f64,
    pub job_title: String,
    pub rent_weight: f64,
    pub job_weight: f64,
    pub budget_threshold: f64,
}

impl RecommendParams {
    /// Params with the default weights (0.5 / 0.5) and a ±30% budget window.
    pub fn new(rent_budget: f64, job_title: impl Into<String>) -> Self {
        Self {
            rent_budget,
            job_title: job_title.into(),
            rent_weight: DEFAULT_RENT_WEIGHT,
            job_weight: DEFAULT_JOB_WEIGHT,
            budget_threshold: DEFAULT_BUDGET_THRESHOLD,
        }
    }

    /// Rejects values that would make the scores meaningless:
    /// budget must be positive, weights within [0, 1], threshold within (0, 1).
    pub fn validate(&self) -> Result<(), ScoringError> {
        if !self.rent_budget.is_finite() || self.rent_budget <= 0.0 {
            return Err(invalid("rent_budget", "must be a positive number", self.rent_budget));
        }
        for (name, w) in [("rent_weight", self.rent_weight), ("job_weight", self.job_weight)] {
            if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                return Err(invalid(name, "must be between 0 and 1", w));
            }
        }
        let t = self.budget_threshold;
        if !t.is_finite() || t <= 0.0 || t >= 1.0 {
            return Err(invalid(
                "budget_threshold",
                "must be strictly between 0 and 1",
                t,
            ));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, rule: &str, got: f64) -> ScoringError {
    ScoringError::InvalidParameter {
        name,
        reason: format!("{rule} (got {got})"),
    }
}

/// A ranked location as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub city: String,
    pub state: String,
    pub avg_rent: f64,
    pub job_count: u32,
    pub total_score: f64,
}

impl From<LocationCandidate> for Recommendation {
    fn from(c: LocationCandidate) -> Self {
        Self {
            city: c.city,
            state: c.state,
            avg_rent: c.avg_rent,
            job_count: c.job_count,
            total_score: c.total_score,
        }
    }
}

/// Returns up to [`ranker::TOP_N`] locations ranked by weighted rent fit and job volume.
/// An empty list means nothing matched; it is not an error.
pub fn recommend(
    data: &DataContext,
    params: &RecommendParams,
) -> Result<Vec<Recommendation>, ScoringError> {
    Ok(score_candidates(data, params)?
        .into_iter()
        .map(Recommendation::from)
        .collect())
}

/// Same pipeline as [`recommend`] but keeps the component scores.
pub fn score_candidates(
    data: &DataContext,
    params: &RecommendParams,
) -> Result<Vec<LocationCandidate>, ScoringError> {
    params.validate()?;

    let job_counts = jobs::aggregate_job_counts(&data.jobs, &params.job_title);

    let windowed = rent::window_rents(&data.rents, params.rent_budget, params.budget_threshold);
    debug!(
        windowed = windowed.len(),
        locations_with_jobs = job_counts.len(),
        "Scoring locations"
    );
    let retained = rent::apply_fallback(windowed, &data.rents);
    let scored_rents = rent::score_rents(&retained, params.rent_budget);

    let mut candidates = ranker::join_job_counts(&scored_rents, &job_counts);
    ranker::score_jobs(&mut candidates);

    Ok(ranker::rank(candidates, params.rent_weight, params.job_weight))
}
