//! Left join of scored rent rows onto job counts, job scoring, and final ranking.

use std::collections::HashMap;

use serde::Serialize;

use crate::scoring::jobs::LocationKey;
use crate::scoring::normalize::normalize_city;
use crate::scoring::rent::ScoredRent;

/// Number of locations returned per request.
pub const TOP_N: usize = 5;

/// A rent row joined with its matching job count and all component scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationCandidate {
    /// Raw region name from the rent table (empty if missing).
    pub city: String,
    pub state: String,
    pub avg_rent: f64,
    pub rent_score: f64,
    pub job_count: u32,
    pub job_score: f64,
    pub total_score: f64,
}

/// Left-outer join: every scored rent row yields one candidate, with
/// `job_count = 0` when no posting matched its location.
pub fn join_job_counts(
    rents: &[ScoredRent<'_>],
    job_counts: &HashMap<LocationKey, u32>,
) -> Vec<LocationCandidate> {
    rents
        .iter()
        .map(|scored| {
            let record = scored.record;
            let key = (
                normalize_city(record.region_name.as_deref()),
                record.state.trim().to_string(),
            );
            LocationCandidate {
                city: record.region_name.clone().unwrap_or_default(),
                state: record.state.clone(),
                avg_rent: record.avg_rent,
                rent_score: scored.rent_score,
                job_count: job_counts.get(&key).copied().unwrap_or(0),
                job_score: 0.0,
                total_score: 0.0,
            }
        })
        .collect()
}

/// Sets `job_score = job_count / max_count`. With no matching postings anywhere
/// every row keeps 0.0; unlike rent, a zero spread here means "no signal".
pub fn score_jobs(candidates: &mut [LocationCandidate]) {
    let max_count = candidates.iter().map(|c| c.job_count).max().unwrap_or(0);
    for c in candidates.iter_mut() {
        c.job_score = if max_count > 0 {
            f64::from(c.job_count) / f64::from(max_count)
        } else {
            0.0
        };
    }
}

/// Weights, sorts descending by `total_score`, and keeps the first [`TOP_N`].
///
/// Scores are not clamped or re-normalized after weighting. The sort is stable, so
/// equal totals keep rent-table order; there is no secondary key.
pub fn rank(
    mut candidates: Vec<LocationCandidate>,
    rent_weight: f64,
    job_weight: f64,
) -> Vec<LocationCandidate> {
    for c in candidates.iter_mut() {
        c.total_score = rent_weight * c.rent_score + job_weight * c.job_score;
    }
    candidates.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    candidates.truncate(TOP_N);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RentRecord;

    fn candidate(city: &str, rent_score: f64, job_count: u32) -> LocationCandidate {
        LocationCandidate {
            city: city.to_string(),
            state: "ST".to_string(),
            avg_rent: 1000.0,
            rent_score,
            job_count,
            job_score: 0.0,
            total_score: 0.0,
        }
    }

    #[test]
    fn test_left_join_keeps_unmatched_rows() {
        let table = vec![
            RentRecord::new("Springfield City", "IL", 1200.0),
            RentRecord::new("Shelbyville", "IL", 1100.0),
            RentRecord {
                region_name: None,
                state: "IL".to_string(),
                avg_rent: 900.0,
            },
        ];
        let scored: Vec<ScoredRent> = table
            .iter()
            .map(|record| ScoredRent {
                record,
                rent_score: 0.5,
            })
            .collect();
        let counts = HashMap::from([(("Springfield".to_string(), "IL".to_string()), 4)]);

        let joined = join_job_counts(&scored, &counts);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined[0].job_count, 4);
        assert_eq!(joined[0].city, "Springfield City");
        assert_eq!(joined[1].job_count, 0);
        assert_eq!(joined[2].city, "");
        assert_eq!(joined[2].job_count, 0);
    }

    #[test]
    fn test_job_score_relative_to_max() {
        let mut rows = vec![candidate("A", 0.0, 3), candidate("B", 0.0, 0), candidate("C", 0.0, 6)];
        score_jobs(&mut rows);
        assert!((rows[0].job_score - 0.5).abs() < 1e-9);
        assert_eq!(rows[1].job_score, 0.0);
        assert_eq!(rows[2].job_score, 1.0);
    }

    #[test]
    fn test_no_jobs_anywhere_scores_zero() {
        let mut rows = vec![candidate("A", 1.0, 0), candidate("B", 0.2, 0)];
        score_jobs(&mut rows);
        assert!(rows.iter().all(|c| c.job_score == 0.0));
    }

    #[test]
    fn test_rank_orders_by_weighted_total() {
        let mut rows = vec![candidate("A", 1.0, 0), candidate("B", 0.0, 2), candidate("C", 0.5, 1)];
        score_jobs(&mut rows);
        let ranked = rank(rows, 0.3, 0.7);
        let order: Vec<&str> = ranked.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
        assert!((ranked[0].total_score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let rows: Vec<LocationCandidate> = ["A", "B", "C", "D"]
            .iter()
            .map(|c| candidate(c, 0.5, 0))
            .collect();
        let ranked = rank(rows, 0.5, 0.5);
        let order: Vec<&str> = ranked.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let rows: Vec<LocationCandidate> = (0..8)
            .map(|i| candidate(&format!("C{i}"), f64::from(i) / 10.0, 0))
            .collect();
        let ranked = rank(rows, 1.0, 0.0);
        assert_eq!(ranked.len(), TOP_N);
        assert_eq!(ranked[0].city, "C7");
    }

    #[test]
    fn test_weights_not_renormalized() {
        let mut rows = vec![candidate("A", 1.0, 2)];
        score_jobs(&mut rows);
        let ranked = rank(rows, 1.0, 1.0);
        assert_eq!(ranked[0].total_score, 2.0);
    }
}
