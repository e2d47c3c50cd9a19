//! Budget windowing and rent-proximity scoring.

use tracing::debug;

use crate::data::RentRecord;

/// Below this many windowed rows the window is discarded and the full table used.
pub const MIN_WINDOW_ROWS: usize = 10;

/// A rent row retained for scoring, with its proximity score in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRent<'a> {
    pub record: &'a RentRecord,
    pub rent_score: f64,
}

/// Rows with `budget·(1−threshold) ≤ avg_rent ≤ budget·(1+threshold)`, in table order.
pub fn window_rents(rents: &[RentRecord], budget: f64, threshold: f64) -> Vec<&RentRecord> {
    let low = budget * (1.0 - threshold);
    let high = budget * (1.0 + threshold);
    rents
        .iter()
        .filter(|r| low <= r.avg_rent && r.avg_rent <= high)
        .collect()
}

/// Falls back to the whole table when the window is too small.
/// The reset is total: no progressively wider window is tried.
pub fn apply_fallback<'a>(windowed: Vec<&'a RentRecord>, all: &'a [RentRecord]) -> Vec<&'a RentRecord> {
    if windowed.len() < MIN_WINDOW_ROWS {
        debug!(
            windowed = windowed.len(),
            total = all.len(),
            "Budget window below {MIN_WINDOW_ROWS} rows, using full rent table"
        );
        all.iter().collect()
    } else {
        windowed
    }
}

/// Scores each row by closeness to `budget`: `1 − |rent − budget| / max_diff`.
/// The closest row scores highest and the farthest exactly 0. When every retained
/// rent equals the budget (`max_diff == 0`) all rows score 1.0.
pub fn score_rents<'a>(rows: &[&'a RentRecord], budget: f64) -> Vec<ScoredRent<'a>> {
    let max_diff = rows
        .iter()
        .map(|r| (r.avg_rent - budget).abs())
        .fold(0.0_f64, f64::max);

    rows.iter()
        .map(|&record| ScoredRent {
            record,
            rent_score: proximity_score((record.avg_rent - budget).abs(), max_diff),
        })
        .collect()
}

fn proximity_score(diff: f64, max_diff: f64) -> f64 {
    if max_diff > 0.0 {
        1.0 - diff / max_diff
    } else {
        1.0
    }
}
