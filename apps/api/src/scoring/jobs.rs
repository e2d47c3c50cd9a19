use std::collections::HashMap;

use crate::data::JobRecord;
use crate::scoring::normalize::normalize_city;

/// Join key shared by both tables: (normalized city, trimmed state).
pub type LocationKey = (String, String);

/// Counts postings whose title contains `title_query` (case-insensitive), grouped
/// by location. Locations with no matching postings are absent from the map.
/// An empty query matches every posting that has a title.
pub fn aggregate_job_counts(jobs: &[JobRecord], title_query: &str) -> HashMap<LocationKey, u32> {
    let needle = title_query.to_lowercase();
    let mut counts: HashMap<LocationKey, u32> = HashMap::new();

    for job in jobs.iter().filter(|j| title_matches(j.job_title.as_deref(), &needle)) {
        let key = (
            normalize_city(job.city.as_deref()),
            job.state.trim().to_string(),
        );
        *counts.entry(key).or_insert(0) += 1;
    }

    counts
}

fn title_matches(title: Option<&str>, needle: &str) -> bool {
    title
        .map(|t| t.to_lowercase().contains(needle))
        .unwrap_or(false)
}
