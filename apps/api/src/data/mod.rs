// Static input tables. Loaded once at process start and shared read-only.

pub mod loader;
pub mod records;

use std::path::Path;

pub use loader::DatasetError;
pub use records::{JobRecord, RentRecord};

/// Immutable rent and job tables handed to the scorer on every call.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    pub rents: Vec<RentRecord>,
    pub jobs: Vec<JobRecord>,
}

impl DataContext {
    pub fn new(rents: Vec<RentRecord>, jobs: Vec<JobRecord>) -> Self {
        Self { rents, jobs }
    }

    pub fn load(rent_path: impl AsRef<Path>, jobs_path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let rents = loader::load_rent_records(rent_path)?;
        let jobs = loader::load_job_records(jobs_path)?;
        Ok(Self::new(rents, jobs))
    }
}
