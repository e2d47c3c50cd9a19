use serde::{Deserialize, Serialize};

/// One row of the rent table: average rent for a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentRecord {
    #[serde(rename = "RegionName")]
    pub region_name: Option<String>,
    #[serde(rename = "State", default)]
    pub state: String,
    pub avg_rent: f64,
}

/// One row of the job table: a single posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Job_Title")]
    pub job_title: Option<String>,
}

#[cfg(test)]
impl RentRecord {
    pub fn new(region_name: &str, state: &str, avg_rent: f64) -> Self {
        Self {
            region_name: Some(region_name.to_string()),
            state: state.to_string(),
            avg_rent,
        }
    }
}

#[cfg(test)]
impl JobRecord {
    pub fn new(city: &str, state: &str, job_title: &str) -> Self {
        Self {
            city: Some(city.to_string()),
            state: state.to_string(),
            job_title: Some(job_title.to_string()),
        }
    }
}
