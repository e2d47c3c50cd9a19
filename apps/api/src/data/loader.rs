//! CSV loaders for the rent and job tables.
//!
//! Both tables are read fully into memory at startup. Any malformed row aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::data::records::{JobRecord, RentRecord};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {source_name}: {source}")]
    Open {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row in {source_name}: {source}")]
    Row {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("non-finite avg_rent {value} in {source_name} at record {record}")]
    NonFiniteRent {
        source_name: String,
        record: usize,
        value: f64,
    },
}

pub fn load_rent_records(path: impl AsRef<Path>) -> Result<Vec<RentRecord>, DatasetError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let records = rent_records_from_reader(open(path, &name)?, &name)?;
    info!("Loaded {} rent records from {name}", records.len());
    Ok(records)
}

pub fn load_job_records(path: impl AsRef<Path>) -> Result<Vec<JobRecord>, DatasetError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let records = job_records_from_reader(open(path, &name)?, &name)?;
    info!("Loaded {} job records from {name}", records.len());
    Ok(records)
}

/// Parses rent records from any CSV source with a `RegionName,State,avg_rent` header.
pub fn rent_records_from_reader<R: Read>(
    rdr: R,
    source_name: &str,
) -> Result<Vec<RentRecord>, DatasetError> {
    let records: Vec<RentRecord> = read_all(csv_reader(rdr), source_name)?;
    if let Some((idx, bad)) = records
        .iter()
        .enumerate()
        .find(|(_, r)| !r.avg_rent.is_finite())
    {
        return Err(DatasetError::NonFiniteRent {
            source_name: source_name.to_string(),
            record: idx + 1,
            value: bad.avg_rent,
        });
    }
    Ok(records)
}

/// Parses job records from any CSV source with a `City,State,Job_Title` header.
pub fn job_records_from_reader<R: Read>(
    rdr: R,
    source_name: &str,
) -> Result<Vec<JobRecord>, DatasetError> {
    read_all(csv_reader(rdr), source_name)
}

fn open(path: &Path, name: &str) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| DatasetError::Open {
        source_name: name.to_string(),
        source,
    })
}

fn csv_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(rdr)
}

fn read_all<T, R>(mut reader: csv::Reader<R>, source_name: &str) -> Result<Vec<T>, DatasetError>
where
    T: DeserializeOwned,
    R: Read,
{
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| DatasetError::Row {
            source_name: source_name.to_string(),
            source,
        })
}
