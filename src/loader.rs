//! CSV loading for the census observations and the neighborhood coordinates.

use crate::error::{DashboardError, Result};
use crate::summaries::types::{Dataset, NeighborhoodCoordinate, Observation};
use csv::StringRecord;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// The join key both tables must share after normalization.
pub const JOIN_KEY: &str = "neighborhood";

/// Columns the census file must provide. Each entry lists accepted spellings.
const OBSERVATION_COLUMNS: &[&[&str]] = &[
    &["year"],
    &[JOIN_KEY],
    &["sale_price_sqr_foot", "sale_price_per_sqft"],
    &["housing_units"],
    &["gross_rent"],
];

const COORDINATE_COLUMNS: &[&[&str]] = &[
    &[JOIN_KEY],
    &["Lat", "latitude"],
    &["Lon", "longitude"],
];

/// Loads both tables.
///
/// # Errors
///
/// [`DashboardError::Io`] if a file cannot be opened, [`DashboardError::Schema`]
/// naming the first absent column, [`DashboardError::Csv`] for a malformed row.
#[tracing::instrument(skip_all, fields(census = %census_path.display(), coordinates = %coordinates_path.display()))]
pub fn load(census_path: &Path, coordinates_path: &Path) -> Result<Dataset> {
    let observations: Vec<Observation> = read_table(census_path, OBSERVATION_COLUMNS)?;
    let coordinates: Vec<NeighborhoodCoordinate> = read_table(coordinates_path, COORDINATE_COLUMNS)?;

    info!(
        observations = observations.len(),
        coordinates = coordinates.len(),
        "Tables loaded"
    );

    Ok(Dataset::new(observations, coordinates))
}

/// Renames a capitalized `Neighborhood` header to the lowercase join key.
/// Every other header passes through untouched.
pub fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| if h == "Neighborhood" { JOIN_KEY } else { h })
        .collect()
}

/// Checks that every required column is present under one of its spellings.
pub fn require_columns(path: &Path, headers: &StringRecord, required: &[&[&str]]) -> Result<()> {
    for spellings in required {
        if !spellings.iter().any(|s| headers.iter().any(|h| h == *s)) {
            return Err(DashboardError::Schema {
                path: path.to_path_buf(),
                column: spellings[0].to_string(),
            });
        }
    }
    Ok(())
}

fn read_table<T: DeserializeOwned>(path: &Path, required: &[&[&str]]) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|source| DashboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let csv_err = |source: csv::Error| DashboardError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = normalize_headers(rdr.headers().map_err(csv_err)?);
    require_columns(path, &headers, required)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        let row: T = record.deserialize(Some(&headers)).map_err(csv_err)?;
        rows.push(row);
    }

    Ok(rows)
}
