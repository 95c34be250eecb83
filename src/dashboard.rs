use crate::config::Credentials;
use crate::error::Result;
use crate::loader;
use crate::summaries::Dataset;
use std::path::Path;

/// Everything a view needs, built once at startup and passed by reference.
#[derive(Debug)]
pub struct Dashboard {
    pub dataset: Dataset,
    pub credentials: Credentials,
}

impl Dashboard {
    pub fn new(dataset: Dataset, credentials: Credentials) -> Self {
        Self {
            dataset,
            credentials,
        }
    }

    /// Loads both CSVs and pairs them with `credentials`.
    pub fn load(census_path: &Path, coordinates_path: &Path, credentials: Credentials) -> Result<Self> {
        let dataset = loader::load(census_path, coordinates_path)?;
        Ok(Self::new(dataset, credentials))
    }
}
