//! Error type shared by the loader, the summaries and the views.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading the CSVs and handing a
/// view to a renderer.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// An input file is missing or unreadable.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An expected column is absent from an input file's header.
    #[error("{} is missing required column '{column}'", .path.display())]
    Schema { path: PathBuf, column: String },

    /// A row could not be decoded.
    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A credential needed by one view is not configured.
    #[error("credential '{key}' is not set")]
    MissingCredential { key: &'static str },
}

impl DashboardError {
    /// Whether the error only degrades a single view rather than the whole run.
    pub fn is_per_view(&self) -> bool {
        matches!(self, DashboardError::MissingCredential { .. })
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
