pub mod config;
pub mod dashboard;
pub mod error;
pub mod loader;
pub mod output;
pub mod summaries;
pub mod views;

pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use views::View;

#[cfg(test)]
mod test_support;
