//! CLI entry point for the San Francisco rental dashboard.
//!
//! Loads the census and coordinates CSVs once, then lists, renders, or
//! exports the dashboard views.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sfo_rent_dashboard::config::{Credentials, load_env_files};
use sfo_rent_dashboard::output::{Format, export_all, write_view};
use sfo_rent_dashboard::summaries::neighborhoods;
use sfo_rent_dashboard::views::render;
use sfo_rent_dashboard::{Dashboard, View};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "sfo_rent_dashboard")]
#[command(about = "San Francisco real estate analysis views", long_about = None)]
struct Cli {
    /// Census observations CSV
    #[arg(long, global = true, default_value = "Data/sfo_neighborhoods_census_data.csv")]
    census: PathBuf,

    /// Neighborhood coordinates CSV
    #[arg(long, global = true, default_value = "Data/neighborhoods_coordinates.csv")]
    coordinates: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available views
    List,
    /// List the neighborhoods present in the census data
    Neighborhoods,
    /// Render a single view
    Show {
        #[arg(value_enum)]
        view: View,

        /// Only keep rows for this neighborhood (per-neighborhood views)
        #[arg(short, long)]
        neighborhood: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render every view as JSON into a directory
    Export {
        #[arg(short = 'd', long, default_value = "views")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let env_files = load_env_files();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/sfo_rent_dashboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("sfo_rent_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(LevelFilter::INFO.into()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive(LevelFilter::DEBUG.into()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    for path in &env_files {
        debug!(path = %path.display(), "Loaded env file");
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for view in View::ALL {
                info!(slug = view.slug(), title = view.title(), "View");
            }
        }
        Commands::Neighborhoods => {
            let dashboard = load_dashboard(&cli.census, &cli.coordinates)?;
            let names = neighborhoods(&dashboard.dataset);
            for name in &names {
                info!(neighborhood = %name, "Neighborhood");
            }
            info!(total = names.len(), "Neighborhood list summary");
        }
        Commands::Show {
            view,
            neighborhood,
            format,
            output,
        } => {
            let dashboard = load_dashboard(&cli.census, &cli.coordinates)?;
            match render(view, &dashboard, neighborhood.as_deref()) {
                Ok(rendered) => write_view(&rendered, format, output.as_deref())?,
                Err(e) if e.is_per_view() => {
                    warn!(view = view.slug(), error = %e, "View unavailable");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Export { output_dir } => {
            let dashboard = load_dashboard(&cli.census, &cli.coordinates)?;
            let written = export_all(&dashboard, &output_dir)?;
            info!(
                output_dir = %output_dir.display(),
                written = written.len(),
                total = View::ALL.len(),
                "Finished exporting views"
            );
        }
    }

    Ok(())
}

/// Loads both tables and the credentials into the shared context.
fn load_dashboard(census: &Path, coordinates: &Path) -> Result<Dashboard> {
    Dashboard::load(census, coordinates, Credentials::from_env())
        .context("failed to load dashboard data")
}
