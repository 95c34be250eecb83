//! Output formatting and persistence for rendered views.
//!
//! Supports pretty-printing, JSON serialization, and CSV tables.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::dashboard::Dashboard;
use crate::views::{RenderedView, View, ViewData, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Csv,
}

/// Logs a rendered view using Rust's debug pretty-print format.
pub fn print_pretty(rendered: &RenderedView) {
    debug!("{:#?}", rendered);
}

/// Writes the whole envelope as pretty-printed JSON.
pub fn write_json<W: Write>(mut writer: W, rendered: &RenderedView) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, rendered)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes only the view's rows as a CSV table with a header line.
///
/// The housing-units axis range and the map's dropped neighborhoods are not
/// part of the table; they are logged instead.
pub fn write_csv<W: Write>(writer: W, data: &ViewData) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    match data {
        ViewData::UnitsPerYear(units) => {
            if let Some(axis) = units.axis {
                info!(bottom = axis.bottom, top = axis.top, "Suggested y-axis range");
            }
            serialize_rows(&mut wtr, &units.rows)?;
        }
        ViewData::Yearly(rows) => serialize_rows(&mut wtr, rows)?,
        ViewData::ByYearAndNeighborhood(rows) => serialize_rows(&mut wtr, rows)?,
        ViewData::RentAndPrice(rows) => serialize_rows(&mut wtr, rows)?,
        ViewData::Neighborhoods(rows) => serialize_rows(&mut wtr, rows)?,
        ViewData::Hierarchy(rows) => serialize_rows(&mut wtr, rows)?,
        ViewData::Map(map) => {
            if !map.dropped.is_empty() {
                info!(dropped = ?map.dropped, "Neighborhoods left off the map");
            }
            serialize_rows(&mut wtr, &map.rows)?;
        }
    }

    wtr.flush()?;
    Ok(())
}

fn serialize_rows<W: Write, T: Serialize>(wtr: &mut csv::Writer<W>, rows: &[T]) -> Result<()> {
    for row in rows {
        wtr.serialize(row)?;
    }
    Ok(())
}

/// Writes `rendered` in `format` to `path`, or to stdout when `path` is `None`.
pub fn write_view(rendered: &RenderedView, format: Format, path: Option<&Path>) -> Result<()> {
    print_pretty(rendered);

    match path {
        Some(path) => {
            let file = File::create(path)?;
            write_format(file, rendered, format)?;
            info!(path = %path.display(), view = rendered.view.slug(), "View written");
        }
        None => write_format(std::io::stdout().lock(), rendered, format)?,
    }
    Ok(())
}

fn write_format<W: Write>(writer: W, rendered: &RenderedView, format: Format) -> Result<()> {
    match format {
        Format::Json => write_json(writer, rendered),
        Format::Csv => write_csv(writer, &rendered.data),
    }
}

/// Renders every view into `dir/<slug>.json`.
///
/// A view that can only fail on its own (a missing map-tile token) is
/// skipped with a warning; any other failure aborts the export. Returns the
/// paths written.
#[tracing::instrument(skip(dashboard), fields(dir = %dir.display()))]
pub fn export_all(dashboard: &Dashboard, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for view in View::ALL {
        let rendered = match render(view, dashboard, None) {
            Ok(rendered) => rendered,
            Err(e) if e.is_per_view() => {
                warn!(view = view.slug(), error = %e, "View skipped");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let path = dir.join(format!("{}.json", view.slug()));
        write_json(File::create(&path)?, &rendered)?;
        written.push(path);
    }

    info!(views = written.len(), "Export complete");
    Ok(written)
}
