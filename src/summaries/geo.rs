use crate::summaries::aggregate::by_neighborhood;
use crate::summaries::types::{Dataset, MappedNeighborhood, NeighborhoodMap};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Neighborhood means inner-joined with their coordinates.
///
/// Observed neighborhoods without a usable coordinate row are left out of
/// `rows`, listed in `dropped`, and logged. Coordinate rows with a blank
/// latitude or longitude are skipped with a warning. When a neighborhood
/// appears more than once in the coordinates table the first usable row wins.
#[tracing::instrument(skip(dataset), fields(coordinates = dataset.coordinates.len()))]
pub fn neighborhood_map(dataset: &Dataset) -> NeighborhoodMap {
    let mut coordinates: HashMap<&str, (f64, f64)> = HashMap::new();
    for c in &dataset.coordinates {
        let Some(position) = c.position() else {
            warn!(neighborhood = %c.neighborhood, "Coordinate row without latitude or longitude ignored");
            continue;
        };
        if coordinates.contains_key(c.neighborhood.as_str()) {
            debug!(neighborhood = %c.neighborhood, "Duplicate coordinate row ignored");
            continue;
        }
        coordinates.insert(c.neighborhood.as_str(), position);
    }

    let mut rows = Vec::new();
    let mut dropped = Vec::new();

    for summary in by_neighborhood(dataset) {
        match coordinates.remove(summary.neighborhood.as_str()) {
            Some((latitude, longitude)) => rows.push(MappedNeighborhood {
                latitude,
                longitude,
                neighborhood: summary.neighborhood,
                sale_price_per_sqft: summary.sale_price_per_sqft,
                housing_units: summary.housing_units,
                gross_rent: summary.gross_rent,
            }),
            None => {
                warn!(neighborhood = %summary.neighborhood, "No coordinates for neighborhood, dropped from map");
                dropped.push(summary.neighborhood);
            }
        }
    }

    if !coordinates.is_empty() {
        debug!(
            unused = coordinates.len(),
            "Coordinate rows without observations"
        );
    }

    NeighborhoodMap { rows, dropped }
}
