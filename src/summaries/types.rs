//! Data types used by the summaries.

use serde::{Deserialize, Serialize};

/// One raw census row: a single year/neighborhood measurement.
///
/// The numeric cells may be blank in the source file; blanks (and `NaN`)
/// are carried as `None` and skipped when averaging.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub neighborhood: String,
    #[serde(alias = "sale_price_sqr_foot")]
    pub sale_price_per_sqft: Option<f64>,
    pub gross_rent: Option<f64>,
    pub housing_units: Option<u32>,
}

impl Observation {
    pub fn new(
        year: i32,
        neighborhood: &str,
        sale_price_per_sqft: f64,
        gross_rent: f64,
        housing_units: u32,
    ) -> Self {
        Self {
            year,
            neighborhood: neighborhood.to_string(),
            sale_price_per_sqft: Some(sale_price_per_sqft),
            gross_rent: Some(gross_rent),
            housing_units: Some(housing_units),
        }
    }
}

/// Location of a neighborhood's centroid, joined to observations by name.
///
/// Blank cells load as `None`; such a row cannot be placed on the map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NeighborhoodCoordinate {
    pub neighborhood: String,
    #[serde(alias = "Lat")]
    pub latitude: Option<f64>,
    #[serde(alias = "Lon")]
    pub longitude: Option<f64>,
}

impl NeighborhoodCoordinate {
    pub fn new(neighborhood: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            neighborhood: neighborhood.to_string(),
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// `(latitude, longitude)` when both are present and not `NaN`.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if !lat.is_nan() && !lon.is_nan() => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Both input tables, loaded once and then only read.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub observations: Vec<Observation>,
    pub coordinates: Vec<NeighborhoodCoordinate>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>, coordinates: Vec<NeighborhoodCoordinate>) -> Self {
        Self {
            observations,
            coordinates,
        }
    }
}

/// Group means of the three numeric columns. `None` means the group had no
/// usable value for that column.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricMeans {
    pub sale_price_per_sqft: Option<f64>,
    pub housing_units: Option<f64>,
    pub gross_rent: Option<f64>,
}

/// A single metric averaged per year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearValue {
    pub year: i32,
    pub value: Option<f64>,
}

/// Suggested y-axis limits: `min - std` to `max + std`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub bottom: f64,
    pub top: f64,
}

/// Mean housing units per year together with a suggested axis range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitsPerYear {
    pub rows: Vec<YearValue>,
    pub axis: Option<AxisRange>,
}

/// All metrics averaged per year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub sale_price_per_sqft: Option<f64>,
    pub housing_units: Option<f64>,
    pub gross_rent: Option<f64>,
}

/// All metrics averaged per (year, neighborhood).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearNeighborhoodSummary {
    pub year: i32,
    pub neighborhood: String,
    pub sale_price_per_sqft: Option<f64>,
    pub housing_units: Option<f64>,
    pub gross_rent: Option<f64>,
}

/// A single metric averaged per (year, neighborhood).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearNeighborhoodValue {
    pub year: i32,
    pub neighborhood: String,
    pub value: Option<f64>,
}

/// Rent and price side by side per (year, neighborhood).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentAndPrice {
    pub year: i32,
    pub neighborhood: String,
    pub gross_rent: Option<f64>,
    pub sale_price_per_sqft: Option<f64>,
}

/// All metrics averaged per neighborhood over every year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborhoodSummary {
    pub neighborhood: String,
    pub sale_price_per_sqft: Option<f64>,
    pub housing_units: Option<f64>,
    pub gross_rent: Option<f64>,
}

/// A neighborhood summary joined with its coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedNeighborhood {
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub sale_price_per_sqft: Option<f64>,
    pub housing_units: Option<f64>,
    pub gross_rent: Option<f64>,
}

/// Result of the inner join: matched rows plus the observed neighborhoods
/// that had no coordinates and were left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborhoodMap {
    pub rows: Vec<MappedNeighborhood>,
    pub dropped: Vec<String>,
}

/// Rows that belong to one neighborhood and can be browsed by it.
pub trait ByNeighborhood {
    fn neighborhood(&self) -> &str;
}

macro_rules! impl_by_neighborhood {
    ($($ty:ty),* $(,)?) => {
        $(impl ByNeighborhood for $ty {
            fn neighborhood(&self) -> &str {
                &self.neighborhood
            }
        })*
    };
}

impl_by_neighborhood!(
    YearNeighborhoodSummary,
    YearNeighborhoodValue,
    RentAndPrice,
    NeighborhoodSummary,
    MappedNeighborhood,
);

/// Keeps only the rows for `neighborhood` (exact, case-sensitive match).
pub fn for_neighborhood<T: ByNeighborhood>(rows: Vec<T>, neighborhood: &str) -> Vec<T> {
    rows.into_iter()
        .filter(|r| r.neighborhood() == neighborhood)
        .collect()
}
