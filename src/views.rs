//! The eleven named dashboard views.
//!
//! A view pairs one summary with the chart a renderer should draw from it.
//! Rendering never draws anything itself: it returns a serializable
//! [`RenderedView`] envelope.

use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::summaries::types::{
    NeighborhoodMap, NeighborhoodSummary, RentAndPrice, UnitsPerYear, YearNeighborhoodSummary,
    YearNeighborhoodValue, YearValue, for_neighborhood,
};
use crate::summaries;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    HousingUnitsPerYear,
    AverageGrossRent,
    AverageSalesPrice,
    AverageSqftPriceByNeighborhood,
    GrossRentByNeighborhood,
    TopMostExpensiveNeighborhoods,
    ComparisonOfRentAndSqftByNeighborhood,
    ParallelCategories,
    ParallelCoordinates,
    Sunburst,
    NeighborhoodMap,
}

/// How a renderer should encode a view's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    GroupedBar,
    ParallelCoordinates,
    ParallelCategories,
    Sunburst,
    ScatterMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl View {
    /// Views in the order the page selector lists them.
    pub const ALL: [View; 11] = [
        View::HousingUnitsPerYear,
        View::AverageGrossRent,
        View::AverageSalesPrice,
        View::AverageSqftPriceByNeighborhood,
        View::GrossRentByNeighborhood,
        View::TopMostExpensiveNeighborhoods,
        View::ComparisonOfRentAndSqftByNeighborhood,
        View::ParallelCategories,
        View::ParallelCoordinates,
        View::Sunburst,
        View::NeighborhoodMap,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::HousingUnitsPerYear => "Housing Units Per Year",
            View::AverageGrossRent => "Average Gross Rent",
            View::AverageSalesPrice => "Average Sales Price",
            View::AverageSqftPriceByNeighborhood => "Average Square Ft Price by Neighborhood",
            View::GrossRentByNeighborhood => "Gross Rent by Neighborhood",
            View::TopMostExpensiveNeighborhoods => "Top 10 Most Expensive Neighborhoods",
            View::ComparisonOfRentAndSqftByNeighborhood => {
                "Comparing Rent and Sqft Prices by Neighborhood"
            }
            View::ParallelCategories => "Parallel Categories",
            View::ParallelCoordinates => "Parallel Coordinates",
            View::Sunburst => "Sunburst Chart",
            View::NeighborhoodMap => "Neighborhood Map",
        }
    }

    /// File-name friendly identifier, identical to the CLI value.
    pub fn slug(self) -> &'static str {
        match self {
            View::HousingUnitsPerYear => "housing-units-per-year",
            View::AverageGrossRent => "average-gross-rent",
            View::AverageSalesPrice => "average-sales-price",
            View::AverageSqftPriceByNeighborhood => "average-sqft-price-by-neighborhood",
            View::GrossRentByNeighborhood => "gross-rent-by-neighborhood",
            View::TopMostExpensiveNeighborhoods => "top-most-expensive-neighborhoods",
            View::ComparisonOfRentAndSqftByNeighborhood => {
                "comparison-of-rent-and-sqft-by-neighborhood"
            }
            View::ParallelCategories => "parallel-categories",
            View::ParallelCoordinates => "parallel-coordinates",
            View::Sunburst => "sunburst",
            View::NeighborhoodMap => "neighborhood-map",
        }
    }

    pub fn chart(self) -> ChartSpec {
        let (kind, x_label, y_label) = match self {
            View::HousingUnitsPerYear => (ChartKind::Bar, "Year", "Housing Units"),
            View::AverageGrossRent => (ChartKind::Line, "Year", "Gross Rent"),
            View::AverageSalesPrice => (ChartKind::Line, "Year", "Price per SqFt"),
            View::AverageSqftPriceByNeighborhood => (ChartKind::Line, "Year", "Price per SqFt"),
            View::GrossRentByNeighborhood => (ChartKind::Line, "Year", "Gross Rent"),
            View::TopMostExpensiveNeighborhoods => (
                ChartKind::Bar,
                "Neighborhood",
                "Average Price per Square Foot",
            ),
            View::ComparisonOfRentAndSqftByNeighborhood => {
                (ChartKind::GroupedBar, "Year", "Neighborhood Cost Metrics")
            }
            View::ParallelCategories => (ChartKind::ParallelCategories, "", ""),
            View::ParallelCoordinates => (ChartKind::ParallelCoordinates, "", ""),
            View::Sunburst => (ChartKind::Sunburst, "", ""),
            View::NeighborhoodMap => (ChartKind::ScatterMap, "Longitude", "Latitude"),
        };
        ChartSpec {
            kind,
            x_label,
            y_label,
        }
    }

    /// Whether the view's rows can be narrowed to a single neighborhood.
    pub fn browsable_by_neighborhood(self) -> bool {
        matches!(
            self,
            View::AverageSqftPriceByNeighborhood
                | View::GrossRentByNeighborhood
                | View::ComparisonOfRentAndSqftByNeighborhood
        )
    }
}

/// The summary behind a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViewData {
    UnitsPerYear(UnitsPerYear),
    Yearly(Vec<YearValue>),
    ByYearAndNeighborhood(Vec<YearNeighborhoodValue>),
    RentAndPrice(Vec<RentAndPrice>),
    Neighborhoods(Vec<NeighborhoodSummary>),
    Hierarchy(Vec<YearNeighborhoodSummary>),
    Map(NeighborhoodMap),
}

impl ViewData {
    pub fn len(&self) -> usize {
        match self {
            ViewData::UnitsPerYear(u) => u.rows.len(),
            ViewData::Yearly(rows) => rows.len(),
            ViewData::ByYearAndNeighborhood(rows) => rows.len(),
            ViewData::RentAndPrice(rows) => rows.len(),
            ViewData::Neighborhoods(rows) => rows.len(),
            ViewData::Hierarchy(rows) => rows.len(),
            ViewData::Map(m) => m.rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedView {
    pub view: View,
    pub title: &'static str,
    pub chart: ChartSpec,
    pub generated_at: DateTime<Utc>,
    pub data: ViewData,
}

/// Builds the data for `view`.
///
/// `neighborhood` narrows the views that browse per neighborhood and is
/// ignored by the rest.
///
/// # Errors
///
/// The neighborhood map fails with
/// [`DashboardError::MissingCredential`](crate::error::DashboardError::MissingCredential)
/// when no map-tile token is configured. No other view can fail.
#[tracing::instrument(skip(dashboard, view), fields(view = view.slug()))]
pub fn render(
    view: View,
    dashboard: &Dashboard,
    neighborhood: Option<&str>,
) -> Result<RenderedView> {
    let ds = &dashboard.dataset;

    let narrow = |rows: Vec<YearNeighborhoodValue>| match neighborhood {
        Some(n) => for_neighborhood(rows, n),
        None => rows,
    };

    if neighborhood.is_some() && !view.browsable_by_neighborhood() {
        debug!("Neighborhood filter ignored for this view");
    }

    let data = match view {
        View::HousingUnitsPerYear => ViewData::UnitsPerYear(summaries::housing_units_per_year(ds)),
        View::AverageGrossRent => ViewData::Yearly(summaries::average_gross_rent(ds)),
        View::AverageSalesPrice => ViewData::Yearly(summaries::average_sales_price(ds)),
        View::AverageSqftPriceByNeighborhood => ViewData::ByYearAndNeighborhood(narrow(
            summaries::average_sqft_price_by_neighborhood(ds),
        )),
        View::GrossRentByNeighborhood => {
            ViewData::ByYearAndNeighborhood(narrow(summaries::gross_rent_by_neighborhood(ds)))
        }
        View::ComparisonOfRentAndSqftByNeighborhood => {
            let rows = summaries::comparison_of_rent_and_sqft_by_neighborhood(ds);
            ViewData::RentAndPrice(match neighborhood {
                Some(n) => for_neighborhood(rows, n),
                None => rows,
            })
        }
        View::TopMostExpensiveNeighborhoods => {
            ViewData::Neighborhoods(summaries::top_most_expensive_neighborhoods(ds))
        }
        View::ParallelCategories => ViewData::Neighborhoods(summaries::parallel_categories(ds)),
        View::ParallelCoordinates => ViewData::Neighborhoods(summaries::parallel_coordinates(ds)),
        View::Sunburst => ViewData::Hierarchy(summaries::sunburst(ds)),
        View::NeighborhoodMap => {
            dashboard.credentials.mapbox_token()?;
            ViewData::Map(summaries::neighborhood_map(ds))
        }
    };

    if let Some(n) = neighborhood {
        if view.browsable_by_neighborhood() && data.is_empty() {
            warn!(neighborhood = n, "No rows for neighborhood");
        }
    }

    debug!(rows = data.len(), "View rendered");

    Ok(RenderedView {
        view,
        title: view.title(),
        chart: view.chart(),
        generated_at: Utc::now(),
        data,
    })
}
