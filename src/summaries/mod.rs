//! Group-by-mean summaries of the census observations.
//!
//! Every function here is pure: it reads the loaded [`Dataset`] and builds a
//! fresh table, grouped by year, by neighborhood, or by both.

pub mod aggregate;
pub mod geo;
pub mod ranking;
pub mod types;
pub mod utility;
pub mod yearly;

pub use aggregate::{by_neighborhood, by_year, by_year_and_neighborhood, neighborhoods};
pub use geo::neighborhood_map;
pub use ranking::{
    TOP_NEIGHBORHOODS, parallel_categories, parallel_coordinates, sunburst,
    top_most_expensive_neighborhoods, top_neighborhoods,
};
pub use types::Dataset;
pub use yearly::{
    average_gross_rent, average_sales_price, average_sqft_price_by_neighborhood,
    comparison_of_rent_and_sqft_by_neighborhood, gross_rent_by_neighborhood,
    housing_units_per_year,
};
