//! Summaries keyed by year, and by year and neighborhood.

use crate::summaries::aggregate::{by_year, by_year_and_neighborhood};
use crate::summaries::types::{
    AxisRange, Dataset, RentAndPrice, UnitsPerYear, YearNeighborhoodValue, YearSummary, YearValue,
};
use crate::summaries::utility::{mean, stddev};

/// Mean housing units per year, plus an axis range of one standard deviation
/// below the smallest mean and above the largest.
pub fn housing_units_per_year(dataset: &Dataset) -> UnitsPerYear {
    let rows: Vec<YearValue> = by_year(dataset)
        .into_iter()
        .map(|s| YearValue {
            year: s.year,
            value: s.housing_units,
        })
        .collect();

    let values: Vec<f64> = rows.iter().filter_map(|r| r.value).collect();
    let axis = axis_range(&values);

    UnitsPerYear { rows, axis }
}

fn axis_range(values: &[f64]) -> Option<AxisRange> {
    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let sd = stddev(values, mean(values));

    Some(AxisRange {
        bottom: min - sd,
        top: max + sd,
    })
}

/// Yearly means of price and rent, computed together.
fn yearly_costs(dataset: &Dataset) -> Vec<YearSummary> {
    by_year(dataset)
}

pub fn average_gross_rent(dataset: &Dataset) -> Vec<YearValue> {
    yearly_costs(dataset)
        .into_iter()
        .map(|s| YearValue {
            year: s.year,
            value: s.gross_rent,
        })
        .collect()
}

pub fn average_sales_price(dataset: &Dataset) -> Vec<YearValue> {
    yearly_costs(dataset)
        .into_iter()
        .map(|s| YearValue {
            year: s.year,
            value: s.sale_price_per_sqft,
        })
        .collect()
}

pub fn average_sqft_price_by_neighborhood(dataset: &Dataset) -> Vec<YearNeighborhoodValue> {
    by_year_and_neighborhood(dataset)
        .into_iter()
        .map(|s| YearNeighborhoodValue {
            year: s.year,
            neighborhood: s.neighborhood,
            value: s.sale_price_per_sqft,
        })
        .collect()
}

pub fn gross_rent_by_neighborhood(dataset: &Dataset) -> Vec<YearNeighborhoodValue> {
    by_year_and_neighborhood(dataset)
        .into_iter()
        .map(|s| YearNeighborhoodValue {
            year: s.year,
            neighborhood: s.neighborhood,
            value: s.gross_rent,
        })
        .collect()
}

pub fn comparison_of_rent_and_sqft_by_neighborhood(dataset: &Dataset) -> Vec<RentAndPrice> {
    by_year_and_neighborhood(dataset)
        .into_iter()
        .map(|s| RentAndPrice {
            year: s.year,
            neighborhood: s.neighborhood,
            gross_rent: s.gross_rent,
            sale_price_per_sqft: s.sale_price_per_sqft,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summaries::types::Observation;

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                Observation::new(2012, "Noe Valley", 500.0, 2000.0, 100),
                Observation::new(2013, "Noe Valley", 600.0, 2100.0, 120),
                Observation::new(2012, "Bayview", 300.0, 1500.0, 80),
            ],
            vec![],
        )
    }

    #[test]
    fn test_housing_units_per_year() {
        let units = housing_units_per_year(&dataset());

        assert_eq!(
            units.rows,
            vec![
                YearValue {
                    year: 2012,
                    value: Some(90.0)
                },
                YearValue {
                    year: 2013,
                    value: Some(120.0)
                },
            ]
        );

        // means 90 and 120: population std is 15
        let axis = units.axis.unwrap();
        assert_eq!(axis.bottom, 75.0);
        assert_eq!(axis.top, 135.0);
    }

    #[test]
    fn test_housing_units_per_year_empty() {
        let units = housing_units_per_year(&Dataset::default());
        assert!(units.rows.is_empty());
        assert!(units.axis.is_none());
    }

    #[test]
    fn test_average_gross_rent_and_sales_price() {
        let ds = dataset();

        let rent = average_gross_rent(&ds);
        assert_eq!(rent[0].value, Some(1750.0));
        assert_eq!(rent[1].value, Some(2100.0));

        let price = average_sales_price(&ds);
        assert_eq!(price[0].value, Some(400.0));
        assert_eq!(price[1].value, Some(600.0));
    }

    #[test]
    fn test_by_neighborhood_views_share_keys() {
        let ds = dataset();

        let price = average_sqft_price_by_neighborhood(&ds);
        let rent = gross_rent_by_neighborhood(&ds);
        let both = comparison_of_rent_and_sqft_by_neighborhood(&ds);

        assert_eq!(price.len(), 3);
        for ((p, r), b) in price.iter().zip(&rent).zip(&both) {
            assert_eq!((p.year, &p.neighborhood), (r.year, &r.neighborhood));
            assert_eq!(b.gross_rent, r.value);
            assert_eq!(b.sale_price_per_sqft, p.value);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let ds = dataset();
        assert_eq!(housing_units_per_year(&ds), housing_units_per_year(&ds));
        assert_eq!(
            comparison_of_rent_and_sqft_by_neighborhood(&ds),
            comparison_of_rent_and_sqft_by_neighborhood(&ds)
        );
    }
}
