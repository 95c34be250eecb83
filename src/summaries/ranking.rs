//! Neighborhood rankings by average sale price.

use crate::summaries::aggregate::{by_neighborhood, by_year_and_neighborhood};
use crate::summaries::types::{Dataset, NeighborhoodSummary, YearNeighborhoodSummary};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// How many neighborhoods the ranked views keep.
pub const TOP_NEIGHBORHOODS: usize = 10;

/// Descending by price, absent prices last, then by name ascending.
fn by_price_desc(a: &NeighborhoodSummary, b: &NeighborhoodSummary) -> Ordering {
    let price = match (a.sale_price_per_sqft, b.sale_price_per_sqft) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    price.then_with(|| a.neighborhood.cmp(&b.neighborhood))
}

/// The `k` neighborhoods with the highest mean sale price per square foot.
pub fn top_neighborhoods(dataset: &Dataset, k: usize) -> Vec<NeighborhoodSummary> {
    let mut rows = by_neighborhood(dataset);
    rows.sort_by(by_price_desc);
    rows.truncate(k);
    rows
}

pub fn top_most_expensive_neighborhoods(dataset: &Dataset) -> Vec<NeighborhoodSummary> {
    top_neighborhoods(dataset, TOP_NEIGHBORHOODS)
}

pub fn parallel_coordinates(dataset: &Dataset) -> Vec<NeighborhoodSummary> {
    top_neighborhoods(dataset, TOP_NEIGHBORHOODS)
}

pub fn parallel_categories(dataset: &Dataset) -> Vec<NeighborhoodSummary> {
    top_neighborhoods(dataset, TOP_NEIGHBORHOODS)
}

/// Per-year means for the ten most expensive neighborhoods, the year ->
/// neighborhood hierarchy a sunburst is drawn from.
pub fn sunburst(dataset: &Dataset) -> Vec<YearNeighborhoodSummary> {
    let top: BTreeSet<String> = top_most_expensive_neighborhoods(dataset)
        .into_iter()
        .map(|n| n.neighborhood)
        .collect();

    by_year_and_neighborhood(dataset)
        .into_iter()
        .filter(|row| top.contains(&row.neighborhood))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summaries::types::Observation;

    fn toy() -> Dataset {
        Dataset::new(
            vec![
                Observation::new(2012, "Noe Valley", 500.0, 2000.0, 100),
                Observation::new(2013, "Noe Valley", 600.0, 2100.0, 120),
                Observation::new(2012, "Bayview", 300.0, 1500.0, 80),
            ],
            vec![],
        )
    }

    fn many(n: usize) -> Dataset {
        let observations = (0..n)
            .map(|i| Observation::new(2012, &format!("Hood {i:02}"), 100.0 + i as f64, 1000.0, 10))
            .collect();
        Dataset::new(observations, vec![])
    }

    #[test]
    fn test_top_neighborhoods_ranks_by_mean_price() {
        let top = top_neighborhoods(&toy(), 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].neighborhood, "Noe Valley");
        assert_eq!(top[0].sale_price_per_sqft, Some(550.0));
        assert_eq!(top[1].neighborhood, "Bayview");
    }

    #[test]
    fn test_top_ten_truncates_and_sorts() {
        let top = top_most_expensive_neighborhoods(&many(15));

        assert_eq!(top.len(), TOP_NEIGHBORHOODS);
        assert_eq!(top[0].neighborhood, "Hood 14");
        assert_eq!(top[9].neighborhood, "Hood 05");
        assert!(
            top.windows(2)
                .all(|w| w[0].sale_price_per_sqft >= w[1].sale_price_per_sqft)
        );
    }

    #[test]
    fn test_ties_break_on_name() {
        let ds = Dataset::new(
            vec![
                Observation::new(2012, "Twin Peaks", 400.0, 1000.0, 1),
                Observation::new(2012, "Alamo Square", 400.0, 1000.0, 1),
                Observation::new(2012, "Mission Bay", 400.0, 1000.0, 1),
            ],
            vec![],
        );

        let names: Vec<_> = top_neighborhoods(&ds, 10)
            .into_iter()
            .map(|n| n.neighborhood)
            .collect();
        assert_eq!(names, vec!["Alamo Square", "Mission Bay", "Twin Peaks"]);
    }

    #[test]
    fn test_missing_price_ranks_last() {
        let mut ds = toy();
        ds.observations.push(Observation {
            year: 2012,
            neighborhood: "Anza Vista".to_string(),
            sale_price_per_sqft: None,
            gross_rent: Some(1000.0),
            housing_units: Some(5),
        });

        let top = top_neighborhoods(&ds, 10);
        assert_eq!(top.last().unwrap().neighborhood, "Anza Vista");
    }

    #[test]
    fn test_parallel_views_match_top_ten() {
        let ds = many(12);
        let top = top_most_expensive_neighborhoods(&ds);

        assert_eq!(parallel_coordinates(&ds), top);
        assert_eq!(parallel_categories(&ds), top);
    }

    #[test]
    fn test_sunburst_only_contains_top_neighborhoods() {
        let mut ds = many(12);
        ds.observations
            .push(Observation::new(2013, "Hood 11", 200.0, 1000.0, 10));

        let rows = sunburst(&ds);

        assert!(rows.iter().all(|r| r.neighborhood != "Hood 00"));
        assert!(rows.iter().all(|r| r.neighborhood != "Hood 01"));
        assert_eq!(
            rows.iter().filter(|r| r.neighborhood == "Hood 11").count(),
            2
        );
        assert_eq!(rows.len(), 11);
    }
}
