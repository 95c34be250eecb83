use crate::summaries::types::{
    Dataset, MetricMeans, NeighborhoodSummary, Observation, YearNeighborhoodSummary, YearSummary,
};
use crate::summaries::utility::RunningMean;
use std::collections::BTreeMap;

#[derive(Default)]
struct MetricAccumulator {
    sale_price_per_sqft: RunningMean,
    housing_units: RunningMean,
    gross_rent: RunningMean,
}

impl MetricAccumulator {
    fn push(&mut self, row: &Observation) {
        self.sale_price_per_sqft.push(row.sale_price_per_sqft);
        self.housing_units.push(row.housing_units.map(f64::from));
        self.gross_rent.push(row.gross_rent);
    }

    fn finish(&self) -> MetricMeans {
        MetricMeans {
            sale_price_per_sqft: self.sale_price_per_sqft.value(),
            housing_units: self.housing_units.value(),
            gross_rent: self.gross_rent.value(),
        }
    }
}

/// Partitions `rows` by `key` and averages every numeric column within each
/// partition. Keys come back in ascending order.
pub fn group_mean<'a, K, F>(rows: &'a [Observation], key: F) -> BTreeMap<K, MetricMeans>
where
    K: Ord,
    F: Fn(&'a Observation) -> K,
{
    let mut groups: BTreeMap<K, MetricAccumulator> = BTreeMap::new();

    for row in rows {
        groups.entry(key(row)).or_default().push(row);
    }

    groups
        .into_iter()
        .map(|(k, acc)| (k, acc.finish()))
        .collect()
}

/// Means of every metric, one row per year.
pub fn by_year(dataset: &Dataset) -> Vec<YearSummary> {
    group_mean(&dataset.observations, |o| o.year)
        .into_iter()
        .map(|(year, m)| YearSummary {
            year,
            sale_price_per_sqft: m.sale_price_per_sqft,
            housing_units: m.housing_units,
            gross_rent: m.gross_rent,
        })
        .collect()
}

/// Means of every metric, one row per (year, neighborhood).
pub fn by_year_and_neighborhood(dataset: &Dataset) -> Vec<YearNeighborhoodSummary> {
    group_mean(&dataset.observations, |o| (o.year, o.neighborhood.as_str()))
        .into_iter()
        .map(|((year, neighborhood), m)| YearNeighborhoodSummary {
            year,
            neighborhood: neighborhood.to_string(),
            sale_price_per_sqft: m.sale_price_per_sqft,
            housing_units: m.housing_units,
            gross_rent: m.gross_rent,
        })
        .collect()
}

/// Means of every metric, one row per neighborhood across all years.
pub fn by_neighborhood(dataset: &Dataset) -> Vec<NeighborhoodSummary> {
    group_mean(&dataset.observations, |o| o.neighborhood.as_str())
        .into_iter()
        .map(|(neighborhood, m)| NeighborhoodSummary {
            neighborhood: neighborhood.to_string(),
            sale_price_per_sqft: m.sale_price_per_sqft,
            housing_units: m.housing_units,
            gross_rent: m.gross_rent,
        })
        .collect()
}

/// Distinct neighborhood names present in the observations, ascending.
pub fn neighborhoods(dataset: &Dataset) -> Vec<String> {
    group_mean(&dataset.observations, |o| o.neighborhood.as_str())
        .into_keys()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                Observation::new(2013, "Noe Valley", 600.0, 2100.0, 120),
                Observation::new(2012, "Noe Valley", 500.0, 2000.0, 100),
                Observation::new(2012, "Bayview", 300.0, 1500.0, 80),
                Observation::new(2012, "Bayview", 320.0, 1500.0, 80),
            ],
            vec![],
        )
    }

    #[test]
    fn test_by_year_one_row_per_year_ascending() {
        let rows = by_year(&dataset());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2012);
        assert_eq!(rows[0].housing_units, Some((100.0 + 80.0 + 80.0) / 3.0));
        assert_eq!(rows[1].year, 2013);
        assert_eq!(rows[1].sale_price_per_sqft, Some(600.0));
    }

    #[test]
    fn test_by_year_and_neighborhood_collapses_repeated_keys() {
        let rows = by_year_and_neighborhood(&dataset());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].neighborhood, "Bayview");
        assert_eq!(rows[0].sale_price_per_sqft, Some(310.0));
        assert_eq!((rows[1].year, rows[1].neighborhood.as_str()), (2012, "Noe Valley"));
        assert_eq!((rows[2].year, rows[2].neighborhood.as_str()), (2013, "Noe Valley"));
    }

    #[test]
    fn test_by_neighborhood_skips_missing_values() {
        let mut ds = dataset();
        ds.observations.push(Observation {
            year: 2014,
            neighborhood: "Bayview".to_string(),
            sale_price_per_sqft: None,
            gross_rent: Some(1800.0),
            housing_units: None,
        });

        let rows = by_neighborhood(&ds);
        let bayview = &rows[0];

        assert_eq!(bayview.neighborhood, "Bayview");
        assert_eq!(bayview.sale_price_per_sqft, Some(310.0));
        assert_eq!(bayview.housing_units, Some(80.0));
        assert_eq!(bayview.gross_rent, Some(1600.0));
    }

    #[test]
    fn test_neighborhoods_distinct_sorted() {
        assert_eq!(neighborhoods(&dataset()), vec!["Bayview", "Noe Valley"]);
    }

    #[test]
    fn test_empty_dataset_has_no_groups() {
        let ds = Dataset::default();
        assert!(by_year(&ds).is_empty());
        assert!(by_neighborhood(&ds).is_empty());
    }
}
