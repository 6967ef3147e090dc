use crate::models::reports::{BirthYearStats, UserReport, UserStats};
use crate::models::trip::Dataset;
use crate::services::aggregations::mode::{mode, value_counts};
use crate::services::aggregations::traits::aggregation_trait::Aggregation;

/// Rider type, gender and birth year breakdown.
pub struct UserBreakdown;

impl Aggregation for UserBreakdown {
    type Output = UserReport;

    fn name(&self) -> &'static str {
        "user breakdown"
    }

    fn compute(&self, dataset: &Dataset) -> Self::Output {
        user_stats(dataset)
    }
}

/// `NotAvailable` for cities without demographic columns, even when empty.
pub fn user_stats(dataset: &Dataset) -> UserReport {
    if !dataset.city.publishes_demographics() || !dataset.has_demographics {
        return UserReport::NotAvailable;
    }
    if dataset.is_empty() {
        return UserReport::NoData;
    }

    let user_types = value_counts(dataset.iter().map(|t| t.user_type.as_str()))
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();
    let genders = value_counts(dataset.iter().filter_map(|t| t.gender.as_deref()))
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();

    UserReport::Stats(UserStats {
        user_types,
        genders,
        birth_years: birth_year_stats(dataset),
    })
}

fn birth_year_stats(dataset: &Dataset) -> Option<BirthYearStats> {
    let years = || dataset.iter().filter_map(|t| t.birth_year);
    Some(BirthYearStats {
        earliest: years().min()?,
        latest: years().max()?,
        most_common: mode(years())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::city::City;
    use crate::models::trip::TripRecord;
    use crate::test_support::{dataset, trip};

    fn rider(user_type: &str, gender: Option<&str>, birth_year: Option<i32>) -> TripRecord {
        let mut t = trip("2017-01-02 08:00:00", "A", "B", 60.0)
            .with_demographics(gender.map(str::to_string), birth_year);
        t.user_type = user_type.to_string();
        t
    }

    #[test]
    fn counts_types_and_genders_and_birth_years() {
        // arrange
        let ds = dataset(
            City::Chicago,
            vec![
                rider("Subscriber", Some("Male"), Some(1984)),
                rider("Subscriber", Some("Female"), Some(1990)),
                rider("Customer", None, None),
                rider("Subscriber", Some("Male"), Some(1990)),
                rider("Subscriber", Some("Male"), Some(1949)),
            ],
        );

        // act
        let report = UserBreakdown.run(&ds);

        // assert
        let UserReport::Stats(stats) = report else {
            panic!("expected stats");
        };
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 4), ("Customer".to_string(), 1)]
        );
        assert_eq!(
            stats.genders,
            vec![("Male".to_string(), 3), ("Female".to_string(), 1)]
        );
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: 1949,
                latest: 1990,
                most_common: 1990,
            })
        );
    }

    #[test]
    fn washington_is_not_available() {
        let ds = dataset(
            City::Washington,
            vec![trip("2017-01-02 08:00:00", "A", "B", 60.0)],
        );
        assert_eq!(user_stats(&ds), UserReport::NotAvailable);
        assert_eq!(
            user_stats(&dataset(City::Washington, Vec::new())),
            UserReport::NotAvailable
        );
    }

    #[test]
    fn missing_demographic_columns_are_not_available() {
        let mut ds = dataset(
            City::NewYorkCity,
            vec![trip("2017-01-02 08:00:00", "A", "B", 60.0)],
        );
        ds.has_demographics = false;
        assert_eq!(user_stats(&ds), UserReport::NotAvailable);
    }

    #[test]
    fn empty_dataset_has_no_data() {
        assert_eq!(
            user_stats(&dataset(City::Chicago, Vec::new())),
            UserReport::NoData
        );
    }

    #[test]
    fn all_birth_years_missing() {
        let ds = dataset(City::Chicago, vec![rider("Customer", None, None)]);

        let UserReport::Stats(stats) = user_stats(&ds) else {
            panic!("expected stats");
        };

        assert!(stats.genders.is_empty());
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn single_rider_is_its_own_mode() {
        let ds = dataset(
            City::NewYorkCity,
            vec![rider("Subscriber", Some("Female"), Some(1977))],
        );

        let UserReport::Stats(stats) = user_stats(&ds) else {
            panic!("expected stats");
        };

        assert_eq!(stats.user_types, vec![("Subscriber".to_string(), 1)]);
        assert_eq!(stats.genders, vec![("Female".to_string(), 1)]);
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: 1977,
                latest: 1977,
                most_common: 1977,
            })
        );
    }
}
