use crate::models::calendar::{DayFilter, MonthFilter};
use crate::models::trip::{Dataset, TripRecord};
use log::debug;

/// Month and day-of-week constraints, combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripFilter {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl TripFilter {
    pub fn with_month(mut self, month: MonthFilter) -> Self {
        self.month = month;
        self
    }

    pub fn with_day(mut self, day: DayFilter) -> Self {
        self.day = day;
        self
    }

    #[inline]
    pub fn matches(&self, trip: &TripRecord) -> bool {
        self.month.matches(trip.month) && self.day.matches(trip.day_of_week)
    }

    /// Returns a new dataset holding the matching trips in their original order.
    /// No match yields an empty dataset.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        let trips: Vec<TripRecord> = dataset
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect();
        debug!(
            "filter {:?}/{:?} kept {} of {} trips",
            self.month,
            self.day,
            trips.len(),
            dataset.len()
        );
        Dataset {
            city: dataset.city,
            trips,
            has_demographics: dataset.has_demographics,
            skipped_rows: dataset.skipped_rows,
        }
    }
}

pub fn filter_dataset(dataset: &Dataset, month: MonthFilter, day: DayFilter) -> Dataset {
    TripFilter::default()
        .with_month(month)
        .with_day(day)
        .apply(dataset)
}
