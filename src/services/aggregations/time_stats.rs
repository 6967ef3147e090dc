use crate::models::reports::TimeStats;
use crate::models::trip::Dataset;
use crate::services::aggregations::mode::mode;
use crate::services::aggregations::traits::aggregation_trait::Aggregation;

/// Most frequent month, day of week and start hour.
pub struct PopularTimes;

impl Aggregation for PopularTimes {
    type Output = Option<TimeStats>;

    fn name(&self) -> &'static str {
        "popular times"
    }

    fn compute(&self, dataset: &Dataset) -> Self::Output {
        time_stats(dataset)
    }
}

/// Returns `None` when the dataset is empty.
pub fn time_stats(dataset: &Dataset) -> Option<TimeStats> {
    Some(TimeStats {
        popular_month: mode(dataset.iter().map(|t| t.month))?,
        popular_day: mode(dataset.iter().map(|t| t.day_of_week))?,
        popular_hour: mode(dataset.iter().map(|t| t.hour()))?,
    })
}
