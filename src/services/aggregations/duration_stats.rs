use crate::models::reports::DurationStats;
use crate::models::trip::Dataset;
use crate::services::aggregations::traits::aggregation_trait::Aggregation;

/// Total and mean trip duration.
pub struct TripDurations;

impl Aggregation for TripDurations {
    type Output = Option<DurationStats>;

    fn name(&self) -> &'static str {
        "trip durations"
    }

    fn compute(&self, dataset: &Dataset) -> Self::Output {
        duration_stats(dataset)
    }
}

pub fn duration_stats(dataset: &Dataset) -> Option<DurationStats> {
    if dataset.is_empty() {
        return None;
    }
    let total_secs: f64 = dataset.iter().map(|t| t.duration_secs).sum();
    Some(DurationStats {
        total_secs,
        mean_secs: total_secs / dataset.len() as f64,
    })
}
