use crate::models::reports::StationStats;
use crate::models::trip::Dataset;
use crate::services::aggregations::mode::mode;
use crate::services::aggregations::traits::aggregation_trait::Aggregation;

/// Most used start station, end station and (start, end) trip.
pub struct PopularStations;

impl Aggregation for PopularStations {
    type Output = Option<StationStats>;

    fn name(&self) -> &'static str {
        "popular stations"
    }

    fn compute(&self, dataset: &Dataset) -> Self::Output {
        station_stats(dataset)
    }
}

/// The popular trip counts each (start, end) pair as one key.
pub fn station_stats(dataset: &Dataset) -> Option<StationStats> {
    let popular_start = mode(dataset.iter().map(|t| t.start_station.as_str()))?;
    let popular_end = mode(dataset.iter().map(|t| t.end_station.as_str()))?;
    let (from, to) = mode(
        dataset
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    )?;

    Some(StationStats {
        popular_start: popular_start.to_string(),
        popular_end: popular_end.to_string(),
        popular_trip: (from.to_string(), to.to_string()),
    })
}
