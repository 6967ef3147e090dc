use crate::models::trip::TripRecord;
use serde::{Deserialize, Serialize};

/// As read from a city CSV. Numeric and timestamp cells are kept as text and
/// parsed into a [`TripRecord`] so a bad cell skips only its row.
#[derive(Debug, Deserialize)]
pub struct InputRow {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: String,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<String>,
}

/// As written when paging through raw trips
#[derive(Debug, Serialize)]
pub struct OutputRow {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: String,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year")]
    pub birth_year: Option<i32>,
    pub month: u32,
    pub day_of_week: &'static str,
}

impl From<&TripRecord> for OutputRow {
    fn from(trip: &TripRecord) -> Self {
        Self {
            start_time: trip.start_time.to_string(),
            end_time: trip.end_time.to_string(),
            trip_duration: trip.duration_secs,
            start_station: trip.start_station.clone(),
            end_station: trip.end_station.clone(),
            user_type: trip.user_type.clone(),
            gender: trip.gender.clone(),
            birth_year: trip.birth_year,
            month: trip.month,
            day_of_week: trip.day_of_week.name(),
        }
    }
}
