use crate::consts::TIMESTAMP_FORMATS;
use crate::errors::TripParseError;
use crate::models::calendar::DayOfWeek;
use crate::models::city::City;
use crate::models::csv_models::trip_row::InputRow;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// One bike trip. `month` and `day_of_week` are derived from `start_time`
/// on construction and never set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub month: u32,
    pub day_of_week: DayOfWeek,
}

impl TripRecord {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        duration_secs: f64,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        user_type: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            duration_secs,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: user_type.into(),
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday().into(),
        }
    }

    pub fn with_demographics(mut self, gender: Option<String>, birth_year: Option<i32>) -> Self {
        self.gender = gender;
        self.birth_year = birth_year;
        self
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

impl TryFrom<InputRow> for TripRecord {
    type Error = TripParseError;

    fn try_from(row: InputRow) -> Result<Self, Self::Error> {
        let start_time = parse_timestamp(&row.start_time)?;
        let end_time = parse_timestamp(&row.end_time)?;
        let duration = parse_duration(&row.trip_duration)?;
        let birth_year = match non_blank(row.birth_year) {
            Some(s) => Some(parse_birth_year(&s)?),
            None => None,
        };

        Ok(TripRecord::new(
            start_time,
            end_time,
            duration,
            row.start_station,
            row.end_station,
            row.user_type,
        )
        .with_demographics(non_blank(row.gender), birth_year))
    }
}

fn non_blank(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TripParseError> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| TripParseError::Timestamp(s.to_string()))
}

pub fn parse_duration(s: &str) -> Result<f64, TripParseError> {
    let s = s.trim();
    let secs: f64 = s
        .parse()
        .map_err(|_| TripParseError::MalformedDuration(s.to_string()))?;
    if !secs.is_finite() {
        return Err(TripParseError::MalformedDuration(s.to_string()));
    }
    if secs < 0.0 {
        return Err(TripParseError::NegativeDuration(s.to_string()));
    }
    Ok(secs)
}

/// Accepts `1989` as well as the `1989.0` pandas exports write.
pub fn parse_birth_year(s: &str) -> Result<i32, TripParseError> {
    let s = s.trim();
    if let Ok(year) = s.parse::<i32>() {
        return Ok(year);
    }
    let year: f64 = s
        .parse()
        .map_err(|_| TripParseError::MalformedBirthYear(s.to_string()))?;
    if year.fract() != 0.0 || year < i32::MIN as f64 || year > i32::MAX as f64 {
        return Err(TripParseError::MalformedBirthYear(s.to_string()));
    }
    Ok(year as i32)
}

/// All trips loaded for one city, optionally narrowed by a filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub city: City,
    pub trips: Vec<TripRecord>,
    /// Whether the source file carried both `Gender` and `Birth Year`.
    pub has_demographics: bool,
    /// Rows dropped at load because they could not be parsed.
    pub skipped_rows: usize,
}

impl Dataset {
    pub fn new(city: City, trips: Vec<TripRecord>, has_demographics: bool) -> Self {
        Self {
            city,
            trips,
            has_demographics,
            skipped_rows: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TripRecord> {
        self.trips.iter()
    }
}
