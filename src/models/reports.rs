use crate::models::calendar::DayOfWeek;

/// Most frequent travel times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub popular_month: u32,
    pub popular_day: DayOfWeek,
    pub popular_hour: u32,
}

/// Most frequent stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub popular_start: String,
    pub popular_end: String,
    pub popular_trip: (String, String),
}

/// Trip duration totals, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

/// Rider breakdown. Counts are ordered by descending count, then value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Vec<(String, usize)>,
    pub birth_years: Option<BirthYearStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserReport {
    /// The city does not publish rider demographics.
    NotAvailable,
    NoData,
    Stats(UserStats),
}
