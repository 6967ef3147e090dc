pub mod duration_stats;
pub mod mode;
pub mod station_stats;
pub mod time_stats;
pub mod traits;
pub mod user_stats;
