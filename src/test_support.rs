use crate::models::city::City;
use crate::models::trip::{Dataset, TripRecord, parse_timestamp};
use std::fs;
use std::path::Path;

pub const CHICAGO_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";
pub const WASHINGTON_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

pub fn write_city_file(dir: &Path, city: City, header: &str, rows: &[&str]) {
    let mut body = String::from(header);
    body.push('\n');
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    fs::write(dir.join(city.file_name()), body).expect("write fixture");
}

/// A trip starting at `start` (`%Y-%m-%d %H:%M:%S`) with no demographics.
pub fn trip(start: &str, from: &str, to: &str, duration_secs: f64) -> TripRecord {
    let start_time = parse_timestamp(start).expect("fixture timestamp");
    TripRecord::new(start_time, start_time, duration_secs, from, to, "Subscriber")
}

pub fn dataset(city: City, trips: Vec<TripRecord>) -> Dataset {
    Dataset::new(city, trips, city.publishes_demographics())
}

/// Ten trips: seven in January 2017, three in February 2017.
pub fn jan_feb_fixture() -> Dataset {
    let trips = vec![
        trip("2017-01-02 08:00:00", "Canal St", "Clark St", 300.0),
        trip("2017-01-02 08:30:00", "Canal St", "Clark St", 420.0),
        trip("2017-01-03 17:15:00", "Clark St", "Canal St", 600.0),
        trip("2017-01-09 08:05:00", "Canal St", "Lake St", 360.0),
        trip("2017-01-10 12:00:00", "Lake St", "Canal St", 240.0),
        trip("2017-01-16 08:45:00", "Canal St", "Clark St", 500.0),
        trip("2017-01-21 09:00:00", "Lake St", "Clark St", 700.0),
        trip("2017-02-04 14:00:00", "Clark St", "Lake St", 900.0),
        trip("2017-02-05 15:00:00", "Clark St", "Lake St", 1000.0),
        trip("2017-02-06 08:10:00", "Canal St", "Lake St", 380.0),
    ];
    dataset(City::Chicago, trips)
}
