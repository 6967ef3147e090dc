use crate::consts::RULE_WIDTH;
use crate::errors::AppResult;
use crate::models::calendar::month_name;
use crate::models::reports::{DurationStats, StationStats, TimeStats, UserReport};
use crate::models::trip::Dataset;
use crate::services::aggregations::duration_stats::TripDurations;
use crate::services::aggregations::station_stats::PopularStations;
use crate::services::aggregations::time_stats::PopularTimes;
use crate::services::aggregations::traits::aggregation_trait::Aggregation;
use crate::services::aggregations::user_stats::UserBreakdown;
use std::io::Write;

const NO_DATA: &str = "no data for the selected filters";

/// Computes all four statistic groups for `dataset` and writes them as text.
pub fn write_report<W: Write>(out: &mut W, dataset: &Dataset) -> AppResult<()> {
    write_time_stats(out, PopularTimes.run(dataset).as_ref())?;
    write_station_stats(out, PopularStations.run(dataset).as_ref())?;
    write_duration_stats(out, TripDurations.run(dataset).as_ref())?;
    write_user_stats(out, &UserBreakdown.run(dataset))?;
    Ok(())
}

fn rule<W: Write>(out: &mut W) -> AppResult<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    Ok(())
}

pub fn write_time_stats<W: Write>(out: &mut W, stats: Option<&TimeStats>) -> AppResult<()> {
    writeln!(out, "\nThe Most Frequent Times of Travel\n")?;
    match stats {
        Some(s) => {
            let month = month_name(s.popular_month).unwrap_or("unknown");
            writeln!(out, "Popular Month: {month}")?;
            writeln!(out, "Popular Day: {}", s.popular_day)?;
            writeln!(out, "Popular Hour: {}", s.popular_hour)?;
        }
        None => writeln!(out, "{NO_DATA}")?,
    }
    rule(out)
}

pub fn write_station_stats<W: Write>(out: &mut W, stats: Option<&StationStats>) -> AppResult<()> {
    writeln!(out, "\nThe Most Popular Stations and Trip\n")?;
    match stats {
        Some(s) => {
            writeln!(out, "Popular Start Station: {}", s.popular_start)?;
            writeln!(out, "Popular End Station: {}", s.popular_end)?;
            let (from, to) = &s.popular_trip;
            writeln!(out, "Popular Trip: {from} -> {to}")?;
        }
        None => writeln!(out, "{NO_DATA}")?,
    }
    rule(out)
}

pub fn write_duration_stats<W: Write>(out: &mut W, stats: Option<&DurationStats>) -> AppResult<()> {
    writeln!(out, "\nTrip Duration\n")?;
    match stats {
        Some(s) => {
            writeln!(out, "Total Travel Time: {:.2} seconds", s.total_secs)?;
            writeln!(out, "Average Travel Time: {:.2} seconds", s.mean_secs)?;
        }
        None => writeln!(out, "{NO_DATA}")?,
    }
    rule(out)
}

pub fn write_user_stats<W: Write>(out: &mut W, report: &UserReport) -> AppResult<()> {
    writeln!(out, "\nUser Stats\n")?;
    match report {
        UserReport::NotAvailable => {
            writeln!(out, "User statistics are not available for this city")?
        }
        UserReport::NoData => writeln!(out, "{NO_DATA}")?,
        UserReport::Stats(s) => {
            writeln!(out, "User Types:")?;
            for (kind, n) in &s.user_types {
                writeln!(out, "  {kind}: {n}")?;
            }
            writeln!(out, "Genders:")?;
            if s.genders.is_empty() {
                writeln!(out, "  no data")?;
            }
            for (gender, n) in &s.genders {
                writeln!(out, "  {gender}: {n}")?;
            }
            match &s.birth_years {
                Some(b) => {
                    writeln!(out, "Earliest Birth Year: {}", b.earliest)?;
                    writeln!(out, "Latest Birth Year: {}", b.latest)?;
                    writeln!(out, "Most Common Birth Year: {}", b.most_common)?;
                }
                None => writeln!(out, "Birth Year: no data")?,
            }
        }
    }
    rule(out)
}
