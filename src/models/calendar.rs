use crate::errors::AppErrors;
use chrono::Weekday;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Months covered by the published data, in calendar order.
pub const FILTER_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Day of the week of a trip's start. Orders Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(w: Weekday) -> Self {
        DayOfWeek::ALL[w.num_days_from_monday() as usize]
    }
}

impl FromStr for DayOfWeek {
    type Err = AppErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DayOfWeek::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppErrors::InvalidChoice {
                kind: "day",
                value: s.to_string(),
            })
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// English name of a 1-based calendar month, or `None` when out of range.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Month constraint; `Only` holds the 1-based month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(u32),
}

impl MonthFilter {
    #[inline]
    pub fn matches(self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = AppErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(MonthFilter::All);
        }
        FILTER_MONTHS
            .iter()
            .position(|m| *m == wanted)
            .map(|idx| MonthFilter::Only(idx as u32 + 1))
            .ok_or_else(|| AppErrors::InvalidChoice {
                kind: "month",
                value: s.to_string(),
            })
    }
}

/// Day-of-week constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(DayOfWeek),
}

impl DayFilter {
    #[inline]
    pub fn matches(self, day: DayOfWeek) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => d == day,
        }
    }
}

impl FromStr for DayFilter {
    type Err = AppErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        s.parse().map(DayFilter::Only)
    }
}
