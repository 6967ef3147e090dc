use crate::errors::AppErrors;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The cities for which trip data is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of the city's trip export.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Washington does not publish gender or birth year.
    #[inline]
    pub fn publishes_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }

    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl FromStr for City {
    type Err = AppErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| AppErrors::InvalidChoice {
                kind: "city",
                value: s.to_string(),
            })
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!(
            "  New York City ".parse::<City>().unwrap(),
            City::NewYorkCity
        );
        assert_eq!("WASHINGTON".parse::<City>().unwrap(), City::Washington);
    }

    #[test]
    fn rejects_unknown_city() {
        let err = "boston".parse::<City>().unwrap_err();
        assert!(matches!(err, AppErrors::InvalidChoice { kind: "city", .. }));
    }

    #[test]
    fn only_washington_lacks_demographics() {
        assert!(City::Chicago.publishes_demographics());
        assert!(City::NewYorkCity.publishes_demographics());
        assert!(!City::Washington.publishes_demographics());
    }
}
