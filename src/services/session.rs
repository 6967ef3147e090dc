use crate::config::DataConfig;
use crate::errors::{AppErrors, AppResult};
use crate::models::calendar::{DayFilter, MonthFilter};
use crate::models::city::City;
use crate::models::trip::Dataset;
use crate::services::csv_service::{load_city, write_raw_rows};
use crate::services::filter_service::filter_dataset;
use crate::services::report_service::write_report;
use crate::state::RawRowPager;
use log::{debug, error};
use std::io::{BufRead, Write};
use std::str::FromStr;

const CITY_PROMPT: &str = "Would you like data for chicago, new york city, or washington?";
const MONTH_PROMPT: &str =
    "Which month would you like data for: january .. june (type 'all' for no month filter)?";
const DAY_PROMPT: &str =
    "Which day would you like data for: monday .. sunday (type 'all' for no day filter)?";

/// Loads `city`, applies the filters and returns the narrowed dataset.
pub fn run_query(
    config: &DataConfig,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> AppResult<Dataset> {
    let dataset = load_city(config, city)?;
    Ok(filter_dataset(&dataset, month, day))
}

/// Writes the skipped-row note and the full report for one query.
pub fn write_query_report<W: Write>(out: &mut W, dataset: &Dataset) -> AppResult<()> {
    if dataset.skipped_rows > 0 {
        writeln!(
            out,
            "\nNote: {} malformed rows were skipped while loading {}.",
            dataset.skipped_rows, dataset.city
        )?;
    }
    writeln!(out, "\n{} matching trips in {}.", dataset.len(), dataset.city)?;
    write_report(out, dataset)
}

/// Interactive dialogue: pick a city and filters, read the report, page
/// through raw trips, restart or quit. End of input ends the session.
pub struct Session<R, W> {
    config: DataConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: DataConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;
        loop {
            if !self.run_cycle()? {
                break;
            }
            if !self.ask_yes("Would you like to restart? Enter yes or no.")? {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// One query cycle. Returns `false` when input ran out.
    fn run_cycle(&mut self) -> AppResult<bool> {
        let Some(city) = self.prompt::<City>(CITY_PROMPT)? else {
            return Ok(false);
        };
        let Some(month) = self.prompt::<MonthFilter>(MONTH_PROMPT)? else {
            return Ok(false);
        };
        let Some(day) = self.prompt::<DayFilter>(DAY_PROMPT)? else {
            return Ok(false);
        };

        let dataset = match run_query(&self.config, city, month, day) {
            Ok(ds) => ds,
            Err(e @ AppErrors::DataUnavailable { .. }) => {
                error!("{e}");
                writeln!(self.output, "\nSorry, the {city} data could not be loaded: {e}")?;
                return Ok(true);
            }
            Err(e) => return Err(e),
        };

        write_query_report(&mut self.output, &dataset)?;
        self.page_raw_rows(&dataset)?;
        Ok(true)
    }

    fn page_raw_rows(&mut self, dataset: &Dataset) -> AppResult<()> {
        let mut pager = RawRowPager::default();
        let mut question = "Would you like five rows of raw data? Enter yes or no.";
        while !pager.is_exhausted(dataset) && self.ask_yes(question)? {
            if let Some(page) = pager.next_page(dataset) {
                write_raw_rows(&mut self.output, page)?;
            }
            question = "Would you like five more rows of raw data? Enter yes or no.";
        }
        Ok(())
    }

    /// Re-asks until the answer parses. `None` on end of input.
    fn prompt<T>(&mut self, question: &str) -> AppResult<Option<T>>
    where
        T: FromStr<Err = AppErrors>,
    {
        writeln!(self.output, "\n{question}")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    debug!("rejected answer: {e}");
                    writeln!(self.output, "\nIncorrect input. {question}")?;
                }
            }
        }
    }

    fn ask_yes(&mut self, question: &str) -> AppResult<bool> {
        writeln!(self.output, "\n{question}")?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
    }

    fn read_line(&mut self) -> AppResult<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CHICAGO_HEADER, WASHINGTON_HEADER, write_city_file};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn fixture_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let chicago: Vec<String> = (0..7)
            .map(|i| {
                format!(
                    "{i},2017-01-0{} 08:00:00,2017-01-0{} 08:10:00,600,Canal St,Clark St,Subscriber,Male,1980",
                    i + 2,
                    i + 2
                )
            })
            .collect();
        let rows: Vec<&str> = chicago.iter().map(String::as_str).collect();
        write_city_file(dir.path(), City::Chicago, CHICAGO_HEADER, &rows);
        write_city_file(
            dir.path(),
            City::Washington,
            WASHINGTON_HEADER,
            &["0,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,A,B,Subscriber"],
        );
        dir
    }

    fn run_session(dir: &TempDir, script: &str) -> String {
        let mut out = Vec::new();
        Session::new(DataConfig::new(dir.path()), Cursor::new(script), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_cycle_with_raw_rows() {
        // arrange
        let dir = fixture_dir();

        // act
        let text = run_session(&dir, "Chicago\njanuary\nall\nyes\nyes\nno\n");

        // assert
        assert!(text.contains("7 matching trips in chicago"));
        assert!(text.contains("Popular Start Station: Canal St"));
        assert!(text.contains("Male: 7"));
        // header row once per page, 5 + 2 trips
        assert_eq!(text.matches("Start Time,End Time").count(), 2);
        assert_eq!(text.matches("Canal St,Clark St,Subscriber").count(), 7);
        assert!(text.contains("Would you like to restart?"));
    }

    #[test]
    fn invalid_answers_are_re_asked() {
        let dir = fixture_dir();

        let text = run_session(&dir, "boston\nwashington\njuly\nall\nfunday\nall\nno\nno\n");

        assert_eq!(text.matches("Incorrect input.").count(), 3);
        assert!(text.contains("User statistics are not available for this city"));
    }

    #[test]
    fn restart_runs_another_query() {
        let dir = fixture_dir();

        let text = run_session(
            &dir,
            "washington\nall\nall\nno\nyes\nchicago\nfebruary\nall\nno\n",
        );

        assert!(text.contains("1 matching trips in washington"));
        assert!(text.contains("0 matching trips in chicago"));
        assert!(text.contains("no data for the selected filters"));
    }

    #[test]
    fn missing_city_file_is_reported_and_session_continues() {
        let dir = fixture_dir();

        let text = run_session(&dir, "new york city\nall\nall\nno\n");

        assert!(text.contains("the new york city data could not be loaded"));
        assert!(text.contains("Would you like to restart?"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let dir = fixture_dir();
        let text = run_session(&dir, "chicago\n");
        assert!(!text.contains("matching trips"));
    }

    #[test]
    fn run_query_propagates_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_query(
            &DataConfig::new(dir.path()),
            City::Washington,
            MonthFilter::All,
            DayFilter::All,
        )
        .unwrap_err();
        assert!(matches!(err, AppErrors::DataUnavailable { .. }));
    }
}
