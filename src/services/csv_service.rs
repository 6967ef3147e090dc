use crate::config::DataConfig;
use crate::consts::{DEMOGRAPHIC_COLUMNS, REQUIRED_COLUMNS};
use crate::errors::{AppErrors, AppResult};
use crate::models::city::City;
use crate::models::csv_models::trip_row::{InputRow, OutputRow};
use crate::models::trip::{Dataset, TripRecord};
use csv::{ReaderBuilder, WriterBuilder};
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Loads every trip for `city` from the configured data directory.
///
/// Rows that cannot be parsed are skipped and counted in
/// [`Dataset::skipped_rows`]; a missing file or missing required column
/// fails the whole load.
///
/// # Returns
/// * `AppResult<Dataset>` - the city's trips with derived calendar fields,
///   or `AppErrors::DataUnavailable`.
pub fn load_city(config: &DataConfig, city: City) -> AppResult<Dataset> {
    let path = config.path_for(city);
    let file = File::open(&path).map_err(|e| AppErrors::DataUnavailable {
        path: path.clone(),
        reason: format!("open: {e}"),
    })?;
    load_from_reader(city, &path, BufReader::new(file))
}

/// Parses trips for `city` from any reader. `path` is only used in errors and logs.
pub fn load_from_reader<R: Read>(city: City, path: &Path, reader: R) -> AppResult<Dataset> {
    let unavailable = |reason: String| AppErrors::DataUnavailable {
        path: path.to_path_buf(),
        reason,
    };

    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| unavailable(format!("read header: {e}")))?
        .clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !has_column(*c)) {
        return Err(unavailable(format!("missing column {missing:?}")));
    }
    let has_demographics =
        city.publishes_demographics() && DEMOGRAPHIC_COLUMNS.into_iter().all(|c| has_column(c));

    let mut trips = Vec::new();
    let mut skipped = 0usize;
    for (idx, rec) in rdr.deserialize::<InputRow>().enumerate() {
        // header is line 1
        let line = idx + 2;
        match rec {
            Ok(row) => match TripRecord::try_from(row) {
                Ok(trip) => trips.push(trip),
                Err(e) => {
                    warn!("skip row at line {line}: {e}");
                    skipped += 1;
                }
            },
            Err(e) => {
                warn!("skip malformed CSV row at line {line}: {e}");
                skipped += 1;
            }
        }
    }

    info!(
        "loaded {} trips for {city} from {} ({skipped} skipped)",
        trips.len(),
        path.display()
    );

    let mut dataset = Dataset::new(city, trips, has_demographics);
    dataset.skipped_rows = skipped;
    Ok(dataset)
}

/// Writes `trips` as CSV with a header row.
pub fn write_raw_rows<W: Write>(out: W, trips: &[TripRecord]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(out);
    for trip in trips {
        wtr.serialize(OutputRow::from(trip))
            .map_err(|e| AppErrors::Io(format!("write csv: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppErrors::Io(format!("flush csv: {e}")))?;
    Ok(())
}
