//! Schedule loading.
//!
//! Two on-disk encodings are accepted: a whitespace-delimited line format
//! (`ORIGIN DEST FLIGHTNUM HH:MM HH:MM ECONOMY BUSINESS FIRST`, with blank
//! lines and `#` comments ignored) and a header-row CSV format with named
//! columns. A single malformed row fails the whole load; no partial
//! schedule is ever returned.

use crate::flight::Flight;
use crate::time::{Time, TimeError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const CSV_COLUMNS: [&str; 8] = [
    "origin",
    "dest",
    "flight_number",
    "depart",
    "arrive",
    "economy",
    "business",
    "first",
];

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    InvalidHeader {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}:{row}: {source}", .path.display())]
    InvalidRow {
        path: PathBuf,
        row: usize,
        #[source]
        source: RowError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("expected 8 fields, found {0}")]
    FieldCount(usize),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error("arrival {arrive} is not after departure {depart}")]
    NonPositiveDuration { depart: Time, arrive: Time },

    #[error("invalid fare '{0}'")]
    Fare(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Load a schedule file, picking the encoding by extension: `.csv` selects
/// the header-row format, anything else the whitespace line format.
pub fn load_flights(path: &Path) -> Result<Vec<Flight>, ScheduleError> {
    let data = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        parse_csv_schedule(&data, path)
    } else {
        parse_txt_schedule(&data, path)
    }
}

fn parse_txt_schedule(data: &str, path: &Path) -> Result<Vec<Flight>, ScheduleError> {
    let mut flights = Vec::new();
    for (idx, line) in data.lines().enumerate() {
        match parse_txt_line(line) {
            Ok(Some(flight)) => flights.push(flight),
            Ok(None) => {}
            Err(source) => {
                return Err(ScheduleError::InvalidRow {
                    path: path.to_path_buf(),
                    row: idx + 1,
                    source,
                });
            }
        }
    }
    Ok(flights)
}

/// Parse one whitespace-delimited schedule line. Blank lines and `#`
/// comments yield `Ok(None)`.
fn parse_txt_line(line: &str) -> Result<Option<Flight>, RowError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[origin, dest, number, depart, arrive, economy, business, first] = fields.as_slice()
    else {
        return Err(RowError::FieldCount(fields.len()));
    };

    let depart = Time::parse_hhmm(depart)?;
    let arrive = Time::parse_hhmm(arrive)?;
    validate_times(depart, arrive)?;

    Ok(Some(Flight {
        origin: Arc::from(origin),
        dest: Arc::from(dest),
        number: Arc::from(number),
        depart,
        arrive,
        economy: parse_fare(economy)?,
        business: parse_fare(business)?,
        first: parse_fare(first)?,
    }))
}

/// Raw CSV row; times stay strings here so their validation errors carry a
/// row number instead of surfacing as serde failures.
#[derive(Deserialize)]
struct CsvRow {
    origin: String,
    dest: String,
    flight_number: String,
    depart: String,
    arrive: String,
    economy: u32,
    business: u32,
    first: u32,
}

fn parse_csv_schedule(data: &str, path: &Path) -> Result<Vec<Flight>, ScheduleError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| ScheduleError::InvalidHeader {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    for column in CSV_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ScheduleError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut flights = Vec::new();
    for (idx, record) in reader.deserialize::<CsvRow>().enumerate() {
        // the header occupies row 1
        let row = idx + 2;
        let flight = record
            .map_err(RowError::from)
            .and_then(flight_from_csv_row)
            .map_err(|source| ScheduleError::InvalidRow {
                path: path.to_path_buf(),
                row,
                source,
            })?;
        flights.push(flight);
    }
    Ok(flights)
}

fn flight_from_csv_row(row: CsvRow) -> Result<Flight, RowError> {
    let depart = Time::parse_hhmm(&row.depart)?;
    let arrive = Time::parse_hhmm(&row.arrive)?;
    validate_times(depart, arrive)?;

    Ok(Flight {
        origin: Arc::from(row.origin.as_str()),
        dest: Arc::from(row.dest.as_str()),
        number: Arc::from(row.flight_number.as_str()),
        depart,
        arrive,
        economy: row.economy,
        business: row.business,
        first: row.first,
    })
}

fn validate_times(depart: Time, arrive: Time) -> Result<(), RowError> {
    if arrive <= depart {
        return Err(RowError::NonPositiveDuration { depart, arrive });
    }
    Ok(())
}

fn parse_fare(field: &str) -> Result<u32, RowError> {
    field.parse().map_err(|_| RowError::Fare(field.to_string()))
}
