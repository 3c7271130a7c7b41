use crate::weather_data::decoder::ColumnKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Invalid year {year}: AZMET hourly data is available from {min} to {max}")]
    InvalidYear { year: i32, min: i32, max: i32 },

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read CSV row {row}")]
    CsvRead {
        row: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to decode row {row}")]
    Decode {
        row: u64,
        #[source]
        source: DecodeError,
    },

    #[error("Reporting timezone (UTC offset {offset_seconds}s) could not be resolved")]
    TimezoneUnavailable { offset_seconds: i32 },

    #[error("Timestamp for year {year}, day {day_of_year}, hour {hour} is out of range")]
    TimestampOutOfRange {
        year: i32,
        day_of_year: i32,
        hour: i32,
    },
}

/// Failure to turn a single row of text fields into an [`crate::HourlyReading`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Expected {expected} fields but found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Field {position} ('{column}') is not a valid {kind}: '{value}'")]
    FieldType {
        column: &'static str,
        position: usize,
        kind: ColumnKind,
        value: String,
    },
}
