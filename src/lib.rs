mod azmet;
mod error;
mod types;
mod weather_data;

pub use azmet::*;
pub use error::AzmetError;

pub use types::hourly_dataset::HourlyDataset;
pub use types::station::{StationParseError, WeatherStation};
pub use types::weather_data::hourly::{HourlyReading, HourlyWeatherRecord, HOURLY_SCHEMA};

pub use weather_data::assembler::assemble;
pub use weather_data::decoder::{
    decode, decode_record, ColumnKind, ColumnSpec, ColumnValue, FIELD_COUNT,
};
pub use weather_data::error::{DecodeError, WeatherDataError};
pub use weather_data::fetcher::{Fetch, HttpFetcher, DEFAULT_TIMEOUT};
pub use weather_data::locator::{
    file_name, locate, validate_year, DEFAULT_BASE_URL, FIRST_YEAR, LAST_YEAR,
};
pub use weather_data::timestamp::{reporting_timezone, resolve, REPORTING_UTC_OFFSET_SECONDS};
