use crate::weather_data::decoder::{parse_column, ColumnSpec, ColumnValue};
use crate::weather_data::error::{DecodeError, WeatherDataError};
use crate::weather_data::timestamp::resolve;
use chrono::{DateTime, FixedOffset};
use polars::prelude::{NamedFrom, Series};
use serde::Serialize;

/// Declares the hourly column layout once and derives from it the reading
/// struct, its schema, its row parser and its per-column series.
macro_rules! hourly_columns {
    ($(
        $(#[$doc:meta])*
        $field:ident: $ty:ty,
    )+) => {
        /// Column layout of an AZMET hourly file, in source order.
        ///
        /// Position, not name, identifies a column: the files carry no header row.
        pub const HOURLY_SCHEMA: &[ColumnSpec] = &[
            $(ColumnSpec {
                name: stringify!($field),
                kind: <$ty as ColumnValue>::KIND,
            },)+
        ];

        /// One row of an AZMET hourly file.
        ///
        /// Measurements are carried exactly as published, including the
        /// provider's sentinel values for missing data.
        #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
        pub struct HourlyReading {
            $(
                $(#[$doc])*
                pub $field: $ty,
            )+
        }

        impl HourlyReading {
            /// Parses fields in schema order. Callers check the row width first.
            pub(crate) fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, DecodeError> {
                let mut cells = HOURLY_SCHEMA.iter().zip(fields).enumerate();
                Ok(Self {
                    $($field: {
                        let (index, (column, raw)) = cells.next().ok_or(DecodeError::FieldCount {
                            expected: HOURLY_SCHEMA.len(),
                            found: fields.len(),
                        })?;
                        parse_column::<$ty>(column, index + 1, raw.as_ref())?
                    },)+
                })
            }

            pub(crate) fn series(readings: &[&HourlyReading]) -> Vec<Series> {
                vec![$(
                    Series::new(
                        stringify!($field).into(),
                        readings.iter().map(|r| r.$field).collect::<Vec<$ty>>(),
                    ),
                )+]
            }
        }
    };
}

hourly_columns! {
    /// Four-digit year.
    year: i32,
    /// Day of the year, 1 = January 1st.
    day_of_year: i32,
    /// Hour of the local day the observation belongs to.
    hour: i32,
    /// Air temperature, °C.
    air_temperature: f32,
    /// Relative humidity, %.
    relative_humidity: f32,
    /// Vapor pressure deficit, kPa.
    vapor_pressure_deficit: f32,
    /// Solar radiation, MJ/m².
    solar_radiation: f32,
    /// Precipitation, mm.
    precipitation: f32,
    /// Soil temperature at 4 inches, °C.
    soil_temperature_4in: f32,
    /// Soil temperature at 20 inches, °C.
    soil_temperature_20in: f32,
    /// Average wind speed, m/s.
    wind_speed_average: f32,
    /// Wind vector magnitude, m/s.
    wind_vector_magnitude: f32,
    /// Wind vector direction, degrees.
    wind_vector_direction: f32,
    /// Standard deviation of wind direction, degrees.
    wind_direction_std_dev: f32,
    /// Maximum wind speed, m/s.
    wind_speed_max: f32,
    /// Reference evapotranspiration, mm.
    evapotranspiration: f32,
    /// Actual vapor pressure, kPa.
    vapor_pressure_actual: f32,
    /// Hourly average dewpoint, °C.
    dewpoint_hourly_average: f32,
}

/// An [`HourlyReading`] together with the instant it was observed.
///
/// The timestamp is derived from the reading's year, day of year and hour in
/// the network's reporting timezone (see [`crate::resolve`]). It cannot be set
/// directly; changing the observation time goes through
/// [`HourlyWeatherRecord::set_observation_time`], which recomputes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyWeatherRecord {
    #[serde(flatten)]
    reading: HourlyReading,
    timestamp: DateTime<FixedOffset>,
}

impl HourlyWeatherRecord {
    /// Attaches the resolved timestamp to a reading.
    ///
    /// # Errors
    ///
    /// Fails with the errors of [`crate::resolve`].
    pub fn new(reading: HourlyReading) -> Result<Self, WeatherDataError> {
        let timestamp = resolve(reading.year, reading.day_of_year, reading.hour)?;
        Ok(Self { reading, timestamp })
    }

    pub fn reading(&self) -> &HourlyReading {
        &self.reading
    }

    pub fn into_reading(self) -> HourlyReading {
        self.reading
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Moves the record to another observation time.
    ///
    /// The record is left untouched if the new timestamp cannot be resolved.
    pub fn set_observation_time(
        &mut self,
        year: i32,
        day_of_year: i32,
        hour: i32,
    ) -> Result<(), WeatherDataError> {
        self.timestamp = resolve(year, day_of_year, hour)?;
        self.reading.year = year;
        self.reading.day_of_year = day_of_year;
        self.reading.hour = hour;
        Ok(())
    }
}
