//! Contains `HourlyDataset`, the in-memory result of reading an AZMET hourly file.

use crate::types::station::WeatherStation;
use crate::types::weather_data::hourly::{HourlyReading, HourlyWeatherRecord};
use polars::prelude::*;

/// Hourly records in the order they appear in the source file.
///
/// Records are neither merged nor deduplicated. When obtained through
/// [`crate::Azmet::hourly`] the dataset also remembers the station and year it
/// was requested for.
///
/// # Examples
///
/// ```no_run
/// use azmet::{Azmet, WeatherStation};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Azmet::builder().build()?;
/// let dataset = client.hourly(WeatherStation::Maricopa, 2023)?;
///
/// let hottest = dataset
///     .iter()
///     .max_by(|a, b| a.reading().air_temperature.total_cmp(&b.reading().air_temperature));
/// if let Some(record) = hottest {
///     println!("Hottest hour: {} at {:.1}°C", record.timestamp(), record.reading().air_temperature);
/// }
///
/// let df = dataset.to_dataframe()?;
/// println!("{}", df.head(Some(5)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HourlyDataset {
    station: Option<WeatherStation>,
    year: Option<i32>,
    records: Vec<HourlyWeatherRecord>,
}

impl HourlyDataset {
    pub(crate) fn push(&mut self, record: HourlyWeatherRecord) {
        self.records.push(record);
    }

    pub(crate) fn with_source(mut self, station: WeatherStation, year: i32) -> Self {
        self.station = Some(station);
        self.year = Some(year);
        self
    }

    /// The station this dataset was requested for, if it came from a download.
    pub fn station(&self) -> Option<WeatherStation> {
        self.station
    }

    /// The year this dataset was requested for, if it came from a download.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HourlyWeatherRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HourlyWeatherRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<HourlyWeatherRecord> {
        self.records
    }

    /// Converts the dataset into a Polars `DataFrame`.
    ///
    /// There is one column per field of [`HourlyReading`], named as in
    /// [`crate::HOURLY_SCHEMA`], followed by a `datetime` column holding each
    /// record's timestamp as a timezone-naive UTC datetime (millisecond precision).
    ///
    /// # Errors
    ///
    /// Returns a [`PolarsError`] if the frame cannot be assembled.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let readings: Vec<&HourlyReading> = self.records.iter().map(|r| r.reading()).collect();
        let mut columns: Vec<Column> = HourlyReading::series(&readings)
            .into_iter()
            .map(Column::from)
            .collect();

        let millis: Vec<i64> = self
            .records
            .iter()
            .map(|r| r.timestamp().timestamp_millis())
            .collect();
        let datetime = Series::new("datetime".into(), millis)
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
        columns.push(Column::from(datetime));

        DataFrame::new(columns)
    }
}

impl IntoIterator for HourlyDataset {
    type Item = HourlyWeatherRecord;
    type IntoIter = std::vec::IntoIter<HourlyWeatherRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a HourlyDataset {
    type Item = &'a HourlyWeatherRecord;
    type IntoIter = std::slice::Iter<'a, HourlyWeatherRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
