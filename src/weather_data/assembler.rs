use crate::types::hourly_dataset::HourlyDataset;
use crate::types::weather_data::hourly::HourlyWeatherRecord;
use crate::weather_data::decoder::decode_record;
use crate::weather_data::error::WeatherDataError;
use csv::ReaderBuilder;
use log::debug;
use std::io::Read;

/// Reads an AZMET hourly file into an [`HourlyDataset`].
///
/// Rows are comma-separated with no header. Each row is decoded and given its
/// timestamp, and records keep the order they were read in. The first row that
/// fails aborts the whole read: no partial dataset is ever returned. The reader
/// is consumed and dropped before this function returns.
///
/// Row numbers in errors are 1-based and count records, not lines.
///
/// # Errors
///
/// * [`WeatherDataError::CsvRead`] if the text cannot be split into rows.
/// * [`WeatherDataError::Decode`] if a row has the wrong width or a bad field.
/// * The errors of [`crate::resolve`] if a row's timestamp cannot be derived.
///
/// # Examples
///
/// ```
/// use azmet::assemble;
///
/// let file = "2023,1,0,8.1,56.4,0.47,0,0,12.3,15.6,1.2,1.1,215,22,2.9,0,0.61,-0.2\n\
///             2023,1,1,7.6,58.9,0.43,0,0,11.9,15.6,0.9,0.8,190,18,2.2,0,0.61,-0.3\n";
/// let dataset = assemble(file.as_bytes()).unwrap();
/// assert_eq!(dataset.len(), 2);
/// ```
pub fn assemble<R: Read>(reader: R) -> Result<HourlyDataset, WeatherDataError> {
    let mut rows = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut dataset = HourlyDataset::default();
    for (index, row) in rows.records().enumerate() {
        let row_number = index as u64 + 1;
        let row = row.map_err(|source| WeatherDataError::CsvRead {
            row: row_number,
            source,
        })?;
        let reading = decode_record(&row).map_err(|source| WeatherDataError::Decode {
            row: row_number,
            source,
        })?;
        dataset.push(HourlyWeatherRecord::new(reading)?);
    }

    debug!("Assembled {} hourly records", dataset.len());
    Ok(dataset)
}
