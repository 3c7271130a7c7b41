use crate::types::station::WeatherStation;
use crate::weather_data::error::WeatherDataError;

/// Directory the AZMET hourly files are published in.
pub const DEFAULT_BASE_URL: &str = "https://cals.arizona.edu/azmet/data";

/// Earliest year the provider publishes hourly files for.
pub const FIRST_YEAR: i32 = 2003;

/// Latest year accepted. The file names carry a two-digit year, so anything
/// past 2099 would collide with an earlier century.
pub const LAST_YEAR: i32 = 2099;

/// Checks that `year` is within [`FIRST_YEAR`]..=[`LAST_YEAR`].
pub fn validate_year(year: i32) -> Result<i32, WeatherDataError> {
    if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(WeatherDataError::InvalidYear {
            year,
            min: FIRST_YEAR,
            max: LAST_YEAR,
        })
    }
}

/// Name of the hourly file for a station and year: the two-digit year,
/// immediately followed by the station code and `rh.txt`.
///
/// The year is not validated here; see [`locate`].
pub fn file_name(station: WeatherStation, year: i32) -> String {
    format!("{:02}{}rh.txt", year.rem_euclid(100), station.code())
}

/// Builds the URL of the hourly file for `station` in `year` under `base_url`.
///
/// # Errors
///
/// Returns [`WeatherDataError::InvalidYear`] for years outside
/// [`FIRST_YEAR`]..=[`LAST_YEAR`].
///
/// # Examples
///
/// ```
/// use azmet::{locate, WeatherStation, DEFAULT_BASE_URL};
///
/// let url = locate(DEFAULT_BASE_URL, WeatherStation::PhoenixGreenway, 2024).unwrap();
/// assert_eq!(url, "https://cals.arizona.edu/azmet/data/2412rh.txt");
/// assert!(locate(DEFAULT_BASE_URL, WeatherStation::PhoenixGreenway, 2002).is_err());
/// ```
pub fn locate(
    base_url: &str,
    station: WeatherStation,
    year: i32,
) -> Result<String, WeatherDataError> {
    let year = validate_year(year)?;
    Ok(format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        file_name(station, year)
    ))
}
