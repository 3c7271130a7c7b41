//! Derives the observation instant of an hourly record.

use crate::weather_data::error::WeatherDataError;
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};

/// UTC offset the AZMET network reports in (America/Phoenix, MST all year).
pub const REPORTING_UTC_OFFSET_SECONDS: i32 = -7 * 3600;

/// The fixed timezone AZMET observations are reported in.
///
/// Arizona does not observe daylight saving time, so a fixed offset describes
/// every instant of the year.
pub fn reporting_timezone() -> Result<FixedOffset, WeatherDataError> {
    FixedOffset::east_opt(REPORTING_UTC_OFFSET_SECONDS).ok_or(
        WeatherDataError::TimezoneUnavailable {
            offset_seconds: REPORTING_UTC_OFFSET_SECONDS,
        },
    )
}

/// Resolves `(year, day_of_year, hour)` to an instant in the reporting timezone.
///
/// The result is local midnight on January 1st of `year`, advanced by `hour`
/// hours and then by `day_of_year - 1` whole days. Counting days from a fixed
/// anchor handles month boundaries and leap years without calendar arithmetic.
///
/// Neither `day_of_year` nor `hour` is range-checked: day 367 of a leap year
/// (or 366 of a common one) silently lands in the following year, and hour 24
/// on the next day. Callers that need strict input must validate beforehand.
///
/// # Errors
///
/// * [`WeatherDataError::TimezoneUnavailable`] if the reporting offset cannot be built.
/// * [`WeatherDataError::TimestampOutOfRange`] if the instant is not representable.
///
/// # Examples
///
/// ```
/// use azmet::resolve;
/// use chrono::{Datelike, Timelike};
///
/// let leap_day_end = resolve(2024, 366, 0).unwrap();
/// assert_eq!((leap_day_end.month(), leap_day_end.day()), (12, 31));
/// assert_eq!(leap_day_end.hour(), 0);
/// ```
pub fn resolve(
    year: i32,
    day_of_year: i32,
    hour: i32,
) -> Result<DateTime<FixedOffset>, WeatherDataError> {
    let timezone = reporting_timezone()?;
    let out_of_range = || WeatherDataError::TimestampOutOfRange {
        year,
        day_of_year,
        hour,
    };

    let new_year = timezone
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(out_of_range)?;

    TimeDelta::try_hours(i64::from(hour))
        .and_then(|hours| new_year.checked_add_signed(hours))
        .and_then(|at_hour| {
            TimeDelta::try_days(i64::from(day_of_year) - 1)
                .and_then(|days| at_hour.checked_add_signed(days))
        })
        .ok_or_else(out_of_range)
}
