//! Turns one row of text fields from an AZMET hourly file into an [`HourlyReading`].
//!
//! The column layout is declared once, alongside [`HourlyReading`], and yields
//! both the struct and [`HOURLY_SCHEMA`]. The kind of every column is taken from
//! the Rust type of its field through [`ColumnValue`], so the schema, the field
//! order and the parser used per column cannot drift apart.

use crate::types::weather_data::hourly::{HourlyReading, HOURLY_SCHEMA};
use crate::weather_data::error::DecodeError;
use csv::StringRecord;
use serde::Serialize;
use std::fmt;

/// Number of fields in every row of an hourly file.
pub const FIELD_COUNT: usize = HOURLY_SCHEMA.len();

/// How the text of a column is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnKind {
    /// A base-10 signed integer (`i32`).
    Integer,
    /// A decimal number (`f32`).
    Decimal,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Decimal => write!(f, "decimal"),
        }
    }
}

/// A named, typed column at a fixed position in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

/// A Rust type that a column can be decoded into.
pub trait ColumnValue: Sized {
    const KIND: ColumnKind;

    fn parse_cell(raw: &str) -> Option<Self>;
}

impl ColumnValue for i32 {
    const KIND: ColumnKind = ColumnKind::Integer;

    fn parse_cell(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl ColumnValue for f32 {
    const KIND: ColumnKind = ColumnKind::Decimal;

    fn parse_cell(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// Parses a single cell. `position` is 1-based and only used for error reporting.
pub(crate) fn parse_column<T: ColumnValue>(
    column: &ColumnSpec,
    position: usize,
    raw: &str,
) -> Result<T, DecodeError> {
    T::parse_cell(raw).ok_or_else(|| DecodeError::FieldType {
        column: column.name,
        position,
        kind: column.kind,
        value: raw.to_string(),
    })
}

/// Decodes one row of fields into an [`HourlyReading`].
///
/// The row must contain exactly [`FIELD_COUNT`] fields; the width is checked
/// before any cell is parsed. Fields are read by position and taken verbatim:
/// a cell padded with whitespace is a type error, and no field is optional.
///
/// # Errors
///
/// * [`DecodeError::FieldCount`] if the row is too short or too long.
/// * [`DecodeError::FieldType`] naming the first field that does not parse as
///   its column's kind.
///
/// # Examples
///
/// ```
/// use azmet::{decode, DecodeError};
///
/// let row = "2024,1,0,8.1,56.4,0.47,0,0,12.3,15.6,1.2,1.1,215,22,2.9,0,0.61,-0.2";
/// let fields: Vec<&str> = row.split(',').collect();
/// let reading = decode(&fields).unwrap();
/// assert_eq!(reading.year, 2024);
/// assert_eq!(reading.air_temperature, 8.1);
///
/// let short = &fields[..17];
/// assert_eq!(
///     decode(short),
///     Err(DecodeError::FieldCount { expected: 18, found: 17 })
/// );
/// ```
pub fn decode<S: AsRef<str>>(fields: &[S]) -> Result<HourlyReading, DecodeError> {
    if fields.len() != FIELD_COUNT {
        return Err(DecodeError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }
    HourlyReading::from_fields(fields)
}

/// Same as [`decode`], for a row produced by the `csv` crate.
pub fn decode_record(record: &StringRecord) -> Result<HourlyReading, DecodeError> {
    let fields: Vec<&str> = record.iter().collect();
    decode(&fields)
}
