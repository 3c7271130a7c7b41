//! Defines the `WeatherStation` enum, mapping AZMET station identities to the
//! numeric codes the provider uses in its data file names.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An AZMET weather station.
///
/// Each variant carries the fixed, provider-assigned station code. The codes are
/// not contiguous: stations that were retired or renumbered leave gaps.
///
/// # Examples
///
/// ```
/// use azmet::WeatherStation;
///
/// assert_eq!(WeatherStation::PhoenixGreenway.code(), 12);
/// assert_eq!(WeatherStation::from_code(1), Some(WeatherStation::Tucson));
/// assert_eq!("yuma-north".parse::<WeatherStation>().unwrap(), WeatherStation::YumaNorth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeatherStation {
    Tucson = 1,
    YumaValley = 2,
    Safford = 4,
    Coolidge = 5,
    Maricopa = 6,
    Aguila = 7,
    Parker = 8,
    Bonita = 9,
    PhoenixGreenway = 12,
    YumaNorth = 14,
    PhoenixEncanto = 15,
    Paloma = 19,
    Mohave = 20,
    QueenCreek = 22,
    Harquahala = 23,
    Roll = 24,
    Buckeye = 26,
    DesertRidge = 27,
    Mohave2 = 28,
    Payson = 32,
    Bowie = 33,
    Parker2 = 35,
    YumaSouth = 36,
    SanSimon = 37,
    Sahuarita = 38,
    Willcox = 39,
    FtMohave = 40,
    Salome = 41,
}

impl WeatherStation {
    /// Every registered station, in ascending code order.
    pub const ALL: [WeatherStation; 28] = [
        WeatherStation::Tucson,
        WeatherStation::YumaValley,
        WeatherStation::Safford,
        WeatherStation::Coolidge,
        WeatherStation::Maricopa,
        WeatherStation::Aguila,
        WeatherStation::Parker,
        WeatherStation::Bonita,
        WeatherStation::PhoenixGreenway,
        WeatherStation::YumaNorth,
        WeatherStation::PhoenixEncanto,
        WeatherStation::Paloma,
        WeatherStation::Mohave,
        WeatherStation::QueenCreek,
        WeatherStation::Harquahala,
        WeatherStation::Roll,
        WeatherStation::Buckeye,
        WeatherStation::DesertRidge,
        WeatherStation::Mohave2,
        WeatherStation::Payson,
        WeatherStation::Bowie,
        WeatherStation::Parker2,
        WeatherStation::YumaSouth,
        WeatherStation::SanSimon,
        WeatherStation::Sahuarita,
        WeatherStation::Willcox,
        WeatherStation::FtMohave,
        WeatherStation::Salome,
    ];

    /// The provider-assigned station code.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Looks up a station by its provider code.
    ///
    /// Returns `None` for codes that do not belong to a registered station.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|station| station.code() == code)
    }

    /// A human-readable station name, as AZMET labels it.
    pub fn name(self) -> &'static str {
        match self {
            WeatherStation::Tucson => "Tucson",
            WeatherStation::YumaValley => "Yuma Valley",
            WeatherStation::Safford => "Safford",
            WeatherStation::Coolidge => "Coolidge",
            WeatherStation::Maricopa => "Maricopa",
            WeatherStation::Aguila => "Aguila",
            WeatherStation::Parker => "Parker",
            WeatherStation::Bonita => "Bonita",
            WeatherStation::PhoenixGreenway => "Phoenix Greenway",
            WeatherStation::YumaNorth => "Yuma North Gila",
            WeatherStation::PhoenixEncanto => "Phoenix Encanto",
            WeatherStation::Paloma => "Paloma",
            WeatherStation::Mohave => "Mohave",
            WeatherStation::QueenCreek => "Queen Creek",
            WeatherStation::Harquahala => "Harquahala",
            WeatherStation::Roll => "Roll",
            WeatherStation::Buckeye => "Buckeye",
            WeatherStation::DesertRidge => "Desert Ridge",
            WeatherStation::Mohave2 => "Mohave #2",
            WeatherStation::Payson => "Payson",
            WeatherStation::Bowie => "Bowie",
            WeatherStation::Parker2 => "Parker #2",
            WeatherStation::YumaSouth => "Yuma South",
            WeatherStation::SanSimon => "San Simon",
            WeatherStation::Sahuarita => "Sahuarita",
            WeatherStation::Willcox => "Willcox Bench",
            WeatherStation::FtMohave => "Fort Mohave",
            WeatherStation::Salome => "Salome",
        }
    }
}

impl fmt::Display for WeatherStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown weather station '{0}'")]
pub struct StationParseError(pub String);

/// Parses either a provider code (`"12"`) or a variant name, ignoring case,
/// spaces, dashes and underscores (`"phoenix-greenway"`, `"PhoenixGreenway"`).
impl FromStr for WeatherStation {
    type Err = StationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u32>() {
            return Self::from_code(code).ok_or_else(|| StationParseError(s.to_string()));
        }

        let wanted = normalize(trimmed);
        Self::ALL
            .into_iter()
            .find(|station| normalize(&format!("{:?}", station)) == wanted)
            .ok_or_else(|| StationParseError(s.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
