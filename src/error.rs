use crate::weather_data::error::WeatherDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AzmetError {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}
