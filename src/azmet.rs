//! This module provides the main entry point for downloading AZMET hourly data.

use crate::error::AzmetError;
use crate::types::hourly_dataset::HourlyDataset;
use crate::types::station::WeatherStation;
use crate::weather_data::assembler::assemble;
use crate::weather_data::fetcher::{Fetch, HttpFetcher, DEFAULT_TIMEOUT};
use crate::weather_data::locator::{locate, DEFAULT_BASE_URL};
use bon::bon;
use log::info;
use std::time::Duration;

/// The client for downloading hourly AZMET station data.
///
/// Each call to [`Azmet::hourly`] performs one blocking download of one
/// station-year file and decodes it completely. Nothing is cached and failed
/// downloads are not retried.
///
/// Create an instance with [`Azmet::builder()`]; all settings are optional.
///
/// # Examples
///
/// ```no_run
/// # use azmet::{Azmet, AzmetError, WeatherStation};
/// # use std::time::Duration;
/// # fn main() -> Result<(), AzmetError> {
/// let client = Azmet::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// let dataset = client.hourly(WeatherStation::PhoenixGreenway, 2023)?;
/// println!("{} hourly records", dataset.len());
/// # Ok(())
/// # }
/// ```
pub struct Azmet {
    base_url: String,
    fetcher: Box<dyn Fetch + Send + Sync>,
}

#[bon]
impl Azmet {
    /// Creates a client that downloads over HTTP.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Directory the hourly files are served from. Defaults to
    ///   [`DEFAULT_BASE_URL`].
    /// * `timeout` - Bound on each download. Defaults to [`DEFAULT_TIMEOUT`] (10 seconds).
    ///
    /// # Errors
    ///
    /// Returns [`AzmetError::ClientBuild`] if the HTTP client cannot be initialised.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, AzmetError> {
        let fetcher = HttpFetcher::new(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .map_err(AzmetError::ClientBuild)?;
        Ok(Self::with_fetcher(
            base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            fetcher,
        ))
    }

    /// Creates a client that retrieves files through a custom [`Fetch`] implementation.
    pub fn with_fetcher(
        base_url: impl Into<String>,
        fetcher: impl Fetch + Send + Sync + 'static,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher: Box::new(fetcher),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Downloads and decodes the hourly file of `station` for `year`.
    ///
    /// The year is validated before anything is downloaded. The returned
    /// dataset holds every row of the file, in file order.
    ///
    /// # Errors
    ///
    /// * [`crate::WeatherDataError::InvalidYear`] for years outside 2003..=2099.
    /// * [`crate::WeatherDataError::NetworkRequest`] or
    ///   [`crate::WeatherDataError::HttpStatus`] if the download fails.
    /// * [`crate::WeatherDataError::CsvRead`] or [`crate::WeatherDataError::Decode`]
    ///   on the first malformed row.
    /// * [`crate::WeatherDataError::TimezoneUnavailable`] or
    ///   [`crate::WeatherDataError::TimestampOutOfRange`] if a timestamp cannot be derived.
    pub fn hourly(&self, station: WeatherStation, year: i32) -> Result<HourlyDataset, AzmetError> {
        let url = locate(&self.base_url, station, year)?;
        info!("Fetching hourly data for station {} in {}", station, year);

        let reader = self.fetcher.fetch(&url)?;
        let dataset = assemble(reader)?;
        info!(
            "Decoded {} hourly records for station {} in {}",
            dataset.len(),
            station,
            year
        );
        Ok(dataset.with_source(station, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather_data::decoder::ColumnKind;
    use crate::weather_data::error::{DecodeError, WeatherDataError};
    use std::io::{Cursor, Read};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const FILE: &str = "\
2023,1,0,8.1,56.4,0.47,0,0,12.3,15.6,1.2,1.1,215,22,2.9,0,0.61,-0.2
2023,1,1,7.6,58.9,0.43,0,0,11.9,15.6,0.9,0.8,190,18,2.2,0,0.61,-0.3
2023,1,2,7.0,61.0,0.39,0,0,11.5,15.5,0.7,0.5,170,25,1.8,0,0.61,-0.4
";

    /// Serves a fixed body and remembers every URL it was asked for.
    #[derive(Clone, Default)]
    struct StaticFetcher {
        body: &'static str,
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl Fetch for StaticFetcher {
        fn fetch(&self, url: &str) -> Result<Box<dyn Read + Send>, WeatherDataError> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(Box::new(Cursor::new(self.body.as_bytes())))
        }
    }

    #[test]
    fn downloads_and_decodes_station_year() {
        let fetcher = StaticFetcher {
            body: FILE,
            ..Default::default()
        };
        let requested = fetcher.requested.clone();
        let client = Azmet::with_fetcher("https://azmet.test/data", fetcher);

        let dataset = client.hourly(WeatherStation::PhoenixGreenway, 2023).unwrap();

        assert_eq!(
            *requested.lock().unwrap(),
            vec!["https://azmet.test/data/2312rh.txt".to_string()]
        );
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.station(), Some(WeatherStation::PhoenixGreenway));
        assert_eq!(dataset.year(), Some(2023));
    }

    #[test]
    fn invalid_year_never_reaches_the_fetcher() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let client = Azmet::with_fetcher(
            DEFAULT_BASE_URL,
            move |_url: &str| -> Result<Box<dyn Read + Send>, WeatherDataError> {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Box::new(Cursor::new(Vec::new())))
            },
        );

        for year in [2002, 2100] {
            let err = client.hourly(WeatherStation::Tucson, year).unwrap_err();
            assert!(matches!(
                err,
                AzmetError::WeatherData(WeatherDataError::InvalidYear { .. })
            ));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn fetch_failure_is_returned_as_is() {
        let client = Azmet::builder()
            .base_url("http://127.0.0.1:9")
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap();
        assert!(matches!(
            client.hourly(WeatherStation::Safford, 2010),
            Err(AzmetError::WeatherData(WeatherDataError::NetworkRequest(url, _)))
                if url == "http://127.0.0.1:9/104rh.txt"
        ));
    }

    #[test]
    fn http_status_failure_is_returned_as_is() {
        let base = crate::weather_data::fetcher::tests::serve_status_once("HTTP/1.1 404 Not Found");
        let client = Azmet::builder()
            .base_url(base.clone())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        match client.hourly(WeatherStation::PhoenixGreenway, 2024) {
            Err(AzmetError::WeatherData(WeatherDataError::HttpStatus { url, status, .. })) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(url, format!("{}/2412rh.txt", base));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("a 404 response must not yield a dataset"),
        }
    }

    #[test]
    fn malformed_row_fails_the_whole_request() {
        let body: &'static str = "\
2023,1,0,8.1,56.4,0.47,0,0,12.3,15.6,1.2,1.1,215,22,2.9,0,0.61,-0.2
2023,1,1,7.6,58.9,0.43,0,0,11.9,15.6,0.9,0.8,190,18,2.2,0,0.61
";
        let client = Azmet::with_fetcher(
            DEFAULT_BASE_URL,
            StaticFetcher {
                body,
                ..Default::default()
            },
        );
        let err = client.hourly(WeatherStation::Bonita, 2023).unwrap_err();
        assert!(matches!(
            err,
            AzmetError::WeatherData(WeatherDataError::Decode {
                row: 2,
                source: DecodeError::FieldCount { found: 17, .. }
            })
        ));
    }

    #[test]
    fn type_error_surfaces_column() {
        let body: &'static str =
            "2023,1,0,8.1,56.4,0.47,x,0,12.3,15.6,1.2,1.1,215,22,2.9,0,0.61,-0.2\n";
        let client = Azmet::with_fetcher(
            DEFAULT_BASE_URL,
            StaticFetcher {
                body,
                ..Default::default()
            },
        );
        let err = client.hourly(WeatherStation::Bonita, 2023).unwrap_err();
        assert!(matches!(
            err,
            AzmetError::WeatherData(WeatherDataError::Decode {
                row: 1,
                source: DecodeError::FieldType {
                    column: "solar_radiation",
                    position: 7,
                    kind: ColumnKind::Decimal,
                    ..
                }
            })
        ));
    }

    #[test]
    fn builder_defaults_to_provider_url() {
        let client = Azmet::builder().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);

        let client = Azmet::builder()
            .base_url("http://localhost:8000")
            .timeout(Duration::from_secs(1))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    #[ignore = "requires network access"]
    fn downloads_phoenix_greenway() -> Result<(), AzmetError> {
        let client = Azmet::builder().build()?;
        let dataset = client.hourly(WeatherStation::PhoenixGreenway, 2023)?;
        assert!(dataset.len() > 8000, "Expected most hours of 2023");
        Ok(())
    }
}
