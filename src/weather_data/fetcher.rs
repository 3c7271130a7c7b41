use crate::weather_data::error::WeatherDataError;
use log::{info, warn};
use reqwest::blocking::Client;
use std::io::Read;
use std::time::Duration;

/// Upper bound on a single retrieval, connection through last byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Retrieves the raw contents of a URL.
///
/// A single attempt is made; implementations do not retry. The returned reader
/// belongs to the caller and is released when dropped.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Box<dyn Read + Send>, WeatherDataError>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<Box<dyn Read + Send>, WeatherDataError>,
{
    fn fetch(&self, url: &str) -> Result<Box<dyn Read + Send>, WeatherDataError> {
        self(url)
    }
}

/// [`Fetch`] over HTTP(S), with a fixed timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Box<dyn Read + Send>, WeatherDataError> {
        info!("Downloading data from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| WeatherDataError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    WeatherDataError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    WeatherDataError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        Ok(Box::new(response))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::io::{BufRead, BufReader, Cursor, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answers one HTTP request on a local port with `status_line` and an empty
    /// body. Returns the server's base URL.
    pub(crate) fn serve_status_once(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }
            let mut stream = stream;
            write!(
                stream,
                "{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status_line
            )
            .unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn closures_can_stand_in_for_a_fetcher() {
        let fetcher = |url: &str| -> Result<Box<dyn Read + Send>, WeatherDataError> {
            Ok(Box::new(Cursor::new(url.as_bytes().to_vec())))
        };
        let mut body = String::new();
        fetcher
            .fetch("https://example.invalid/2412rh.txt")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert_eq!(body, "https://example.invalid/2412rh.txt");
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let fetcher = HttpFetcher::new(Duration::from_millis(500)).unwrap();
        let result = fetcher.fetch("http://127.0.0.1:9/2412rh.txt");
        assert!(matches!(
            result,
            Err(WeatherDataError::NetworkRequest(url, _)) if url == "http://127.0.0.1:9/2412rh.txt"
        ));
    }

    #[test]
    fn error_status_is_an_http_status_error() {
        let base = serve_status_once("HTTP/1.1 404 Not Found");
        let url = format!("{}/2412rh.txt", base);
        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        match fetcher.fetch(&url) {
            Err(WeatherDataError::HttpStatus {
                url: failed, status, ..
            }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(failed, url);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("a 404 response must not yield a body"),
        }
    }

    #[test]
    #[ignore = "requires network access"]
    fn downloads_a_published_file() {
        let fetcher = HttpFetcher::new(DEFAULT_TIMEOUT).unwrap();
        let mut body = String::new();
        fetcher
            .fetch("https://cals.arizona.edu/azmet/data/2312rh.txt")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert!(!body.is_empty());
    }
}
