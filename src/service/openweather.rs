//! OpenWeather current-weather client.

use super::WeatherProvider;
use crate::config::{API_KEY_ENV, WeatherConfig};
use crate::errors::ServiceError;
use crate::models::weather::{RawWeather, WeatherSnapshot};
use reqwest::StatusCode;
use std::time::Duration;

const USER_AGENT: &str = concat!("deskbook/", env!("CARGO_PKG_VERSION"));
const UNITS: &str = "metric";

pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(cfg: &WeatherConfig) -> Result<Self, ServiceError> {
        let api_key = cfg.resolved_api_key().ok_or_else(|| {
            ServiceError::new(format!(
                "API key not configured. Set {API_KEY_ENV} or weather.api_key in the config file."
            ))
        })?;

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(cfg.timeout_secs.max(1)))
            .build()
            .map_err(|e| ServiceError::new(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: cfg.resolved_base_url(),
            api_key,
        })
    }
}

impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, ServiceError> {
        tracing::debug!(city, url = %self.base_url, "fetching current weather");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", UNITS)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status, city));
        }

        let body = resp.text().await?;
        parse_weather(&body, city)
    }
}

fn status_error(status: StatusCode, city: &str) -> ServiceError {
    match status {
        StatusCode::NOT_FOUND => {
            ServiceError::new(format!("City '{city}' not found. Please check the spelling."))
        }
        StatusCode::UNAUTHORIZED => {
            ServiceError::new("Invalid API key. Please check your configuration.")
        }
        StatusCode::TOO_MANY_REQUESTS => {
            ServiceError::new("Too many requests. Please wait a moment and try again.")
        }
        other => ServiceError::new(format!("Weather service returned HTTP {}", other.as_u16())),
    }
}

/// Decode a provider body into a snapshot.
pub fn parse_weather(body: &str, requested_city: &str) -> Result<WeatherSnapshot, ServiceError> {
    let raw: RawWeather = serde_json::from_str(body)
        .map_err(|e| ServiceError::new(format!("Invalid response from weather service: {e}")))?;
    Ok(raw.into_snapshot(requested_city))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answer a single request with `status` and `body`; the handle yields
    /// the request line that was received.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/data/2.5/weather", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }

            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            request_line
        });
        (url, handle)
    }

    fn client_for(base_url: String) -> OpenWeatherClient {
        OpenWeatherClient {
            client: reqwest::Client::new(),
            base_url,
            api_key: "test-key".to_string(),
        }
    }

    fn run<F: std::future::Future>(f: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f)
    }

    #[test]
    fn fetch_sends_city_key_and_metric_units() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"name":"London","sys":{"country":"GB"},"main":{"temp":12.5,"humidity":81},
               "weather":[{"id":500,"description":"light rain","icon":"10n"}]}"#,
        );

        let snap = run(client_for(url).fetch("london")).unwrap();
        let request = server.join().unwrap();

        assert!(request.starts_with("GET /data/2.5/weather?"));
        assert!(request.contains("q=london"));
        assert!(request.contains("appid=test-key"));
        assert!(request.contains("units=metric"));
        assert_eq!(snap.city, "London");
        assert_eq!(snap.country, "GB");
        assert_eq!(snap.condition_code, 500);
    }

    #[test]
    fn fetch_maps_404_to_unknown_city() {
        let (url, server) = serve_once("404 Not Found", r#"{"cod":"404","message":"city not found"}"#);

        let err = run(client_for(url).fetch("Atlantis")).unwrap_err();
        server.join().unwrap();

        assert_eq!(err.message, "City 'Atlantis' not found. Please check the spelling.");
    }

    #[test]
    fn new_requires_an_api_key_when_env_is_unset() {
        if std::env::var(API_KEY_ENV).is_ok() {
            return;
        }
        let err = OpenWeatherClient::new(&WeatherConfig::default()).err().unwrap();
        assert!(err.message.contains("API key not configured"));
    }

    #[test]
    fn status_messages_are_human_readable() {
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, "Atlantis").message,
            "City 'Atlantis' not found. Please check the spelling."
        );
        assert!(
            status_error(StatusCode::UNAUTHORIZED, "x")
                .message
                .contains("API key")
        );
        assert_eq!(
            status_error(StatusCode::BAD_GATEWAY, "x").message,
            "Weather service returned HTTP 502"
        );
    }

    #[test]
    fn parse_rejects_non_json() {
        let err = parse_weather("<html>", "x").unwrap_err();
        assert!(err.message.starts_with("Invalid response"));
    }

    #[test]
    fn parse_uses_provider_city_name() {
        let snap = parse_weather(r#"{"name":"Paris","main":{"temp":18.2}}"#, "paris").unwrap();
        assert_eq!(snap.city, "Paris");
        assert_eq!(snap.temperature, 18.2);
    }
}
