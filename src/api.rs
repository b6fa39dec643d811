//! OpenWeatherMap current-weather client
//!
//! The effect handler spawns `WeatherClient::fetch` as a task; the result is
//! sent back as `WeatherDidLoad`, `WeatherDidSkip` or `WeatherDidError`.

use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::WidgetConfig;
use crate::error::{ConfigError, FetchError};
use crate::state::WeatherReport;

/// API response from the current-weather endpoint (only the fields we read)
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    cod: ResponseCode,
    main: Option<MainReadings>,
    #[serde(default)]
    weather: Vec<Condition>,
}

/// The payload's own status; sent as a number on success and as a string
/// on some error payloads
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResponseCode {
    Number(i64),
    Text(String),
}

impl ResponseCode {
    fn is_ok(&self) -> bool {
        match self {
            ResponseCode::Number(code) => *code == 200,
            ResponseCode::Text(code) => code.trim() == "200",
        }
    }
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    id: i64,
    description: String,
}

/// Decode a response body.
///
/// Returns `Ok(None)` when the payload's `cod` is not 200.
pub fn parse_report(body: &[u8]) -> Result<Option<WeatherReport>, FetchError> {
    let response: CurrentWeatherResponse = serde_json::from_slice(body)?;

    if !response.cod.is_ok() {
        debug!(cod = ?response.cod, "Payload status is not ok, ignoring");
        return Ok(None);
    }

    let main = response
        .main
        .ok_or_else(|| FetchError::Request("response has no `main` readings".into()))?;
    let condition = response
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Request("response has no `weather` entries".into()))?;

    Ok(Some(WeatherReport {
        kelvin: main.temp,
        condition_code: condition.id,
        description: condition.description,
    }))
}

/// HTTP client bound to one endpoint and API key
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WidgetConfig,
}

impl WeatherClient {
    pub fn new(config: WidgetConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// Query URL for `city`, appended to any query the endpoint already has
    pub fn request_url(&self, city: &str) -> Url {
        let mut url = self.config.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("appid", &self.config.api_key);
        url
    }

    /// Perform one GET for `city` and decode the current conditions
    pub async fn fetch(&self, city: &str) -> Result<Option<WeatherReport>, FetchError> {
        info!(city = %city, "Fetching weather");

        let response = self
            .http
            .get(self.request_url(city))
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;

        parse_report(&body)
    }
}
