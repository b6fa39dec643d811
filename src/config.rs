//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Terminal weather widget
#[derive(Parser, Debug)]
#[command(name = "weather-widget")]
#[command(about = "Look up current weather for a city")]
pub struct Cli {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Current-weather endpoint
    #[arg(long, env = "OPENWEATHER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Prefill the city input and fetch once at start
    #[arg(long, short)]
    pub city: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long, env = "WEATHER_WIDGET_LOG")]
    pub log_file: Option<PathBuf>,
}

/// Validated runtime configuration
#[derive(Clone, Debug)]
pub struct WidgetConfig {
    pub api_key: String,
    pub endpoint: Url,
    pub timeout: Option<Duration>,
    pub initial_city: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl WidgetConfig {
    /// Config for `endpoint` with everything else defaulted
    pub fn new(api_key: impl Into<String>, endpoint: &str) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        let endpoint = Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            api_key,
            endpoint,
            timeout: None,
            initial_city: None,
            log_file: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl TryFrom<Cli> for WidgetConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let mut config = WidgetConfig::new(cli.api_key, &cli.endpoint)?;
        if let Some(secs) = cli.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config.initial_city = cli.city;
        config.log_file = cli.log_file;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<WidgetConfig, ConfigError> {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        WidgetConfig::try_from(cli)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["weather-widget", "--api-key", "k3y"]).unwrap();

        assert_eq!(config.api_key, "k3y");
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, None);
        assert_eq!(config.initial_city, None);
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "weather-widget",
            "--api-key",
            "k3y",
            "--endpoint",
            "http://127.0.0.1:8080/weather",
            "--city",
            "Tromsø",
            "--timeout",
            "5",
            "--log-file",
            "/tmp/widget.log",
        ])
        .unwrap();

        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:8080/weather");
        assert_eq!(config.initial_city.as_deref(), Some("Tromsø"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/widget.log")));
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let err = parse(&["weather-widget", "--api-key", "  "]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let err = WidgetConfig::new("k3y", "not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }
}
