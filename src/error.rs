//! Error types
//!
//! `FetchError` is carried inside actions, so it holds rendered strings
//! rather than the underlying `reqwest::Error`.

use thiserror::Error;

/// A failed weather lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The service answered with a non-success HTTP status
    #[error("HTTP status {code}: {raw}")]
    Status { code: u16, raw: String },

    #[error("connection failed")]
    Connect,

    #[error("request timed out")]
    Timeout,

    #[error("too many redirects")]
    Redirect,

    /// Any other request-layer or decoding failure
    #[error("request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// The text shown in place of the temperature
    pub fn message(&self) -> String {
        match self {
            FetchError::Status { code, raw } => match code {
                400 => "Bad request:\nPlease check input".into(),
                401 => "Unauthorized:\nInvalid API key".into(),
                403 => "Forbidden:\nAccess denied".into(),
                404 => "Not Found:\nCity not found".into(),
                500 => "Internal Service Error:\nPlease try again later".into(),
                502 => "Bad Gateway:\nInvalid response from server".into(),
                503 => "Service Unavailable:\nServer is down".into(),
                504 => "Gateway Timeout:\nNo response from the server".into(),
                _ => format!("HTTP error occurred:\n{}", raw),
            },
            FetchError::Connect => "Connection Error:\nCheck internet connection".into(),
            FetchError::Timeout => "Timeout Error:\nThe request timed out".into(),
            FetchError::Redirect => "Too many Redirects:\nCheck the URL".into(),
            FetchError::Request(raw) => format!("Request Error:\n{}", raw),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    /// Classify in order: status, connect, timeout, redirect, anything else.
    ///
    /// The request URL carries the API key and is stripped from the message.
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if let Some(status) = err.status() {
            FetchError::Status {
                code: status.as_u16(),
                raw: err.to_string(),
            }
        } else if err.is_connect() {
            FetchError::Connect
        } else if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_redirect() {
            FetchError::Redirect
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Request(err.to_string())
    }
}

/// Invalid startup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key must not be empty")]
    MissingApiKey,

    #[error("invalid endpoint URL {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::other(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> FetchError {
        FetchError::Status {
            code,
            raw: format!("HTTP status client error ({})", code),
        }
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(status(404).message(), "Not Found:\nCity not found");
    }

    #[test]
    fn test_mapped_status_messages() {
        let expected = [
            (400, "Bad request:\nPlease check input"),
            (401, "Unauthorized:\nInvalid API key"),
            (403, "Forbidden:\nAccess denied"),
            (500, "Internal Service Error:\nPlease try again later"),
            (502, "Bad Gateway:\nInvalid response from server"),
            (503, "Service Unavailable:\nServer is down"),
            (504, "Gateway Timeout:\nNo response from the server"),
        ];
        for (code, message) in expected {
            assert_eq!(status(code).message(), message, "status {}", code);
        }
    }

    #[test]
    fn test_unmapped_status_embeds_raw_error() {
        let err = FetchError::Status {
            code: 429,
            raw: "HTTP status client error (429 Too Many Requests)".into(),
        };
        assert_eq!(
            err.message(),
            "HTTP error occurred:\nHTTP status client error (429 Too Many Requests)"
        );
    }

    #[test]
    fn test_transport_messages() {
        assert_eq!(
            FetchError::Connect.message(),
            "Connection Error:\nCheck internet connection"
        );
        assert_eq!(
            FetchError::Timeout.message(),
            "Timeout Error:\nThe request timed out"
        );
        assert_eq!(
            FetchError::Redirect.message(),
            "Too many Redirects:\nCheck the URL"
        );
    }

    #[test]
    fn test_json_error_becomes_request_error() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::Request(_)));
        assert!(err.message().starts_with("Request Error:\n"));
    }
}
