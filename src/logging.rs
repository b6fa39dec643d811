//! File-backed tracing subscriber

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Install a global subscriber appending to `path`.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init(path: &Path) -> Result<(), ConfigError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::LogFile {
            path: path.display().to_string(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    if let Err(err) = installed {
        // the existing subscriber stays in charge
        debug!(error = %err, "Tracing subscriber already installed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("weather-widget-{}-{}.log", name, std::process::id()))
    }

    #[test]
    fn test_init_twice_keeps_first_subscriber() {
        let first = log_path("first");
        let second = log_path("second");

        assert!(init(&first).is_ok());
        assert!(init(&second).is_ok());
        assert!(first.exists());
        assert!(second.exists());

        let _ = std::fs::remove_file(first);
        let _ = std::fs::remove_file(second);
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let dir = std::env::temp_dir().join("weather-widget-no-such-dir").join("x.log");
        match init(&dir) {
            Err(ConfigError::LogFile { path, .. }) => assert!(path.ends_with("x.log")),
            other => panic!("expected LogFile error, got {:?}", other),
        }
    }
}
