//! tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured level. The terminal playground owns
//! the screen, so it only logs when a log file is configured.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

impl LogTarget {
    /// Target for the terminal playground: the log file if configured, else nothing.
    pub fn for_playground(log_file: Option<&str>) -> Self {
        match log_file {
            Some(path) if !path.is_empty() => LogTarget::File(PathBuf::from(path)),
            _ => LogTarget::Disabled,
        }
    }
}

/// Builds the filter from `RUST_LOG`, falling back to `level`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file can't be opened or a subscriber is
/// already installed.
pub fn init(level: &str, target: &LogTarget) -> Result<()> {
    let filter = env_filter(level);

    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to initialize logging"),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()
                .context("Failed to initialize logging")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playground_target() {
        assert_eq!(LogTarget::for_playground(None), LogTarget::Disabled);
        assert_eq!(LogTarget::for_playground(Some("")), LogTarget::Disabled);
        assert_eq!(
            LogTarget::for_playground(Some("/tmp/queryquill.log")),
            LogTarget::File(PathBuf::from("/tmp/queryquill.log"))
        );
    }

    #[test]
    fn test_disabled_installs_nothing() {
        assert!(init("debug", &LogTarget::Disabled).is_ok());
    }
}
