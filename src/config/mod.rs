//! Configuration system for queryquill.
//!
//! This module provides the configuration structure for queryquill with sensible
//! defaults and support for serialization/deserialization via serde. Configuration
//! is loaded from a TOML file and merged with command-line arguments in `main`.
//!
//! # Example
//!
//! ```
//! use queryquill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.port, 8000);
//!
//! // Create custom configuration
//! let custom = Config {
//!     theme: "nord".to_string(),
//!     port: 9090,
//!     ..Config::default()
//! };
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the queryquill application.
///
/// All fields have defaults, so a config file only needs the keys it changes.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `show_line_numbers` - Line numbers in the document pane (default: true)
/// * `indent_size` - Spaces inserted by the indent key (default: 2)
/// * `host` - Address the HTTP server binds to (default: "0.0.0.0")
/// * `port` - HTTP port when neither `--port` nor `PORT` is set (default: 8000)
/// * `assets_dir` - Directory of static assets for serve and dist (default: "web")
/// * `dist_dir` - Output directory for dist (default: "dist")
/// * `log_level` - tracing filter used when `RUST_LOG` is unset (default: "info")
/// * `log_file` - File that receives logs in the terminal playground (default: none)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Display line numbers in the document pane
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Number of spaces inserted by the indent key
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Address the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Fallback HTTP port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of static assets
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// Output directory for static export
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    /// tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log destination for the terminal playground
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

/// Returns the default for showing line numbers.
fn default_show_line_numbers() -> bool {
    true
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    2
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_assets_dir() -> String {
    "web".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    /// Creates a new configuration with default values.
    ///
    /// # Example
    ///
    /// ```
    /// use queryquill::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.assets_dir, "web");
    /// assert!(config.show_line_numbers);
    /// assert!(config.log_file.is_none());
    /// ```
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_line_numbers: default_show_line_numbers(),
            indent_size: default_indent_size(),
            host: default_host(),
            port: default_port(),
            assets_dir: default_assets_dir(),
            dist_dir: default_dist_dir(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/queryquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("queryquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if there is no home directory or no
    /// config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read or parsed. The
    /// caller decides whether to fall back to defaults and how to report it.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_if_exists(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_if_exists(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_omitted_when_unset() {
        let toml_str = toml::to_string(&Config::default()).unwrap();
        assert!(!toml_str.contains("log_file"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("port = 3000\n").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.theme, "default-dark");
        assert_eq!(config.indent_size, 2);
    }
}
