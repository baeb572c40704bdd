//! Configuration file loading with precedence handling.

use crate::report::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CAROUSEL_CONFIG";
/// Environment variable overriding the catalog path.
pub const CATALOG_ENV: &str = "CAROUSEL_CATALOG";
/// Environment variable overriding the output format.
pub const FORMAT_ENV: &str = "CAROUSEL_FORMAT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/carousel-list/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Catalog file to load instead of the bundled sample data.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Page shown at startup.
    #[serde(default)]
    pub initial_page: Option<usize>,

    /// Print statistics along with the view.
    #[serde(default)]
    pub show_stats: Option<bool>,

    /// Output format (`"text"` or `"json"`).
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Catalog file, `None` for the bundled sample data.
    pub catalog_path: Option<PathBuf>,
    /// Page shown at startup.
    pub initial_page: usize,
    /// Print statistics.
    pub show_stats: bool,
    /// Output format.
    pub format: OutputFormat,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            initial_page: 0,
            show_stats: false,
            format: OutputFormat::Text,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/carousel-list/carousel.log` on Linux, or the
/// platform equivalent. Falls back to the current directory when no state
/// directory exists (macOS, Windows).
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("carousel-list").join("carousel.log")
    } else {
        PathBuf::from("carousel.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/carousel-list/config.toml` on Unix, appropriate path
/// on other platforms. Returns `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("carousel-list").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CAROUSEL_CONFIG` environment variable
/// 3. Default path `~/.config/carousel-list/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        catalog_path: config.catalog_path.or(defaults.catalog_path),
        initial_page: config.initial_page.unwrap_or(defaults.initial_page),
        show_stats: config.show_stats.unwrap_or(defaults.show_stats),
        format: config.format.unwrap_or(defaults.format),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CAROUSEL_CATALOG`: catalog file path
/// - `CAROUSEL_FORMAT`: `text` or `json`; unrecognized values are ignored
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(catalog) = std::env::var(CATALOG_ENV) {
        config.catalog_path = Some(PathBuf::from(catalog));
    }

    if let Some(format) = std::env::var(FORMAT_ENV)
        .ok()
        .and_then(|raw| raw.parse::<OutputFormat>().ok())
    {
        config.format = format;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set
/// are passed as `Some`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    catalog_override: Option<PathBuf>,
    page_override: Option<usize>,
    stats_override: Option<bool>,
    format_override: Option<OutputFormat>,
) -> ResolvedConfig {
    if let Some(catalog) = catalog_override {
        config.catalog_path = Some(catalog);
    }

    if let Some(page) = page_override {
        config.initial_page = page;
    }

    if let Some(stats) = stats_override {
        config.show_stats = stats;
    }

    if let Some(format) = format_override {
        config.format = format;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
