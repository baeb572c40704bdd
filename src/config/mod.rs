//! Configuration module.
//!
//! Settings are resolved through a precedence chain:
//! defaults → config file → environment variables → CLI arguments.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig, CATALOG_ENV, CONFIG_ENV, FORMAT_ENV,
};
