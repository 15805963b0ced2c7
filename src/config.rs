use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "semver.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".semver.toml";

/// Represents the complete configuration for sem-ver.
///
/// Contains the default request options and output preferences.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_true() -> bool {
    true
}

/// Default values for request options when the CLI does not override them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default = "default_true")]
    pub allow_v_prefix: bool,

    #[serde(default)]
    pub keep_prerelease: bool,

    #[serde(default = "default_true")]
    pub dry_run: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            allow_v_prefix: true,
            keep_prerelease: false,
            dry_run: true,
        }
    }
}

/// How results are printed
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for result rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    Ok(toml::from_str(config_str)?)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver.toml` in current directory
/// 3. `.semver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        log::debug!("Loading config from {}", path);
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        log::debug!("Loading config from ./{}", LOCAL_CONFIG_FILE);
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            log::debug!("Loading config from {}", config_path.display());
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
