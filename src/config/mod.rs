use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use anyhow::{anyhow, Result, Context};
use lazy_static::lazy_static;
use std::sync::RwLock;

use crate::validation::PasswordPolicy;

/// Output format for command results
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Default output format when `--json` is not given
    pub format: OutputFormat,
    /// Print the unmet rules when a password is rejected
    pub show_password_feedback: bool,
}

/// Global application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Application version
    pub version: String,
    /// Password policy applied by the `password` and `field` commands
    pub password: PasswordPolicy,
    /// Output configuration
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Storefront Validate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            password: PasswordPolicy::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
                show_password_feedback: true,
            },
        }
    }
}

// Global configuration instance
lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

/// Load configuration from file into the global instance
pub fn load_config(path: &str) -> Result<()> {
    let config = read_config(path)?;
    update_config(config)
}

/// Read configuration from file without touching the global instance.
///
/// A missing file is created with the defaults.
pub fn read_config(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        let default_config = Config::default();
        save_config(path, &default_config)?;
        return Ok(default_config);
    }

    let mut file = File::open(path).context(format!("Failed to open config file: {}", path))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).context("Failed to read config file")?;

    let config: Config = match path.ends_with(".toml") {
        true => toml::from_str(&contents).context("Failed to parse TOML config")?,
        false => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    if config.password.min_length == 0 {
        return Err(anyhow!("password.min_length must be at least 1"));
    }

    Ok(config)
}

/// Save configuration to file
pub fn save_config(path: &str, config: &Config) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
    }

    let serialized = match path.ends_with(".toml") {
        true => toml::to_string_pretty(config).context("Failed to serialize config to TOML")?,
        false => serde_json::to_string_pretty(config).context("Failed to serialize config to JSON")?,
    };

    std::fs::write(path, serialized).context(format!("Failed to write config to file: {}", path))?;

    Ok(())
}

/// Get a copy of the current config
pub fn get_config() -> Config {
    match CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Update the current config
pub fn update_config(config: Config) -> Result<()> {
    let mut current = CONFIG
        .write()
        .map_err(|_| anyhow!("Configuration lock poisoned"))?;
    *current = config;
    Ok(())
}
