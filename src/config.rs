use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::conversion;
use crate::units::currency::{RateTable, RateTableError};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const TRANSLATE_API_KEY_ENV: &str = "TOURIST_TRANSLATE_API_KEY";
pub const COUNTRY_DATA_KEY_ENV: &str = "TOURIST_COUNTRY_DATA_KEY";

/// Translation service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub endpoint: String,
    /// Left empty in the file; usually supplied through the environment.
    pub api_key: Option<String>,
    /// Key taken from the environment. Never written back to disk.
    #[serde(skip)]
    pub env_api_key: Option<String>,
    pub timeout_secs: u64,
    pub default_target: String,
}

impl TranslationConfig {
    /// The key the client should use: the environment wins over the file.
    pub fn resolved_api_key(&self) -> Option<&str> {
        resolve_key(&self.env_api_key, &self.api_key)
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translation.googleapis.com/language/translate/v2".to_string(),
            api_key: None,
            env_api_key: None,
            timeout_secs: 10,
            default_target: "es".to_string(),
        }
    }
}

/// Country-data service (a PostgREST endpoint) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryDataConfig {
    /// Project URL, e.g. `https://<project>.supabase.co`.
    pub url: String,
    pub api_key: Option<String>,
    #[serde(skip)]
    pub env_api_key: Option<String>,
    pub table: String,
    pub timeout_secs: u64,
}

impl CountryDataConfig {
    pub fn resolved_api_key(&self) -> Option<&str> {
        resolve_key(&self.env_api_key, &self.api_key)
    }
}

fn resolve_key<'a>(env: &'a Option<String>, file: &'a Option<String>) -> Option<&'a str> {
    let usable = |key: &'a Option<String>| key.as_deref().map(str::trim).filter(|k| !k.is_empty());
    usable(env).or_else(|| usable(file))
}

impl Default for CountryDataConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: None,
            env_api_key: None,
            table: "countries".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tourist_converter=info".to_string(),
        }
    }
}

/// Application configuration, stored as `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Category selected when the conversion page first opens.
    pub default_category: String,
    pub currency: RateTable,
    pub translation: TranslationConfig,
    pub country_data: CountryDataConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: conversion::CURRENCY.to_string(),
            currency: RateTable::default(),
            translation: TranslationConfig::default(),
            country_data: CountryDataConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid exchange rates: {0}")]
    Rates(#[from] RateTableError),
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.currency.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Picks up API keys from the environment. They are kept apart from the
    /// file-backed keys so `save` never persists them.
    pub fn apply_env_overrides(&mut self) {
        self.translation.env_api_key = env_key(TRANSLATE_API_KEY_ENV);
        self.country_data.env_api_key = env_key(COUNTRY_DATA_KEY_ENV);
    }
}

fn env_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|key| !key.trim().is_empty())
}

/// Loads `path`, or writes and returns the defaults when it does not exist.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        Config::from_toml_str(&content)?
    } else {
        warn!(path = %path.display(), "config not found; writing defaults");
        let cfg = Config::default();
        cfg.save(path)?;
        cfg
    };
    cfg.apply_env_overrides();
    Ok(cfg)
}

/// Loads a standalone exchange-rate file (same shape as the `[currency]`
/// section) so rates can be refreshed without touching the main config.
pub fn load_rate_table(path: &Path) -> Result<RateTable, ConfigError> {
    let content = fs::read_to_string(path)?;
    let table: RateTable = toml::from_str(&content)?;
    table.validate()?;
    info!(path = %path.display(), currencies = table.rates.len(), "exchange rates loaded");
    Ok(table)
}
