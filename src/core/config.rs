use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_API_URL: &str = "https://api.exchangerate-api.com/v4/latest";

/// How conversion results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl From<String> for OutputFormat {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Text,
        }
    }
}

/// Language used for relative time phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "ru" => Locale::Ru,
            _ => Locale::En,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub default_from: String,
    pub default_to: String,
    pub output_format: OutputFormat,
    pub api_url: String,
    pub locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_from: "USD".to_string(),
            default_to: "RUB".to_string(),
            output_format: OutputFormat::Text,
            api_url: DEFAULT_API_URL.to_string(),
            locale: Locale::En,
        }
    }
}

impl AppConfig {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_json::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config.normalized())
    }

    /// Loads the config, or the built-in defaults if the file is missing or malformed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                debug!(error = %format!("{e:#}"), "Using default config");
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        self.default_from = self.default_from.trim().to_uppercase();
        self.default_to = self.default_to.trim().to_uppercase();
        self
    }
}
