//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Live SERP endpoint of the shopping-search provider.
pub const DEFAULT_ENDPOINT: &str = "https://api.dataforseo.com/v3/serp/google/organic/live/advanced";

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Provider API login
    #[serde(default)]
    pub login: Option<String>,

    /// Provider API password
    #[serde(default)]
    pub password: Option<String>,

    /// Provider search endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Provider location code (2124 = Canada)
    #[serde(default = "default_location_code")]
    pub location_code: u32,

    /// Provider language code
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Pause before the single retry in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_location_code() -> u32 {
    2124
}

fn default_language_code() -> String {
    "en".to_string()
}

fn default_request_timeout_ms() -> u64 {
    15_000
}

fn default_retry_delay_ms() -> u64 {
    1_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login: None,
            password: None,
            endpoint: default_endpoint(),
            location_code: default_location_code(),
            language_code: default_language_code(),
            request_timeout_ms: default_request_timeout_ms(),
            retry_delay_ms: default_retry_delay_ms(),
            proxy: None,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("inventory-pricing").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(login) = std::env::var("DATAFORSEO_LOGIN") {
            self.login = Some(login);
        }

        if let Ok(password) = std::env::var("DATAFORSEO_PASSWORD") {
            self.password = Some(password);
        }

        if let Ok(proxy) = std::env::var("PRICING_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("PRICING_TIMEOUT_MS") {
            if let Ok(t) = timeout.parse() {
                self.request_timeout_ms = t;
            }
        }

        self
    }

    /// Returns login and password when both are set and non-blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let login = self.login.as_deref().filter(|s| !s.trim().is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((login, password))
    }

    /// True when the search provider can be called at all.
    pub fn has_credentials(&self) -> bool {
        self.credentials().is_some()
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
