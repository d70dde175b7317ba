use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable that overrides `weather.api_key`.
pub const API_KEY_ENV: &str = "SKINCARE_WEATHER_API_KEY";

const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const SUPPORTED_UNITS: [&str; 3] = ["metric", "imperial", "standard"];

/// Trimmed API key, or `None` when it is blank or a `YOUR_...` placeholder
/// copied from sample configs. The weather client uses the same check.
pub fn usable_api_key(raw: &str) -> Option<&str> {
    let key = raw.trim();
    (!key.is_empty() && !key.starts_with("YOUR_")).then_some(key)
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Joins all errors into one line, e.g. for a startup failure message
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP listener for the form page
    #[serde(default)]
    pub server: ServerConfig,

    /// Season lookup via the weather API
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Remedy catalog source
    #[serde(default)]
    pub remedies: RemediesConfig,

    /// Page presentation
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// Current-weather endpoint (OpenWeather compatible)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key sent as `appid`. Prefer the SKINCARE_WEATHER_API_KEY
    /// environment variable over storing it in the file.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Unit system requested from the API
    #[serde(default = "default_units")]
    pub units: String,

    /// Request timeout; unset means the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_WEATHER_API_URL.to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            units: default_units(),
            timeout_secs: None,
        }
    }
}

impl WeatherConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().and_then(usable_api_key).is_some()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemediesConfig {
    /// Replacement catalog file. The embedded catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory searched for the background image
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,

    /// File name (without extension) of the background image
    #[serde(default = "default_background_stem")]
    pub background_stem: String,
}

fn default_title() -> String {
    "Skin Care Remedies & Seasonal Information".to_string()
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_background_stem() -> String {
    "remedies2".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            asset_dir: default_asset_dir(),
            background_stem: default_background_stem(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory. Environment
    /// overrides are applied afterwards.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path. A missing file means
    /// defaults; nothing is written.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file {}", config_path.display()))?;

            toml::from_str::<Config>(&contents).context("Failed to parse config file")?
        } else {
            tracing::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Apply environment variable overrides (currently only the API key)
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                tracing::debug!("Using weather API key from {}", API_KEY_ENV);
                self.weather.api_key = Some(key.trim().to_string());
            }
        }
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.api_url, "weather.api_url", &mut result);

        if !SUPPORTED_UNITS.contains(&self.weather.units.as_str()) {
            result.add_error(
                "weather.units",
                format!(
                    "Unsupported unit system '{}', expected one of: {}",
                    self.weather.units,
                    SUPPORTED_UNITS.join(", ")
                ),
            );
        }

        if !self.weather.has_api_key() {
            result.add_warning(
                "weather.api_key",
                format!(
                    "No weather API key configured (set {}) - season lookup will fail",
                    API_KEY_ENV
                ),
            );
        }

        if self.weather.timeout_secs == Some(0) {
            result.add_error("weather.timeout_secs", "Timeout must be greater than 0");
        }

        if self.server.port == 0 {
            result.add_error("server.port", "Port cannot be 0");
        }

        if self.server.bind_address.trim().is_empty() {
            result.add_error("server.bind_address", "Bind address cannot be empty");
        }

        if let Some(path) = &self.remedies.catalog_path {
            if !path.is_file() {
                result.add_error(
                    "remedies.catalog_path",
                    format!("Catalog file not found: {}", path.display()),
                );
            }
        }

        if !self.page.asset_dir.is_dir() {
            result.add_warning(
                "page.asset_dir",
                format!(
                    "Asset directory does not exist: {}",
                    self.page.asset_dir.display()
                ),
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skincare");

        Ok(config_dir.join("config.toml"))
    }
}
