//! Application error: what can fail while starting or serving the page.

use skincare_remedies::CatalogError;
use skincare_weather::WeatherError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Short, non-technical description for logs an operator reads
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Weather(WeatherError::EmptyLocation) => "No location was entered.",
            Self::Weather(WeatherError::MissingApiKey) => {
                "No weather API key is configured. Set SKINCARE_WEATHER_API_KEY."
            }
            Self::Weather(WeatherError::Status(401)) => {
                "The weather API rejected the API key. Check your settings."
            }
            Self::Weather(WeatherError::Status(404)) => {
                "The weather service did not know that location."
            }
            Self::Weather(WeatherError::Status(code)) if *code >= 500 => {
                "The weather service is unavailable. Please try again later."
            }
            Self::Weather(WeatherError::Status(_)) => "The weather service refused the request.",
            Self::Weather(WeatherError::Network(e)) if e.is_timeout() => {
                "The weather request timed out. Please try again."
            }
            Self::Weather(WeatherError::Network(_)) => {
                "Unable to reach the weather service. Check your internet connection."
            }
            Self::Weather(WeatherError::Parse(_)) => {
                "Received an unexpected response from the weather service."
            }
            Self::Catalog(e) if e.is_io() => "The remedy catalog file could not be read.",
            Self::Catalog(_) => "The remedy catalog file is invalid. Check its contents.",
            Self::Io(_) => "Could not start the server. Check the configured address and port.",
        }
    }
}
