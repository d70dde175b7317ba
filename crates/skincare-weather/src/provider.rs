//! Season lookup against an OpenWeather-compatible current-weather endpoint.

use crate::types::{CurrentWeatherResponse, Season, WeatherError};
use reqwest::{Client, StatusCode};
use skincare_core::usable_api_key;
use std::time::Duration;
use tracing::instrument;

/// Settings for [`WeatherProvider`]
#[derive(Debug, Clone)]
pub struct ProviderOptions {
    pub api_url: String,
    pub api_key: Option<String>,
    /// Sent as the `units` query parameter
    pub units: String,
    /// `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl ProviderOptions {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: None,
            units: "metric".to_string(),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    units: String,
}

impl WeatherProvider {
    pub fn new(options: ProviderOptions) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let api_key = options
            .api_key
            .as_deref()
            .and_then(usable_api_key)
            .map(str::to_string);

        Ok(Self {
            client,
            api_url: options.api_url,
            api_key,
            units: options.units,
        })
    }

    /// Whether a request can be made at all
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Determine the current season at `location`.
    ///
    /// Issues one GET request; only a 200 response is accepted. The month is
    /// taken from the observation time `dt` shifted into the location's
    /// timezone. No retries.
    #[instrument(skip(self), level = "info")]
    pub async fn classify(&self, location: &str) -> Result<Season, WeatherError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(WeatherError::EmptyLocation);
        }
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        tracing::debug!("Requesting current weather from {}", self.api_url);

        // Strip the URL from transport errors: it carries the API key.
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", location),
                ("appid", api_key),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::warn!("Weather request failed: {}", e);
                WeatherError::Network(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Weather API returned status {}", status);
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Network(e.without_url()))?;

        let reading: CurrentWeatherResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Weather response parse error: {}", e);
            WeatherError::Parse(e.to_string())
        })?;

        let season = Season::from_timestamp(reading.dt, reading.timezone).ok_or_else(|| {
            WeatherError::Parse(format!("timestamp {} is out of range", reading.dt))
        })?;

        tracing::info!(
            "Season at {} is {}",
            reading.name.as_deref().unwrap_or(location),
            season
        );
        Ok(season)
    }
}
