use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Season of the year, derived from a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Map a calendar month (1-12) to its season.
    /// March-May is spring, June-August summer, September-November autumn,
    /// anything else winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Season for a Unix timestamp observed at a place `utc_offset_secs`
    /// east of UTC. Returns `None` if the timestamp is out of range.
    pub fn from_timestamp(unix_secs: i64, utc_offset_secs: i32) -> Option<Self> {
        month_at(unix_secs, utc_offset_secs).map(Self::from_month)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Local calendar month (1-12) of a Unix timestamp at the given UTC offset
pub fn month_at(unix_secs: i64, utc_offset_secs: i32) -> Option<u32> {
    let local_secs = unix_secs.checked_add(i64::from(utc_offset_secs))?;
    DateTime::<Utc>::from_timestamp(local_secs, 0).map(|t| t.month())
}

/// The subset of the current-weather response the classifier reads
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Time of the observation, Unix seconds (UTC)
    pub dt: i64,
    /// Shift in seconds from UTC at the observed location
    #[serde(default)]
    pub timezone: i32,
    #[serde(default)]
    pub name: Option<String>,
}

/// Season classifier errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Location is empty")]
    EmptyLocation,
    #[error("Weather API key is not configured")]
    MissingApiKey,
    #[error("Unable to fetch weather data (status code {0})")]
    Status(u16),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    /// Message shown to the user in place of a season
    pub fn user_message(&self) -> String {
        match self {
            Self::Status(code) => format!(
                "Error: Unable to fetch weather data (status code {}).",
                code
            ),
            other => format!("Error fetching weather data: {}", other),
        }
    }
}
