//! Season classifier for skincare
//!
//! Asks a current-weather API for the observation time at a location and
//! maps the local month to a season.

pub mod provider;
pub mod types;

pub use provider::{ProviderOptions, WeatherProvider};
pub use types::*;
