//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The pure normalizer from Visual Crossing timeline JSON to [`WeatherView`]
//! - The fetch client abstraction and its Visual Crossing implementation
//! - The rendering contract and the controller that drives one lookup
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod raw;
pub mod render;
pub mod units;

pub use config::Config;
pub use controller::WeatherController;
pub use error::WeatherError;
pub use model::{CurrentConditions, ForecastDay, Location, MAX_FORECAST_DAYS, WeatherView};
pub use normalize::{normalize, normalize_value};
pub use provider::{WeatherProvider, provider_from_config, visualcrossing::VisualCrossingProvider};
pub use raw::RawWeatherPayload;
pub use render::{CityInput, ForecastCard, RenderSink, WeatherPanel};
pub use units::Celsius;
