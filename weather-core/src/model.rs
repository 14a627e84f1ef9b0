use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::units::Celsius;

/// Upper bound on forecast days kept in a [`WeatherView`].
pub const MAX_FORECAST_DAYS: usize = 5;

/// Unit-normalized weather for one city, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherView {
    pub location: Location,
    pub current: CurrentConditions,
    /// Chronological, at most [`MAX_FORECAST_DAYS`] entries.
    pub forecast: Vec<ForecastDay>,
    /// Upstream observation time token, verbatim.
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature_celsius: Celsius,
    pub conditions: String,
    pub icon_id: String,
    /// Upstream number, integer or float as received.
    pub precipitation_probability_percent: Number,
    /// Passed through from upstream without conversion.
    pub wind_speed_kph: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: String,
    pub max_temp_celsius: Celsius,
    pub min_temp_celsius: Celsius,
    pub conditions: String,
    pub icon_id: String,
}
