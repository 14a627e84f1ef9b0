//! Rendering contract between the controller and whatever displays weather.

use crate::model::{ForecastDay, WeatherView};

/// Display surface for lookup results.
pub trait RenderSink {
    /// Show the weather panel for `view`, replacing any previous forecast.
    fn render(&mut self, view: &WeatherView);

    fn show_error(&mut self, message: &str);

    fn clear_error(&mut self);

    /// Hide the weather panel so stale data is not shown next to an error.
    fn clear_weather(&mut self);
}

/// Source of the city the user asked for. `None` means nothing was entered.
pub trait CityInput {
    fn read_city(&mut self) -> Option<String>;
}

/// Text labels for one rendered [`WeatherView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherPanel {
    pub location: String,
    pub temperature: String,
    pub conditions: String,
    pub wind_speed: String,
    pub precipitation: String,
    pub updated: String,
    pub forecast: Vec<ForecastCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCard {
    pub date: String,
    pub max_temp: String,
    pub min_temp: String,
    pub conditions: String,
}

impl From<&WeatherView> for WeatherPanel {
    fn from(view: &WeatherView) -> Self {
        let current = &view.current;

        Self {
            location: format!("Weather in {}", view.location.city),
            temperature: format!("Temperature: {}°C", current.temperature_celsius),
            conditions: format!("Conditions: {}", current.conditions),
            wind_speed: format!("Wind Speed: {} km/h", current.wind_speed_kph),
            precipitation: format!("Precipitation: {}%", current.precipitation_probability_percent),
            updated: format!("Updated: {} ({})", view.last_updated, view.location.timezone),
            forecast: view.forecast.iter().map(ForecastCard::from).collect(),
        }
    }
}

impl From<&ForecastDay> for ForecastCard {
    fn from(day: &ForecastDay) -> Self {
        Self {
            date: day.date.clone(),
            max_temp: format!("Max Temp: {}°C", day.max_temp_celsius),
            min_temp: format!("Min Temp: {}°C", day.min_temp_celsius),
            conditions: format!("Conditions: {}", day.conditions),
        }
    }
}
