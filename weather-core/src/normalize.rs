//! Raw timeline payload → [`WeatherView`].
//!
//! Normalization is total: it either produces a fully populated view or
//! `None`. A missing required field anywhere in the consumed part of the
//! payload yields `None` rather than a partially filled view.

use crate::{
    model::{CurrentConditions, ForecastDay, Location, MAX_FORECAST_DAYS, WeatherView},
    raw::{RawCurrentConditions, RawDay, RawWeatherPayload},
    units::Celsius,
};

pub fn normalize(raw: Option<&RawWeatherPayload>) -> Option<WeatherView> {
    let raw = raw?;
    let current = raw.current_conditions.as_ref()?;

    // Days past the fifth are never inspected.
    let forecast = raw
        .days
        .as_deref()?
        .iter()
        .take(MAX_FORECAST_DAYS)
        .map(normalize_day)
        .collect::<Option<Vec<_>>>()?;

    Some(WeatherView {
        location: Location {
            city: raw.address.clone()?,
            timezone: raw.timezone.clone()?,
        },
        current: normalize_current(current)?,
        forecast,
        last_updated: current.datetime.clone()?,
    })
}

/// Decode and normalize a JSON document; undecodable input (including `null`) yields `None`.
pub fn normalize_value(value: &serde_json::Value) -> Option<WeatherView> {
    let raw = RawWeatherPayload::from_value(value).ok();
    normalize(raw.as_ref())
}

fn normalize_current(current: &RawCurrentConditions) -> Option<CurrentConditions> {
    Some(CurrentConditions {
        temperature_celsius: Celsius::from_fahrenheit(current.temp?)?,
        conditions: current.conditions.clone()?,
        icon_id: current.icon.clone()?,
        precipitation_probability_percent: current.precipprob.clone()?,
        wind_speed_kph: current.windspeed.clone()?,
    })
}

fn normalize_day(day: &RawDay) -> Option<ForecastDay> {
    Some(ForecastDay {
        date: day.datetime.clone()?,
        max_temp_celsius: Celsius::from_fahrenheit(day.tempmax?)?,
        min_temp_celsius: Celsius::from_fahrenheit(day.tempmin?)?,
        conditions: day.conditions.clone()?,
        icon_id: day.icon.clone()?,
    })
}
