//! Upstream Visual Crossing timeline response.
//!
//! Only the fields the normalizer reads are modelled; everything else in the
//! payload is ignored. Every field is optional because the payload is
//! untrusted: presence is checked during normalization, not decoding.

use serde::Deserialize;
use serde_json::Number;

use crate::error::WeatherError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawWeatherPayload {
    pub address: Option<String>,
    pub timezone: Option<String>,
    #[serde(rename = "currentConditions")]
    pub current_conditions: Option<RawCurrentConditions>,
    pub days: Option<Vec<RawDay>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCurrentConditions {
    pub datetime: Option<String>,
    /// Fahrenheit, since requests pin `unitGroup=us`.
    pub temp: Option<f64>,
    pub conditions: Option<String>,
    pub icon: Option<String>,
    /// Kept as a JSON number so integers stay integers.
    pub precipprob: Option<Number>,
    pub windspeed: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDay {
    pub datetime: Option<String>,
    pub tempmax: Option<f64>,
    pub tempmin: Option<f64>,
    pub conditions: Option<String>,
    pub icon: Option<String>,
}

impl RawWeatherPayload {
    /// Decode an already-parsed JSON document.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, WeatherError> {
        Self::deserialize(value).map_err(WeatherError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_the_documented_fields_and_ignores_the_rest() {
        let raw = RawWeatherPayload::from_value(&json!({
            "queryCost": 1,
            "latitude": 51.5,
            "address": "london",
            "timezone": "Europe/London",
            "currentConditions": {
                "datetime": "14:30:00",
                "temp": 60.1,
                "conditions": "Partially cloudy",
                "icon": "partly-cloudy-day",
                "precipprob": 20,
                "windspeed": 11.2,
                "humidity": 71.0
            },
            "days": [
                { "datetime": "2024-05-01", "tempmax": 64, "tempmin": 48.2,
                  "conditions": "Rain", "icon": "rain", "hours": [] }
            ]
        }))
        .expect("valid payload");

        assert_eq!(raw.address.as_deref(), Some("london"));
        let current = raw.current_conditions.expect("current conditions");
        assert_eq!(current.precipprob, Some(Number::from(20)));
        assert_eq!(raw.days.map(|d| d.len()), Some(1));
    }

    #[test]
    fn null_fields_decode_as_missing() {
        let raw = RawWeatherPayload::from_value(&json!({
            "address": null,
            "currentConditions": { "temp": null, "precipprob": null }
        }))
        .expect("nulls are allowed");

        assert!(raw.address.is_none());
        let current = raw.current_conditions.unwrap();
        assert!(current.temp.is_none());
        assert!(current.precipprob.is_none());
    }

    #[test]
    fn wrong_field_type_is_a_decode_error() {
        let err = RawWeatherPayload::from_value(&json!({ "address": 42 })).unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[test]
    fn json_null_document_is_a_decode_error() {
        assert!(RawWeatherPayload::from_value(&serde_json::Value::Null).is_err());
    }
}
