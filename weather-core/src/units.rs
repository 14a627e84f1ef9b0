use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Temperature in degrees Celsius, held at one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Celsius(f64);

impl Celsius {
    /// Convert a Fahrenheit reading. Returns `None` when the result is not finite.
    pub fn from_fahrenheit(fahrenheit: f64) -> Option<Self> {
        let celsius = (fahrenheit - 32.0) * 5.0 / 9.0;
        if !celsius.is_finite() {
            return None;
        }

        Some(Self(round_tenth(celsius)))
    }
}

impl<'de> Deserialize<'de> for Celsius {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Self(round_tenth(value)))
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Round half away from zero; `-0.0` collapses to `0.0` so it never prints as "-0.0".
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}
