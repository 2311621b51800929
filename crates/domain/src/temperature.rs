//! Raw temperature encoding
//!
//! Temperature fields of the private API carry degrees Celsius multiplied
//! by 32 as an integer. Alarm limits for temperature alarms use the same
//! encoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Fixed-point scale of raw temperature values
pub const TEMPERATURE_SCALE: f64 = 32.0;

/// A temperature as transmitted by the private API (°C × 32)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTemperature(pub i32);

impl RawTemperature {
    /// Wrap a raw value
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Encode a Celsius temperature, rounding to the nearest step
    pub fn from_celsius(celsius: f64) -> Self {
        Self((celsius * TEMPERATURE_SCALE).round() as i32)
    }

    /// The undecoded value
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Degrees Celsius
    pub fn celsius(self) -> f64 {
        f64::from(self.0) / TEMPERATURE_SCALE
    }

    /// Degrees Fahrenheit
    pub fn fahrenheit(self) -> f64 {
        celsius_to_fahrenheit(self.celsius())
    }

    /// Decoded value in `unit`
    pub fn in_unit(self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.celsius(),
            TemperatureUnit::Fahrenheit => self.fahrenheit(),
        }
    }
}

impl From<i32> for RawTemperature {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RawTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.celsius())
    }
}

/// Convert degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Display unit for decoded temperatures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Unit suffix
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Convert a Celsius value into this unit
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            other => Err(DomainError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
