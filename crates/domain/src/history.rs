//! Decoded temperature series

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::temperature::TemperatureUnit;

/// One decoded history sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    /// Sample time
    pub timestamp: DateTime<Utc>,
    /// Internal temperature in °C
    pub internal_c: f64,
    /// Ambient temperature in °C
    pub ambient_c: f64,
}

impl HistorySample {
    /// Internal temperature in `unit`
    pub fn internal(&self, unit: TemperatureUnit) -> f64 {
        unit.from_celsius(self.internal_c)
    }

    /// Ambient temperature in `unit`
    pub fn ambient(&self, unit: TemperatureUnit) -> f64 {
        unit.from_celsius(self.ambient_c)
    }
}

/// Aggregate figures over a history series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryStats {
    /// Number of samples
    pub samples: usize,
    /// First sample time
    pub first: DateTime<Utc>,
    /// Last sample time
    pub last: DateTime<Utc>,
    /// Highest internal temperature in °C
    pub max_internal_c: f64,
    /// Lowest internal temperature in °C
    pub min_internal_c: f64,
    /// Highest ambient temperature in °C
    pub max_ambient_c: f64,
}

impl HistoryStats {
    /// Compute stats, `None` for an empty series
    pub fn from_samples(samples: &[HistorySample]) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;

        let mut stats = Self {
            samples: samples.len(),
            first: first.timestamp,
            last: last.timestamp,
            max_internal_c: first.internal_c,
            min_internal_c: first.internal_c,
            max_ambient_c: first.ambient_c,
        };

        for sample in &samples[1..] {
            stats.max_internal_c = stats.max_internal_c.max(sample.internal_c);
            stats.min_internal_c = stats.min_internal_c.min(sample.internal_c);
            stats.max_ambient_c = stats.max_ambient_c.max(sample.ambient_c);
        }

        Some(stats)
    }

    /// Time covered by the series
    pub fn span(&self) -> chrono::Duration {
        self.last - self.first
    }
}
