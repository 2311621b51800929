//! Device records of the public API
//!
//! The public API reports the live state of each probe. Unlike the private
//! API its temperatures are already decoded into the account's unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Current probe temperatures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceTemperature {
    /// Internal temperature
    pub internal: f64,
    /// Ambient temperature
    pub ambient: f64,
}

/// Target and peak of the active cook
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CookTemperature {
    /// Target internal temperature
    pub target: f64,
    /// Highest internal temperature so far
    pub peak: f64,
}

/// Elapsed and estimated remaining time in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CookTime {
    /// Seconds since the cook started
    pub elapsed: i64,
    /// Estimated seconds left, `-1` while unknown
    pub remaining: i64,
}

/// The cook running on a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct V1Cook {
    /// Cook id
    pub id: String,
    /// Display name
    pub name: String,
    /// State name, e.g. "Started" or "Ready For Resting"
    pub state: String,
    /// Target and peak
    pub temperature: CookTemperature,
    /// Timing
    pub time: CookTime,
}

impl V1Cook {
    /// Time since the cook started
    pub fn elapsed_time(&self) -> Duration {
        Duration::from_secs(self.time.elapsed.max(0) as u64)
    }

    /// Estimated time left, `None` while the estimator has no answer
    pub fn remaining_time(&self) -> Option<Duration> {
        (self.time.remaining >= 0).then(|| Duration::from_secs(self.time.remaining as u64))
    }
}

/// A live probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Device id
    pub id: String,
    /// Current temperatures
    pub temperature: DeviceTemperature,
    /// Active cook, absent when idle
    #[serde(default)]
    pub cook: Option<V1Cook>,
    /// Unix time of the last update
    pub updated_at: i64,
}

impl Device {
    /// Time of the last update
    pub fn updated(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.updated_at, 0).unwrap_or_default()
    }
}
