//! Domain model for the MEATER cloud APIs
//!
//! This crate contains the pure data model with no network dependencies:
//! - Raw temperature encoding (°C × 32) and unit conversion
//! - Cook records as returned by the private `/v2/cooks` endpoint
//! - Cut and preset catalog lookups
//! - Live device records from the public API

#![warn(missing_docs)]

pub mod catalog;
pub mod cook;
pub mod enums;
pub mod error;
pub mod history;
pub mod public;
pub mod temperature;

pub use catalog::{Cut, MeatCatalog, TemperatureRange};
pub use cook::{
    format_duration, Alarm, AlarmLimit, Cook, CookRaw, CookSummary, EstimatorConfig, History,
    HistoryValue, Setup,
};
pub use enums::{AlarmState, AlarmType, CookState, MasterType, ProbeType};
pub use error::{DomainError, Result};
pub use history::{HistorySample, HistoryStats};
pub use public::{CookTemperature, CookTime, Device, DeviceTemperature, V1Cook};
pub use temperature::{RawTemperature, TemperatureUnit, TEMPERATURE_SCALE};
