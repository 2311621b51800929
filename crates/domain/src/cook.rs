//! Cook records of the private API
//!
//! A cook is one recorded cooking session: how the probe was set up, which
//! device relayed it, and the full temperature history sampled at a fixed
//! interval. Field names follow the camelCase wire format of `/v2/cooks`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::warn;

use crate::catalog::MeatCatalog;
use crate::enums::{AlarmState, AlarmType, CookState, MasterType, ProbeType};
use crate::history::HistorySample;
use crate::temperature::RawTemperature;

/// A recorded cooking session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cook {
    /// Cloud identifier
    pub id: String,
    /// Total cook time in seconds
    pub total_time: u64,
    /// Marked as favourite in the app
    pub is_favourite: bool,
    /// Deleted in the app but still returned by the API
    pub is_deleted: bool,
    /// Owned by the logged-in account
    pub is_owner: bool,
    /// Last modification
    pub updated_at: DateTime<Utc>,
    /// User rating, if given
    #[serde(default)]
    pub feedback: Option<i32>,
    /// Device-reported payload
    pub raw: CookRaw,
}

/// The cook payload uploaded by the relaying device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookRaw {
    /// Relaying device kind
    pub master_type: MasterType,
    /// Probe serial
    #[serde(rename = "probeID")]
    pub probe_id: String,
    /// Probe model and slot
    pub probe_number: ProbeType,
    /// Probe firmware
    pub probe_firmware_revision: String,
    /// Parent device (block or phone) serial
    #[serde(rename = "parentDeviceID")]
    pub parent_device_id: String,
    /// Slot on the parent device
    pub parent_device_probe_number: i32,
    /// Parent device firmware
    pub parent_device_firmware_revision: String,
    /// Cook configuration
    pub setup: Setup,
    /// Sampled temperatures
    pub history: History,
    /// Free-form device description
    pub device_info: String,
    /// Highest internal temperature reached
    pub peak: RawTemperature,
    /// App version that uploaded the cook
    pub app_version: String,
    /// OS version of the uploading device
    pub os_version: String,
    /// Account e-mail
    pub email_address: String,
    /// Cloud id of the uploading device
    #[serde(rename = "sendingDeviceCloudID")]
    pub sending_device_cloud_id: String,
}

/// Cook configuration chosen in the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    /// Update counter, null on older uploads
    #[serde(default)]
    pub sequence_number: Option<i64>,
    /// Cook lifecycle state
    pub state: CookState,
    /// Display name
    pub name: String,
    /// Target internal temperature
    pub target_internal_temperature: RawTemperature,
    /// Configured alarms
    pub alarms: Vec<Alarm>,
    /// Cook id as known by the device
    #[serde(rename = "cookID")]
    pub cook_id: String,
    /// Catalog cut id
    #[serde(rename = "cutID")]
    pub cut_id: i32,
    /// Catalog temperature range id
    #[serde(rename = "presetID")]
    pub preset_id: i32,
    /// Clip number on the charger
    pub clip_number: i32,
    /// Appliance kind, absent on older uploads
    #[serde(default)]
    pub cooking_appliance: Option<i32>,
    /// Estimator parameters
    pub estimator_config: EstimatorConfig,
}

/// A configured alarm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    /// What the alarm watches
    #[serde(rename = "type")]
    pub alarm_type: AlarmType,
    /// Lifecycle state
    pub state: AlarmState,
    /// Encoded temperature for temperature alarms, seconds otherwise
    pub limit: i64,
}

/// Decoded alarm limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlarmLimit {
    /// Temperature threshold
    Temperature(RawTemperature),
    /// Time threshold
    Duration(Duration),
}

impl Alarm {
    /// Interpret `limit` according to the alarm type
    pub fn limit(&self) -> AlarmLimit {
        if self.alarm_type.is_temperature() {
            let raw = self.limit.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            AlarmLimit::Temperature(RawTemperature(raw))
        } else {
            AlarmLimit::Duration(Duration::from_secs(self.limit.max(0) as u64))
        }
    }
}

/// Parameters of the ready-time estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatorConfig {
    /// Temperature rise expected during resting (raw)
    pub temperature_change_before_ready: i32,
    /// Delay before announcing ready
    pub seconds_delay_before_ready: i64,
    /// Delay before announcing resting
    pub seconds_delay_before_resting: i64,
    /// Estimator algorithm
    pub estimator_type: i32,
}

/// Fixed-interval temperature history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    /// Seconds between samples
    pub interval: u32,
    /// Unix time of the first sample
    pub start_time: i64,
    /// Samples in order
    pub values: Vec<HistoryValue>,
}

/// One raw history sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryValue {
    /// Ambient temperature
    pub ambient: RawTemperature,
    /// Internal temperature
    pub internal: RawTemperature,
}

impl History {
    /// Decode the history into timestamped samples
    pub fn samples(&self) -> Vec<HistorySample> {
        let start = timestamp(self.start_time);
        let interval = chrono::Duration::seconds(i64::from(self.interval));

        let samples: Vec<HistorySample> = self
            .values
            .iter()
            .zip(0i32..)
            .map_while(|(value, index)| {
                let offset = interval.checked_mul(index)?;
                Some(HistorySample {
                    timestamp: start.checked_add_signed(offset)?,
                    internal_c: value.internal.celsius(),
                    ambient_c: value.ambient.celsius(),
                })
            })
            .collect();

        if samples.len() < self.values.len() {
            warn!(
                "History truncated to {} of {} samples: timestamps out of range (interval {}s)",
                samples.len(),
                self.values.len(),
                self.interval
            );
        }
        samples
    }
}

fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_else(|| {
        warn!("Timestamp {} out of range, using the Unix epoch", secs);
        DateTime::default()
    })
}

impl Cook {
    /// Time of the first history sample
    pub fn started_at(&self) -> DateTime<Utc> {
        timestamp(self.raw.history.start_time)
    }

    /// Total cook time
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.total_time)
    }

    /// Highest internal temperature reached
    pub fn peak(&self) -> RawTemperature {
        self.raw.peak
    }

    /// Target internal temperature
    pub fn target(&self) -> RawTemperature {
        self.raw.setup.target_internal_temperature
    }

    /// Decoded temperature history
    pub fn history(&self) -> Vec<HistorySample> {
        self.raw.history.samples()
    }

    /// One-line description resolving cut and preset through `catalog`
    pub fn summary<'a>(&'a self, catalog: &'a MeatCatalog) -> CookSummary<'a> {
        CookSummary {
            cook: self,
            catalog,
        }
    }
}

/// Display adapter returned by [`Cook::summary`]
pub struct CookSummary<'a> {
    cook: &'a Cook,
    catalog: &'a MeatCatalog,
}

impl fmt::Display for CookSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let setup = &self.cook.raw.setup;
        let cut = match self.catalog.cut(setup.cut_id) {
            Some(cut) => cut.name_long.clone(),
            None => format!("cut #{}", setup.cut_id),
        };
        let preset = match self.catalog.preset(setup.preset_id) {
            Some(preset) => preset.name.clone(),
            None => format!("preset #{}", setup.preset_id),
        };

        write!(
            f,
            "updated {} started {} cut={} preset={} duration={} peak={:.1}°C target={:.1}°C",
            self.cook.updated_at.format("%Y-%m-%d %H:%M"),
            self.cook.started_at().format("%Y-%m-%d %H:%M"),
            cut,
            preset,
            format_duration(self.cook.duration()),
            self.cook.peak().celsius(),
            self.cook.target().celsius(),
        )
    }
}

/// Format a duration as `H:MM:SS`
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
