//! Rendering of command results

use meater_domain::{
    format_duration, Cook, Device, HistorySample, HistoryStats, MeatCatalog, RawTemperature,
    TemperatureUnit,
};
use serde::Serialize;
use std::io::Write;

/// Print `value` with at least one decimal, without trailing noise
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Hide deleted cooks unless `all`; keep only favourites when `favourites`
pub fn select_cooks(cooks: Vec<Cook>, all: bool, favourites: bool) -> Vec<Cook> {
    cooks
        .into_iter()
        .filter(|cook| all || !cook.is_deleted)
        .filter(|cook| !favourites || cook.is_favourite)
        .collect()
}

pub fn write_cooks<W: Write>(
    out: &mut W,
    cooks: &[Cook],
    catalog: &MeatCatalog,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, cooks)?;
        writeln!(out)?;
        return Ok(());
    }

    if cooks.is_empty() {
        writeln!(out, "No cooks found")?;
        return Ok(());
    }

    for cook in cooks {
        let mut flags = String::new();
        if cook.is_favourite {
            flags.push('*');
        }
        if cook.is_deleted {
            flags.push('x');
        }
        writeln!(
            out,
            "{} [{}]{} {}",
            cook.id,
            cook.raw.setup.state,
            if flags.is_empty() {
                String::new()
            } else {
                format!(" {}", flags)
            },
            cook.summary(catalog)
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct HistoryRow {
    timestamp: String,
    internal: f64,
    ambient: f64,
}

impl HistoryRow {
    fn new(sample: &HistorySample, unit: TemperatureUnit) -> Self {
        Self {
            timestamp: sample.timestamp.to_rfc3339(),
            internal: sample.internal(unit),
            ambient: sample.ambient(unit),
        }
    }
}

pub fn write_history_csv<W: Write>(
    out: W,
    samples: &[HistorySample],
    unit: TemperatureUnit,
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    if samples.is_empty() {
        writer.write_record(["timestamp", "internal", "ambient"])?;
    }
    for sample in samples {
        writer.serialize(HistoryRow::new(sample, unit))?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct HistoryExport<'a> {
    cook_id: &'a str,
    unit: TemperatureUnit,
    target: f64,
    peak: f64,
    stats: Option<HistoryStats>,
    samples: Vec<HistoryRow>,
}

pub fn write_history_json<W: Write>(
    out: &mut W,
    cook: &Cook,
    samples: &[HistorySample],
    unit: TemperatureUnit,
) -> anyhow::Result<()> {
    let export = HistoryExport {
        cook_id: &cook.id,
        unit,
        target: cook.target().in_unit(unit),
        peak: cook.peak().in_unit(unit),
        stats: HistoryStats::from_samples(samples),
        samples: samples
            .iter()
            .map(|sample| HistoryRow::new(sample, unit))
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &export)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_devices<W: Write>(out: &mut W, devices: &[Device], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, devices)?;
        writeln!(out)?;
        return Ok(());
    }

    if devices.is_empty() {
        writeln!(out, "No active devices")?;
        return Ok(());
    }

    for device in devices {
        write!(
            out,
            "{} internal={} ambient={} updated {}",
            device.id,
            format_decimal(device.temperature.internal),
            format_decimal(device.temperature.ambient),
            device.updated().format("%Y-%m-%d %H:%M:%S"),
        )?;
        if let Some(cook) = &device.cook {
            let remaining = cook
                .remaining_time()
                .map(format_duration)
                .unwrap_or_else(|| "unknown".to_string());
            write!(
                out,
                " cook=\"{}\" state={} target={} elapsed={} remaining={}",
                cook.name,
                cook.state,
                format_decimal(cook.temperature.target),
                format_duration(cook.elapsed_time()),
                remaining,
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_conversions<W: Write>(
    out: &mut W,
    raw: &[i32],
    unit: TemperatureUnit,
) -> anyhow::Result<()> {
    for value in raw {
        let decoded = RawTemperature::new(*value).in_unit(unit);
        writeln!(out, "{}\t{}{}", value, format_decimal(decoded), unit.symbol())?;
    }
    Ok(())
}
