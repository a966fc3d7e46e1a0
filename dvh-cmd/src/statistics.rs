//! `statistics`: cyclical statistics JSON to a windowed step series.

use crate::{output, OutputFormat};
use anyhow::Context;
use dvh_core::statistic::{ResolvedStatisticalPoint, StatisticalPoint, StatisticalSeries};
use dvh_data::statistics::coerce;
use dvh_utils::dates::{format_millis_utc, parse_time_zone, parse_utc_millis};
use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct StatisticRow {
    pub month: u32,
    pub day: u32,
    pub date: String,
    pub epoch_ms: i64,
    pub value: f64,
}

pub fn statistic_rows(points: &[ResolvedStatisticalPoint]) -> anyhow::Result<Vec<StatisticRow>> {
    points
        .iter()
        .map(|point| {
            Ok(StatisticRow {
                month: point.month,
                day: point.day,
                date: format_millis_utc(point.date_time)?,
                epoch_ms: point.date_time,
                value: point.value,
            })
        })
        .collect()
}

pub fn coerce_statistics(
    points: Vec<StatisticalPoint>,
    end_time: &str,
    period: &str,
    time_zone: &str,
) -> anyhow::Result<Vec<ResolvedStatisticalPoint>> {
    let tz = parse_time_zone(time_zone)?;
    let end_time = parse_utc_millis(end_time).context("parsing --end-time")?;
    let series = StatisticalSeries { points, end_time };
    let coerced = coerce(&series, period, tz).inspect_err(|err| {
        warn!("statistics overlay cannot be drawn: {}", err);
    })?;
    Ok(coerced)
}

pub fn run_statistics(
    stats_path: &str,
    end_time: &str,
    period: &str,
    time_zone: &str,
    format: OutputFormat,
    output_path: Option<&str>,
) -> anyhow::Result<()> {
    let json =
        std::fs::read_to_string(stats_path).with_context(|| format!("reading {stats_path}"))?;
    let points: Vec<StatisticalPoint> = serde_json::from_str(&json)
        .with_context(|| format!("parsing statistics JSON in {stats_path}"))?;
    info!(
        "Coercing {} statistical points over {} ending {} ({})",
        points.len(),
        period,
        end_time,
        time_zone
    );
    let coerced = coerce_statistics(points, end_time, period, time_zone)?;
    let rows = statistic_rows(&coerced)?;
    let writer = output::open_output(output_path)?;
    output::write_records(writer, format, &coerced, &rows)
}
