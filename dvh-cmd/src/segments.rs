//! `segments`: daily-value series JSON to line segments.

use crate::{output, OutputFormat};
use anyhow::Context;
use dvh_core::{point::LineSegment, series::DvTimeSeries};
use dvh_data::{points::assemble, segments::split};
use dvh_utils::dates::format_millis_utc;
use log::info;
use serde::Serialize;

/// One vertex per CSV row, tagged with the segment it belongs to.
#[derive(Debug, Serialize, PartialEq)]
pub struct SegmentRow {
    pub segment: usize,
    pub date: String,
    pub epoch_ms: i64,
    pub value: Option<f64>,
    pub approvals: String,
}

pub fn load_series(path: &str) -> anyhow::Result<DvTimeSeries> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    DvTimeSeries::from_json(&json).with_context(|| format!("parsing series JSON in {path}"))
}

pub fn line_segments(series: &DvTimeSeries) -> anyhow::Result<Vec<LineSegment>> {
    let points = assemble(Some(series))?;
    Ok(split(&points))
}

pub fn segment_rows(segments: &[LineSegment]) -> anyhow::Result<Vec<SegmentRow>> {
    let mut rows = Vec::new();
    for (index, segment) in segments.iter().enumerate() {
        let approvals = segment.approvals.label();
        for point in &segment.points {
            rows.push(SegmentRow {
                segment: index,
                date: format_millis_utc(point.date)?,
                epoch_ms: point.date,
                value: point.value,
                approvals: approvals.clone(),
            });
        }
    }
    Ok(rows)
}

pub fn run_segments(
    series_path: &str,
    format: OutputFormat,
    output_path: Option<&str>,
) -> anyhow::Result<()> {
    let series = load_series(series_path)?;
    let segments = line_segments(&series)?;
    info!(
        "Series {}: {} observations in {} segments",
        series.id,
        series.len(),
        segments.len()
    );
    let rows = segment_rows(&segments)?;
    let writer = output::open_output(output_path)?;
    output::write_records(writer, format, &segments, &rows)
}
