//! `cursor`: the observation under a cursor offset and its marker position.

use crate::segments::load_series;
use dvh_core::{point::Point, series::DvTimeSeries};
use dvh_data::{
    cursor::{nearest_point, project, resolve_cursor_time, CursorPoint},
    points::assemble,
    scale::LinearScale,
    window::DisplayWindow,
};
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CursorReadout {
    pub cursor_time: i64,
    pub point: Option<Point>,
    pub marker: Vec<CursorPoint>,
}

/// Locate the cursor on a `width` x `height` chart whose y axis spans the
/// series' value range.
pub fn cursor_readout(
    series: &DvTimeSeries,
    offset: Option<i64>,
    width: f64,
    height: f64,
) -> anyhow::Result<Option<CursorReadout>> {
    let points = assemble(Some(series))?;
    let Some(window) = DisplayWindow::for_series(series, &points) else {
        return Ok(None);
    };
    let cursor_time = resolve_cursor_time(offset, window.start_time, window.end_time);
    let point = nearest_point(&points, cursor_time);

    let x_scale = LinearScale::new(
        (window.start_time as f64, window.end_time as f64),
        (0.0, width),
    );
    let y_scale = LinearScale::new(value_extent(&points), (height, 0.0));
    let marker = project(point, &x_scale, &y_scale);

    Ok(Some(CursorReadout {
        cursor_time,
        point: point.cloned(),
        marker,
    }))
}

fn value_extent(points: &[Point]) -> (f64, f64) {
    points
        .iter()
        .filter_map(|point| point.value)
        .fold(None, |extent: Option<(f64, f64)>, value| match extent {
            Some((low, high)) => Some((low.min(value), high.max(value))),
            None => Some((value, value)),
        })
        .unwrap_or((0.0, 1.0))
}

pub fn run_cursor(
    series_path: &str,
    offset: Option<i64>,
    width: f64,
    height: f64,
) -> anyhow::Result<()> {
    let series = load_series(series_path)?;
    match cursor_readout(&series, offset, width, height)? {
        Some(readout) => {
            info!(
                "Cursor at {} over series {}",
                readout.cursor_time, series.id
            );
            println!("{}", serde_json::to_string_pretty(&readout)?);
        }
        None => info!("Series {} has no observations", series.id),
    }
    Ok(())
}
