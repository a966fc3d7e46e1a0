use dvh_core::{point::Point, series::DvTimeSeries};
use dvh_utils::dates::parse_utc_millis;
use log::warn;
use serde::{Deserialize, Serialize};

/// Start/end epoch milliseconds shown on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayWindow {
    pub start_time: i64,
    pub end_time: i64,
}

/// How far the brush is pulled in from each end of the series window.
/// `start` is measured from the window start, `end` back from the window end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrushOffset {
    pub start: i64,
    pub end: i64,
}

impl DisplayWindow {
    pub fn new(start_time: i64, end_time: i64) -> Self {
        DisplayWindow {
            start_time,
            end_time,
        }
    }

    /// The window of a series: its phenomenon time bounds, falling back to the
    /// first and last assembled points. `None` when neither is available.
    pub fn for_series(series: &DvTimeSeries, points: &[Point]) -> Option<DisplayWindow> {
        let bound = |raw: &Option<String>| {
            raw.as_deref().and_then(|s| match parse_utc_millis(s) {
                Ok(millis) => Some(millis),
                Err(err) => {
                    warn!("series {}: ignoring phenomenon time: {}", series.id, err);
                    None
                }
            })
        };
        let start = bound(&series.properties.phenomenon_time_start)
            .or_else(|| points.first().map(|p| p.date_time))?;
        let end = bound(&series.properties.phenomenon_time_end)
            .or_else(|| points.last().map(|p| p.date_time))?;
        Some(DisplayWindow::new(start, end.max(start)))
    }

    /// Narrow the window by a brush. The result never inverts.
    pub fn with_brush(&self, brush: Option<BrushOffset>) -> DisplayWindow {
        let Some(brush) = brush else {
            return *self;
        };
        let start_time = self.start_time.saturating_add(brush.start).min(self.end_time);
        let end_time = self.end_time.saturating_sub(brush.end).max(start_time);
        DisplayWindow::new(start_time, end_time)
    }

    pub fn duration(&self) -> i64 {
        self.end_time.saturating_sub(self.start_time)
    }

    pub fn contains(&self, millis: i64) -> bool {
        self.start_time <= millis && millis <= self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    // 2018-01-02T00:00:00Z
    const JAN_2_2018: i64 = 1_514_851_200_000;

    fn series(start: Option<&str>, end: Option<&str>) -> DvTimeSeries {
        let mut series = DvTimeSeries::from_json(r#"{"id": "1", "properties": {}}"#).unwrap();
        series.properties.phenomenon_time_start = start.map(str::to_string);
        series.properties.phenomenon_time_end = end.map(str::to_string);
        series
    }

    #[test]
    fn test_window_from_phenomenon_times() {
        let window =
            DisplayWindow::for_series(&series(Some("2018-01-02"), Some("2018-01-05")), &[]).unwrap();
        assert_eq!(window, DisplayWindow::new(JAN_2_2018, JAN_2_2018 + 3 * DAY_MS));
        assert_eq!(window.duration(), 3 * DAY_MS);
        assert!(window.contains(JAN_2_2018 + DAY_MS));
    }

    #[test]
    fn test_window_without_bounds_or_points() {
        assert_eq!(DisplayWindow::for_series(&series(None, None), &[]), None);
    }

    #[test]
    fn test_brush_narrows_window() {
        let window = DisplayWindow::new(0, 100);
        assert_eq!(window.with_brush(None), window);
        assert_eq!(
            window.with_brush(Some(BrushOffset { start: 10, end: 30 })),
            DisplayWindow::new(10, 70)
        );
        assert_eq!(
            window.with_brush(Some(BrushOffset { start: 80, end: 80 })),
            DisplayWindow::new(80, 80)
        );
    }

    #[test]
    fn test_extreme_brush_saturates() {
        let window = DisplayWindow::new(-100, 100);
        assert_eq!(
            window.with_brush(Some(BrushOffset {
                start: i64::MAX,
                end: 0
            })),
            DisplayWindow::new(100, 100)
        );
        assert_eq!(
            window.with_brush(Some(BrushOffset {
                start: i64::MIN,
                end: i64::MIN
            })),
            DisplayWindow::new(i64::MIN, i64::MAX)
        );
    }
}
