use crate::scale::Scale;
use dvh_core::point::Point;
use serde::Serialize;

/// Screen position of the cursor marker. `y` is `None` when the observation
/// under the cursor has no value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorPoint {
    pub x: f64,
    pub y: Option<f64>,
}

/// The epoch time the cursor points at. No offset means the window end.
pub fn resolve_cursor_time(offset: Option<i64>, window_start: i64, window_end: i64) -> i64 {
    match offset {
        Some(offset) => window_start.saturating_add(offset),
        None => window_end,
    }
}

/// The point closest in time to `target`; among equally close points the
/// earliest wins. `points` must be sorted by time.
pub fn nearest_point(points: &[Point], target: i64) -> Option<&Point> {
    let after = points.partition_point(|point| point.date_time < target);
    let candidate = match (after.checked_sub(1).map(|i| &points[i]), points.get(after)) {
        (Some(before), Some(at_or_after)) => {
            if target.abs_diff(before.date_time) <= at_or_after.date_time.abs_diff(target) {
                before
            } else {
                at_or_after
            }
        }
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => return None,
    };
    // first of any run of equal timestamps
    let first = points.partition_point(|point| point.date_time < candidate.date_time);
    points.get(first)
}

/// Project `point` onto the chart. Gives exactly one coordinate pair for a
/// point and none without one.
pub fn project<X, Y>(point: Option<&Point>, x_scale: &X, y_scale: &Y) -> Vec<CursorPoint>
where
    X: Scale + ?Sized,
    Y: Scale + ?Sized,
{
    point
        .map(|point| CursorPoint {
            x: x_scale.apply(point.date_time as f64),
            y: point.value.map(|value| y_scale.apply(value)),
        })
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::LinearScale;
    use dvh_core::approval::ApprovalSet;

    fn point(date_time: i64, value: Option<f64>) -> Point {
        Point {
            value,
            date_time,
            nil_reason: None,
            approvals: ApprovalSet::new(),
            qualifiers: Vec::new(),
            grades: Vec::new(),
        }
    }

    fn three_points() -> Vec<Point> {
        vec![point(0, Some(1.0)), point(10, Some(2.0)), point(20, Some(3.0))]
    }

    #[test]
    fn test_resolve_cursor_time() {
        assert_eq!(resolve_cursor_time(None, 100, 500), 500);
        assert_eq!(resolve_cursor_time(Some(50), 100, 500), 150);
        assert_eq!(resolve_cursor_time(Some(0), 100, 500), 100);
    }

    #[test]
    fn test_resolve_cursor_time_saturates() {
        assert_eq!(resolve_cursor_time(Some(i64::MAX), 100, 500), i64::MAX);
        assert_eq!(resolve_cursor_time(Some(i64::MIN), -100, 500), i64::MIN);
    }

    #[test]
    fn test_nearest_point() {
        let points = three_points();
        assert_eq!(nearest_point(&points, 14).unwrap().date_time, 10);
        assert_eq!(nearest_point(&points, 16).unwrap().date_time, 20);
        assert_eq!(nearest_point(&points, 20).unwrap().date_time, 20);
        assert_eq!(nearest_point(&points, -100).unwrap().date_time, 0);
        assert_eq!(nearest_point(&points, 1_000).unwrap().date_time, 20);
    }

    #[test]
    fn test_nearest_point_tie_goes_to_earlier() {
        let points = three_points();
        assert_eq!(nearest_point(&points, 15).unwrap().date_time, 10);
        assert_eq!(nearest_point(&points, 5).unwrap().date_time, 0);
    }

    #[test]
    fn test_nearest_point_first_of_duplicates() {
        let points = vec![point(0, Some(1.0)), point(10, Some(2.0)), point(10, Some(9.0))];
        assert_eq!(nearest_point(&points, 12).unwrap().value, Some(2.0));
    }

    #[test]
    fn test_nearest_point_empty() {
        assert_eq!(nearest_point(&[], 10), None);
    }

    #[test]
    fn test_project() {
        let x_scale = LinearScale::new((0.0, 20.0), (0.0, 200.0));
        let y_scale = LinearScale::new((0.0, 4.0), (100.0, 0.0));
        let points = three_points();

        let projected = project(nearest_point(&points, 9), &x_scale, &y_scale);
        assert_eq!(
            projected,
            vec![CursorPoint {
                x: 100.0,
                y: Some(50.0)
            }]
        );
        assert!(project(None, &x_scale, &y_scale).is_empty());
    }

    #[test]
    fn test_project_point_without_value() {
        let x_scale = LinearScale::new((0.0, 20.0), (0.0, 200.0));
        let no_value = point(10, None);
        let projected = project(Some(&no_value), &x_scale, &|y: f64| y);
        assert_eq!(projected, vec![CursorPoint { x: 100.0, y: None }]);
    }

    #[test]
    fn test_project_with_closures() {
        let points = three_points();
        let projected = project(points.last(), &|x: f64| x + 1.0, &|y: f64| -y);
        assert_eq!(
            projected,
            vec![CursorPoint {
                x: 21.0,
                y: Some(-3.0)
            }]
        );
    }
}
