use dvh_core::{
    point::{LineSegment, Point, SegmentPoint},
    GAP_THRESHOLD_MS,
};
use log::debug;
use std::mem::replace;

/// Break a time-ordered point list into line segments.
///
/// A new segment starts when two consecutive points are at least
/// [`GAP_THRESHOLD_MS`] apart, or when the approvals change. On an approval
/// change without a gap the point is also appended to the closing segment, so
/// the two strokes share a vertex and render as touching.
pub fn split(points: &[Point]) -> Vec<LineSegment> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut previous_date = first.date_time;
    let mut segment = LineSegment::new(first.approvals.clone());

    for point in points {
        let vertex = SegmentPoint::from(point);
        let has_gap = point.date_time - previous_date >= GAP_THRESHOLD_MS;
        let has_different_approvals = point.approvals != segment.approvals;

        if has_different_approvals && !has_gap {
            segment.points.push(vertex);
        }
        if has_gap || has_different_approvals {
            let next = LineSegment::new(point.approvals.clone());
            segments.push(replace(&mut segment, next));
        }
        segment.points.push(vertex);
        previous_date = point.date_time;
    }
    segments.push(segment);

    debug!("split {} points into {} segments", points.len(), segments.len());
    segments
}
