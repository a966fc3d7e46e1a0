use crate::approval::ApprovalSet;
use serde::{Deserialize, Serialize};

/// One observation instant with its quality metadata.
///
/// `value` is `None` when the source reported no numeric result
/// (null, "nil", or any non-numeric text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub value: Option<f64>,
    /// Epoch milliseconds, UTC.
    pub date_time: i64,
    pub nil_reason: Option<String>,
    pub approvals: ApprovalSet,
    pub qualifiers: Vec<String>,
    pub grades: Vec<String>,
}

/// A vertex of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentPoint {
    pub value: Option<f64>,
    /// Epoch milliseconds, UTC.
    pub date: i64,
}

impl From<&Point> for SegmentPoint {
    fn from(point: &Point) -> Self {
        SegmentPoint {
            value: point.value,
            date: point.date_time,
        }
    }
}

/// A run of points drawn as one continuous stroke with one status style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub points: Vec<SegmentPoint>,
    pub approvals: ApprovalSet,
}

impl LineSegment {
    pub fn new(approvals: ApprovalSet) -> Self {
        LineSegment {
            points: Vec::new(),
            approvals,
        }
    }
}
