use dvh_core::{approval::ApprovalSet, point::LineSegment};

/// Distinct approval sets of `segments` in order of first appearance, one
/// legend line marker each.
pub fn approval_legend(segments: &[LineSegment]) -> Vec<ApprovalSet> {
    let mut legend: Vec<ApprovalSet> = Vec::new();
    for segment in segments {
        if !legend.contains(&segment.approvals) {
            legend.push(segment.approvals.clone());
        }
    }
    legend
}
