use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A data review status code attached to an observation.
/// - `Approved`: reviewed and final
/// - `Estimated`: value was estimated (ice, equipment failure, ...)
/// - `Provisional`: not yet reviewed
/// - `Other(String)`: any code this crate does not know by name
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Approval {
    Approved,
    Estimated,
    Provisional,
    Other(String),
}

impl Approval {
    pub fn code(&self) -> &str {
        match self {
            Approval::Approved => "Approved",
            Approval::Estimated => "Estimated",
            Approval::Provisional => "Provisional",
            Approval::Other(code) => code,
        }
    }
}

impl From<&str> for Approval {
    fn from(value: &str) -> Self {
        match value.trim() {
            "Approved" => Approval::Approved,
            "Estimated" => Approval::Estimated,
            "Provisional" => Approval::Provisional,
            other => Approval::Other(other.to_string()),
        }
    }
}

impl From<String> for Approval {
    fn from(value: String) -> Self {
        Approval::from(value.as_str())
    }
}

impl From<Approval> for String {
    fn from(value: Approval) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The set of approval codes shared by an observation or a line segment.
///
/// Two sets are equal when they hold the same codes, regardless of the order
/// or repetition in the source list.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApprovalSet(BTreeSet<Approval>);

impl ApprovalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, approval: &Approval) -> bool {
        self.0.contains(approval)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Approval> {
        self.0.iter()
    }

    /// Codes joined with `;`, e.g. "Approved;Estimated". Empty sets give "".
    pub fn label(&self) -> String {
        self.0.iter().map(Approval::code).collect::<Vec<_>>().join(";")
    }
}

impl<A: Into<Approval>> FromIterator<A> for ApprovalSet {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        ApprovalSet(iter.into_iter().map(Into::into).collect())
    }
}
