use serde::{Deserialize, Deserializer, Serialize};

/// One entry of a cyclical (month/day indexed) statistical series,
/// e.g. the historical median flow for March 3rd.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticalPoint {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub value: f64,
    /// A precomputed instant. Coercion always resolves dates per year and
    /// does not read this.
    #[serde(default)]
    pub date_time: Option<i64>,
}

impl StatisticalPoint {
    pub fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }
}

/// A cyclical series plus the end of the window it should be drawn in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticalSeries {
    pub points: Vec<StatisticalPoint>,
    /// Epoch milliseconds.
    pub end_time: i64,
}

/// A statistical value pinned to a concrete instant inside a display window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStatisticalPoint {
    pub month: u32,
    pub day: u32,
    pub value: f64,
    /// Epoch milliseconds.
    pub date_time: i64,
}

impl ResolvedStatisticalPoint {
    pub fn resolve(point: &StatisticalPoint, date_time: i64) -> Self {
        ResolvedStatisticalPoint {
            month: point.month,
            day: point.day,
            value: point.value,
            date_time,
        }
    }

    /// The same value pinned to another instant.
    pub fn at(&self, date_time: i64) -> Self {
        ResolvedStatisticalPoint { date_time, ..*self }
    }
}

/// Statistics services send values as numbers or numeric strings.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
