pub mod approval;
pub mod error;
pub mod point;
pub mod series;
pub mod statistic;

/// Two days in milliseconds.
pub const TWO_DAYS_MS: i64 = 1000 * 60 * 60 * 24 * 2;

/// Consecutive points this far apart or more are drawn as separate lines.
pub const GAP_THRESHOLD_MS: i64 = TWO_DAYS_MS;
