use dvh_utils::error::DateError;
use thiserror::Error;

/// Errors raised while assembling points from a raw daily-value series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("series {series_id}: `{field}` has {actual} entries, `timeStep` has {expected}")]
    LengthMismatch {
        series_id: String,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("series {series_id}: time step {index} is invalid: {source}")]
    InvalidTimestamp {
        series_id: String,
        index: usize,
        #[source]
        source: DateError,
    },
}

/// Errors raised while projecting a statistical series onto a display window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("no statistical points fall between {start_time} and {end_time}")]
    EmptyWindow { start_time: i64, end_time: i64 },
    #[error("invalid period: {0}")]
    InvalidPeriod(#[source] DateError),
    #[error("statistical point {month}/{day} is not a calendar day")]
    InvalidMonthDay { month: u32, day: u32 },
    #[error("invalid window time: {0}")]
    InvalidTime(#[source] DateError),
}
