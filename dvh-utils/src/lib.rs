//! Shared utility functions for DVH crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{
        DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
        TimeZone, Utc,
    };
    use chrono_tz::Tz;
    use std::str::FromStr;

    /// Date format used for date-only time steps: "YYYY-MM-DD"
    pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Date-time layouts accepted without an explicit offset; these are read as UTC.
    const NAIVE_DATE_TIME_FORMATS: [&str; 3] =
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

    /// Date-time layouts with a numeric offset that RFC 3339 does not cover.
    const OFFSET_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

    /// Daylight saving gaps are at most a few hours wide; step through them in
    /// quarter hours.
    const GAP_STEP_MINUTES: i64 = 15;
    const GAP_MAX_STEPS: i64 = 16;

    /// Parse an ISO-8601 time step into epoch milliseconds, reading it as UTC.
    ///
    /// Date-only values land on midnight UTC. Date-times without an offset are
    /// UTC. An explicit offset (`Z`, `+05:00`, `-0600`) is honored.
    pub fn parse_utc_millis(s: &str) -> Result<i64, DateError> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.timestamp_millis());
        }
        for format in OFFSET_DATE_TIME_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, format) {
                return Ok(dt.timestamp_millis());
            }
        }
        for format in NAIVE_DATE_TIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(naive.and_utc().timestamp_millis());
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, ISO_DATE_FORMAT) {
            return Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis());
        }
        Err(DateError::InvalidTimestamp(s.to_string()))
    }

    /// Format epoch milliseconds as an RFC 3339 UTC string.
    pub fn format_millis_utc(millis: i64) -> Result<String, DateError> {
        let dt = to_utc(millis)?;
        Ok(dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }

    /// Look up an IANA time zone by name (e.g. "America/Chicago").
    pub fn parse_time_zone(name: &str) -> Result<Tz, DateError> {
        Tz::from_str(name.trim()).map_err(|_| DateError::UnknownTimeZone(name.to_string()))
    }

    /// True when February has 29 days in `year`.
    pub fn is_leap_year(year: i32) -> bool {
        NaiveDate::from_ymd_opt(year, 2, 29).is_some()
    }

    /// The calendar year of an instant as seen in `tz`.
    pub fn year_of(millis: i64, tz: Tz) -> Result<i32, DateError> {
        Ok(to_utc(millis)?.with_timezone(&tz).year())
    }

    /// Epoch milliseconds of local midnight on `year`-`month`-`day` in `tz`.
    ///
    /// A midnight skipped by a daylight saving transition resolves to the
    /// first valid local time after it.
    pub fn local_midnight_millis(year: i32, month: u32, day: u32, tz: Tz) -> Result<i64, DateError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(DateError::InvalidDate { year, month, day })?;
        let resolved = resolve_local(date.and_time(NaiveTime::MIN), tz)?;
        Ok(resolved.timestamp_millis())
    }

    /// Subtract an ISO-8601 `period` from `end_time` in `tz`.
    ///
    /// Calendar units (years, months, weeks, days) move the local wall clock;
    /// time units are subtracted as elapsed time afterwards.
    pub fn calc_start_time(period: &str, end_time: i64, tz: Tz) -> Result<i64, DateError> {
        let duration: IsoDuration = period.parse()?;
        let local = to_utc(end_time)?.with_timezone(&tz).naive_local();
        let out_of_range = || DateError::OutOfRange(end_time);
        let shifted = local
            .checked_sub_months(Months::new(duration.total_months()))
            .and_then(|dt| dt.checked_sub_days(Days::new(duration.total_days())))
            .ok_or_else(out_of_range)?;
        let resolved = resolve_local(shifted, tz)?;
        resolved
            .timestamp_millis()
            .checked_sub(duration.time_millis)
            .ok_or_else(out_of_range)
    }

    fn to_utc(millis: i64) -> Result<DateTime<Utc>, DateError> {
        DateTime::<Utc>::from_timestamp_millis(millis).ok_or(DateError::OutOfRange(millis))
    }

    fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, DateError> {
        for step in 0..=GAP_MAX_STEPS {
            let candidate = naive + TimeDelta::minutes(step * GAP_STEP_MINUTES);
            if let Some(dt) = tz.from_local_datetime(&candidate).earliest() {
                return Ok(dt);
            }
        }
        Err(DateError::NonexistentLocalTime(naive.to_string()))
    }

    /// An ISO-8601 duration such as `P1Y`, `P7D` or `P1DT12H`.
    ///
    /// Calendar parts must be whole numbers. Time parts may be fractional and
    /// are folded into `time_millis`.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IsoDuration {
        pub years: u32,
        pub months: u32,
        pub weeks: u32,
        pub days: u32,
        pub time_millis: i64,
    }

    impl IsoDuration {
        pub fn total_months(&self) -> u32 {
            self.years.saturating_mul(12).saturating_add(self.months)
        }

        pub fn total_days(&self) -> u64 {
            u64::from(self.weeks) * 7 + u64::from(self.days)
        }
    }

    impl FromStr for IsoDuration {
        type Err = DateError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let invalid = || DateError::InvalidDuration(s.to_string());
            let trimmed = s.trim();
            let body = trimmed
                .strip_prefix('P')
                .or_else(|| trimmed.strip_prefix('p'))
                .ok_or_else(invalid)?;

            let mut duration = IsoDuration::default();
            let mut number = String::new();
            let mut in_time = false;
            // position of the last designator in Y M W D T H M S
            let mut last_rank: Option<u8> = None;
            let mut time_components = 0;

            for c in body.chars() {
                match c {
                    'T' | 't' => {
                        if in_time || !number.is_empty() {
                            return Err(invalid());
                        }
                        in_time = true;
                    }
                    '0'..='9' | '.' => number.push(c),
                    ',' => number.push('.'),
                    unit => {
                        let value: f64 = number.parse().map_err(|_| invalid())?;
                        number.clear();
                        let whole = || -> Result<u32, DateError> {
                            if value.fract() != 0.0 || value > f64::from(u32::MAX) {
                                Err(invalid())
                            } else {
                                Ok(value as u32)
                            }
                        };
                        let (rank, unit_millis) = match (in_time, unit.to_ascii_uppercase()) {
                            (false, 'Y') => (0, None),
                            (false, 'M') => (1, None),
                            (false, 'W') => (2, None),
                            (false, 'D') => (3, None),
                            (true, 'H') => (4, Some(3_600_000.0)),
                            (true, 'M') => (5, Some(60_000.0)),
                            (true, 'S') => (6, Some(1_000.0)),
                            _ => return Err(invalid()),
                        };
                        if last_rank.is_some_and(|last| rank <= last) {
                            return Err(invalid());
                        }
                        last_rank = Some(rank);
                        match (rank, unit_millis) {
                            (0, _) => duration.years = whole()?,
                            (1, _) => duration.months = whole()?,
                            (2, _) => duration.weeks = whole()?,
                            (3, _) => duration.days = whole()?,
                            (_, Some(unit_millis)) => {
                                time_components += 1;
                                duration.time_millis = to_millis(value, unit_millis)
                                    .and_then(|millis| duration.time_millis.checked_add(millis))
                                    .ok_or_else(invalid)?;
                            }
                            _ => return Err(invalid()),
                        }
                    }
                }
            }

            if !number.is_empty() || last_rank.is_none() || (in_time && time_components == 0) {
                return Err(invalid());
            }
            Ok(duration)
        }
    }

    /// `value` units of `unit_millis` each, when that fits in an `i64`.
    fn to_millis(value: f64, unit_millis: f64) -> Option<i64> {
        let millis = (value * unit_millis).trunc();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        (millis.is_finite() && millis < i64::MAX as f64).then_some(millis as i64)
    }

}

/// Error types
pub mod error {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum DateError {
        #[error("Date error: unparsable timestamp {0:?}")]
        InvalidTimestamp(String),
        #[error("Date error: unparsable ISO-8601 duration {0:?}")]
        InvalidDuration(String),
        #[error("Date error: unknown time zone {0:?}")]
        UnknownTimeZone(String),
        #[error("Date error: {year}-{month:02}-{day:02} is not a calendar date")]
        InvalidDate { year: i32, month: u32, day: u32 },
        #[error("Date error: local time {0} does not exist")]
        NonexistentLocalTime(String),
        #[error("Date error: epoch milliseconds {0} out of range")]
        OutOfRange(i64),
    }
}
