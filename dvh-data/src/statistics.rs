use chrono_tz::Tz;
use dvh_core::{
    error::StatisticsError,
    statistic::{ResolvedStatisticalPoint, StatisticalSeries},
};
use dvh_utils::{
    dates::{calc_start_time, is_leap_year, local_midnight_millis, year_of},
    error::DateError,
};
use log::debug;

/// Make a cyclical statistical series look like a time series over the
/// display window ending at `series.end_time` and spanning `period`.
///
/// Every statistical point is pinned to local midnight of its month/day in
/// each calendar year the window touches (February 29th only in leap years),
/// then the points inside the window are kept. The result is extended so a
/// step line drawn through it covers the whole window: the value in effect at
/// the window start (the preceding point, wrapping to the last one) is
/// repeated at the start, and the last value is repeated at the end.
pub fn coerce(
    series: &StatisticalSeries,
    period: &str,
    tz: Tz,
) -> Result<Vec<ResolvedStatisticalPoint>, StatisticsError> {
    let end_time = series.end_time;
    let start_time = calc_start_time(period, end_time, tz).map_err(|err| match err {
        DateError::InvalidDuration(_) => StatisticsError::InvalidPeriod(err),
        other => StatisticsError::InvalidTime(other),
    })?;
    let start_year = year_of(start_time, tz).map_err(StatisticsError::InvalidTime)?;
    let end_year = year_of(end_time, tz).map_err(StatisticsError::InvalidTime)?;

    let mut resolved = Vec::new();
    for year in start_year..=end_year {
        let leap_year = is_leap_year(year);
        for point in &series.points {
            if point.is_leap_day() && !leap_year {
                continue;
            }
            let date_time =
                local_midnight_millis(year, point.month, point.day, tz).map_err(|err| match err {
                    DateError::InvalidDate { month, day, .. } => {
                        StatisticsError::InvalidMonthDay { month, day }
                    }
                    other => StatisticsError::InvalidTime(other),
                })?;
            resolved.push(ResolvedStatisticalPoint::resolve(point, date_time));
        }
    }
    resolved.sort_by_key(|point| point.date_time);

    let first_index = resolved.partition_point(|point| point.date_time < start_time);
    let end_index = resolved.partition_point(|point| point.date_time <= end_time);
    if first_index >= end_index {
        return Err(StatisticsError::EmptyWindow {
            start_time,
            end_time,
        });
    }

    let mut coerced = Vec::with_capacity(end_index - first_index + 2);
    if resolved[first_index].date_time > start_time {
        let previous_index = first_index.checked_sub(1).unwrap_or(resolved.len() - 1);
        coerced.push(resolved[previous_index].at(start_time));
    }
    coerced.extend_from_slice(&resolved[first_index..end_index]);
    let last = resolved[end_index - 1];
    if last.date_time < end_time {
        coerced.push(last.at(end_time));
    }

    debug!(
        "coerced {} statistical points over {}..={} into {} points",
        series.points.len(),
        start_year,
        end_year,
        coerced.len()
    );
    Ok(coerced)
}
