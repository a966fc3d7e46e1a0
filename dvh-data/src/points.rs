use dvh_core::{
    approval::ApprovalSet, error::SeriesError, point::Point, series::DvTimeSeries,
};
use dvh_utils::dates::parse_utc_millis;
use log::debug;

/// Zip the parallel arrays of `series` into points sorted by time.
///
/// No selected series is a normal state and gives an empty list. Arrays of
/// unequal length or an unparsable time step fail the whole series.
pub fn assemble(series: Option<&DvTimeSeries>) -> Result<Vec<Point>, SeriesError> {
    let Some(series) = series else {
        return Ok(Vec::new());
    };
    check_lengths(series)?;

    let properties = &series.properties;
    let mut points = Vec::with_capacity(properties.time_step.len());
    // lengths are checked, so every index below is in bounds
    for (index, time_step) in properties.time_step.iter().enumerate() {
        let date_time =
            parse_utc_millis(time_step).map_err(|source| SeriesError::InvalidTimestamp {
                series_id: series.id.clone(),
                index,
                source,
            })?;
        points.push(Point {
            value: parse_value(properties.result[index].as_deref()),
            date_time,
            nil_reason: properties.nil_reason[index].clone(),
            approvals: properties.approvals[index]
                .iter()
                .flatten()
                .map(String::as_str)
                .collect::<ApprovalSet>(),
            qualifiers: properties.qualifiers[index].clone().unwrap_or_default(),
            grades: properties.grades[index].clone().unwrap_or_default(),
        });
    }

    // stable, so equal timestamps keep their source order
    points.sort_by_key(|point| point.date_time);
    debug!("series {}: assembled {} points", series.id, points.len());
    Ok(points)
}

fn check_lengths(series: &DvTimeSeries) -> Result<(), SeriesError> {
    let properties = &series.properties;
    let expected = properties.time_step.len();
    let lengths = [
        ("result", properties.result.len()),
        ("nilReason", properties.nil_reason.len()),
        ("approvals", properties.approvals.len()),
        ("qualifiers", properties.qualifiers.len()),
        ("grades", properties.grades.len()),
    ];
    match lengths.into_iter().find(|(_, actual)| *actual != expected) {
        Some((field, actual)) => Err(SeriesError::LengthMismatch {
            series_id: series.id.clone(),
            field,
            expected,
            actual,
        }),
        None => Ok(()),
    }
}

/// Results are numeric strings; null, "nil" and other text carry no value.
fn parse_value(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvh_core::approval::Approval;

    const SERIES_JSON: &str = r#"{
        "type": "Feature",
        "id": "12345",
        "properties": {
            "phenomenonTimeStart": "2018-01-02",
            "phenomenonTimeEnd": "2018-01-05",
            "timeStep": ["2018-01-02", "2018-01-03", "2018-01-04", "2018-01-05"],
            "result": ["5.0", "4.0", "6.1", "3.2"],
            "approvals": [["Approved"], ["Approved"], [], ["Estimated"]],
            "nilReason": [null, "AA", null, null],
            "qualifiers": [null, null, ["ICE"], ["ICE"]],
            "grades": [["50"], ["50"], ["60"], ["60"]]
        }
    }"#;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    // 2018-01-02T00:00:00Z
    const JAN_2_2018: i64 = 1_514_851_200_000;

    #[test]
    fn test_no_series_selected() {
        assert_eq!(assemble(None).unwrap(), Vec::new());
    }

    #[test]
    fn test_empty_series() {
        let series = DvTimeSeries::from_json(r#"{"id": "1", "properties": {}}"#).unwrap();
        assert!(assemble(Some(&series)).unwrap().is_empty());
    }

    #[test]
    fn test_assemble_zips_arrays() {
        let series = DvTimeSeries::from_json(SERIES_JSON).unwrap();
        let points = assemble(Some(&series)).unwrap();
        assert_eq!(points.len(), 4);
        let dates: Vec<i64> = points.iter().map(|p| p.date_time).collect();
        assert_eq!(
            dates,
            vec![JAN_2_2018, JAN_2_2018 + DAY_MS, JAN_2_2018 + 2 * DAY_MS, JAN_2_2018 + 3 * DAY_MS]
        );
        assert_eq!(points[0].value, Some(5.0));
        assert_eq!(points[1].nil_reason.as_deref(), Some("AA"));
        assert!(points[1].approvals.contains(&Approval::Approved));
        assert!(points[2].approvals.is_empty());
        assert!(points[0].qualifiers.is_empty());
        assert_eq!(points[2].qualifiers, vec!["ICE".to_string()]);
        assert_eq!(points[3].grades, vec!["60".to_string()]);
    }

    #[test]
    fn test_assemble_sorts_and_keeps_tie_order() {
        let series = DvTimeSeries::from_json(
            r#"{"id": "7", "properties": {
                "timeStep": ["2018-01-05", "2018-01-02", "2018-01-02T00:00:00Z"],
                "result": ["3", "1", "2"],
                "nilReason": [null, null, null],
                "approvals": [[], [], []],
                "qualifiers": [null, null, null],
                "grades": [null, null, null]
            }}"#,
        )
        .unwrap();
        let points = assemble(Some(&series)).unwrap();
        let values: Vec<Option<f64>> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0), Some(3.0)]);
        assert!(points.windows(2).all(|w| w[0].date_time <= w[1].date_time));
        // input left untouched
        assert_eq!(series.properties.time_step[0], "2018-01-05");
    }

    #[test]
    fn test_nil_values() {
        let series = DvTimeSeries::from_json(
            r#"{"id": "8", "properties": {
                "timeStep": ["2018-01-02", "2018-01-03", "2018-01-04"],
                "result": [null, "nil", "1.5"],
                "nilReason": ["AA", "BB", null],
                "approvals": [null, null, null],
                "qualifiers": [null, null, null],
                "grades": [null, null, null]
            }}"#,
        )
        .unwrap();
        let points = assemble(Some(&series)).unwrap();
        assert_eq!(points[0].value, None);
        assert_eq!(points[1].value, None);
        assert_eq!(points[2].value, Some(1.5));
        assert!(points[0].approvals.is_empty());
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let series = DvTimeSeries::from_json(
            r#"{"id": "9", "properties": {
                "timeStep": ["2018-01-02", "2018-01-03"],
                "result": ["1", "2"],
                "nilReason": [null, null],
                "approvals": [[]],
                "qualifiers": [null, null],
                "grades": [null, null]
            }}"#,
        )
        .unwrap();
        assert_eq!(
            assemble(Some(&series)),
            Err(SeriesError::LengthMismatch {
                series_id: "9".to_string(),
                field: "approvals",
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_bad_timestamp_fails_fast() {
        let series = DvTimeSeries::from_json(
            r#"{"id": "10", "properties": {
                "timeStep": ["2018-01-02", "January 3rd"],
                "result": ["1", "2"],
                "nilReason": [null, null],
                "approvals": [[], []],
                "qualifiers": [null, null],
                "grades": [null, null]
            }}"#,
        )
        .unwrap();
        assert!(matches!(
            assemble(Some(&series)),
            Err(SeriesError::InvalidTimestamp { index: 1, .. })
        ));
    }
}
