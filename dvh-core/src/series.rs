use serde::{Deserialize, Serialize};

/// A daily-value time series as served by the observations service: a
/// feature whose properties hold parallel, index-aligned arrays.
///
/// Index `i` of every array describes one observation instant. The arrays are
/// only validated when the series is assembled into points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DvTimeSeries {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub id: String,
    pub properties: DvProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DvProperties {
    pub phenomenon_time_start: Option<String>,
    pub phenomenon_time_end: Option<String>,
    pub time_step: Vec<String>,
    /// Numeric strings; null or "nil" when there is no result.
    pub result: Vec<Option<String>>,
    pub nil_reason: Vec<Option<String>>,
    pub approvals: Vec<Option<Vec<String>>>,
    pub qualifiers: Vec<Option<Vec<String>>>,
    pub grades: Vec<Option<Vec<String>>>,
}

impl DvTimeSeries {
    pub fn from_json(json: &str) -> Result<DvTimeSeries, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of observation instants, going by `timeStep`.
    pub fn len(&self) -> usize {
        self.properties.time_step.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.time_step.is_empty()
    }
}

/// An entry of the list of daily-value series available at a monitoring location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailableTimeSeries {
    pub id: String,
    pub parameter_code: Option<String>,
    pub statistic_code: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::DvTimeSeries;

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

    #[test]
    fn test_from_json() {
        let series = DvTimeSeries::from_json(SERIES_JSON).unwrap();
        assert_eq!(series.kind, "Feature");
        assert_eq!(series.id, "12345");
        assert_eq!(series.len(), 4);
        assert_eq!(series.properties.nil_reason[1].as_deref(), Some("AA"));
        assert_eq!(series.properties.qualifiers[0], None);
        assert_eq!(series.properties.approvals[2], Some(vec![]));
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let series =
            DvTimeSeries::from_json(r#"{"id": "1", "properties": {"timeStep": ["2018-01-02"]}}"#)
                .unwrap();
        assert_eq!(series.len(), 1);
        assert!(series.properties.result.is_empty());
    }
}
