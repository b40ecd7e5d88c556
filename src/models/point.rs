//! Time-series points, the write unit of the upload.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Format used for the `time` field in serialized points
pub const POINT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One time-series database write unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    /// Measurement name, derived from the record type
    pub measurement: String,
    /// Sample time in UTC
    #[serde(serialize_with = "serialize_point_time")]
    pub time: DateTime<Utc>,
    /// Tags attached to the point
    pub tags: Tags,
    /// Field values of the point
    pub fields: Fields,
}

impl Point {
    /// The sample time formatted as an ISO-8601 UTC string
    #[must_use]
    pub fn formatted_time(&self) -> String {
        self.time.format(POINT_TIME_FORMAT).to_string()
    }
}

/// Tags attached to a point; absent tags are omitted entirely
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tags {
    /// Unit of the measurement value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Device or app that produced the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Field values of a point; the export always yields a single numeric value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fields {
    /// The measurement value
    pub value: f64,
}

fn serialize_point_time<S: Serializer>(
    time: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format(POINT_TIME_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_point() -> Point {
        Point {
            measurement: "HeartRate".to_string(),
            time: Utc.with_ymd_and_hms(2020, 1, 1, 7, 10, 0).unwrap(),
            tags: Tags {
                unit: Some("count/min".to_string()),
                source: None,
            },
            fields: Fields { value: 64.0 },
        }
    }

    #[test]
    fn time_serializes_in_utc_format() {
        let json = serde_json::to_value(sample_point()).unwrap();
        assert_eq!(json["time"], "2020-01-01T07:10:00Z");
    }

    #[test]
    fn absent_tags_are_omitted() {
        let json = serde_json::to_value(sample_point()).unwrap();
        let tags = json["tags"].as_object().unwrap();
        assert_eq!(tags.get("unit").and_then(|v| v.as_str()), Some("count/min"));
        assert!(!tags.contains_key("source"));
    }

    #[test]
    fn formatted_time_matches_serialized_time() {
        let point = sample_point();
        assert_eq!(point.formatted_time(), "2020-01-01T07:10:00Z");
    }
}
