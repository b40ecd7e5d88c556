//! Transformation of raw export records into time-series points
//!
//! This is the filtering half of the pass: records that cannot become a
//! numeric point are skipped with a reason, never errored.

pub mod time;

use std::fmt;

use crate::models::{Fields, HealthRecord, Point, Tags};
use crate::transform::time::parse_export_timestamp;

/// Prefix HealthKit puts on quantity type identifiers
///
/// Only this prefix is chopped from measurement names; category types
/// keep their full identifier.
pub const QUANTITY_TYPE_PREFIX: &str = "HKQuantityTypeIdentifier";

/// Why a record was skipped instead of becoming a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record has no `type` attribute
    MissingType,
    /// The record has no `value` attribute
    MissingValue,
    /// The record has no `endDate` attribute
    MissingDate,
    /// The value does not parse as a finite number
    NonNumericValue,
    /// The `endDate` does not parse as an export timestamp
    InvalidTimestamp,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingType => write!(f, "missing type attribute"),
            Self::MissingValue => write!(f, "missing value attribute"),
            Self::MissingDate => write!(f, "missing endDate attribute"),
            Self::NonNumericValue => write!(f, "non-numeric value"),
            Self::InvalidTimestamp => write!(f, "unparseable endDate"),
        }
    }
}

/// Convert a raw record into a point, or report why it cannot be one
pub fn point_from_record(record: HealthRecord) -> std::result::Result<Point, SkipReason> {
    let raw_value = record.value.as_deref().ok_or(SkipReason::MissingValue)?;
    let value = parse_numeric(raw_value).ok_or(SkipReason::NonNumericValue)?;

    let record_type = record.record_type.as_deref().ok_or(SkipReason::MissingType)?;
    let end_date = record.end_date.as_deref().ok_or(SkipReason::MissingDate)?;
    let time = parse_export_timestamp(end_date).ok_or(SkipReason::InvalidTimestamp)?;

    Ok(Point {
        measurement: normalize_measurement(record_type).to_string(),
        time,
        tags: Tags {
            unit: record.unit,
            source: record.source_name,
        },
        fields: Fields { value },
    })
}

/// Chop the quantity type prefix off a measurement name if detected
#[must_use]
pub fn normalize_measurement(record_type: &str) -> &str {
    record_type
        .strip_prefix(QUANTITY_TYPE_PREFIX)
        .unwrap_or(record_type)
}

/// Parse a record value as a finite number
fn parse_numeric(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_prefix_is_stripped() {
        assert_eq!(
            normalize_measurement("HKQuantityTypeIdentifierBodyMass"),
            "BodyMass"
        );
    }

    #[test]
    fn category_prefix_is_kept() {
        assert_eq!(
            normalize_measurement("HKCategoryTypeIdentifierSleepAnalysis"),
            "HKCategoryTypeIdentifierSleepAnalysis"
        );
    }

    #[test]
    fn numeric_values_accept_decimals() {
        assert_eq!(parse_numeric("72.5"), Some(72.5));
        assert_eq!(parse_numeric(" 64 "), Some(64.0));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        assert_eq!(parse_numeric("HKCategoryValueSleepAnalysisAsleep"), None);
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("inf"), None);
    }
}
