//! Raw health export records.

/// One `Record` element from the export, before any filtering
///
/// All attributes are optional at this stage; the transform step decides
/// which records are usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthRecord {
    /// The HealthKit type identifier, e.g. `HKQuantityTypeIdentifierHeartRate`
    pub record_type: Option<String>,
    /// The recorded value as it appears in the export
    pub value: Option<String>,
    /// Unit of the value, e.g. `count/min`
    pub unit: Option<String>,
    /// End of the sampling interval, local time with UTC offset
    pub end_date: Option<String>,
    /// Device or app that produced the record
    pub source_name: Option<String>,
}
