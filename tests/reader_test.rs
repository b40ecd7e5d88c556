use std::io::Cursor;

use hk_influx::ExportReader;

const SAMPLE_EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<HealthData locale="en_US">
 <ExportDate value="2020-01-02 10:00:00 -0800"/>
 <Record type="HKQuantityTypeIdentifierHeartRate" sourceName="Apple Watch" unit="count/min" startDate="2019-12-31 23:09:00 -0800" endDate="2019-12-31 23:10:00 -0800" value="64"/>
 <Record type="HKCategoryTypeIdentifierSleepAnalysis" sourceName="Phone" startDate="2019-12-31 22:00:00 -0800" endDate="2019-12-31 23:10:00 -0800" value="HKCategoryValueSleepAnalysisAsleep"></Record>
 <Record type="HKQuantityTypeIdentifierBodyMass" endDate="2020-01-01 08:00:00 +0100" value="72.5"/>
</HealthData>"#;

#[test]
fn reads_all_record_elements() -> hk_influx::Result<()> {
    let mut reader = ExportReader::from_reader(Cursor::new(SAMPLE_EXPORT));

    let mut records = Vec::new();
    while let Some(record) = reader.next_record()? {
        records.push(record);
    }

    // ExportDate is not a Record and must be skipped
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0].record_type.as_deref(),
        Some("HKQuantityTypeIdentifierHeartRate")
    );
    assert_eq!(records[0].unit.as_deref(), Some("count/min"));
    assert_eq!(records[0].source_name.as_deref(), Some("Apple Watch"));
    assert_eq!(records[0].value.as_deref(), Some("64"));
    assert_eq!(
        records[0].end_date.as_deref(),
        Some("2019-12-31 23:10:00 -0800")
    );
    Ok(())
}

#[test]
fn handles_both_element_forms() -> hk_influx::Result<()> {
    // The second record uses <Record ...></Record>, the others <Record .../>
    let records: Vec<_> = ExportReader::from_reader(Cursor::new(SAMPLE_EXPORT))
        .collect::<hk_influx::Result<_>>()?;

    assert_eq!(
        records[1].record_type.as_deref(),
        Some("HKCategoryTypeIdentifierSleepAnalysis")
    );
    assert_eq!(
        records[1].value.as_deref(),
        Some("HKCategoryValueSleepAnalysisAsleep")
    );
    Ok(())
}

#[test]
fn missing_attributes_stay_absent() -> hk_influx::Result<()> {
    let records: Vec<_> = ExportReader::from_reader(Cursor::new(SAMPLE_EXPORT))
        .collect::<hk_influx::Result<_>>()?;

    assert_eq!(records[2].unit, None);
    assert_eq!(records[2].source_name, None);
    assert_eq!(records[2].value.as_deref(), Some("72.5"));
    Ok(())
}

#[test]
fn malformed_xml_is_an_error() {
    let mut reader = ExportReader::from_reader(Cursor::new("<HealthData><Record "));

    let mut saw_error = false;
    loop {
        match reader.next_record() {
            Ok(Some(_)) => {}
            Ok(None) => break,
            Err(_) => {
                saw_error = true;
                break;
            }
        }
    }
    assert!(saw_error);
}

#[test]
fn empty_document_yields_no_records() -> hk_influx::Result<()> {
    let mut reader = ExportReader::from_reader(Cursor::new("<HealthData></HealthData>"));
    assert!(reader.next_record()?.is_none());
    Ok(())
}
