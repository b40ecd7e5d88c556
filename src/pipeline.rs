//! The single conversion pass: parse, filter, transform, upload.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info, warn};

use crate::config::UploaderConfig;
use crate::error::Result;
use crate::influx::InfluxClient;
use crate::models::Point;
use crate::reader::ExportReader;
use crate::transform::{SkipReason, point_from_record};
use crate::utils::progress::{create_spinner, finish_and_clear};

/// Counts accumulated over one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSummary {
    /// `Record` elements seen in the export
    pub records_seen: usize,
    /// Records that became points
    pub points: usize,
    /// Records dropped because their value was not numeric
    pub skipped_non_numeric: usize,
    /// Records dropped for missing attributes or bad timestamps
    pub skipped_invalid: usize,
    /// Write requests issued to the database
    pub batches_written: usize,
}

/// Parse an export file and collect the points it yields
///
/// Records that cannot become points are counted, not errored.
pub fn collect_points(path: &Path) -> Result<(Vec<Point>, UploadSummary)> {
    info!("Parsing health export: {}", path.display());
    let start = Instant::now();
    let spinner = create_spinner(Some("Parsing records"));

    let mut reader = ExportReader::from_path(path)?;
    let mut points = Vec::new();
    let mut summary = UploadSummary::default();

    while let Some(record) = reader.next_record()? {
        summary.records_seen += 1;

        match point_from_record(record) {
            Ok(point) => points.push(point),
            Err(SkipReason::NonNumericValue) => summary.skipped_non_numeric += 1,
            Err(reason) => {
                debug!("Skipping record {}: {reason}", summary.records_seen);
                summary.skipped_invalid += 1;
            }
        }

        if summary.records_seen % 10_000 == 0 {
            spinner.set_message(format!("Parsed {} records", summary.records_seen));
        }
    }

    summary.points = points.len();
    finish_and_clear(&spinner);

    info!(
        "Parsed {} records into {} points in {:?} ({} non-numeric, {} invalid skipped)",
        summary.records_seen,
        summary.points,
        start.elapsed(),
        summary.skipped_non_numeric,
        summary.skipped_invalid
    );

    Ok((points, summary))
}

/// Run the full pass against one export file
///
/// With `dry_run` the points are printed as JSON and nothing is uploaded.
pub async fn run(
    host: &str,
    path: &Path,
    config: &UploaderConfig,
    dry_run: bool,
) -> Result<UploadSummary> {
    let (points, mut summary) = collect_points(path)?;

    if dry_run {
        let json =
            serde_json::to_string_pretty(&points).context("serializing points to JSON")?;
        println!("{json}");
        return Ok(summary);
    }

    if points.is_empty() {
        warn!("No numeric records found, nothing to upload");
        return Ok(summary);
    }

    let client = InfluxClient::new(host, config);
    client.create_database().await?;
    summary.batches_written = client.write_points(&points).await?;

    Ok(summary)
}
