//! A Rust tool for converting Apple Health XML exports into time-series
//! points and uploading them to InfluxDB.

pub mod config;
pub mod error;
pub mod influx;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod transform;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::UploaderConfig;
pub use error::{HealthImportError, Result};
pub use models::{Fields, HealthRecord, Point, Tags};

// Reading and transforming records
pub use reader::ExportReader;
pub use transform::{point_from_record, SkipReason};

// Upload client and orchestration
pub use influx::InfluxClient;
pub use pipeline::{collect_points, run, UploadSummary};
