//! Data model for the conversion pass
//!
//! Two transient types flow through the pipeline: the raw [`HealthRecord`]
//! as read from the export XML, and the [`Point`] written to the database.

pub mod point;
pub mod record;

pub use point::{Fields, Point, Tags};
pub use record::HealthRecord;
