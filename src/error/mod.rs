//! Error handling for the health export uploader.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Specialized error type for the uploader
#[derive(Debug, Error)]
pub enum HealthImportError {
    /// Error opening or reading the export file
    #[error("IO error: {message} (path: {path})")]
    Io {
        /// What went wrong
        message: String,
        /// The offending path
        path: PathBuf,
        /// The underlying IO error, when there is one
        #[source]
        source: Option<io::Error>,
    },
    /// Error in the XML structure of the export
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Error in an XML attribute of a `Record` element
    #[error("XML attribute error: {0}")]
    Attr(#[from] AttrError),
    /// Error talking to the database
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Unexpected response from the database
    #[error("Database error: {0}")]
    Database(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HealthImportError {
    /// Create an IO error with path context
    #[must_use]
    pub fn io(message: impl Into<String>, path: &Path, source: Option<io::Error>) -> Self {
        Self::Io {
            message: message.into(),
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a database error from a failure message
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}

/// Result type for uploader operations
pub type Result<T> = std::result::Result<T, HealthImportError>;
