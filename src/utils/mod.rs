//! Shared utilities for the uploader.

pub mod progress;
