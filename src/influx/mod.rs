//! InfluxDB write support
//!
//! Covers the two halves of the upload: encoding points as line protocol
//! and the HTTP client for the v1 write API.

pub mod client;
pub mod line;

pub use client::InfluxClient;
pub use line::{batch_bodies, encode_batch, point_to_line};
