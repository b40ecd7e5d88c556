//! HTTP client for the InfluxDB v1 write API.

use log::{debug, info};
use reqwest::Response;

use crate::config::UploaderConfig;
use crate::error::{HealthImportError, Result};
use crate::influx::line::batch_bodies;
use crate::models::Point;
use crate::utils::progress::{create_main_progress_bar, finish_progress_bar};

/// Write precision sent with every write request; timestamps are encoded
/// in epoch seconds to match
const WRITE_PRECISION: &str = "s";

/// Client for a single InfluxDB database over the v1 HTTP API
#[derive(Debug, Clone)]
pub struct InfluxClient {
    http: reqwest::Client,
    base_url: String,
    database: String,
    batch_size: usize,
}

impl InfluxClient {
    /// Create a client for the given host
    ///
    /// A bare hostname is turned into `http://<host>:<port>`; hosts that
    /// already carry a scheme are used as-is.
    #[must_use]
    pub fn new(host: &str, config: &UploaderConfig) -> Self {
        let base_url = if host.contains("://") {
            host.trim_end_matches('/').to_string()
        } else {
            format!("http://{host}:{}", config.port)
        };

        Self {
            http: reqwest::Client::new(),
            base_url,
            database: config.database.clone(),
            batch_size: config.batch_size,
        }
    }

    /// The URL requests are issued against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create the target database; a no-op when it already exists
    pub async fn create_database(&self) -> Result<()> {
        debug!("Creating database {} on {}", self.database, self.base_url);

        let response = self
            .http
            .post(format!("{}/query", self.base_url))
            .form(&[("q", format!("CREATE DATABASE \"{}\"", self.database))])
            .send()
            .await?;

        check_response(response, "creating database").await
    }

    /// Write points in batches, returning the number of write requests made
    ///
    /// Nothing is written when `points` is empty.
    pub async fn write_points(&self, points: &[Point]) -> Result<usize> {
        if points.is_empty() {
            info!("No points to write, skipping upload");
            return Ok(0);
        }

        let bodies = batch_bodies(points, self.batch_size);
        let url = format!("{}/write", self.base_url);

        info!(
            "Writing {} points to {} in {} batches",
            points.len(),
            self.database,
            bodies.len()
        );
        let progress = create_main_progress_bar(bodies.len() as u64, Some("Uploading points"));

        for (index, body) in bodies.iter().enumerate() {
            debug!(
                "Writing batch {}/{} ({} bytes)",
                index + 1,
                bodies.len(),
                body.len()
            );

            let response = self
                .http
                .post(&url)
                .query(&[("db", self.database.as_str()), ("precision", WRITE_PRECISION)])
                .body(body.clone())
                .send()
                .await?;

            check_response(response, "writing points").await?;
            progress.inc(1);
        }

        finish_progress_bar(&progress, Some("Upload complete"));
        Ok(bodies.len())
    }
}

/// Turn a non-success response into a database error with the body text
async fn check_response(response: Response, action: &str) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(HealthImportError::database(format!(
        "{action} failed with status {status}: {body}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hosts_get_scheme_and_port() {
        let client = InfluxClient::new("db.local", &UploaderConfig::default());
        assert_eq!(client.base_url(), "http://db.local:8086");
    }

    #[test]
    fn full_urls_are_used_as_is() {
        let client = InfluxClient::new("https://influx.example.com/", &UploaderConfig::default());
        assert_eq!(client.base_url(), "https://influx.example.com");
    }
}
