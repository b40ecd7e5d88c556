//! Configuration for the uploader.

/// Default InfluxDB HTTP port
pub const DEFAULT_PORT: u16 = 8086;

/// Default database name, matching the export tool's convention
pub const DEFAULT_DATABASE: &str = "health";

/// Default number of points per write request
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Configuration for the uploader
#[derive(Debug, Clone)]
pub struct UploaderConfig {
    /// InfluxDB HTTP port
    pub port: u16,
    /// Database the points are written to
    pub database: String,
    /// Number of points per write request
    pub batch_size: usize,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}
