use std::error::Error as _;
use std::path::PathBuf;

use clap::Parser;
use hk_influx::config::{DEFAULT_BATCH_SIZE, DEFAULT_DATABASE, DEFAULT_PORT};
use hk_influx::{UploaderConfig, pipeline};
use log::{error, info};

/// Uploads Apple Health export data to InfluxDB
#[derive(Parser)]
#[command(name = "hk-influx", about = "Uploads HealthKit data to InfluxDB")]
struct Cli {
    /// InfluxDB host
    dbhost: String,
    /// Health data export file
    file: PathBuf,
    /// InfluxDB database
    #[arg(long, default_value = DEFAULT_DATABASE)]
    database: String,
    /// InfluxDB HTTP port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Points per write request
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
    /// Parse and print points as JSON instead of uploading
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = UploaderConfig {
        port: cli.port,
        database: cli.database,
        batch_size: cli.batch_size,
    };

    match pipeline::run(&cli.dbhost, &cli.file, &config, cli.dry_run).await {
        Ok(summary) => {
            info!(
                "Done: {} records seen, {} points, {} batches written",
                summary.records_seen, summary.points, summary.batches_written
            );
            println!("Total upload success!");
        }
        Err(e) => {
            println!("Failure!");
            error!("{e}");
            let mut source = e.source();
            while let Some(cause) = source {
                error!("caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
