use std::path::PathBuf;

use clap::Parser;
use report_api::{
    app::App,
    config::Config,
    error::{init::InitError, runtime::RuntimeError},
};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Path to the default config file.
    /// Configs in this file can be overridden by environment variables.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), RuntimeError> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let mut config =
        Config::try_read(args.config).map_err(InitError::Config)?;

    // Override telemetry level if verbose flag is provided
    if args.verbose {
        config.telemetry.level = "info,report_api=trace".to_string();
    }

    telemetry::init_telemetry(&config.telemetry)
        .map_err(InitError::Telemetry)?;
    debug!("telemetry initialized");
    let pretty_config = serde_yml::to_string(&config)
        .expect("config should always be serializable");
    debug!(config = pretty_config, "Creating app with config");

    #[cfg(debug_assertions)]
    tracing::warn!("running in debug mode");

    config.validate().inspect_err(|e| {
        tracing::error!(error = %e, "configuration validation failed");
    })?;

    let app = App::new(config)?;
    app.serve().await.inspect_err(|error| {
        tracing::error!(%error, "server crashed");
    })
}
