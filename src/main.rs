//! Static blog web host.
//!
//! Serves the generated site from a physical root directory with security
//! headers, cache policy for static assets and a fallback route for missing
//! pages.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use webhost::config::{read_config, validate_config, ConfigError, HostConfig, Overrides};
use webhost::lifecycle;
use webhost::observability::logging;

#[derive(Parser, Debug)]
#[command(name = "webhost")]
#[command(about = "Static file host for the pre-rendered blog", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "WEBHOST_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides the configured bind address port).
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the generated site.
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            port: self.port,
            root: self.root.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => HostConfig::default(),
    };
    let config = args.overrides().apply(config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("webhost v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        physical_root = %config.site.physical_root.display(),
        fallback_route = %config.site.fallback_route,
        matching = ?config.classification.matching,
        "Configuration loaded"
    );

    lifecycle::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
