//! test-server: a minimal HTTP liveness server.
//!
//! This is the application entry point. It parses the command line, loads the
//! optional TOML configuration, initializes tracing, builds the Axum router
//! and runs the HTTP server until a termination signal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use test_server::config::{AppConfig, LoggingConfig, DEFAULT_LOG_FILTER};
use test_server::create_router;

/// A minimal HTTP server answering `/` and `/health`
#[derive(Parser, Debug)]
#[command(name = "test-server", version, about)]
struct Args {
    /// Path to an optional configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind (overrides http.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides http.port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "test_server=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

/// Install the global subscriber. Logs go to stderr; stdout is reserved for
/// the startup banner.
fn init_tracing(filter: &str, logging: &LoggingConfig) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if logging.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Fatal errors are reported once, in Display form; tracing may not be up yet
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration: built-in defaults, then file, then CLI overrides
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }
    config.validate()?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(
        config = ?args.config,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let addr = config.http.socket_addr()?;
    let app = create_router();

    test_server::http::start_server(app, addr).await?;

    tracing::info!("Server stopped");
    Ok(())
}
