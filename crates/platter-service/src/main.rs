//! Main entry point for the platter service.
//!
//! This binary serves the dish and order HTTP API over in-memory
//! collections. It wires together configuration loading, logging, and the
//! axum server.

use clap::Parser;
use platter_config::Config;
use std::path::PathBuf;

mod apis;
mod server;

/// Command-line arguments for the platter service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

/// Main entry point for the platter service.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging infrastructure
/// 3. Loads configuration (built-in defaults when no file is present)
/// 4. Starts the HTTP server with fresh, empty collections
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	// Create env filter with default from args
	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt()
		.with_env_filter(env_filter)
		.with_thread_ids(true)
		.with_target(true)
		.init();

	tracing::info!("Started platter service");

	// Load configuration
	let config = Config::load(&args.config)?;
	tracing::info!(
		"Loaded configuration [{}:{}]",
		config.server.host,
		config.server.port
	);

	let state = server::AppState::new();
	server::start_server(config.server, state).await?;

	tracing::info!("Stopped platter service");
	Ok(())
}
