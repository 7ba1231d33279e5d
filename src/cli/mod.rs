pub mod prewarm;
pub mod resolve;
pub mod reviews;
pub mod schema;
pub mod submit;

use clap::{Parser, Subcommand};
use reviewkit::{Config, ReviewkitError};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "reviewkit")]
#[command(
    author,
    version,
    about = "Cold-start tolerant client for the reviews backend"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Host name the client runs under; loopback names select the local backend
    #[arg(long, global = true, env = "REVIEWKIT_HOST", default_value = "localhost")]
    pub host: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch approved reviews
    Reviews(ReviewsArgs),

    /// Submit a new review
    Submit(SubmitArgs),

    /// Wake the backend and wait for the probe to finish
    Prewarm,

    /// Print the backend base URL chosen for --host
    Resolve,

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct ReviewsArgs {
    /// Print the raw list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Clone)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub message: String,

    #[arg(long)]
    pub email: String,

    /// Star rating, 0 to 5
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub rating: u8,

    /// Honeypot field; leave empty
    #[arg(long, default_value = "", hide = true)]
    pub website: String,
}

/// Load and validate the config, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ReviewkitError> {
    let config = match path {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}
