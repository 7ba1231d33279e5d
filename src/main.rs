use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("reviewkit=debug")
    } else {
        EnvFilter::new("reviewkit=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // The schema command works without a config file
    let load_config = || cli::load_config(cli.config.as_deref());

    match cli.command {
        Commands::Reviews(args) => cli::reviews::execute(args, &load_config()?, &cli.host).await,
        Commands::Submit(args) => cli::submit::execute(args, &load_config()?, &cli.host).await,
        Commands::Prewarm => cli::prewarm::execute(&load_config()?, &cli.host).await,
        Commands::Resolve => cli::resolve::execute(&load_config()?, &cli.host),
        Commands::Schema => cli::schema::execute(),
    }
}
