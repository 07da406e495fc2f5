use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use hotspot_map::cli::{run_cli_command, Cli};

/// Set to `silent` to disable logging entirely.
const LOG_ENV: &str = "HOTSPOTS_LOG";

fn init_tracing() {
    if std::env::var(LOG_ENV).map(|v| v == "silent").unwrap_or(false) {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    run_cli_command(cli.command).await
}
