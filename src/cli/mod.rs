//! Command-line interface.
//!
//! ```ignore
//! use clap::Parser;
//! use hotspot_map::cli::{run_cli_command, Cli};
//!
//! let cli = Cli::parse();
//! run_cli_command(cli.command).await?;
//! ```

pub mod args;
pub mod fetch;
pub mod layout;
pub mod validate;

pub use args::{Cli, Command};
pub use fetch::{format_snapshot, handle_fetch_command};
pub use layout::{handle_layout_command, HotspotLayout};
pub use validate::{format_report, handle_validate_command};

use color_eyre::eyre::{eyre, Report};
use color_eyre::{Result, Section};

use crate::config::HotspotConfig;
use crate::context::LoadStatus;
use crate::error::HotspotError;

/// Attach the category's recovery hint to the report.
fn with_hint(err: HotspotError) -> Report {
    let hint = err.recovery_hint();
    Report::new(err).suggestion(hint)
}

/// Execute a parsed command, printing its output to stdout.
///
/// Failures are returned so the binary exits non-zero.
pub async fn run_cli_command(command: Command) -> Result<()> {
    let config = HotspotConfig::from_env();

    match command {
        Command::Validate { dir } => {
            let report = handle_validate_command(&config, dir).map_err(with_hint)?;
            println!("{}", format_report(&report));
        }
        Command::Layout { file, width, height } => {
            let layouts = handle_layout_command(&file, width, height).map_err(with_hint)?;
            println!("{}", serde_json::to_string_pretty(&layouts)?);
        }
        Command::Fetch { lang, base_url } => {
            let config = match base_url {
                Some(url) => config.with_base_url(url),
                None => config,
            };
            config.validate().map_err(with_hint)?;

            let snapshot = handle_fetch_command(config, lang).await;
            println!("{}", format_snapshot(&snapshot));
            if snapshot.status != LoadStatus::Ready {
                return Err(eyre!(
                    "hotspot data not loaded: {}",
                    snapshot.error.unwrap_or_else(|| snapshot.status.to_string())
                ));
            }
        }
    }

    Ok(())
}
