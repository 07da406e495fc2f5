//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::i18n::Language;

#[derive(Debug, Parser)]
#[command(name = "hotspot-map")]
#[command(version)]
#[command(about = "Validate hotspot data, compute marker layouts and probe the data endpoint")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Validate every hotspots.<lang>.json file in a directory
    Validate {
        /// Data directory (default: HOTSPOTS_DATA_DIR or public/data)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Print the marker layout of every hotspot in a data file as JSON
    Layout {
        /// Data file to read
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Container width in pixels
        #[arg(long)]
        width: f64,

        /// Container height in pixels
        #[arg(long)]
        height: f64,
    },

    /// Load hotspot data once from the configured endpoint
    Fetch {
        /// Language code (en, lv)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Site root to fetch from (default: HOTSPOTS_BASE_URL)
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_parse_validate() {
        assert_eq!(parse(&["hotspot-map", "validate"]), Command::Validate { dir: None });
        assert_eq!(
            parse(&["hotspot-map", "validate", "--dir", "data"]),
            Command::Validate {
                dir: Some(PathBuf::from("data"))
            }
        );
    }

    #[test]
    fn test_parse_layout() {
        assert_eq!(
            parse(&[
                "hotspot-map",
                "layout",
                "--file",
                "hotspots.en.json",
                "--width",
                "800",
                "--height",
                "600"
            ]),
            Command::Layout {
                file: PathBuf::from("hotspots.en.json"),
                width: 800.0,
                height: 600.0,
            }
        );
    }

    #[test]
    fn test_parse_fetch_language() {
        assert_eq!(
            parse(&["hotspot-map", "fetch", "--lang", "EN"]),
            Command::Fetch {
                lang: Some(Language::En),
                base_url: None,
            }
        );
        assert!(Cli::try_parse_from(["hotspot-map", "fetch", "--lang", "de"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["hotspot-map"]).is_err());
    }
}
