use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::{Channel, DEFAULT_CATALOG_BASE};
use crate::transport::DEFAULT_USER_AGENT;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "swscan-fetch")]
#[command(about = "Download macOS installer packages from the software update catalog", long_about = None)]
pub struct Cli {
    /// Catalog channel: customer-seed, developer-seed, public-seed or public-release.
    #[arg(long, global = true, env = "SWSCAN_CHANNEL", default_value = "public-release", value_parser = parse_channel)]
    pub channel: Channel,

    /// Directory URL the catalog file is resolved against.
    #[arg(long, global = true, env = "SWSCAN_CATALOG_BASE", default_value = DEFAULT_CATALOG_BASE)]
    pub catalog_base: String,

    /// User-Agent sent with the catalog request.
    #[arg(long, global = true, env = "SWSCAN_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Show info-level logs on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the full OS installers available in the catalog.
    List {
        /// Print the install records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Download every package of one installer.
    Download {
        /// Product identifier, e.g. 091-95155. Prompts for one when omitted.
        product_id: Option<String>,

        /// Parent of the per-product output directory.
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}

fn parse_channel(value: &str) -> Result<Channel, String> {
    value.parse::<Channel>().map_err(|err| err.to_string())
}
