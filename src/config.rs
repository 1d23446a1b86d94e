use std::path::PathBuf;

use crate::catalog::{Channel, DEFAULT_CATALOG_BASE, build_catalog_url};
use crate::cli::{Cli, CliCommand};
use crate::error::SwscanError;

/// Resolved run configuration, built once from the command line and
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub channel: Channel,
    pub catalog_url: String,
    pub user_agent: String,
    pub output_root: PathBuf,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self, SwscanError> {
        let catalog_url = if cli.catalog_base == DEFAULT_CATALOG_BASE {
            build_catalog_url(cli.channel.as_str())?
        } else {
            cli.channel.catalog_url(&cli.catalog_base)?
        };
        let output_root = match &cli.command {
            CliCommand::Download { output_dir, .. } => output_dir.clone(),
            CliCommand::List { .. } => PathBuf::from("."),
        };

        Ok(Self {
            channel: cli.channel,
            catalog_url,
            user_agent: cli.user_agent.clone(),
            output_root,
        })
    }
}
