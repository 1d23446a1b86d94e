mod catalog;
mod cli;
mod config;
mod download;
mod error;
mod helpers;
mod logging;
mod transport;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::DecimalBytes;

use catalog::{InstallRecord, OS_INSTALL_MARKER, extract_installs, fetch_catalog};
use cli::{Cli, CliCommand};
use config::Settings;
use download::run_download;
use helpers::choose_one;
use transport::HttpTransport;

fn print_installs(installs: &[InstallRecord]) {
    println!("\n=== Available installs ===");
    if installs.is_empty() {
        println!("No product in this catalog carries OSInstall = {OS_INSTALL_MARKER}");
    }
    for install in installs {
        println!(
            "{:<12} {:>3} packages  {}",
            install.product_id(),
            install.packages().len(),
            DecimalBytes(install.total_size())
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let settings = Settings::from_cli(&cli)?;
    tracing::debug!(?settings, "resolved settings");

    let transport = HttpTransport::new(settings.user_agent.clone())?;

    println!("Fetching {} catalog…", settings.channel);
    let catalog = fetch_catalog(&transport, &settings.catalog_url).await?;
    let installs = extract_installs(&catalog);

    match cli.command {
        CliCommand::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&installs)?);
            } else {
                print_installs(&installs);
            }
        }
        CliCommand::Download { product_id, .. } => {
            let ids: Vec<&str> = installs.iter().map(InstallRecord::product_id).collect();
            println!("Available installs: {ids:?}");

            let product_id = match product_id {
                Some(id) => id,
                None => choose_one("Select Install", ids)?,
            };

            let directory = run_download(&catalog, &product_id, &settings.output_root, &transport)
                .await
                .with_context(|| format!("download of product '{product_id}' failed"))?;

            println!("Downloaded {product_id} to {}", directory.display());
        }
    }

    Ok(())
}
