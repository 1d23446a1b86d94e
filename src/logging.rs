use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or `info`
/// and this crate's `debug` events with `--verbose`. Stdout stays reserved
/// for progress lines.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "info,swscan_fetch=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

    tracing::debug!("logging initialized");

    Ok(())
}
