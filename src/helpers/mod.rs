pub mod fzf_invoker;

use self::fzf_invoker::FzfInvoker;
use anyhow::{Context, Result, bail};

/// Wrapper around the `termenu` picker. Items are converted to `String`s so
/// callers do not have to worry about ownership.
pub fn choose_one<S: ToString>(title: &str, items: Vec<S>) -> Result<String> {
    let display_items: Vec<String> = items.into_iter().map(|s| s.to_string()).collect();
    if display_items.is_empty() {
        bail!("Nothing to choose from for '{title}'");
    }

    let picker = FzfInvoker::new(title.to_string(), display_items);
    match picker.invoke().context("failed to show selection menu")? {
        Some(choice) => Ok(choice),
        None => bail!("No selection made"),
    }
}
