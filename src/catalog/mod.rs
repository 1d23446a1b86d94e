mod channel;
mod document;
mod install;
mod lenient;
mod package;
mod product;

#[cfg(test)]
pub(crate) mod testdata;

pub use channel::{Channel, DEFAULT_CATALOG_BASE, build_catalog_url};
pub use document::Catalog;
pub use install::{InstallRecord, OS_INSTALL_MARKER, PackageDescriptor, extract_installs};
pub use package::Package;
pub use product::Product;

use crate::error::SwscanError;
use crate::transport::Transport;

/// Download the catalog at `url` and decode it.
pub async fn fetch_catalog(transport: &dyn Transport, url: &str) -> Result<Catalog, SwscanError> {
    tracing::info!(%url, "fetching catalog");

    let document = transport
        .fetch_document(url)
        .await
        .map_err(|source| SwscanError::CatalogFetch {
            url: url.to_string(),
            source,
        })?;

    tracing::debug!(bytes = document.len(), "catalog downloaded");
    Catalog::from_bytes(&document)
}
