use std::path::PathBuf;

use crate::transport::TransportError;

/// Every way a catalog run can fail. None of these are recovered locally; they
/// bubble up to `main` and end the process.
#[derive(thiserror::Error, Debug)]
pub enum SwscanError {
    #[error("unrecognized catalog channel '{0}'")]
    InvalidChannel(String),
    #[error("invalid catalog base URL '{base}': {source}")]
    InvalidCatalogBase {
        base: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to fetch catalog from {url}")]
    CatalogFetch {
        url: String,
        #[source]
        source: TransportError,
    },
    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] plist::Error),
    #[error("product with ID '{0}' was not found in the catalog")]
    ProductNotFound(String),
    #[error("package {index} of product '{product_id}' has no URL")]
    MissingPackageUrl { product_id: String, index: usize },
    #[error("failed to download package {url}")]
    PackageFetch {
        url: String,
        #[source]
        source: TransportError,
    },
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SwscanError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SwscanError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
