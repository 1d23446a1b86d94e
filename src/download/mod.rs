use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indicatif::DecimalBytes;

use crate::catalog::{Catalog, InstallRecord, PackageDescriptor, extract_installs};
use crate::error::SwscanError;
use crate::transport::Transport;

/// Everything after the last `/` of `url`, query string included.
pub fn package_file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Remove `path` with everything in it, then create it empty.
pub fn reset_directory(path: &Path) -> Result<(), SwscanError> {
    match fs::remove_dir_all(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed previous download directory"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(SwscanError::fs(path, err)),
    }

    fs::create_dir_all(path).map_err(|err| SwscanError::fs(path, err))
}

fn describe_size(package: &PackageDescriptor) -> String {
    match package.size {
        Some(bytes) => DecimalBytes(bytes).to_string(),
        None => "unknown size".to_string(),
    }
}

/// Download every package of `product_id` into `<output_root>/<product_id>`.
///
/// The product is looked up before anything touches the disk. The target
/// directory is then wiped and packages are fetched one at a time in catalog
/// order. A failure stops the loop and leaves earlier files in place.
pub async fn run_download(
    catalog: &Catalog,
    product_id: &str,
    output_root: &Path,
    transport: &dyn Transport,
) -> Result<PathBuf, SwscanError> {
    let installs = extract_installs(catalog);
    let install = InstallRecord::find(&installs, product_id)
        .ok_or_else(|| SwscanError::ProductNotFound(product_id.to_string()))?;

    download_install(install, output_root, transport).await
}

pub async fn download_install(
    install: &InstallRecord,
    output_root: &Path,
    transport: &dyn Transport,
) -> Result<PathBuf, SwscanError> {
    let product_id = install.product_id();
    let directory = output_root.join(product_id);

    println!("Resetting {} directory…", directory.display());
    reset_directory(&directory)?;

    let total = install.packages().len();
    for (index, package) in install.packages().iter().enumerate() {
        let url = package.url.as_deref().ok_or_else(|| SwscanError::MissingPackageUrl {
            product_id: product_id.to_string(),
            index,
        })?;

        println!("Downloading {}/{}: {} ({})…", index + 1, total, url, describe_size(package));
        let body = transport
            .fetch_bytes(url)
            .await
            .map_err(|source| SwscanError::PackageFetch {
                url: url.to_string(),
                source,
            })?;

        let filename = directory.join(package_file_name(url));
        println!("Saving {}…", filename.display());
        fs::write(&filename, &body).map_err(|err| SwscanError::fs(&filename, err))?;

        tracing::info!(%url, path = %filename.display(), bytes = body.len(), "package saved");
    }

    Ok(directory)
}
