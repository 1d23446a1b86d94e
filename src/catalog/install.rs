use serde::Serialize;

use super::{Catalog, Package};

/// `OSInstall` value carried by full operating system installers.
pub const OS_INSTALL_MARKER: &str = "com.apple.mpkg.OSInstall";

/// Download coordinates of one package, copied from the catalog as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub url: Option<String>,
    pub size: Option<u64>,
    pub integrity_data_url: Option<String>,
    pub integrity_data_size: Option<u64>,
}

impl From<&Package> for PackageDescriptor {
    fn from(package: &Package) -> Self {
        Self {
            url: package.url().map(str::to_string),
            size: package.size(),
            integrity_data_url: package.integrity_data_url().map(str::to_string),
            integrity_data_size: package.integrity_data_size(),
        }
    }
}

/// A product that qualifies as a full OS installer, with its package list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallRecord {
    product_id: String,
    packages: Vec<PackageDescriptor>,
}

impl InstallRecord {
    pub fn new(product_id: impl Into<String>, packages: Vec<PackageDescriptor>) -> Self {
        Self {
            product_id: product_id.into(),
            packages,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn packages(&self) -> &[PackageDescriptor] {
        &self.packages
    }

    /// Sum of the sizes the catalog advertises; packages without one count as 0.
    pub fn total_size(&self) -> u64 {
        self.packages.iter().filter_map(|p| p.size).sum()
    }

    /// First record with the given product id.
    pub fn find<'a>(installs: &'a [InstallRecord], product_id: &str) -> Option<&'a InstallRecord> {
        installs.iter().find(|install| install.product_id == product_id)
    }
}

/// Keep only full OS installers, in catalog order.
///
/// Products without `ExtendedMetaInfo` or without the identifiers mapping are
/// ordinary updates and are skipped silently.
pub fn extract_installs(catalog: &Catalog) -> Vec<InstallRecord> {
    let mut installs = Vec::new();

    for (product_id, product) in catalog.products() {
        if product.os_install() != Some(OS_INSTALL_MARKER) {
            continue;
        }

        let packages = product.packages().iter().map(PackageDescriptor::from).collect();
        installs.push(InstallRecord::new(product_id.clone(), packages));
    }

    tracing::debug!(
        products = catalog.products().len(),
        installs = installs.len(),
        "extracted install products"
    );

    installs
}
