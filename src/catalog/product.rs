use serde::Deserialize;

use super::{Package, lenient};

/// One entry under the catalog's `Products` dictionary. Everything is
/// optional: most products are plain updates without installer metadata.
#[derive(Debug, Default, Deserialize)]
pub struct Product {
    #[serde(rename = "ExtendedMetaInfo", default, deserialize_with = "lenient::optional")]
    extended_meta_info: Option<ExtendedMetaInfo>,

    #[serde(rename = "Packages", default, deserialize_with = "lenient::sequence")]
    packages: Vec<Package>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExtendedMetaInfo {
    #[serde(
        rename = "InstallAssistantPackageIdentifiers",
        default,
        deserialize_with = "lenient::optional"
    )]
    install_assistant_package_identifiers: Option<InstallAssistantPackageIdentifiers>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InstallAssistantPackageIdentifiers {
    #[serde(rename = "OSInstall", default, deserialize_with = "lenient::optional")]
    os_install: Option<String>,
}

impl Product {
    pub fn extended_meta_info(&self) -> Option<&ExtendedMetaInfo> {
        self.extended_meta_info.as_ref()
    }

    /// `ExtendedMetaInfo.InstallAssistantPackageIdentifiers.OSInstall`, if the
    /// whole path is present.
    pub fn os_install(&self) -> Option<&str> {
        self.extended_meta_info()?
            .install_assistant_package_identifiers
            .as_ref()?
            .os_install
            .as_deref()
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }
}
