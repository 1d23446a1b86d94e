use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::SwscanError;

/// Where the merged catalogs live on the update server.
pub const DEFAULT_CATALOG_BASE: &str = "https://swscan.apple.com/content/catalogs/others/";

const CATALOG_SUFFIX: &str =
    "-10.14-10.13-10.12-10.11-10.10-10.9-mountainlion-lion-snowleopard-leopard.merged-1.sucatalog";

/// Named catalog variants published by the update server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    CustomerSeed,
    DeveloperSeed,
    PublicSeed,
    PublicRelease,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::CustomerSeed,
        Channel::DeveloperSeed,
        Channel::PublicSeed,
        Channel::PublicRelease,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::CustomerSeed => "customer-seed",
            Channel::DeveloperSeed => "developer-seed",
            Channel::PublicSeed => "public-seed",
            Channel::PublicRelease => "public-release",
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Channel::CustomerSeed => "index-10.14customerseed",
            Channel::DeveloperSeed => "index-10.14seed",
            Channel::PublicSeed => "index-10.14beta",
            Channel::PublicRelease => "index",
        }
    }

    /// File name of the merged catalog for this channel, without any host.
    pub fn catalog_file_name(&self) -> String {
        format!("{}{CATALOG_SUFFIX}", self.prefix())
    }

    /// Resolve the catalog file against `base`.
    ///
    /// A base without a trailing slash is treated as a directory anyway, so
    /// `https://host/catalogs` and `https://host/catalogs/` resolve alike.
    pub fn catalog_url(&self, base: &str) -> Result<String, SwscanError> {
        let directory = if base.ends_with('/') { base.to_string() } else { format!("{base}/") };
        let invalid = |source| SwscanError::InvalidCatalogBase {
            base: base.to_string(),
            source,
        };

        let url = Url::parse(&directory)
            .and_then(|dir| dir.join(&self.catalog_file_name()))
            .map_err(invalid)?;

        Ok(url.into())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = SwscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| SwscanError::InvalidChannel(s.to_string()))
    }
}

/// Catalog URL on the public update server for a channel identifier such as
/// `public-release`.
pub fn build_catalog_url(channel_id: &str) -> Result<String, SwscanError> {
    channel_id.parse::<Channel>()?.catalog_url(DEFAULT_CATALOG_BASE)
}
