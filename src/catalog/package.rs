use serde::Deserialize;

use super::lenient;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Package {
    #[serde(rename = "URL", default, deserialize_with = "lenient::optional")]
    url: Option<String>,
    #[serde(rename = "Size", default, deserialize_with = "lenient::optional")]
    size: Option<u64>,
    #[serde(rename = "IntegrityDataURL", default, deserialize_with = "lenient::optional")]
    integrity_data_url: Option<String>,
    #[serde(rename = "IntegrityDataSize", default, deserialize_with = "lenient::optional")]
    integrity_data_size: Option<u64>,
}

impl Package {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn integrity_data_url(&self) -> Option<&str> {
        self.integrity_data_url.as_deref()
    }

    pub fn integrity_data_size(&self) -> Option<u64> {
        self.integrity_data_size
    }
}
