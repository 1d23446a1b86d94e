use serde::Deserialize;

use super::{Product, lenient};
use crate::error::SwscanError;

/// Top-level container for the software update catalog.
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(rename = "Products", default, deserialize_with = "lenient::entries")]
    products: Vec<(String, Product)>,
}

impl Catalog {
    /// Decode a property-list document, XML or binary.
    pub fn from_bytes(document: &[u8]) -> Result<Self, SwscanError> {
        Ok(plist::from_bytes(document)?)
    }

    /// Decode an XML property-list document.
    #[cfg(test)]
    pub fn from_text(text: &str) -> Result<Self, SwscanError> {
        Self::from_bytes(text.as_bytes())
    }

    /// Products keyed by identifier, in document order.
    pub fn products(&self) -> &[(String, Product)] {
        &self.products
    }

    #[cfg(test)]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|(product_id, _)| product_id == id)
            .map(|(_, product)| product)
    }
}
