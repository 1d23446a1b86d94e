use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Transport, TransportError};

/// In-memory transport: serves canned bodies and records every request in
/// arrival order. Unknown URLs answer 404.
#[derive(Default)]
pub(crate) struct FakeTransport {
    documents: HashMap<String, Vec<u8>>,
    bodies: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub(crate) fn with_document(mut self, url: &str, document: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(url.to_string(), document.into());
        self
    }

    pub(crate) fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.to_string(), body.into());
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, url: &str) {
        self.requests.lock().unwrap().push(url.to_string());
    }

    fn not_found(url: &str) -> TransportError {
        TransportError::Status {
            url: url.to_string(),
            status: 404,
        }
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn fetch_document(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.record(url);
        self.documents.get(url).cloned().ok_or_else(|| Self::not_found(url))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.record(url);
        self.bodies.get(url).cloned().ok_or_else(|| Self::not_found(url))
    }
}
