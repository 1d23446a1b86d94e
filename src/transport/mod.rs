#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::USER_AGENT;
use reqwest::{Client, Response};

/// Identification sent with catalog requests; the update server expects a
/// Software Update client.
pub const DEFAULT_USER_AGENT: &str = "Software%20Update (unknown version) CFNetwork/807.0.1 Darwin/16.0.0 (x86_64)";

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Network side of a run. Both calls are one blocking round trip each; there
/// are no retries and no timeouts beyond what the implementation imposes.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET the catalog document as raw bytes, identifying as a Software
    /// Update client. Bytes rather than text so binary property lists arrive
    /// intact.
    async fn fetch_document(&self, url: &str) -> Result<Vec<u8>, TransportError>;

    /// GET a binary body and hold it fully in memory.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

pub struct HttpTransport {
    client: Client,
    user_agent: String,
}

impl HttpTransport {
    pub fn new(user_agent: impl Into<String>) -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }
}

fn check_status(url: &str, res: Response) -> Result<Response, TransportError> {
    let status = res.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(res)
}

fn progress_bar(url: &str, total_size: Option<u64>) -> ProgressBar {
    let (pb, template) = match total_size {
        Some(total) => (
            ProgressBar::new(total),
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
        ),
        None => (
            ProgressBar::new_spinner(),
            "{spinner:.green} [{elapsed_precise}] {bytes} ({bytes_per_sec})",
        ),
    };

    let style = ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(url.to_string());
    pb
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_document(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let res = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        Ok(check_status(url, res)?.bytes().await?.to_vec())
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let mut res = check_status(url, self.client.get(url).send().await?)?;

        let pb = progress_bar(url, res.content_length());
        let mut body = Vec::new();

        // chunk() keeps us off the `stream` feature
        while let Some(chunk) = res.chunk().await? {
            body.extend_from_slice(&chunk);
            pb.inc(chunk.len() as u64);
        }

        pb.finish_and_clear();
        tracing::debug!(%url, bytes = body.len(), "package body received");

        Ok(body)
    }
}
