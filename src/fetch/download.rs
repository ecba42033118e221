use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;

use crate::foundation::error::{ReelError, ReelResult};

/// Transport that stores the body at `url` into `dest`.
pub trait Downloader {
    /// Download `url` to `dest`, overwriting it.
    fn download(&self, url: &str, dest: &Path) -> ReelResult<()>;
}

/// Blocking HTTP downloader.
#[derive(Clone, Debug)]
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    /// Downloader with a crate user agent and a generous timeout for video bodies.
    pub fn new() -> ReelResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("feedreel/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| ReelError::fetch(format!("build http client: {e}")))?;
        Ok(Self { client })
    }

    /// Downloader over an existing client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> ReelResult<()> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ReelError::fetch(format!("GET {url}: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReelError::fetch(format!("GET {url}: HTTP {status}")));
        }
        let bytes = response
            .bytes()
            .map_err(|e| ReelError::fetch(format!("read body of {url}: {e}")))?;
        std::fs::write(dest, &bytes)
            .with_context(|| format!("write download to '{}'", dest.display()))?;
        tracing::debug!(url, dest = %dest.display(), bytes = bytes.len(), "downloaded");
        Ok(())
    }
}
