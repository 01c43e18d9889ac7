//! HTTP client for retailer product pages using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::error::FetchError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for product page fetching - enables mocking for tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches a product page and returns its HTML.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Product page client with browser impersonation.
pub struct HttpFetcher {
    client: Client,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Creates a new page fetcher with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .connect_timeout(Duration::from_secs(config.fetch_timeout_secs.min(10)));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build page client")?;

        Ok(Self { client, timeout_secs: config.fetch_timeout_secs })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Cache-Control", "no-cache")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout { url: url.to_string(), secs: self.timeout_secs }
                } else {
                    FetchError::Transport { url: url.to_string(), message: e.to_string() }
                }
            })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("Non-success status {} for {}", status, url);
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body { url: url.to_string(), message: e.to_string() })
    }
}
