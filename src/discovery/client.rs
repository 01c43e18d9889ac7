//! Google Custom Search client that finds retailer product links.

use super::models::{SearchItem, SearchResponse};
use crate::aggregate::dedup_links;
use crate::config::Config;
use crate::country::Country;
use crate::error::DiscoveryError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

const GOOGLE_SEARCH_BASE: &str = "https://www.googleapis.com/customsearch/v1";

/// Results requested for the combined all-retailer query.
const COMBINED_RESULTS: u8 = 10;

/// Results requested for each single-retailer query.
const INDIVIDUAL_RESULTS: u8 = 5;

/// Trait for candidate link discovery - enables mocking for tests.
#[async_trait]
pub trait SearchDiscovery: Send + Sync {
    /// Returns product links for `query` from the country's retailers, deduplicated.
    async fn discover(&self, query: &str, country: Country) -> Result<Vec<String>, DiscoveryError>;
}

/// Google Custom Search JSON API client.
pub struct GoogleSearchClient {
    client: Client,
    api_key: Option<String>,
    cse_id: Option<String>,
    base_url: String,
    delay_ms: u64,
}

impl GoogleSearchClient {
    /// Creates a new search client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, GOOGLE_SEARCH_BASE.to_string())
    }

    /// Creates a new search client with a custom endpoint (for testing).
    pub fn with_base_url(config: &Config, base_url: String) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(config.search_timeout_secs))
            .connect_timeout(Duration::from_secs(config.search_timeout_secs.min(10)));

        if let Some(proxy_url) = &config.proxy {
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build search client")?;

        Ok(Self {
            client,
            api_key: config.google_api_key.clone().filter(|k| !k.is_empty()),
            cse_id: config.google_cse_id.clone().filter(|c| !c.is_empty()),
            base_url,
            delay_ms: config.search_delay_ms,
        })
    }

    /// Builds the `site:`-joined query covering every retailer of a country.
    pub fn combined_query(query: &str, country: Country) -> String {
        country
            .retailers()
            .iter()
            .map(|site| format!("{} site:{}", query, site))
            .collect::<Vec<_>>()
            .join(" OR ")
    }

    /// Builds the query restricted to a single retailer.
    pub fn retailer_query(query: &str, retailer: &str) -> String {
        format!("{} site:{}", query, retailer)
    }

    fn credentials(&self) -> Result<(&str, &str), DiscoveryError> {
        match (&self.api_key, &self.cse_id) {
            (Some(key), Some(cx)) => Ok((key.as_str(), cx.as_str())),
            _ => Err(DiscoveryError::MissingCredentials),
        }
    }

    /// Runs one search API call.
    async fn search(
        &self,
        search_query: &str,
        num: u8,
        country: Country,
    ) -> Result<Vec<SearchItem>, DiscoveryError> {
        let (key, cx) = self.credentials()?;
        let url = format!(
            "{}?key={}&cx={}&q={}&num={}&gl={}&hl=en",
            self.base_url,
            urlencoding::encode(key),
            urlencoding::encode(cx),
            urlencoding::encode(search_query),
            num,
            country.search_locale()
        );

        debug!("Search query: {}", search_query);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DiscoveryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                403 => DiscoveryError::Forbidden,
                429 => DiscoveryError::QuotaExceeded,
                code => DiscoveryError::Status(code),
            });
        }

        let body = response.text().await.map_err(|e| DiscoveryError::Transport(e.to_string()))?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| DiscoveryError::Decode(e.to_string()))?;

        for item in &parsed.items {
            debug!("Search result: {} - {}", item.title, item.link);
        }

        Ok(parsed.items)
    }

    /// Fixed pause between successive search calls.
    async fn delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl SearchDiscovery for GoogleSearchClient {
    async fn discover(&self, query: &str, country: Country) -> Result<Vec<String>, DiscoveryError> {
        self.credentials()?;

        info!("Discovering links for '{}' ({})", query, country);

        let mut searches = vec![(Self::combined_query(query, country), COMBINED_RESULTS)];
        searches.extend(
            country
                .individual_searches()
                .iter()
                .map(|retailer| (Self::retailer_query(query, retailer), INDIVIDUAL_RESULTS)),
        );

        let mut links = Vec::new();
        let mut succeeded = false;
        let mut last_error = None;

        for (i, (search_query, num)) in searches.iter().enumerate() {
            if i > 0 {
                self.delay().await;
            }

            match self.search(search_query, *num, country).await {
                Ok(items) => {
                    succeeded = true;
                    links.extend(
                        items.into_iter().map(|item| item.link).filter(|link| country.allows(link)),
                    );
                }
                Err(e) => {
                    warn!("Search '{}' failed: {}", search_query, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if !succeeded => Err(e),
            _ => {
                let links = dedup_links(&links);
                info!("Found {} retailer links", links.len());
                Ok(links)
            }
        }
    }
}
