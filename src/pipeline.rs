//! End-to-end price comparison: discover candidate links, then aggregate them.

use crate::aggregate::ResultAggregator;
use crate::config::Config;
use crate::country::Country;
use crate::currency::CurrencyRegistry;
use crate::discovery::{GoogleSearchClient, SearchDiscovery};
use crate::scrape::{HttpFetcher, PageFetcher, Product, ProductResolver};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Wires discovery, fetching and aggregation together.
#[derive(Clone)]
pub struct PriceComparison {
    discovery: Arc<dyn SearchDiscovery>,
    fetcher: Arc<dyn PageFetcher>,
    aggregator: ResultAggregator,
}

impl PriceComparison {
    /// Creates a pipeline from explicit collaborators.
    pub fn new(
        discovery: Arc<dyn SearchDiscovery>,
        fetcher: Arc<dyn PageFetcher>,
        aggregator: ResultAggregator,
    ) -> Self {
        Self { discovery, fetcher, aggregator }
    }

    /// Builds the production pipeline from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let discovery =
            GoogleSearchClient::new(config).context("Failed to create search client")?;
        let fetcher = HttpFetcher::new(config).context("Failed to create HTTP client")?;

        Ok(Self::new(Arc::new(discovery), Arc::new(fetcher), aggregator_for(config)))
    }

    /// Searches the country's retailers for `query` and returns products sorted by price.
    ///
    /// Discovery failures are logged and yield an empty list.
    pub async fn search(&self, query: &str, country: &str) -> Vec<Product> {
        let resolved = Country::from_code_or_default(country);
        info!("Comparing prices for '{}' in {}", query, resolved);

        let links = match self.discovery.discover(query, resolved).await {
            Ok(links) => links,
            Err(e) => {
                warn!("Link discovery failed: {}", e);
                return Vec::new();
            }
        };

        if links.is_empty() {
            info!("No retailer links found for '{}'", query);
            return Vec::new();
        }

        self.compare_links(&links, country).await
    }

    /// Resolves explicit product links and returns them sorted by price.
    pub async fn compare_links(&self, links: &[String], country: &str) -> Vec<Product> {
        self.aggregator.aggregate(links, country, self.fetcher.as_ref()).await
    }
}

/// Builds the aggregator described by the configuration.
pub fn aggregator_for(config: &Config) -> ResultAggregator {
    ResultAggregator::new(
        ProductResolver::new(CurrencyRegistry::default(), config.generic_fallback),
        config.concurrency,
        Duration::from_secs(config.fetch_timeout_secs),
    )
}
