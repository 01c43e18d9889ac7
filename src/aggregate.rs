//! Resolves candidate links into a deduplicated, price-sorted comparison.

use crate::error::FetchError;
use crate::scrape::{PageFetcher, Product, ProductResolver};
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Removes repeated links, keeping the first occurrence of each.
pub fn dedup_links<S: AsRef<str>>(links: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    links
        .iter()
        .map(AsRef::as_ref)
        .filter(|link| seen.insert(*link))
        .map(str::to_string)
        .collect()
}

/// Stable-sorts products by numeric price, priceless products last.
pub fn sort_by_price(products: &mut [Product]) {
    products.sort_by(|a, b| a.numeric_price().total_cmp(&b.numeric_price()));
}

/// Fetches and resolves product pages, then orders them by price.
#[derive(Debug, Clone)]
pub struct ResultAggregator {
    resolver: ProductResolver,
    concurrency: usize,
    fetch_timeout: Duration,
}

impl ResultAggregator {
    /// Creates an aggregator resolving up to `concurrency` pages at once.
    pub fn new(resolver: ProductResolver, concurrency: usize, fetch_timeout: Duration) -> Self {
        Self { resolver, concurrency: concurrency.max(1), fetch_timeout }
    }

    /// Resolves every unique link and returns the products sorted by price.
    ///
    /// Links that fail to fetch, time out, or yield neither title nor price
    /// are dropped without affecting the rest of the batch. Products with
    /// equal prices keep their link order.
    pub async fn aggregate<F>(&self, links: &[String], country: &str, fetcher: &F) -> Vec<Product>
    where
        F: PageFetcher + ?Sized,
    {
        let unique = dedup_links(links);
        debug!("Resolving {} unique links ({} given)", unique.len(), links.len());

        let lookups: Vec<_> =
            unique.iter().map(|link| self.resolve_link(link, country, fetcher)).collect();
        let mut products: Vec<Product> = stream::iter(lookups)
            .buffered(self.concurrency)
            .filter_map(|product| async move { product })
            .collect()
            .await;

        sort_by_price(&mut products);

        info!("Resolved {} products from {} links", products.len(), unique.len());
        products
    }

    async fn resolve_link<F>(&self, link: &str, country: &str, fetcher: &F) -> Option<Product>
    where
        F: PageFetcher + ?Sized,
    {
        debug!("Scraping product page: {}", link);

        let fetched = match tokio::time::timeout(self.fetch_timeout, fetcher.fetch(link)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                url: link.to_string(),
                secs: self.fetch_timeout.as_secs(),
            }),
        };

        match fetched {
            Ok(html) => self.resolver.resolve_html(link, &html, country),
            Err(e) => {
                warn!("Skipping {}: {}", link, e);
                None
            }
        }
    }
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new(ProductResolver::default(), 1, Duration::from_secs(10))
    }
}
