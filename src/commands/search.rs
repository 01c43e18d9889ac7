//! Search command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::pipeline::PriceComparison;
use anyhow::{Context, Result};
use tracing::info;

/// Executes a cross-retailer price search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str) -> Result<String> {
        let pipeline = PriceComparison::from_config(&self.config)
            .context("Failed to set up price comparison")?;

        self.execute_with_pipeline(&pipeline, query).await
    }

    /// Executes the search with a provided pipeline (for testing).
    pub async fn execute_with_pipeline(
        &self,
        pipeline: &PriceComparison,
        query: &str,
    ) -> Result<String> {
        let query = query.trim();
        if query.is_empty() {
            anyhow::bail!("Search query cannot be empty.");
        }

        info!("Searching for: {}", query);

        let products = pipeline.search(query, &self.config.country).await;

        info!("Found {} products", products.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_products(&products))
    }
}
