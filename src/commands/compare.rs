//! Compare command: price a fixed set of product links without discovery.

use crate::config::Config;
use crate::format::Formatter;
use crate::pipeline::PriceComparison;
use anyhow::{Context, Result};
use tracing::info;

/// Executes a price comparison over explicit product links.
pub struct CompareCommand {
    config: Config,
}

impl CompareCommand {
    /// Creates a new compare command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Resolves the links and returns formatted output.
    pub async fn execute(&self, links: &[String]) -> Result<String> {
        let pipeline = PriceComparison::from_config(&self.config)
            .context("Failed to set up price comparison")?;

        self.execute_with_pipeline(&pipeline, links).await
    }

    /// Resolves the links with a provided pipeline (for testing).
    pub async fn execute_with_pipeline(
        &self,
        pipeline: &PriceComparison,
        links: &[String],
    ) -> Result<String> {
        let links: Vec<String> = links.iter().map(|l| l.trim().to_string()).collect();

        if let Some(bad) = links.iter().find(|l| !is_http_link(l)) {
            anyhow::bail!(
                "Invalid product link: '{}'. Links must start with http:// or https://",
                bad
            );
        }

        info!("Comparing {} links", links.len());

        let products = pipeline.compare_links(&links, &self.config.country).await;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_products(&products))
    }
}

fn is_http_link(link: &str) -> bool {
    link.starts_with("https://") || link.starts_with("http://")
}
