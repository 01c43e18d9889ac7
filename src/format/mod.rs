//! Output formatting for products (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::scrape::Product;

const NAME_WIDTH: usize = 50;

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a price comparison, cheapest first as given.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    // JSON formatting

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_products(&self, products: &[Product]) -> String {
        let price_width =
            products.iter().map(|p| p.price.chars().count()).max().unwrap_or(0).max(5);
        let currency_width = 8;
        let name_width = NAME_WIDTH;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<price_width$}  {:<currency_width$}  {:<name_width$}  {}",
            "Price", "Currency", "Name", "Link"
        ));
        lines.push(format!(
            "{:-<price_width$}  {:-<currency_width$}  {:-<name_width$}  {:-<4}",
            "", "", "", ""
        ));

        for product in products {
            lines.push(format!(
                "{:<price_width$}  {:<currency_width$}  {:<name_width$}  {}",
                product.price,
                product.currency.as_str(),
                truncate(&product.product_name, name_width),
                product.link
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();

        lines.push("| Price | Currency | Product |".to_string());
        lines.push("|-------|----------|---------|".to_string());

        for product in products {
            let name = truncate(&product.product_name, 40).replace('|', "\\|");
            lines.push(format!(
                "| {} | {} | [{}]({}) |",
                product.price,
                product.currency.as_str(),
                name,
                product.link
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "product_name,price,currency,link".to_string()
    }

    fn csv_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            lines.push(format!(
                "{},{},{},{}",
                Self::csv_escape(&product.product_name),
                Self::csv_escape(&product.price),
                product.currency.as_str(),
                Self::csv_escape(&product.link)
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Shortens `s` to at most `max` chars, ending in `...` when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
