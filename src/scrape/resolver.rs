//! Turns a fetched product page into a [`Product`].

use crate::currency::{CurrencyCode, CurrencyRegistry};
use crate::pricing::PriceExtractor;
use crate::scrape::models::{Product, NAME_NOT_AVAILABLE, PRICE_NOT_AVAILABLE};
use crate::scrape::selectors::{self, TITLE};
use scraper::{Html, Selector};
use tracing::{debug, trace, warn};

/// Resolves title, price and currency for one product page.
#[derive(Debug, Clone, Copy)]
pub struct ProductResolver {
    registry: CurrencyRegistry,
    extractor: PriceExtractor,
    price_selectors: &'static [Selector],
}

impl ProductResolver {
    /// Creates a resolver using the given registry.
    pub fn new(registry: CurrencyRegistry, generic_fallback: bool) -> Self {
        Self {
            registry,
            extractor: PriceExtractor::new(registry),
            price_selectors: selectors::price_priority(generic_fallback),
        }
    }

    /// Parses raw HTML and resolves it.
    pub fn resolve_html(&self, url: &str, html: &str, country: &str) -> Option<Product> {
        let document = Html::parse_document(html);
        self.resolve(url, &document, country)
    }

    /// Resolves a parsed page into a product.
    ///
    /// Returns `None` when neither a title nor a price could be found. A
    /// missing title or price alone is replaced by its placeholder.
    pub fn resolve(&self, url: &str, document: &Html, country: &str) -> Option<Product> {
        let title = Self::title(document);
        let currency = self.registry.detect(country, url);
        let price = self.find_price(document, currency);

        let (product_name, price) = match (title, price) {
            (None, None) => {
                warn!("Could not extract product info from {}", url);
                return None;
            }
            (Some(title), None) => {
                debug!("Found product but no price from {} (title: '{}')", url, title);
                (title, PRICE_NOT_AVAILABLE.to_string())
            }
            (None, Some(price)) => {
                debug!("Found price but no title from {} (price: '{}')", url, price);
                (NAME_NOT_AVAILABLE.to_string(), price)
            }
            (Some(title), Some(price)) => {
                debug!("Extracted from {} (title: '{}', price: '{}')", url, title, price);
                (title, price)
            }
        };

        Some(Product { product_name, price, currency, link: url.to_string() })
    }

    /// Returns the trimmed page title, if non-empty.
    fn title(document: &Html) -> Option<String> {
        document
            .select(&TITLE)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Walks the selector priority list and returns the first price token.
    fn find_price(&self, document: &Html, currency: CurrencyCode) -> Option<String> {
        self.price_selectors.iter().find_map(|selector| {
            document.select(selector).find_map(|element| {
                let text = element.text().collect::<String>();
                let price = self.extractor.extract(&text, currency);
                if let Some(price) = &price {
                    trace!("Matched price '{}' in '{}'", price, text.trim());
                }
                price
            })
        })
    }
}

impl Default for ProductResolver {
    fn default() -> Self {
        Self::new(CurrencyRegistry::default(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const US_LINK: &str = "https://www.walmart.com/ip/widget/123";

    fn resolve(html: &str, url: &str, country: &str) -> Option<Product> {
        ProductResolver::default().resolve_html(url, html, country)
    }

    #[test]
    fn test_title_and_price() {
        let html = r#"<html><head><title> Widget Pro </title></head><body>
            <span class="price-display">$19.99</span>
        </body></html>"#;

        let product = resolve(html, US_LINK, "US").unwrap();
        assert_eq!(product.product_name, "Widget Pro");
        assert_eq!(product.price, "$19.99");
        assert_eq!(product.currency, CurrencyCode::Usd);
        assert_eq!(product.link, US_LINK);
    }

    #[test]
    fn test_title_without_price_is_kept() {
        let html = r#"<html><head><title>Widget</title></head><body>
            <p>Currently unavailable</p>
        </body></html>"#;

        let product = resolve(html, US_LINK, "US").unwrap();
        assert_eq!(product.product_name, "Widget");
        assert_eq!(product.price, PRICE_NOT_AVAILABLE);
    }

    #[test]
    fn test_price_without_title_is_kept() {
        let html = r#"<html><body><span class="price">$19.99</span></body></html>"#;

        let product = resolve(html, US_LINK, "US").unwrap();
        assert_eq!(product.product_name, NAME_NOT_AVAILABLE);
        assert_eq!(product.price, "$19.99");
    }

    #[test]
    fn test_nothing_found_is_discarded() {
        let html = r#"<html><body><p>Access denied</p></body></html>"#;
        assert!(resolve(html, US_LINK, "US").is_none());

        let html = r#"<html><head><title>   </title></head><body></body></html>"#;
        assert!(resolve(html, US_LINK, "US").is_none());
    }

    #[test]
    fn test_selector_priority_beats_document_order() {
        // The generic span comes first in the document but last in priority
        let html = r#"<html><head><title>Widget</title></head><body>
            <span>Was $99.99</span>
            <div class="a-price-whole">$79.99</div>
        </body></html>"#;

        let product = resolve(html, US_LINK, "US").unwrap();
        assert_eq!(product.price, "$79.99");
    }

    #[test]
    fn test_document_order_within_selector() {
        let html = r#"<html><head><title>Widget</title></head><body>
            <span class="price">See options</span>
            <span class="price">$24.00</span>
            <span class="price">$30.00</span>
        </body></html>"#;

        let product = resolve(html, US_LINK, "US").unwrap();
        assert_eq!(product.price, "$24.00");
    }

    #[test]
    fn test_domain_currency_overrides_country() {
        let html = r#"<html><head><title>Phone</title></head><body>
            <span class="a-price-whole">₹82,999</span>
            <span class="other-price">$999</span>
        </body></html>"#;

        let product = resolve(html, "https://www.amazon.in/dp/B0DGJ", "US").unwrap();
        assert_eq!(product.currency, CurrencyCode::Inr);
        assert_eq!(product.price, "₹82,999");
    }

    #[test]
    fn test_country_currency_for_unknown_domain() {
        let html = r#"<html><head><title>Phone</title></head><body>
            <span class="price">A$1,799</span>
        </body></html>"#;

        let product = resolve(html, "https://www.apple.com/au/shop/buy-iphone", "AU").unwrap();
        assert_eq!(product.currency, CurrencyCode::Aud);
        assert_eq!(product.price, "A$1,799");
    }

    #[test]
    fn test_wrong_currency_price_ignored() {
        let html = r#"<html><head><title>Kettle</title></head><body>
            <span class="price">$49.99</span>
        </body></html>"#;

        let product = resolve(html, "https://www.argos.co.uk/product/123", "UK").unwrap();
        assert_eq!(product.currency, CurrencyCode::Gbp);
        assert_eq!(product.price, PRICE_NOT_AVAILABLE);
    }

    #[test]
    fn test_generic_fallback_toggle() {
        let html = r#"<html><head><title>Widget</title></head><body>
            <span>$12 off today</span>
        </body></html>"#;

        let with_fallback = ProductResolver::new(CurrencyRegistry::default(), true);
        let product = with_fallback.resolve_html(US_LINK, html, "US").unwrap();
        assert_eq!(product.price, "$12");

        let strict = ProductResolver::new(CurrencyRegistry::default(), false);
        let product = strict.resolve_html(US_LINK, html, "US").unwrap();
        assert_eq!(product.price, PRICE_NOT_AVAILABLE);
    }
}
