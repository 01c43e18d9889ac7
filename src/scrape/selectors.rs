//! CSS selectors for product pages across retailers.
//!
//! Price selectors form a priority list: each is scanned in document order
//! and the first element yielding a price token wins. Update this file when a
//! retailer changes its markup, keeping specific selectors ahead of generic ones.

use scraper::Selector;
use std::sync::LazyLock;

/// Page title.
pub static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Price selectors, most specific first.
pub const PRICE_SELECTORS: &[&str] = &[
    // Elements labelled as prices
    "span[class*='price']",
    "span[class*='Price']",
    "div[class*='price']",
    "span[data-testid*='price']",
    // Amazon
    ".a-price-whole",
    ".notranslate",
    // Apple store
    ".price-current",
    ".as-price-currentprice",
    ".as-price-installments",
    ".pricing-price",
    "[data-autom*='price']",
    ".pd-pricing",
    // Accessible labels
    "[aria-label*='price']",
    "[aria-label*='$']",
    "[aria-label*='₹']",
    "[aria-label*='£']",
    // Catch-all, may match unrelated numbers
    GENERIC_FALLBACK,
];

/// Last-resort selector matching any span.
pub const GENERIC_FALLBACK: &str = "span";

static PRICE_PRIORITY: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    PRICE_SELECTORS.iter().map(|s| Selector::parse(s).unwrap()).collect()
});

/// Returns the compiled price selectors in priority order.
///
/// With `generic_fallback` off the catch-all `span` entry is left out.
pub fn price_priority(generic_fallback: bool) -> &'static [Selector] {
    let all = PRICE_PRIORITY.as_slice();
    if generic_fallback {
        all
    } else {
        &all[..all.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selectors_compile() {
        let _ = &*TITLE;
        assert_eq!(price_priority(true).len(), PRICE_SELECTORS.len());
    }

    #[test]
    fn test_generic_fallback_is_last() {
        assert_eq!(PRICE_SELECTORS.last(), Some(&GENERIC_FALLBACK));
        assert_eq!(price_priority(false).len(), PRICE_SELECTORS.len() - 1);
    }

    #[test]
    fn test_price_class_matching() {
        let html = Html::parse_document(
            r#"<div><span class="product-price">$10</span><span>$20</span></div>"#,
        );

        let first = &price_priority(true)[0];
        let matched: Vec<String> = html.select(first).map(|e| e.text().collect()).collect();
        assert_eq!(matched, vec!["$10".to_string()]);
    }

    #[test]
    fn test_aria_label_matching() {
        let html = Html::parse_document(r#"<button aria-label="Buy for £849">Buy</button>"#);
        let pound = Selector::parse("[aria-label*='£']").unwrap();
        assert_eq!(html.select(&pound).count(), 1);
    }
}
