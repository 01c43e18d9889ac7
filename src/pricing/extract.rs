//! Locates a currency-symbol price token inside a short text fragment.

use crate::currency::{CurrencyCode, CurrencyRegistry};

/// Fragments longer than this are treated as prose, not prices.
pub const MAX_TEXT_CHARS: usize = 50;

/// Longest split part (exclusive) accepted around an embedded symbol.
pub const MAX_PART_CHARS: usize = 20;

/// Extracts price tokens in an expected currency.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceExtractor {
    registry: CurrencyRegistry,
}

impl PriceExtractor {
    /// Creates an extractor backed by the given registry.
    pub fn new(registry: CurrencyRegistry) -> Self {
        Self { registry }
    }

    /// Returns the first price token for `expected` found in `text`.
    ///
    /// Symbols are tried in registry order. Text carrying only another
    /// currency's symbol yields `None` rather than a mislabelled price.
    pub fn extract(&self, text: &str, expected: CurrencyCode) -> Option<String> {
        let text = text.trim();
        if text.chars().count() > MAX_TEXT_CHARS {
            return None;
        }

        self.registry
            .symbols_for(expected)
            .iter()
            .find_map(|symbol| Self::match_symbol(text, symbol))
    }

    fn match_symbol(text: &str, symbol: &str) -> Option<String> {
        if text.starts_with(symbol) {
            // Leading symbol: the first word is the price, e.g. "$19.99 each"
            let token = text.split_whitespace().next()?;
            return (token.len() > symbol.len()).then(|| token.to_string());
        }

        if text.contains(symbol) {
            // Embedded or trailing symbol, e.g. "Now 19.99$" or "Price: £12"
            return text
                .split(symbol)
                .map(str::trim)
                .find(|part| {
                    part.chars().any(|c| c.is_ascii_digit()) && part.chars().count() < MAX_PART_CHARS
                })
                .map(|part| format!("{}{}", symbol, part));
        }

        None
    }
}
