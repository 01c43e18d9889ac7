//! The price-comparison record produced for each product page.

use crate::currency::CurrencyCode;
use serde::{Deserialize, Serialize};

/// Price placeholder for a page whose title was found but no price.
pub const PRICE_NOT_AVAILABLE: &str = "Price not available";

/// Name placeholder for a page whose price was found but no title.
pub const NAME_NOT_AVAILABLE: &str = "Product name not available";

/// One retailer offer in a price comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Page title, or [`NAME_NOT_AVAILABLE`]
    pub product_name: String,
    /// Price as displayed on the page (e.g. `"₹82,999"`), or [`PRICE_NOT_AVAILABLE`]
    pub price: String,
    /// Currency the price is expressed in
    pub currency: CurrencyCode,
    /// Product page URL
    pub link: String,
}

impl Product {
    /// Returns true if a real price was extracted.
    pub fn has_price(&self) -> bool {
        !self.price.is_empty() && self.price != PRICE_NOT_AVAILABLE
    }

    /// Returns the sortable numeric price.
    pub fn numeric_price(&self) -> f64 {
        crate::pricing::numeric_value(&self.price)
    }
}
