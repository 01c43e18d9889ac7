//! Price token extraction from page text and numeric normalisation for sorting.

pub mod extract;
pub mod normalize;

pub use extract::PriceExtractor;
pub use normalize::{numeric_value, PRICE_SENTINEL};
