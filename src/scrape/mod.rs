//! Product page fetching, price selectors and per-page product resolution.

pub mod client;
pub mod models;
pub mod resolver;
pub mod selectors;

pub use client::{HttpFetcher, PageFetcher};
pub use models::{Product, NAME_NOT_AVAILABLE, PRICE_NOT_AVAILABLE};
pub use resolver::ProductResolver;
