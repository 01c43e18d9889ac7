//! price-scout - Cross-retailer product price comparison
//!
//! Discovers product pages for a query across a country's major retailers,
//! scrapes each page for its title and displayed price, and returns the
//! offers sorted cheapest first.

pub mod aggregate;
pub mod commands;
pub mod config;
pub mod country;
pub mod currency;
pub mod discovery;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod pricing;
pub mod scrape;
pub mod server;

pub use config::Config;
pub use country::Country;
pub use currency::CurrencyCode;
pub use pipeline::PriceComparison;
pub use scrape::Product;
