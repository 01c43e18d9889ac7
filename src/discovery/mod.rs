//! Candidate product link discovery through a web search API.

pub mod client;
pub mod models;

pub use client::{GoogleSearchClient, SearchDiscovery};
pub use models::{SearchItem, SearchResponse};
