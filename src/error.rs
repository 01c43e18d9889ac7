//! Errors reported by the page-fetch and discovery collaborators.

use thiserror::Error;

/// Why a product page could not be turned into HTML.
///
/// None of these abort a comparison; the affected link is dropped.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

/// Why a discovery search returned nothing.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Search API credentials are not configured (set GOOGLE_API_KEY and GOOGLE_CSE_ID)")]
    MissingCredentials,

    #[error("Search API rejected the request (403): check the Custom Search API is enabled and the key is valid")]
    Forbidden,

    #[error("Search API daily quota exceeded (429)")]
    QuotaExceeded,

    #[error("Search API returned status {0}")]
    Status(u16),

    #[error("Search request failed: {0}")]
    Transport(String),

    #[error("Failed to decode search response: {0}")]
    Decode(String),
}
