//! Supported shopping countries, their currencies and retailer allow-lists.

use crate::currency::CurrencyCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Countries the price comparison knows retailers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    #[default]
    Us,
    In,
    Uk,
    Ca,
    Au,
}

impl Country {
    /// Returns the two-letter code callers use for this country.
    pub fn code(&self) -> &'static str {
        match self {
            Country::Us => "US",
            Country::In => "IN",
            Country::Uk => "UK",
            Country::Ca => "CA",
            Country::Au => "AU",
        }
    }

    /// Returns the currency prices are expected in.
    pub fn currency(&self) -> CurrencyCode {
        match self {
            Country::Us => CurrencyCode::Usd,
            Country::In => CurrencyCode::Inr,
            Country::Uk => CurrencyCode::Gbp,
            Country::Ca => CurrencyCode::Cad,
            Country::Au => CurrencyCode::Aud,
        }
    }

    /// Returns the search engine geolocation code (`gl`).
    pub fn search_locale(&self) -> &'static str {
        match self {
            Country::Us => "us",
            Country::In => "in",
            Country::Uk => "uk",
            Country::Ca => "ca",
            Country::Au => "au",
        }
    }

    /// Retailer domains whose links are accepted from discovery.
    pub fn retailers(&self) -> &'static [&'static str] {
        match self {
            Country::Us => &[
                "amazon.com",
                "walmart.com",
                "bestbuy.com",
                "target.com",
                "ebay.com",
                "apple.com",
                "bhphotovideo.com",
            ],
            Country::In => &[
                "amazon.in",
                "flipkart.com",
                "myntra.com",
                "paytmmall.com",
                "snapdeal.com",
                "apple.com",
            ],
            Country::Uk => &[
                "amazon.co.uk",
                "currys.co.uk",
                "argos.co.uk",
                "very.co.uk",
                "apple.com",
                "johnlewis.com",
            ],
            Country::Ca => &["amazon.ca", "bestbuy.ca", "walmart.ca", "canadiantire.ca", "apple.com"],
            Country::Au => &[
                "amazon.com.au",
                "jbhifi.com.au",
                "officeworks.com.au",
                "apple.com",
                "bigw.com.au",
            ],
        }
    }

    /// Retailers searched one at a time after the combined search, in order.
    pub fn individual_searches(&self) -> &'static [&'static str] {
        match self {
            Country::Us => &["amazon.com", "apple.com", "walmart.com", "bestbuy.com", "target.com"],
            Country::In => &["amazon.in", "flipkart.com", "apple.com", "myntra.com"],
            Country::Uk => &["amazon.co.uk", "apple.com", "currys.co.uk", "argos.co.uk"],
            Country::Ca => &["amazon.ca", "apple.com", "bestbuy.ca", "walmart.ca"],
            Country::Au => &["amazon.com.au", "apple.com", "jbhifi.com.au", "officeworks.com.au"],
        }
    }

    /// Returns true if the link belongs to one of this country's retailers.
    pub fn allows(&self, link: &str) -> bool {
        self.retailers().iter().any(|domain| link.contains(domain))
    }

    /// Parses a caller-supplied code, falling back to the default (US).
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    /// Returns all supported countries.
    pub fn all() -> &'static [Country] {
        &[Country::Us, Country::In, Country::Uk, Country::Ca, Country::Au]
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Country {
    type Err = CountryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" | "usa" | "united states" => Ok(Country::Us),
            "in" | "india" => Ok(Country::In),
            "uk" | "gb" | "united kingdom" => Ok(Country::Uk),
            "ca" | "canada" => Ok(Country::Ca),
            "au" | "australia" => Ok(Country::Au),
            _ => Err(CountryParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CountryParseError(String);

impl fmt::Display for CountryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown country '{}'. Valid countries: US, IN, UK, CA, AU", self.0)
    }
}

impl std::error::Error for CountryParseError {}
