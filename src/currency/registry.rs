//! Retailer-domain and country lookup tables used to pick a product's currency.
//!
//! Domain rules are matched by substring against the product URL and the first
//! matching rule wins, so a domain that contains another rule's domain
//! (`amazon.com.au` contains `amazon.com`) must be listed before it.

use super::code::CurrencyCode;
use crate::country::Country;

/// A single `(domain substring, currency)` detection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainRule {
    pub domain: &'static str,
    pub currency: CurrencyCode,
}

const fn rule(domain: &'static str, currency: CurrencyCode) -> DomainRule {
    DomainRule { domain, currency }
}

/// Known retailer domains, Australian first so `.com.au` wins over `.com`.
pub static DOMAIN_RULES: &[DomainRule] = &[
    // Australia
    rule("amazon.com.au", CurrencyCode::Aud),
    rule("ebay.com.au", CurrencyCode::Aud),
    rule("jbhifi.com.au", CurrencyCode::Aud),
    rule("harveynorman.com.au", CurrencyCode::Aud),
    rule("bunnings.com.au", CurrencyCode::Aud),
    rule("woolworths.com.au", CurrencyCode::Aud),
    rule("coles.com.au", CurrencyCode::Aud),
    rule("kmart.com.au", CurrencyCode::Aud),
    rule("target.com.au", CurrencyCode::Aud),
    // India
    rule("amazon.in", CurrencyCode::Inr),
    rule("flipkart.com", CurrencyCode::Inr),
    rule("myntra.com", CurrencyCode::Inr),
    rule("snapdeal.com", CurrencyCode::Inr),
    rule("paytmmall.com", CurrencyCode::Inr),
    rule("tatacliq.com", CurrencyCode::Inr),
    rule("shopclues.com", CurrencyCode::Inr),
    rule("croma.com", CurrencyCode::Inr),
    rule("reliance.com", CurrencyCode::Inr),
    // United Kingdom
    rule("amazon.co.uk", CurrencyCode::Gbp),
    rule("argos.co.uk", CurrencyCode::Gbp),
    rule("currys.co.uk", CurrencyCode::Gbp),
    rule("johnlewis.com", CurrencyCode::Gbp),
    rule("tesco.com", CurrencyCode::Gbp),
    rule("asda.com", CurrencyCode::Gbp),
    rule("very.co.uk", CurrencyCode::Gbp),
    rule("ao.com", CurrencyCode::Gbp),
    rule("screwfix.com", CurrencyCode::Gbp),
    // Canada
    rule("amazon.ca", CurrencyCode::Cad),
    rule("walmart.ca", CurrencyCode::Cad),
    rule("bestbuy.ca", CurrencyCode::Cad),
    rule("canadiantire.ca", CurrencyCode::Cad),
    rule("thebay.com", CurrencyCode::Cad),
    rule("costco.ca", CurrencyCode::Cad),
    rule("homedepot.ca", CurrencyCode::Cad),
    rule("loblaws.ca", CurrencyCode::Cad),
    // United States
    rule("amazon.com", CurrencyCode::Usd),
    rule("walmart.com", CurrencyCode::Usd),
    rule("target.com", CurrencyCode::Usd),
    rule("bestbuy.com", CurrencyCode::Usd),
    rule("ebay.com", CurrencyCode::Usd),
    rule("newegg.com", CurrencyCode::Usd),
    rule("costco.com", CurrencyCode::Usd),
    rule("homedepot.com", CurrencyCode::Usd),
    rule("lowes.com", CurrencyCode::Usd),
    rule("macys.com", CurrencyCode::Usd),
];

/// Read-only currency lookups, cheap to copy into each component that needs them.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyRegistry {
    domains: &'static [DomainRule],
}

impl CurrencyRegistry {
    /// Creates a registry over a custom ordered rule list.
    pub fn with_rules(domains: &'static [DomainRule]) -> Self {
        Self { domains }
    }

    /// Returns the currency of the first domain rule contained in `url`.
    pub fn currency_for_domain(&self, url: &str) -> Option<CurrencyCode> {
        self.domains.iter().find(|r| url.contains(r.domain)).map(|r| r.currency)
    }

    /// Returns the currency for a country code, USD for unknown codes.
    pub fn currency_for_country(&self, country: &str) -> CurrencyCode {
        country.parse::<Country>().map(|c| c.currency()).unwrap_or(CurrencyCode::Usd)
    }

    /// Returns the recognised symbol tokens for a currency, in trial order.
    pub fn symbols_for(&self, currency: CurrencyCode) -> &'static [&'static str] {
        currency.symbols()
    }

    /// Picks the expected currency for a product page.
    ///
    /// The retailer domain outranks the caller's country.
    pub fn detect(&self, country: &str, url: &str) -> CurrencyCode {
        self.currency_for_domain(url).unwrap_or_else(|| self.currency_for_country(country))
    }

    /// Returns the ordered domain rules.
    pub fn rules(&self) -> &'static [DomainRule] {
        self.domains
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::with_rules(DOMAIN_RULES)
    }
}
