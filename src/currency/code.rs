//! ISO currency codes and the symbol tokens that identify them in page text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies a product price can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Inr,
    Gbp,
    Cad,
    Aud,
}

impl CurrencyCode {
    /// Returns the three-letter ISO code.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Inr => "INR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Aud => "AUD",
        }
    }

    /// Symbol tokens recognised for this currency, in trial order.
    ///
    /// CAD and AUD share the bare `$` with USD, so their own prefixed forms
    /// come first.
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            CurrencyCode::Usd => &["$"],
            CurrencyCode::Inr => &["₹", "Rs", "Rs.", "INR"],
            CurrencyCode::Gbp => &["£"],
            CurrencyCode::Cad => &["C$", "$", "CAD"],
            CurrencyCode::Aud => &["A$", "$", "AUD"],
        }
    }

    /// Returns all supported currencies.
    pub fn all() -> &'static [CurrencyCode] {
        &[
            CurrencyCode::Usd,
            CurrencyCode::Inr,
            CurrencyCode::Gbp,
            CurrencyCode::Cad,
            CurrencyCode::Aud,
        ]
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::Usd),
            "INR" => Ok(CurrencyCode::Inr),
            "GBP" => Ok(CurrencyCode::Gbp),
            "CAD" => Ok(CurrencyCode::Cad),
            "AUD" => Ok(CurrencyCode::Aud),
            _ => Err(CurrencyParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CurrencyParseError(String);

impl fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown currency '{}'. Valid currencies: USD, INR, GBP, CAD, AUD", self.0)
    }
}

impl std::error::Error for CurrencyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes() {
        assert_eq!(CurrencyCode::Usd.as_str(), "USD");
        assert_eq!(CurrencyCode::Inr.as_str(), "INR");
        assert_eq!(CurrencyCode::Gbp.to_string(), "GBP");
        assert_eq!(CurrencyCode::Cad.to_string(), "CAD");
        assert_eq!(CurrencyCode::Aud.to_string(), "AUD");
    }

    #[test]
    fn test_symbol_order() {
        assert_eq!(CurrencyCode::Usd.symbols(), &["$"]);
        assert_eq!(CurrencyCode::Inr.symbols(), &["₹", "Rs", "Rs.", "INR"]);
        assert_eq!(CurrencyCode::Gbp.symbols(), &["£"]);
        assert_eq!(CurrencyCode::Cad.symbols()[0], "C$");
        assert_eq!(CurrencyCode::Aud.symbols()[0], "A$");
    }

    #[test]
    fn test_every_currency_has_symbols() {
        for currency in CurrencyCode::all() {
            assert!(!currency.symbols().is_empty(), "{} has no symbols", currency);
        }
    }

    #[test]
    fn test_currency_parsing() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::Usd);
        assert_eq!("GBP".parse::<CurrencyCode>().unwrap(), CurrencyCode::Gbp);
        assert!("EUR".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_currency_serde() {
        let json = serde_json::to_string(&CurrencyCode::Inr).unwrap();
        assert_eq!(json, "\"INR\"");

        let parsed: CurrencyCode = serde_json::from_str("\"AUD\"").unwrap();
        assert_eq!(parsed, CurrencyCode::Aud);
    }
}
