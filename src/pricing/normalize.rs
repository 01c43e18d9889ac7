//! Converts display prices into sortable numbers.

use crate::scrape::models::PRICE_NOT_AVAILABLE;

/// Sort key for missing or unparseable prices; greater than any parsed price.
pub const PRICE_SENTINEL: f64 = f64::MAX;

/// Returns the numeric value of a display price such as `"$1,299.99"`.
///
/// Every character other than ASCII digits and `.` is dropped before parsing.
/// Empty strings, the "not available" marker and anything that still fails to
/// parse map to [`PRICE_SENTINEL`], so priceless products sort last.
pub fn numeric_value(price: &str) -> f64 {
    if price.is_empty() || price == PRICE_NOT_AVAILABLE {
        return PRICE_SENTINEL;
    }

    let cleaned: String = price.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => PRICE_SENTINEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value("$19.99"), 19.99);
        assert_eq!(numeric_value("$1,299.00"), 1299.0);
        assert_eq!(numeric_value("£849"), 849.0);
        assert_eq!(numeric_value("₹82,999"), 82999.0);
        assert_eq!(numeric_value("C$1,049.99"), 1049.99);
        assert_eq!(numeric_value("A$ 10"), 10.0);
    }

    #[test]
    fn test_sentinel_inputs() {
        assert_eq!(numeric_value(""), PRICE_SENTINEL);
        assert_eq!(numeric_value(PRICE_NOT_AVAILABLE), PRICE_SENTINEL);
        assert_eq!(numeric_value("not-a-number"), PRICE_SENTINEL);
        assert_eq!(numeric_value("$"), PRICE_SENTINEL);
        assert_eq!(numeric_value("$1.299.00"), PRICE_SENTINEL);
    }

    #[test]
    fn test_sentinel_exceeds_parsed_prices() {
        for price in ["$0.01", "₹99,99,999", "$999999", "£123456789012.50"] {
            assert!(numeric_value(price) < PRICE_SENTINEL, "{} not below sentinel", price);
        }
    }

    #[test]
    fn test_overflow_maps_to_sentinel() {
        let huge = format!("${}", "9".repeat(400));
        assert_eq!(numeric_value(&huge), PRICE_SENTINEL);
    }
}
