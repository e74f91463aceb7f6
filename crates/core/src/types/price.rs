//! Parsing of listing-page price strings.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a display price string from a product-listing page.
///
/// Listing pages send whatever they render, e.g. `"₱120.00"` or
/// `"$1,299.50"`. Every character except ASCII digits and the decimal
/// point is stripped before parsing.
///
/// Returns `None` when nothing parseable remains (empty input, words
/// like `"free"`, multiple decimal points). Callers drop the offending
/// message rather than admit a corrupted line into the cart.
#[must_use]
pub fn parse_listed_price(raw: &str) -> Option<Decimal> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    Decimal::from_str(&digits).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peso_price() {
        assert_eq!(parse_listed_price("₱120.00"), Some(Decimal::new(12_000, 2)));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(
            parse_listed_price("$1,299.50"),
            Some(Decimal::new(129_950, 2))
        );
    }

    #[test]
    fn test_bare_number() {
        assert_eq!(parse_listed_price("85"), Some(Decimal::from(85)));
    }

    #[test]
    fn test_malformed_rejected() {
        assert_eq!(parse_listed_price(""), None);
        assert_eq!(parse_listed_price("free"), None);
        assert_eq!(parse_listed_price("₱"), None);
        assert_eq!(parse_listed_price("12.3.4"), None);
    }
}
