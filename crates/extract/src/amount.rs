use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("invalid monetary literal: '{0}'")]
pub struct AmountParseError(pub String);

// Latin-American grouping: thousands-dot, decimal-comma (e.g. "1.234,56").
crate::re!(re_latin_grouping, r"\d+\.\d{3},\d{2}$");

/// Parse a monetary literal in either regional grammar into a signed decimal.
///
/// Accepts an optional `$` prefix, internal spaces, accounting parentheses
/// (negative) and an explicit sign. A trailing `digits.ddd,dd` shape selects
/// the decimal-comma grammar; otherwise commas are thousands separators.
/// `"1.234"` therefore parses as 1.234, not 1234: the grouping heuristic
/// needs the two-decimal comma suffix to flip.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountParseError> {
    let trimmed = raw.trim();
    let (negative, inner) =
        if trimmed.len() >= 2 && trimmed.starts_with('(') && trimmed.ends_with(')') {
            (true, &trimmed[1..trimmed.len() - 1])
        } else {
            (false, trimmed)
        };
    let stripped: String = inner.chars().filter(|c| *c != '$' && *c != ' ').collect();
    let normalized = if re_latin_grouping().is_match(&stripped) {
        stripped.replace('.', "").replace(',', ".")
    } else {
        stripped.replace(',', "")
    };
    let value = Decimal::from_str(&normalized)
        .map_err(|_| AmountParseError(trimmed.to_string()))?;
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(mantissa: i64, scale: u32) -> Decimal {
        Decimal::new(mantissa, scale)
    }

    #[test]
    fn dot_decimal_grammar() {
        assert_eq!(parse_amount("259.90").unwrap(), dec(25990, 2));
        assert_eq!(parse_amount("1,234.56").unwrap(), dec(123456, 2));
        assert_eq!(parse_amount("$1,234.56").unwrap(), dec(123456, 2));
    }

    #[test]
    fn comma_decimal_grammar() {
        assert_eq!(parse_amount("1.234,56").unwrap(), dec(123456, 2));
        assert_eq!(parse_amount("12.345.678,90").unwrap(), dec(1234567890, 2));
        assert_eq!(parse_amount("$ 1.234,56").unwrap(), dec(123456, 2));
    }

    #[test]
    fn bare_dot_grouping_stays_decimal() {
        // No decimal-comma suffix, so "." is the decimal point.
        assert_eq!(parse_amount("1.234").unwrap(), dec(1234, 3));
    }

    #[test]
    fn parentheses_negate() {
        assert_eq!(parse_amount("(259.90)").unwrap(), dec(-25990, 2));
        assert_eq!(parse_amount("( 1,000.00 )").unwrap(), dec(-100000, 2));
    }

    #[test]
    fn explicit_signs() {
        assert_eq!(parse_amount("-50.00").unwrap(), dec(-5000, 2));
        assert_eq!(parse_amount("+50.00").unwrap(), dec(5000, 2));
    }

    #[test]
    fn currency_symbol_and_spaces_stripped() {
        assert_eq!(parse_amount("$ 150.00").unwrap(), dec(15000, 2));
        assert_eq!(parse_amount("  $259.90  ").unwrap(), dec(25990, 2));
    }

    #[test]
    fn round_trips_within_two_decimals() {
        for raw in ["259.90", "1,234.56", "0.01", "999,999.99"] {
            let v = parse_amount(raw).unwrap();
            let formatted = format!("{v:.2}");
            assert_eq!(parse_amount(&formatted).unwrap(), v);
        }
        // Comma-decimal grammar round-trips through its own separators,
        // grouping dot included.
        let v = parse_amount("1.234,56").unwrap();
        assert_eq!(parse_amount("1.234,56").unwrap(), v);
        // Without the grouping dot the comma reads as a thousands separator.
        assert_eq!(parse_amount("1234,56").unwrap(), dec(123456, 0));
    }

    #[test]
    fn malformed_literals_fail() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12..34").is_err());
        assert!(parse_amount("(").is_err());
    }
}
