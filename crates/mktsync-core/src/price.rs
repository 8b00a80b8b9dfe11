//! Supplier price strings to numeric values.
//!
//! The supplier export formats prices for display, e.g. `"5'990.00 руб."`.
//! Digits before the first `.` are the whole part, digits after it the
//! fractional part; every other character (thousands separators, currency
//! suffixes, spaces) is dropped.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Parses a display-formatted supplier price.
///
/// # Errors
///
/// Returns [`CoreError::InvalidPrice`] if the whole part contains no digits.
pub fn convert_price(raw: &str) -> Result<Decimal, CoreError> {
    let invalid = || CoreError::InvalidPrice {
        raw: raw.to_owned(),
    };

    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (raw, ""),
    };

    let whole: String = whole.chars().filter(char::is_ascii_digit).collect();
    if whole.is_empty() {
        return Err(invalid());
    }
    let fraction: String = fraction.chars().filter(char::is_ascii_digit).collect();

    let normalized = if fraction.is_empty() {
        whole
    } else {
        format!("{whole}.{fraction}")
    };

    Decimal::from_str(&normalized).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_currency_suffix() {
        assert_eq!(convert_price("5'990.00 руб.").unwrap(), Decimal::from(5990));
    }

    #[test]
    fn keeps_fractional_part() {
        assert_eq!(
            convert_price("1 234.56").unwrap(),
            Decimal::from_str("1234.56").unwrap()
        );
    }

    #[test]
    fn plain_integer() {
        assert_eq!(convert_price("799").unwrap(), Decimal::from(799));
    }

    #[test]
    fn rejects_price_without_digits() {
        let err = convert_price("руб.").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { .. }), "got: {err:?}");
        assert!(convert_price("").is_err());
    }
}
