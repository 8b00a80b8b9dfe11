//! Supplier stock-level column to marketplace stock count.

use crate::error::CoreError;

/// Open-ended sentinel the supplier uses for "more than ten in stock".
pub const MANY_SENTINEL: &str = ">10";

/// Stock count pushed for [`MANY_SENTINEL`].
pub const MANY_COUNT: i64 = 100;

/// Converts a raw supplier quantity into the count sent to the marketplace.
///
/// - `">10"` becomes `100`.
/// - `"1"` becomes `0`: a single remaining unit is held back as reserved
///   stock and must not be offered.
/// - anything else is parsed as a base-10 integer and passed through as is,
///   negative counts included.
///
/// Sentinels match the raw value exactly. Surrounding whitespace is only
/// ignored for the integer parse, so `" 1"` is a plain 1.
///
/// # Errors
///
/// Returns [`CoreError::InvalidQuantity`] if the value is not a sentinel and
/// does not parse as an integer.
pub fn normalize_quantity(raw: &str) -> Result<i64, CoreError> {
    match raw {
        MANY_SENTINEL => Ok(MANY_COUNT),
        "1" => Ok(0),
        other => other
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::InvalidQuantity {
                raw: raw.to_owned(),
            }),
    }
}
