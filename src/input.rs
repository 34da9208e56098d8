//! Parse-or-default policy for numeric user input.
//!
//! Text that does not parse as a finite number becomes 0 instead of an error.

/// Parse a numeric field. Unparseable or non-finite input yields `0.0`.
pub fn parse_or_default(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            log::debug!("coercing non-numeric input {:?} to 0", text);
            0.0
        }
    }
}

/// Parse a day count.
///
/// Decimals are truncated, negatives clamp to 0 and oversized values saturate.
pub fn parse_day_count(text: &str) -> u32 {
    // `as` saturates float-to-int casts and maps negatives to 0
    parse_or_default(text).trunc() as u32
}
