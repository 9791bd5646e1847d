//! Common utility functions for payroll calculations.
//!
//! This module provides shared functionality used by the calculator and its
//! callers, including rounding and amount parsing.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero). Calculations never round
/// internally; this is meant for presenting amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Parses a free-text amount as typed into a form field.
///
/// Surrounding whitespace is ignored and commas are accepted as thousands
/// separators between groups of three integer digits (e.g. `"1,234.56"`).
/// Returns `None` for empty input, misplaced commas, or text that is not a
/// plain decimal number.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::parse_amount;
///
/// assert_eq!(parse_amount(" 30,000.50 "), Some(dec!(30000.50)));
/// assert_eq!(parse_amount("1,2,3"), None);
/// assert_eq!(parse_amount("abc"), None);
/// assert_eq!(parse_amount(""), None);
/// ```
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Some(normalized) = strip_thousands_separators(trimmed) else {
        tracing::debug!(input = %text, "misplaced thousands separator");
        return None;
    };
    match normalized.parse() {
        Ok(amount) => Some(amount),
        Err(e) => {
            tracing::debug!(input = %text, "unparseable amount: {}", e);
            None
        }
    }
}

/// Removes commas that sit between three-digit groups of the integer part.
fn strip_thousands_separators(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (text, ""),
    };
    if fraction.contains(',') {
        return None;
    }

    let is_digits = |group: &str| group.bytes().all(|b| b.is_ascii_digit());
    let unsigned = integer.strip_prefix(['-', '+']).unwrap_or(integer);
    let mut groups = unsigned.split(',');
    let leading = groups.next().unwrap_or_default();
    if !(1..=3).contains(&leading.len()) || !is_digits(leading) {
        return None;
    }
    if !groups.all(|group| group.len() == 3 && is_digits(group)) {
        return None;
    }

    Some(text.replace(',', ""))
}
