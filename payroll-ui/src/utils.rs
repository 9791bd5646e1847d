use payroll_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Formats an amount for display with exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_half_up(amount))
}
