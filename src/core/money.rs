use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Maximum absolute discrepancy treated as effectively zero when comparing
/// monetary sums. Absorbs rounding noise in user-entered amounts.
pub const TOLERANCE: Decimal = dec!(0.01);

/// True when an amount is indistinguishable from zero at [`TOLERANCE`].
pub fn is_settled(amount: Decimal) -> bool {
    amount.abs() <= TOLERANCE
}

/// True when two totals agree within [`TOLERANCE`].
pub fn totals_match(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Sum a sequence of amounts. Decimal addition is exact, so the result
/// carries no accumulated rounding error.
pub fn total<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().sum()
}

/// Round an amount to the 2 fractional digits used for reporting.
pub fn display_round(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}

/// Parse a user-supplied amount string.
///
/// Returns `None` for empty or whitespace-only input (a missing field,
/// not zero) and for anything that does not parse as a decimal number.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Convert a caller-supplied binary float into a decimal amount.
///
/// NaN and infinities are rejected rather than deferred to later stages.
pub fn amount_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64_retain(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_boundary() {
        assert!(is_settled(dec!(0.01)));
        assert!(is_settled(dec!(-0.01)));
        assert!(!is_settled(dec!(0.011)));
    }

    #[test]
    fn test_totals_match() {
        assert!(totals_match(dec!(300), dec!(300.01)));
        assert!(!totals_match(dec!(300), dec!(300.02)));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("150.50"), Some(dec!(150.50)));
        assert_eq!(parse_amount("  100 "), Some(dec!(100)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_negative_parses_through() {
        // Sign policy is the validator's concern, not the parser's.
        assert_eq!(parse_amount("-5"), Some(dec!(-5)));
    }

    #[test]
    fn test_amount_from_f64_rejects_non_finite() {
        assert_eq!(amount_from_f64(f64::NAN), None);
        assert_eq!(amount_from_f64(f64::INFINITY), None);
        assert_eq!(amount_from_f64(100.0), Some(dec!(100)));
    }

    #[test]
    fn test_display_round() {
        assert_eq!(display_round(dec!(33.3333)), dec!(33.33));
        assert_eq!(display_round(dec!(0.005)), dec!(0.00));
    }
}
