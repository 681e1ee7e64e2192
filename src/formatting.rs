//! Text formatting for result fields.

/// Formats a percentage with two decimals and no suffix.
///
/// # Examples
/// ```
/// use attendance_risk::formatting::format_percent;
/// assert_eq!(format_percent(80.0), "80.00");
/// assert_eq!(format_percent(100.0 / 3.0), "33.33");
/// ```
pub fn format_percent(value: f64) -> String {
    // `{:.2}` rounds ties to even; ties round away from zero here
    let rounded = (value * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}

/// Formats a percentage with two decimals and a trailing `%`.
///
/// # Examples
/// ```
/// use attendance_risk::formatting::format_percent_suffixed;
/// assert_eq!(format_percent_suffixed(5.0), "5.00%");
/// assert_eq!(format_percent_suffixed(-30.0), "-30.00%");
/// ```
pub fn format_percent_suffixed(value: f64) -> String {
    format!("{}%", format_percent(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_percent(12.125), "12.13");
        assert_eq!(format_percent(0.625), "0.63");
        assert_eq!(format_percent(-0.625), "-0.63");
        assert_eq!(format_percent_suffixed(12.125), "12.13%");
    }

    #[test]
    fn test_small_negatives_keep_sign() {
        assert_eq!(format_percent(0.0), "0.00");
        assert_eq!(format_percent(-0.001), "-0.00");
        assert_eq!(format_percent_suffixed(-0.004), "-0.00%");
    }

    #[test]
    fn test_two_decimals() {
        assert_eq!(format_percent(66.666), "66.67");
        assert_eq!(format_percent_suffixed(-3.5), "-3.50%");
    }
}
