//! Form submission flow.
//!
//! Each submission is independent: it validates, computes and then either
//! fills every result field or resets them all to the placeholder.

use log::debug;

use crate::calculator::{compute, validate, AttendanceResult, RawInput};
use crate::display::{DisplayPort, PLACEHOLDER};
use crate::error::ValidationError;
use crate::formatting::{format_percent, format_percent_suffixed};

/// Runs form submissions against a display port.
pub struct AttendanceCalculator;

impl AttendanceCalculator {
    /// Handles one form submission.
    ///
    /// On success the error region is cleared, all six fields are written and
    /// the breakdown panel is shown. On failure the error is shown and the
    /// results are reset.
    pub fn calculate(
        raw: &RawInput,
        display: &mut dyn DisplayPort,
    ) -> Result<AttendanceResult, ValidationError> {
        let input = match validate(raw) {
            Ok(input) => input,
            Err(err) => {
                debug!("rejected submission ({}): {:?}", err.kind(), raw);
                display.show_error(&err.to_string());
                Self::reset_results(display);
                return Err(err);
            }
        };

        display.clear_error();

        let result = compute(&input);
        debug!(
            "computed {:.2}% attended, {} missable, {:?}",
            result.current_percent, result.max_missable, result.risk_level
        );

        Self::render_result(&result, input.required_percent(), display);
        Ok(result)
    }

    /// Puts every result field back to its placeholder and hides the breakdown.
    pub fn reset_results(display: &mut dyn DisplayPort) {
        display.set_current_percent(PLACEHOLDER);
        display.set_max_missable(PLACEHOLDER);
        display.set_risk_status(PLACEHOLDER, None);
        display.set_breakdown_visible(false);
    }

    fn render_result(result: &AttendanceResult, required_percent: f64, display: &mut dyn DisplayPort) {
        display.set_current_percent(&format_percent(result.current_percent));
        display.set_max_missable(&result.displayed_missable().to_string());
        display.set_risk_status(result.risk_level.label(), Some(result.risk_level.tag()));

        display.set_breakdown_attendance(&format_percent_suffixed(result.current_percent));
        display.set_breakdown_required(&format_percent_suffixed(required_percent));
        display.set_breakdown_margin(&format_percent_suffixed(result.margin));
        display.set_breakdown_visible(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::RiskLevel;
    use crate::display::DisplayFields;

    #[test]
    fn test_success_fills_all_fields() {
        let mut fields = DisplayFields::new();
        let result = AttendanceCalculator::calculate(&RawInput::new("40", "50", "75"), &mut fields).unwrap();

        assert_eq!(result.risk_level, RiskLevel::Safe);
        assert_eq!(fields.current_percent, "80.00");
        assert_eq!(fields.max_missable, "3");
        assert_eq!(fields.risk_label, "Safe");
        assert_eq!(fields.risk_tag.as_deref(), Some("safe"));
        assert_eq!(fields.breakdown_attendance, "80.00%");
        assert_eq!(fields.breakdown_required, "75.00%");
        assert_eq!(fields.breakdown_margin, "5.00%");
        assert!(fields.breakdown_visible);
        assert_eq!(fields.error_message, None);
    }

    #[test]
    fn test_unsafe_shows_clamped_missable() {
        let mut fields = DisplayFields::new();
        AttendanceCalculator::calculate(&RawInput::new("5", "10", "80"), &mut fields).unwrap();

        assert_eq!(fields.max_missable, "0");
        assert_eq!(fields.risk_label, "Unsafe");
        assert_eq!(fields.risk_tag.as_deref(), Some("unsafe"));
        assert_eq!(fields.breakdown_margin, "-30.00%");
    }

    #[test]
    fn test_fractional_requirement_rounds_half_up() {
        let mut fields = DisplayFields::new();
        AttendanceCalculator::calculate(&RawInput::new("1", "1", "12.125"), &mut fields).unwrap();

        assert_eq!(fields.breakdown_required, "12.13%");
        assert_eq!(fields.breakdown_margin, "87.88%");
    }

    #[test]
    fn test_failure_resets_previous_result() {
        let mut fields = DisplayFields::new();
        AttendanceCalculator::calculate(&RawInput::new("18", "20", "90"), &mut fields).unwrap();
        assert_eq!(fields.risk_tag.as_deref(), Some("at-risk"));

        let err = AttendanceCalculator::calculate(&RawInput::new("5", "3", "75"), &mut fields).unwrap_err();
        assert_eq!(err, ValidationError::AttendedExceedsTotal);
        assert!(fields.is_placeholder());
        assert!(!fields.breakdown_visible);
        assert_eq!(
            fields.error_message.as_deref(),
            Some("Classes attended cannot exceed total classes.")
        );
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut fields = DisplayFields::new();
        let _ = AttendanceCalculator::calculate(&RawInput::new("", "", ""), &mut fields);
        assert_eq!(fields.error_message.as_deref(), Some("Please enter all values."));

        AttendanceCalculator::calculate(&RawInput::new("9", "10", "75"), &mut fields).unwrap();
        assert_eq!(fields.error_message, None);
        assert!(!fields.is_placeholder());
    }
}
