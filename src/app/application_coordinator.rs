//! Form submission coordination.

use attendance_risk::AttendanceCalculator;

use crate::app::AppState;

/// Coordinates form submissions between the form state and the results state.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Submits the current form contents.
    ///
    /// Every submission overwrites the previous results, successful or not.
    /// Returns true on success.
    pub fn submit_form(state: &mut AppState) -> bool {
        let raw = state.form.raw_input();
        let outcome = AttendanceCalculator::calculate(&raw, state.results.display_mut());
        let succeeded = outcome.is_ok();
        state.results.set_last_result(outcome.ok());
        succeeded
    }
}
