//! Result display state.
//!
//! The GUI's implementation of the display port: the calculator writes into
//! these fields and the results panel reads them back every frame.

use attendance_risk::{AttendanceResult, DisplayFields};

/// State behind the results and breakdown panels.
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    /// Field texts as written by the last submission
    fields: DisplayFields,
    /// Metrics from the last successful submission
    last_result: Option<AttendanceResult>,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn fields(&self) -> &DisplayFields {
        &self.fields
    }

    pub fn last_result(&self) -> Option<&AttendanceResult> {
        self.last_result.as_ref()
    }

    // ===== Mutations =====

    /// Display port handed to the calculator.
    pub fn display_mut(&mut self) -> &mut DisplayFields {
        &mut self.fields
    }

    /// Records the outcome of a submission; failures drop the previous result.
    pub fn set_last_result(&mut self, result: Option<AttendanceResult>) {
        self.last_result = result;
    }
}
