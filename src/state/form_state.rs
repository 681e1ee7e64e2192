//! Form input state.
//!
//! Holds the text buffers behind the three numeric input fields.

use attendance_risk::RawInput;

/// Text buffers for the attendance form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Classes attended so far
    attended: String,
    /// Total classes held so far
    total: String,
    /// Required attendance percentage
    required: String,
}

impl FormState {
    /// Creates a form prefilled with the given values.
    pub fn with_values(raw: RawInput) -> Self {
        Self {
            attended: raw.attended,
            total: raw.total,
            required: raw.required,
        }
    }

    // ===== Field Buffers =====

    pub fn attended_mut(&mut self) -> &mut String {
        &mut self.attended
    }

    pub fn total_mut(&mut self) -> &mut String {
        &mut self.total
    }

    pub fn required_mut(&mut self) -> &mut String {
        &mut self.required
    }

    /// Snapshot of the current field contents for submission.
    pub fn raw_input(&self) -> RawInput {
        RawInput::new(self.attended.clone(), self.total.clone(), self.required.clone())
    }
}
