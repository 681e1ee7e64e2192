//! State management modules for the attendance window.
//!
//! This module contains state-only logic (no UI concerns):
//! - Form state (input text buffers)
//! - Results state (display fields written by the calculator)
//! - Theme state (theme manager, observed system preference)

mod form_state;
mod results_state;
mod theme_state;

pub use form_state::FormState;
pub use results_state::ResultsState;
pub use theme_state::ThemeState;
