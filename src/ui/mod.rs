//! UI panel rendering subsystem
//!
//! - Header panel (title, theme toggle)
//! - Form panel (numeric inputs, calculate button, error region)
//! - Results panel (metrics, risk status, breakdown)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod form_panel;
pub mod results_panel;
pub mod panel_manager;
