//! Centralized application state for the attendance window.
//!
//! Composes the focused state components so coordinators can borrow them
//! independently.

use attendance_risk::{LaunchConfig, MemoryStore};

use crate::state::{FormState, ResultsState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Form input buffers
    pub form: FormState,

    /// Result fields written through the display port
    pub results: ResultsState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Launch options from arguments and environment
    pub config: LaunchConfig,

    /// Preference store used when the platform provides no persistence
    pub fallback_store: MemoryStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_config(LaunchConfig::default())
    }

    /// Creates a new application state with the form prefilled from the launch config.
    pub fn with_config(config: LaunchConfig) -> Self {
        Self {
            form: FormState::with_values(config.prefill.clone()),
            results: ResultsState::new(),
            theme: ThemeState::new(),
            config,
            fallback_store: MemoryStore::new(),
        }
    }
}
