//! Theme and styling state management.
//!
//! This module encapsulates all state related to visual theming,
//! including the theme manager and the last observed system preference.

use attendance_risk::ThemeManager;

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Owning the theme manager (active mode, palettes)
/// - Remembering the last system preference so changes can be detected
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// System dark-mode preference seen on the previous frame
    last_system_dark: Option<bool>,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("mode", &self.theme_manager.mode())
            .field("last_system_dark", &self.last_system_dark)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default mode.
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            last_system_dark: None,
        }
    }

    // ===== Theme Queries =====

    /// Returns a reference to the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    // ===== Theme Mutations =====

    pub fn theme_manager_mut(&mut self) -> &mut ThemeManager {
        &mut self.theme_manager
    }

    /// Records the system preference and reports whether it changed.
    ///
    /// The first observation is not a change.
    pub fn observe_system_dark(&mut self, is_dark: bool) -> bool {
        let changed = matches!(self.last_system_dark, Some(prev) if prev != is_dark);
        self.last_system_dark = Some(is_dark);
        changed
    }
}
