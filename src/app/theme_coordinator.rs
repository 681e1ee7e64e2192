//! Theme management and persistence coordination.
//!
//! Handles startup theme selection, toggling, following system preference
//! changes, and applying the active palette to egui.

use attendance_risk::PreferenceStore;

use crate::app::AppState;

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Picks the startup theme from persistent storage or the system preference.
    ///
    /// `reported_dark` is the platform's preference, if it reports one.
    pub fn init_theme(storage: Option<&dyn eframe::Storage>, state: &mut AppState, reported_dark: Option<bool>) {
        let system_dark = state.config.system_prefers_dark(reported_dark);
        state.theme.observe_system_dark(system_dark);

        let manager = state.theme.theme_manager_mut();
        match storage {
            Some(storage) => manager.init_theme(storage, system_dark),
            None => manager.init_theme(&state.fallback_store, system_dark),
        }
    }

    /// Toggles the theme and saves the explicit preference.
    pub fn toggle_theme(storage: Option<&mut (dyn eframe::Storage + 'static)>, state: &mut AppState) {
        let manager = state.theme.theme_manager_mut();
        match storage {
            Some(storage) => manager.toggle_theme(storage),
            None => manager.toggle_theme(&mut state.fallback_store),
        };
    }

    /// Checks the platform preference and follows it when no explicit preference is stored.
    ///
    /// Called once per frame.
    pub fn sync_system_theme(storage: Option<&dyn eframe::Storage>, state: &mut AppState, reported_dark: Option<bool>) {
        let system_dark = state.config.system_prefers_dark(reported_dark);
        if !state.theme.observe_system_dark(system_dark) {
            return;
        }

        let manager = state.theme.theme_manager_mut();
        match storage {
            Some(storage) => manager.on_system_preference_change(storage, system_dark),
            None => manager.on_system_preference_change(&state.fallback_store, system_dark),
        };
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let manager = state.theme.theme_manager();
        let theme = if manager.mode().is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };
        ctx.set_theme(theme);
        ctx.set_visuals(manager.visuals());
    }

    /// Platform dark-mode preference as a boolean, if reported.
    pub fn reported_system_dark(ctx: &egui::Context) -> Option<bool> {
        ctx.system_theme().map(|theme| theme == egui::Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attendance_risk::{ThemePreference, THEME_KEY};
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_follows_system_until_toggled() {
        let mut storage = MockStorage::new();
        let mut state = AppState::new();

        ThemeCoordinator::init_theme(Some(&storage), &mut state, Some(false));
        assert_eq!(state.theme.theme_manager().mode(), ThemePreference::Light);

        ThemeCoordinator::sync_system_theme(Some(&storage), &mut state, Some(true));
        assert_eq!(state.theme.theme_manager().mode(), ThemePreference::Dark);

        ThemeCoordinator::toggle_theme(Some(&mut storage), &mut state);
        assert_eq!(storage.data.get(THEME_KEY).map(String::as_str), Some("light"));

        ThemeCoordinator::sync_system_theme(Some(&storage), &mut state, Some(false));
        ThemeCoordinator::sync_system_theme(Some(&storage), &mut state, Some(true));
        assert_eq!(state.theme.theme_manager().mode(), ThemePreference::Light);
    }

    #[test]
    fn test_fallback_store_without_persistence() {
        let mut state = AppState::new();
        ThemeCoordinator::init_theme(None, &mut state, None);
        assert_eq!(state.theme.theme_manager().mode(), ThemePreference::Light);

        ThemeCoordinator::toggle_theme(None, &mut state);
        assert_eq!(state.fallback_store.get_string(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_env_override_beats_platform() {
        let mut state = AppState::new();
        state.config.system_theme_override = Some(ThemePreference::Dark);
        ThemeCoordinator::init_theme(None, &mut state, Some(false));
        assert_eq!(state.theme.theme_manager().mode(), ThemePreference::Dark);
    }
}
