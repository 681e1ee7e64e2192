//! Light/dark theme support.
//!
//! [`ThemeManager`] owns the two colour palettes and the active mode. The mode
//! comes from an explicit stored preference when one exists and from the
//! system preference otherwise. Only an explicit toggle writes the store.
//!
//! # Examples
//!
//! ```
//! use attendance_risk::storage::{MemoryStore, PreferenceStore};
//! use attendance_risk::theme::{ThemeManager, ThemePreference, THEME_KEY};
//!
//! let mut store = MemoryStore::new();
//! let mut manager = ThemeManager::new();
//! manager.init_theme(&store, true);
//! assert_eq!(manager.mode(), ThemePreference::Dark);
//!
//! manager.toggle_theme(&mut store);
//! assert_eq!(store.get_string(THEME_KEY).as_deref(), Some("light"));
//! ```

use egui::Color32;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::storage::PreferenceStore;

/// Storage key holding the explicit theme preference.
pub const THEME_KEY: &str = "attendanceTheme";

/// Visual mode, and the value persisted under [`THEME_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// Parses a stored value. Anything other than `"light"` or `"dark"` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

/// Colour palette for one mode
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Semantic colors (risk tags, errors, accents)
    pub red: Color32,
    pub orange: Color32,
    pub green: Color32,
    pub blue: Color32,
}

/// A palette with its mode
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemePreference,
    pub colors: ThemeColors,
}

/// Tracks the active mode and applies it.
pub struct ThemeManager {
    light: Theme,
    dark: Theme,
    mode: ThemePreference,
}

impl ThemeManager {
    /// Creates a manager in dark mode. Call [`ThemeManager::init_theme`] at startup.
    pub fn new() -> Self {
        Self {
            light: light_theme(),
            dark: dark_theme(),
            mode: ThemePreference::Dark,
        }
    }

    /// Reads the explicit preference from a store, if one is set.
    ///
    /// A present key is always explicit: only `"dark"` selects dark mode,
    /// any other value selects light.
    pub fn stored_preference<S: PreferenceStore + ?Sized>(store: &S) -> Option<ThemePreference> {
        let value = store.get_string(THEME_KEY)?;
        Some(ThemePreference::parse(&value).unwrap_or_else(|| {
            warn!("unrecognised {} value {:?}, using light", THEME_KEY, value);
            ThemePreference::Light
        }))
    }

    /// Picks the startup mode: the stored preference wins over the system one.
    ///
    /// Does not write to the store.
    pub fn init_theme<S: PreferenceStore + ?Sized>(&mut self, store: &S, system_dark: bool) {
        let stored = Self::stored_preference(store);
        let mode = stored.unwrap_or_else(|| ThemePreference::from_dark(system_dark));
        info!(
            "initial theme {} (stored: {:?}, system dark: {})",
            mode.as_str(),
            stored,
            system_dark
        );
        self.mode = mode;
    }

    /// Flips the mode and persists it as an explicit preference.
    pub fn toggle_theme<S: PreferenceStore + ?Sized>(&mut self, store: &mut S) -> ThemePreference {
        self.mode = self.mode.toggled();
        store.set_string(THEME_KEY, self.mode.as_str().to_string());
        store.flush();
        info!("theme toggled to {}", self.mode.as_str());
        self.mode
    }

    /// Follows a system preference change unless an explicit preference is stored.
    ///
    /// Returns true when the change was applied.
    pub fn on_system_preference_change<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &S,
        is_dark: bool,
    ) -> bool {
        if store.get_string(THEME_KEY).is_some() {
            return false;
        }
        self.mode = ThemePreference::from_dark(is_dark);
        info!("following system theme: {}", self.mode.as_str());
        true
    }

    pub fn mode(&self) -> ThemePreference {
        self.mode
    }

    /// Accessible label for the toggle control; names the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            ThemePreference::Dark => "Switch to light mode",
            ThemePreference::Light => "Switch to dark mode",
        }
    }

    /// Retrieves the palette for a mode
    pub fn get_theme(&self, mode: ThemePreference) -> &Theme {
        match mode {
            ThemePreference::Light => &self.light,
            ThemePreference::Dark => &self.dark,
        }
    }

    /// Gets the active palette
    pub fn current_theme(&self) -> &Theme {
        self.get_theme(self.mode)
    }

    /// Builds egui visuals for the active mode.
    pub fn visuals(&self) -> egui::Visuals {
        let theme = self.current_theme();
        let mut visuals = if theme.mode.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        Self::apply_theme(theme, &mut visuals);
        visuals
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        // Override background colors
        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        // Override text colors
        visuals.override_text_color = Some(colors.text);

        // Override selection
        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.blue;

        // Override widget colors
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.blue;
        visuals.error_fg_color = colors.red;
        visuals.warn_fg_color = colors.orange;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        mode: ThemePreference::Light,
        colors: ThemeColors {
            background: hex_to_color32("#f5f7fb"),
            panel_background: hex_to_color32("#ffffff"),
            extreme_background: hex_to_color32("#eef1f6"),

            text: hex_to_color32("#1f2933"),
            text_dim: hex_to_color32("#6b7280"),
            text_strong: hex_to_color32("#111827"),

            selection: hex_to_color32("#c7d7fe"),
            hover: hex_to_color32("#e5e7eb"),
            border: hex_to_color32("#d1d5db"),

            red: hex_to_color32("#dc2626"),
            orange: hex_to_color32("#d97706"),
            green: hex_to_color32("#16a34a"),
            blue: hex_to_color32("#2563eb"),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        mode: ThemePreference::Dark,
        colors: ThemeColors {
            background: hex_to_color32("#0f172a"),
            panel_background: hex_to_color32("#1e293b"),
            extreme_background: hex_to_color32("#0b1120"),

            text: hex_to_color32("#e2e8f0"),
            text_dim: hex_to_color32("#94a3b8"),
            text_strong: hex_to_color32("#f8fafc"),

            selection: hex_to_color32("#334e7e"),
            hover: hex_to_color32("#334155"),
            border: hex_to_color32("#475569"),

            red: hex_to_color32("#f87171"),
            orange: hex_to_color32("#fbbf24"),
            green: hex_to_color32("#4ade80"),
            blue: hex_to_color32("#60a5fa"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store_with(value: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set_string(THEME_KEY, value.to_string());
        store
    }

    #[test]
    fn test_system_dark_without_stored_key() {
        let store = MemoryStore::new();
        let mut manager = ThemeManager::new();
        manager.init_theme(&store, true);
        assert_eq!(manager.mode(), ThemePreference::Dark);
        assert_eq!(manager.toggle_label(), "Switch to light mode");
        assert_eq!(store.get_string(THEME_KEY), None, "init must not persist");
    }

    #[test]
    fn test_stored_light_overrides_system_dark() {
        let store = store_with("light");
        let mut manager = ThemeManager::new();
        manager.init_theme(&store, true);
        assert_eq!(manager.mode(), ThemePreference::Light);
        assert_eq!(manager.toggle_label(), "Switch to dark mode");
    }

    #[test]
    fn test_unknown_stored_value_is_explicit_light() {
        let store = store_with("sepia");
        let mut manager = ThemeManager::new();
        manager.init_theme(&store, true);
        assert_eq!(manager.mode(), ThemePreference::Light);

        // Still counts as an explicit choice
        assert!(!manager.on_system_preference_change(&store, true));
        assert_eq!(manager.mode(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_persists_and_pins_mode() {
        let mut store = MemoryStore::new();
        let mut manager = ThemeManager::new();
        manager.init_theme(&store, false);

        assert_eq!(manager.toggle_theme(&mut store), ThemePreference::Dark);
        assert_eq!(store.get_string(THEME_KEY).as_deref(), Some("dark"));

        // Explicit preference now wins over system changes
        assert!(!manager.on_system_preference_change(&store, false));
        assert_eq!(manager.mode(), ThemePreference::Dark);

        assert_eq!(manager.toggle_theme(&mut store), ThemePreference::Light);
        assert_eq!(store.get_string(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_system_change_applies_after_external_clear() {
        let mut store = store_with("light");
        let mut manager = ThemeManager::new();
        manager.init_theme(&store, true);
        assert!(!manager.on_system_preference_change(&store, true));

        store.remove(THEME_KEY);
        assert!(manager.on_system_preference_change(&store, true));
        assert_eq!(manager.mode(), ThemePreference::Dark);
    }

    #[test]
    fn test_visuals_follow_mode() {
        let mut manager = ThemeManager::new();
        manager.init_theme(&MemoryStore::new(), false);
        let visuals = manager.visuals();
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.panel_fill, manager.get_theme(ThemePreference::Light).colors.panel_background);
    }

    #[test]
    fn test_preference_round_trip_strings() {
        for mode in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(serde_json::to_string(&ThemePreference::Dark).unwrap(), "\"dark\"");
    }
}
