//! Color mapping for risk status tags.
//!
//! Maps the style tag written by the calculator to a palette colour, the way
//! a stylesheet would map a CSS class.

use attendance_risk::ThemeColors;
use egui::Color32;

/// Returns the text colour for a risk status tag.
///
/// # Arguments
/// * `tag` - Style tag from the display fields (`None` while showing the placeholder)
/// * `colors` - The current theme's color palette
pub fn risk_color(tag: Option<&str>, colors: &ThemeColors) -> Color32 {
    match tag {
        Some("safe") => colors.green,
        Some("at-risk") => colors.orange,
        Some("unsafe") => colors.red,
        _ => colors.text_dim,
    }
}

/// Returns the colour for headline metric values.
pub fn headline_color(colors: &ThemeColors) -> Color32 {
    colors.text_strong
}

/// Returns the colour for a signed margin such as `"-3.50%"`.
pub fn margin_color(margin_text: &str, colors: &ThemeColors) -> Color32 {
    if margin_text.starts_with('-') {
        colors.red
    } else {
        colors.green
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attendance_risk::{ThemeManager, ThemePreference};

    #[test]
    fn test_tags_map_to_semantic_colors() {
        let manager = ThemeManager::new();
        let colors = &manager.get_theme(ThemePreference::Light).colors;

        assert_eq!(risk_color(Some("safe"), colors), colors.green);
        assert_eq!(risk_color(Some("at-risk"), colors), colors.orange);
        assert_eq!(risk_color(Some("unsafe"), colors), colors.red);
        assert_eq!(risk_color(None, colors), colors.text_dim);
        assert_eq!(margin_color("-0.50%", colors), colors.red);
        assert_eq!(margin_color("5.00%", colors), colors.green);
    }

    #[test]
    fn test_headline_uses_strong_text() {
        let manager = ThemeManager::new();
        for mode in [ThemePreference::Light, ThemePreference::Dark] {
            let colors = &manager.get_theme(mode).colors;
            assert_eq!(headline_color(colors), colors.text_strong);
            assert_ne!(headline_color(colors), colors.panel_background);
        }
    }
}
