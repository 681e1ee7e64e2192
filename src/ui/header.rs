//! Header panel UI rendering
//!
//! Handles the title bar and the theme toggle control.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked the theme toggle
    ThemeToggleRequested,
}

/// Renders the application header with the title and theme toggle
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let manager = state.theme.theme_manager();

    ui.horizontal(|ui| {
        ui.heading(RichText::new("Attendance Risk Predictor").strong());

        // Push theme toggle to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = manager.toggle_label();
            let icon = if manager.mode().is_dark() { "☀" } else { "🌙" };

            let response = ui.button(RichText::new(icon).size(18.0));
            response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label));

            if response.on_hover_text(label).clicked() {
                interaction = Some(HeaderInteraction::ThemeToggleRequested);
            }
        });
    });

    interaction
}
