//! Form panel UI rendering
//!
//! Handles the three numeric inputs, the calculate button and the error region.

use eframe::egui;
use egui::RichText;
use attendance_risk::ThemeColors;

use crate::app::AppState;

/// Result of form panel interactions
pub enum FormPanelInteraction {
    /// User clicked Calculate or pressed Enter in a field
    SubmitRequested,
}

/// Renders the attendance form
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state (field buffers)
/// * `theme_colors` - Color palette for the current theme
pub fn render_form_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<FormPanelInteraction> {
    let mut submit = false;

    egui::Grid::new("attendance_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            submit |= numeric_field(ui, "Classes attended", "e.g. 40", state.form.attended_mut());
            ui.end_row();

            submit |= numeric_field(ui, "Total classes", "e.g. 50", state.form.total_mut());
            ui.end_row();

            submit |= numeric_field(ui, "Required percentage", "e.g. 75", state.form.required_mut());
            ui.end_row();
        });

    ui.add_space(8.0);

    if ui.button(RichText::new("Calculate").strong()).clicked() {
        submit = true;
    }

    if let Some(err) = &state.results.fields().error_message {
        ui.add_space(4.0);
        ui.colored_label(theme_colors.red, err);
    }

    submit.then_some(FormPanelInteraction::SubmitRequested)
}

/// Draws one labelled input; returns true when Enter was pressed in it.
fn numeric_field(ui: &mut egui::Ui, label: &str, hint: &str, buffer: &mut String) -> bool {
    let label = ui.label(label);
    let response = ui
        .add(
            egui::TextEdit::singleline(buffer)
                .hint_text(hint)
                .desired_width(120.0),
        )
        .labelled_by(label.id);

    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
