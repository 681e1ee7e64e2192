//! Results panel UI rendering
//!
//! Shows the headline metrics, the risk status and, after a successful
//! calculation, the breakdown panel.

use eframe::egui;
use egui::{RichText, ScrollArea};
use attendance_risk::{with_alpha, ThemeColors};

use crate::app::AppState;
use crate::presentation::color_mapping;

/// Renders the results and breakdown panels
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Color palette for the current theme
pub fn render_results_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) {
    let fields = state.results.fields();
    let headline = color_mapping::headline_color(theme_colors);

    ui.label(RichText::new("Results").strong());
    ui.separator();

    egui::Grid::new("results_grid")
        .num_columns(2)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            ui.label("Current attendance (%)");
            ui.label(RichText::new(&fields.current_percent).size(20.0).strong().color(headline));
            ui.end_row();

            ui.label("Max classes you can miss");
            ui.label(RichText::new(&fields.max_missable).size(20.0).strong().color(headline));
            ui.end_row();

            ui.label("Risk status");
            let risk_color = color_mapping::risk_color(fields.risk_tag.as_deref(), theme_colors);
            egui::Frame::NONE
                .fill(with_alpha(risk_color, 40))
                .inner_margin(4.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.colored_label(risk_color, RichText::new(&fields.risk_label).size(20.0).strong());
                });
            ui.end_row();
        });

    if !fields.breakdown_visible {
        return;
    }

    ui.add_space(10.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("Breakdown").strong());
        egui::Grid::new("breakdown_grid")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.label("Your attendance");
                ui.label(&fields.breakdown_attendance);
                ui.end_row();

                ui.label("Required");
                ui.label(&fields.breakdown_required);
                ui.end_row();

                ui.label("Margin");
                ui.colored_label(
                    color_mapping::margin_color(&fields.breakdown_margin, theme_colors),
                    &fields.breakdown_margin,
                );
                ui.end_row();
            });
    });

    if let Some(result) = state.results.last_result() {
        ui.add_space(6.0);
        ui.collapsing("Details", |ui| {
            ScrollArea::vertical()
                .id_salt("details_scroll_area")
                .max_height(120.0)
                .show(ui, |ui| match serde_json::to_string_pretty(result) {
                    Ok(json) => {
                        ui.colored_label(theme_colors.blue, json);
                    }
                    Err(err) => {
                        ui.colored_label(theme_colors.red, format!("(unavailable: {})", err));
                    }
                });
        });
    }
}
