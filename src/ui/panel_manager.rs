//! Panel orchestration and layout management.
//!
//! Coordinates the header, form and results panels and folds their
//! interactions into one result for the application.

use crate::app::AppState;
use crate::ui::{form_panel, header, results_panel};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// User asked to flip the theme
    ThemeToggleRequested,
    /// User submitted the form
    SubmitRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state.theme.theme_manager().current_theme().colors.clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(header::HeaderInteraction::ThemeToggleRequested) = header::render_header(ui, state) {
                interaction = Some(PanelInteraction::ThemeToggleRequested);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::default().inner_margin(8.0).show(ui, |ui| {
                if let Some(form_panel::FormPanelInteraction::SubmitRequested) =
                    form_panel::render_form_panel(ui, state, &theme_colors)
                {
                    interaction = Some(PanelInteraction::SubmitRequested);
                }

                ui.add_space(12.0);
                results_panel::render_results_panel(ui, state, &theme_colors);
            });
        });

        interaction
    }
}
