//! Attendance Risk Predictor GUI Application
//!
//! A small eframe window that turns three numbers (classes attended, total
//! classes, required percentage) into a risk classification and breakdown,
//! with a light/dark theme toggle that persists across sessions.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Form, results and theme state
//! - `presentation/` - Visual styling and color mapping
//! - `ui/` - UI panel rendering and interaction

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use log::info;

mod app;
mod presentation;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use attendance_risk::config::help_text;
use attendance_risk::LaunchConfig;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the window.
fn main() -> Result<()> {
    env_logger::init();

    let config = LaunchConfig::from_env().with_context(|| format!("invalid arguments\n\n{}", help_text()))?;

    if config.show_help {
        print!("{}", help_text());
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 620.0])
            .with_title("Attendance Risk Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Attendance Risk Predictor",
        options,
        Box::new(move |cc| Ok(Box::new(AttendanceApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("failed to run the window: {}", err))
}

/// The main application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles form submissions
/// - `ThemeCoordinator` handles theme selection, persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct AttendanceApp {
    /// Centralized application state
    state: AppState,
    /// Submit the prefilled form on the first frame
    pending_submit: bool,
}

impl AttendanceApp {
    /// Creates the app and picks the startup theme from persistent storage.
    fn new(cc: &eframe::CreationContext, config: LaunchConfig) -> Self {
        let pending_submit = config.submit_on_start;
        let mut state = AppState::with_config(config);

        let reported_dark = ThemeCoordinator::reported_system_dark(&cc.egui_ctx);
        ThemeCoordinator::init_theme(cc.storage, &mut state, reported_dark);
        info!("started in {} mode", state.theme.theme_manager().mode().as_str());

        Self { state, pending_submit }
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, frame: &mut eframe::Frame) {
        match interaction {
            PanelInteraction::ThemeToggleRequested => {
                ThemeCoordinator::toggle_theme(frame.storage_mut(), &mut self.state);
            }
            PanelInteraction::SubmitRequested => {
                ApplicationCoordinator::submit_form(&mut self.state);
            }
        }
    }
}

impl eframe::App for AttendanceApp {
    /// Main update loop.
    ///
    /// 1. Follow system theme changes
    /// 2. Apply theme
    /// 3. Submit the prefilled form if requested on the command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let reported_dark = ThemeCoordinator::reported_system_dark(ctx);
        ThemeCoordinator::sync_system_theme(frame.storage(), &mut self.state, reported_dark);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if std::mem::take(&mut self.pending_submit) {
            ApplicationCoordinator::submit_form(&mut self.state);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, frame);
        }
    }
}
