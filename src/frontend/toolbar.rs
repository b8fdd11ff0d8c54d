//! Toolbar panel: run, tab and file buttons
//!
//! Sits between the title row and the dock workspace area.

use egui::{RichText, Ui};

use crate::frontend::state::AppAction;

/// Render the main toolbar and return the actions the user triggered
pub fn render_toolbar(ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;

        if ui
            .button(RichText::new("▶ Run").strong())
            .on_hover_text("Run the active tab")
            .clicked()
        {
            actions.push(AppAction::RunActive);
        }
        if ui.button("+").on_hover_text("New tab").clicked() {
            actions.push(AppAction::NewTab);
        }

        ui.separator();

        // File actions are not wired to storage yet
        for label in ["Save", "Import", "Export"] {
            ui.add_enabled(false, egui::Button::new(label));
        }

        ui.separator();

        if ui.button("⚙ Settings").clicked() {
            actions.push(AppAction::OpenSettings);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🗕").on_hover_text("Minimize").clicked() {
                actions.push(AppAction::Minimize);
            }
        });
    });

    actions
}
