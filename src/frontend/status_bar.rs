//! Status bar panel: active tab, line count and suggestion count
//!
//! Sits below the console.

use egui::{Color32, RichText, Ui};

use crate::session::EditorSession;

/// Render the status bar
pub fn render_status_bar(ui: &mut Ui, session: &EditorSession) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let tab = session.active_tab();
        ui.label(RichText::new(&tab.name).small());

        ui.separator();
        ui.label(RichText::new(format!("Lines: {}", session.line_count())).small());

        ui.separator();
        ui.label(RichText::new(format!("Identifiers: {}", tab.autocomplete.identifiers().len())).small());

        let suggestions = tab.autocomplete.candidates().len();
        if suggestions > 0 {
            ui.separator();
            ui.colored_label(
                Color32::from_rgb(100, 200, 255),
                RichText::new(format!("{} suggestions", suggestions)).small(),
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new("Lua").small().color(Color32::GRAY));
        });
    });
}
