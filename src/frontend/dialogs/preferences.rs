//! Preferences dialog
//!
//! Appearance (dark mode, editor font size) and suggestion list options.

use egui::Ui;

use crate::config::{AutocompleteOptions, EditorPreferences};
use crate::frontend::dialogs::{Dialog, DialogAction, DialogState, DialogWindowConfig};

/// Editable copy of the preferences
#[derive(Debug, Clone, PartialEq)]
pub struct PreferencesState {
    pub dark_mode: bool,
    pub font_size: f32,
    pub max_candidates: usize,
    pub min_prefix_length: usize,
}

impl Default for PreferencesState {
    fn default() -> Self {
        Self::from_preferences(&EditorPreferences::default())
    }
}

impl PreferencesState {
    pub fn from_preferences(prefs: &EditorPreferences) -> Self {
        Self {
            dark_mode: prefs.dark_mode,
            font_size: prefs.font_size,
            max_candidates: prefs.autocomplete.max_candidates,
            min_prefix_length: prefs.autocomplete.min_prefix_length,
        }
    }

    /// Write the edited values over `prefs`
    ///
    /// An explicit metrics override is kept; otherwise the metrics follow the
    /// new font size.
    pub fn apply_to(&self, prefs: &mut EditorPreferences) {
        prefs.dark_mode = self.dark_mode;
        prefs.font_size = self.font_size;
        prefs.autocomplete = AutocompleteOptions {
            max_candidates: self.max_candidates,
            min_prefix_length: self.min_prefix_length,
        };
    }
}

impl DialogState for PreferencesState {}

#[derive(Debug, Clone)]
pub enum PreferencesAction {
    Apply(PreferencesState),
}

pub struct PreferencesContext;

pub struct PreferencesDialog;

impl Dialog for PreferencesDialog {
    type State = PreferencesState;
    type Action = PreferencesAction;
    type Context<'a> = PreferencesContext;

    fn title(_state: &Self::State) -> &'static str {
        "Settings"
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig {
            default_width: 320.0,
            ..Default::default()
        }
    }

    fn render(
        state: &mut Self::State,
        _ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        ui.heading("Appearance");
        ui.add_space(4.0);

        egui::Grid::new("prefs_appearance_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Dark mode:");
                ui.checkbox(&mut state.dark_mode, "");
                ui.end_row();

                ui.label("Font size:");
                ui.add(egui::Slider::new(&mut state.font_size, 9.0..=24.0).step_by(1.0));
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.heading("Suggestions");
        ui.add_space(4.0);

        egui::Grid::new("prefs_autocomplete_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Max suggestions:");
                ui.add(egui::Slider::new(&mut state.max_candidates, 1..=20));
                ui.end_row();

                ui.label("Min prefix length:");
                ui.add(egui::Slider::new(&mut state.min_prefix_length, 1..=5));
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Apply").clicked() {
                return DialogAction::CloseWithAction(PreferencesAction::Apply(state.clone()));
            }
            if ui.button("Cancel").clicked() {
                return DialogAction::Close;
            }
            DialogAction::None
        })
        .inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurfaceMetrics;

    #[test]
    fn test_state_roundtrips_preferences() {
        let mut prefs = EditorPreferences::default();
        prefs.font_size = 16.0;
        prefs.autocomplete.max_candidates = 4;

        let state = PreferencesState::from_preferences(&prefs);
        let mut applied = EditorPreferences::default();
        state.apply_to(&mut applied);
        assert_eq!(applied, prefs);
    }

    #[test]
    fn test_apply_keeps_metrics_override() {
        let custom = SurfaceMetrics {
            char_width: 9.0,
            line_height: 18.0,
            padding: 2.0,
        };
        let mut prefs = EditorPreferences {
            metrics_override: Some(custom),
            ..Default::default()
        };
        let mut state = PreferencesState::from_preferences(&prefs);
        state.font_size = 20.0;
        state.apply_to(&mut prefs);
        assert_eq!(prefs.surface_metrics(), custom);
    }
}
