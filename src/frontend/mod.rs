//! Frontend module for egui UI
//!
//! # Layout
//!
//! - Top: toolbar (run, new tab, settings, minimize)
//! - Center: egui_dock workspace with one [`CodeEditor`] per tab
//! - Bottom: console output and status bar
//!
//! # Main Types
//!
//! - [`LuaPadApp`] - Application state implementing [`eframe::App`]
//! - [`CodeEditor`] - Lua text surface with the suggestion popup
//! - [`SuggestionPopup`] - Floating candidate list

pub mod dialogs;
pub mod editor;
pub mod popup;
pub mod state;
pub mod status_bar;
pub mod toolbar;
pub mod workspace;

pub use editor::{highlight_lua_script, CodeEditor};
pub use popup::{PopupEvent, PopupOutput, SuggestionPopup};
pub use state::AppAction;

use dialogs::{show_dialog, PreferencesAction, PreferencesContext, PreferencesDialog, PreferencesState};
use workspace::tab_viewer::WorkspaceTabViewer;
use workspace::Workspace;

use crate::config::AppState;
use crate::error::Result;
use crate::session::EditorSession;

/// Main application state for the editor
pub struct LuaPadApp {
    app_state: AppState,
    session: EditorSession,
    workspace: Workspace,
    last_error: Option<String>,

    // Dialogs
    settings_open: bool,
    settings_state: PreferencesState,
}

impl LuaPadApp {
    /// Build the app from validated preferences
    pub fn new(cc: &eframe::CreationContext<'_>, app_state: AppState) -> Result<Self> {
        apply_visuals(&cc.egui_ctx, app_state.preferences.dark_mode);

        let prefs = &app_state.preferences;
        let session = EditorSession::new(prefs.autocomplete, prefs.surface_metrics())?;
        let workspace = Workspace::new(&session);

        Ok(Self {
            app_state,
            session,
            workspace,
            last_error: None,
            settings_open: false,
            settings_state: PreferencesState::default(),
        })
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: AppAction) {
        match action {
            AppAction::NewTab => {
                let id = self.session.add_tab();
                self.workspace.open_tab(id);
            }
            AppAction::CloseTab(id) => {
                if !self.session.close_tab(id) {
                    self.workspace.restore_tab(id);
                }
                self.workspace.focus_tab(self.session.active_id());
            }
            AppAction::ActivateTab(id) => {
                self.session.set_active(id);
            }
            AppAction::RunActive => {
                self.session.run_active();
            }
            AppAction::OpenSettings => {
                self.settings_state = PreferencesState::from_preferences(&self.app_state.preferences);
                self.settings_open = true;
            }
            AppAction::Minimize => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
            }
        }
    }

    fn apply_preferences(&mut self, ctx: &egui::Context, state: PreferencesState) {
        let mut prefs = self.app_state.preferences.clone();
        state.apply_to(&mut prefs);

        let applied = prefs
            .validate()
            .and_then(|()| self.session.reconfigure(prefs.autocomplete, prefs.surface_metrics()));
        match applied {
            Ok(()) => {
                apply_visuals(ctx, prefs.dark_mode);
                self.app_state.preferences = prefs;
                self.last_error = None;
                tracing::info!("Preferences applied");
            }
            Err(e) => {
                tracing::warn!("Rejected preferences: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn render_console(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Console");
            if let Some(err) = &self.last_error {
                ui.colored_label(egui::Color32::RED, err);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Clear").clicked() {
                    self.session.clear_console();
                }
            });
        });
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(egui::RichText::new(self.session.console()).monospace());
            });
    }
}

fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}

impl eframe::App for LuaPadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            actions.extend(toolbar::render_toolbar(ui));
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::render_status_bar(ui, &self.session);
        });

        egui::TopBottomPanel::bottom("console")
            .resizable(true)
            .default_height(140.0)
            .show(ctx, |ui| self.render_console(ui));

        // Dock workspace
        {
            let mut viewer = WorkspaceTabViewer {
                session: &mut self.session,
                font_size: self.app_state.preferences.font_size,
                actions: Vec::new(),
            };

            egui_dock::DockArea::new(&mut self.workspace.dock_state)
                .style(egui_dock::Style::from_egui(ctx.style().as_ref()))
                .show(ctx, &mut viewer);

            actions.extend(viewer.actions);
        }

        for action in actions {
            self.handle_action(ctx, action);
        }

        if let Some(PreferencesAction::Apply(state)) = show_dialog::<PreferencesDialog>(
            ctx,
            &mut self.settings_open,
            &mut self.settings_state,
            PreferencesContext,
        ) {
            self.apply_preferences(ctx, state);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
