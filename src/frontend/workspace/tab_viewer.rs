//! TabViewer implementation for the workspace
//!
//! Renders a [`CodeEditor`] for each dock tab.

use egui::{Response, Ui, WidgetText};

use crate::frontend::editor::CodeEditor;
use crate::frontend::state::AppAction;
use crate::session::{EditorSession, TabId};

/// Tab viewer that bridges egui_dock with the editor session
pub struct WorkspaceTabViewer<'a> {
    pub session: &'a mut EditorSession,
    pub font_size: f32,
    pub actions: Vec<AppAction>,
}

impl egui_dock::TabViewer for WorkspaceTabViewer<'_> {
    type Tab = TabId;

    fn title(&mut self, tab: &mut TabId) -> WidgetText {
        self.session
            .tab(*tab)
            .map(|t| WidgetText::from(&t.name))
            .unwrap_or_else(|| WidgetText::from("Unknown"))
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut TabId) {
        let Some(state) = self.session.tab_mut(*tab) else {
            ui.label("Tab not found");
            return;
        };

        let response = egui::ScrollArea::vertical()
            .id_salt(("editor_scroll", *tab))
            .auto_shrink([false, false])
            .show(ui, |ui| CodeEditor::new(state, self.font_size).show(ui))
            .inner;

        if response.gained_focus() || response.clicked() {
            self.actions.push(AppAction::ActivateTab(*tab));
        }
    }

    fn on_tab_button(&mut self, tab: &mut TabId, response: &Response) {
        if response.clicked() {
            self.actions.push(AppAction::ActivateTab(*tab));
        }
    }

    fn on_close(&mut self, tab: &mut TabId) -> egui_dock::widgets::tab_viewer::OnCloseResponse {
        self.actions.push(AppAction::CloseTab(*tab));
        egui_dock::widgets::tab_viewer::OnCloseResponse::Close
    }

    fn closeable(&mut self, _tab: &mut TabId) -> bool {
        self.session.tabs().len() > 1
    }
}
