//! Dock workspace holding the editor tabs
//!
//! The dock only stores [`TabId`]s; the tabs themselves live in the
//! [`EditorSession`](crate::session::EditorSession). The two are kept in step
//! by the app when it applies tab actions.

pub mod tab_viewer;

use crate::session::{EditorSession, TabId};

pub struct Workspace {
    pub dock_state: egui_dock::DockState<TabId>,
}

impl Workspace {
    /// Dock with one tab per open session tab
    pub fn new(session: &EditorSession) -> Self {
        let tabs = session.tabs().iter().map(|t| t.id).collect();
        Self {
            dock_state: egui_dock::DockState::new(tabs),
        }
    }

    /// Add a tab to the focused leaf and focus it
    pub fn open_tab(&mut self, id: TabId) {
        self.dock_state.push_to_focused_leaf(id);
    }

    /// Bring an existing tab to the front
    pub fn focus_tab(&mut self, id: TabId) {
        if let Some(location) = self.dock_state.find_tab(&id) {
            self.dock_state.set_active_tab(location);
        }
    }

    /// Drop a tab the session refused to close back into the dock
    pub fn restore_tab(&mut self, id: TabId) {
        if self.dock_state.find_tab(&id).is_none() {
            self.dock_state.push_to_first_leaf(id);
        }
    }
}
