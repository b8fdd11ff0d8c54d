//! Actions emitted by UI components
//!
//! Panels and the tab viewer return `AppAction`s instead of mutating the
//! session, and the app applies them once per frame after rendering.

use crate::session::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Open a new untitled tab
    NewTab,
    /// Close a tab (ignored for the last one)
    CloseTab(TabId),
    /// Make a tab the active one
    ActivateTab(TabId),
    /// Run the active tab
    RunActive,
    /// Open the settings dialog
    OpenSettings,
    /// Minimize the window
    Minimize,
}
