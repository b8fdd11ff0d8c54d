//! Editor session: open tabs, the active tab and the console log
//!
//! Each tab carries its own [`AutocompleteController`] so that the names
//! declared in one document are never suggested in another.
//!
//! The "Run" action is a stub. It writes a canned transcript to the console
//! and does not execute the script.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::autocomplete::AutocompleteController;
use crate::config::options::{AutocompleteOptions, SurfaceMetrics};
use crate::error::Result;

/// Content of the first tab of a fresh session
pub const WELCOME_CONTENT: &str = "-- Start coding here...\n\n";

/// Content of every tab added afterwards
pub const NEW_FILE_CONTENT: &str = "-- New file...\n\n";

/// Initial console text
pub const CONSOLE_HEADER: &str = "Console Output\n";

/// Unique identifier for a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub u64);

static NEXT_TAB_ID: AtomicU64 = AtomicU64::new(1);

impl TabId {
    pub fn next() -> Self {
        Self(NEXT_TAB_ID.fetch_add(1, Ordering::SeqCst))
    }
}

/// One open document
#[derive(Debug)]
pub struct Tab {
    pub id: TabId,
    pub name: String,
    pub content: String,
    pub autocomplete: AutocompleteController,
}

/// All open tabs plus the console
#[derive(Debug)]
pub struct EditorSession {
    tabs: Vec<Tab>,
    active: TabId,
    console: String,
    options: AutocompleteOptions,
    metrics: SurfaceMetrics,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::build(AutocompleteOptions::default(), SurfaceMetrics::default())
    }
}

impl EditorSession {
    /// Start a session with one welcome tab
    ///
    /// Fails if the autocomplete options are invalid.
    pub fn new(options: AutocompleteOptions, metrics: SurfaceMetrics) -> Result<Self> {
        options.validate()?;
        metrics.validate()?;
        Ok(Self::build(options, metrics))
    }

    fn build(options: AutocompleteOptions, metrics: SurfaceMetrics) -> Self {
        let first = Self::make_tab("Untitled 1", WELCOME_CONTENT, options, metrics);
        Self {
            active: first.id,
            tabs: vec![first],
            console: CONSOLE_HEADER.to_string(),
            options,
            metrics,
        }
    }

    fn make_tab(
        name: &str,
        content: &str,
        options: AutocompleteOptions,
        metrics: SurfaceMetrics,
    ) -> Tab {
        let mut autocomplete = AutocompleteController::from_validated(options, metrics);
        autocomplete.load_document(content);
        Tab {
            id: TabId::next(),
            name: name.to_string(),
            content: content.to_string(),
            autocomplete,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    /// The active tab; a session is never without one
    pub fn active_tab(&self) -> &Tab {
        self.tabs
            .iter()
            .find(|t| t.id == self.active)
            .unwrap_or(&self.tabs[0])
    }

    pub fn active_tab_mut(&mut self) -> &mut Tab {
        let index = self
            .tabs
            .iter()
            .position(|t| t.id == self.active)
            .unwrap_or(0);
        &mut self.tabs[index]
    }

    /// Make `id` the active tab; unknown ids are ignored
    pub fn set_active(&mut self, id: TabId) -> bool {
        if self.tab(id).is_some() {
            self.active = id;
            true
        } else {
            false
        }
    }

    /// Open a new tab and make it active
    pub fn add_tab(&mut self) -> TabId {
        let name = format!("Untitled {}", self.tabs.len() + 1);
        let tab = Self::make_tab(&name, NEW_FILE_CONTENT, self.options, self.metrics);
        let id = tab.id;
        tracing::debug!(?id, %name, "Opened tab");

        self.tabs.push(tab);
        self.active = id;
        id
    }

    /// Close a tab
    ///
    /// The last remaining tab cannot be closed. Closing the active tab
    /// activates the first remaining one.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        if self.tabs.len() <= 1 {
            return false;
        }
        let Some(index) = self.tabs.iter().position(|t| t.id == id) else {
            return false;
        };

        self.tabs.remove(index);
        if self.active == id {
            self.active = self.tabs[0].id;
        }
        tracing::debug!(?id, "Closed tab");
        true
    }

    /// Apply new autocomplete settings to every open and future tab
    pub fn reconfigure(&mut self, options: AutocompleteOptions, metrics: SurfaceMetrics) -> Result<()> {
        for tab in &mut self.tabs {
            tab.autocomplete.reconfigure(options, metrics)?;
        }
        self.options = options;
        self.metrics = metrics;
        Ok(())
    }

    /// Replace the content of the active tab
    ///
    /// The tab's autocomplete state is reloaded from the new text; no
    /// suggestion is offered until the next edit.
    pub fn update_content(&mut self, content: impl Into<String>) {
        let tab = self.active_tab_mut();
        tab.content = content.into();
        tab.autocomplete.load_document(tab.content.as_str());
    }

    /// Number of lines in the active tab
    pub fn line_count(&self) -> usize {
        self.active_tab().content.split('\n').count()
    }

    pub fn console(&self) -> &str {
        &self.console
    }

    /// Reset the console to its header
    pub fn clear_console(&mut self) {
        self.console = CONSOLE_HEADER.to_string();
    }

    /// Pretend to run the active tab, logging to the console
    pub fn run_active(&mut self) {
        let name = self.active_tab().name.clone();
        tracing::info!("Run requested for {}", name);
        self.console
            .push_str(&format!("\n> Running {}...\n> Output: Hello World!", name));
    }
}
