//! Modal-free dialog windows
//!
//! A dialog is a type implementing [`Dialog`]: it owns an editable state,
//! renders into an `egui::Window` and reports what the user decided through
//! [`DialogAction`]. [`show_dialog`] drives the open/close lifecycle.

pub mod preferences;

pub use preferences::{PreferencesAction, PreferencesContext, PreferencesDialog, PreferencesState};

use egui::{Context, Ui};

/// Outcome of rendering a dialog for one frame
#[derive(Debug, Clone, Default)]
pub enum DialogAction<A> {
    /// Keep the dialog open
    #[default]
    None,
    /// Close without an action
    Close,
    /// Close and perform the action
    CloseWithAction(A),
}

impl<A> DialogAction<A> {
    pub fn should_close(&self) -> bool {
        matches!(self, DialogAction::Close | DialogAction::CloseWithAction(_))
    }

    pub fn into_action(self) -> Option<A> {
        match self {
            DialogAction::CloseWithAction(a) => Some(a),
            _ => None,
        }
    }
}

/// Editable state behind a dialog
pub trait DialogState: Default {
    /// Reset to defaults after the dialog closes
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Window appearance for a dialog
#[derive(Debug, Clone)]
pub struct DialogWindowConfig {
    pub default_width: f32,
    pub resizable: bool,
    pub collapsible: bool,
}

impl Default for DialogWindowConfig {
    fn default() -> Self {
        Self {
            default_width: 360.0,
            resizable: false,
            collapsible: false,
        }
    }
}

/// A dialog window
pub trait Dialog {
    type State: DialogState;
    type Action;
    type Context<'a>;

    fn title(state: &Self::State) -> &'static str;

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig::default()
    }

    fn render(
        state: &mut Self::State,
        ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action>;
}

/// Show a dialog while `is_open` is set
///
/// Closing resets the state and clears `is_open`. Returns the action the
/// dialog produced this frame, if any.
pub fn show_dialog<D: Dialog>(
    ctx: &Context,
    is_open: &mut bool,
    state: &mut D::State,
    dialog_ctx: D::Context<'_>,
) -> Option<D::Action> {
    if !*is_open {
        return None;
    }

    let config = D::window_config();
    let mut result = DialogAction::None;

    egui::Window::new(D::title(state))
        .collapsible(config.collapsible)
        .resizable(config.resizable)
        .default_width(config.default_width)
        .show(ctx, |ui| {
            result = D::render(state, dialog_ctx, ui);
        });

    if result.should_close() {
        *is_open = false;
        state.reset();
    }

    result.into_action()
}
