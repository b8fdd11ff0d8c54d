//! Code editor widget with inline autocomplete
//!
//! A multiline text surface for Lua with syntax highlighting and the
//! suggestion popup. While the popup is open, navigation keys are taken off
//! the input queue before the text surface sees them, so Enter and Tab accept
//! a suggestion instead of inserting a newline or tab.

use egui::text::{CCursor, CCursorRange, LayoutJob};
use egui::{Color32, FontId, Key, Modifiers, TextFormat, Ui};

use super::popup::{PopupEvent, SuggestionPopup};
use crate::autocomplete::{catalog, Completion, KeyOutcome, NavigationKey};
use crate::session::Tab;

const NAVIGATION_KEYS: [(Key, NavigationKey); 5] = [
    (Key::ArrowDown, NavigationKey::ArrowDown),
    (Key::ArrowUp, NavigationKey::ArrowUp),
    (Key::Enter, NavigationKey::Enter),
    (Key::Tab, NavigationKey::Tab),
    (Key::Escape, NavigationKey::Escape),
];

/// Code editor widget for one tab
pub struct CodeEditor<'a> {
    tab: &'a mut Tab,
    font_size: f32,
}

impl<'a> CodeEditor<'a> {
    pub fn new(tab: &'a mut Tab, font_size: f32) -> Self {
        Self { tab, font_size }
    }

    /// Show the code editor
    pub fn show(self, ui: &mut Ui) -> egui::Response {
        let Self { tab, font_size } = self;
        let id = ui.make_persistent_id(("code_editor", tab.id));

        // Popup navigation goes first
        if tab.autocomplete.state().is_open() && ui.memory(|m| m.has_focus(id)) {
            if let Some(key) = ui.input_mut(take_navigation_key) {
                if let KeyOutcome::Consumed(Some(completion)) = tab.autocomplete.on_key(key) {
                    apply(ui, id, tab, completion);
                }
            }
        }

        let mut layouter = |ui: &Ui, buffer: &dyn egui::TextBuffer, wrap_width: f32| {
            let mut job = highlight_lua_script(buffer.as_str(), font_size);
            job.wrap.max_width = wrap_width;
            ui.painter().layout_job(job)
        };

        let output = egui::TextEdit::multiline(&mut tab.content)
            .id(id)
            .code_editor()
            .lock_focus(true)
            .desired_width(f32::INFINITY)
            .desired_rows(24)
            .font(FontId::monospace(font_size))
            .hint_text("Start coding...")
            .layouter(&mut layouter)
            .show(ui);

        tab.autocomplete.set_surface_origin(output.galley_pos.into());

        let cursor = output
            .cursor_range
            .map(|range| range.primary.index)
            .unwrap_or_else(|| tab.content.chars().count());

        if output.response.changed() {
            tab.autocomplete
                .on_document_changed(tab.content.clone(), cursor);
        } else if output.cursor_range.is_some() && cursor != tab.autocomplete.cursor() {
            tab.autocomplete.on_cursor_moved(cursor);
        }

        let popup_id = id.with("suggestions");
        let popup_output = SuggestionPopup::from_state(popup_id, tab.autocomplete.state())
            .and_then(|popup| popup.show(ui.ctx()));

        match popup_output.and_then(|p| p.event) {
            Some(PopupEvent::Select(index)) => {
                if let Some(completion) = tab.autocomplete.on_pointer_select(index) {
                    apply(ui, id, tab, completion);
                }
            }
            Some(PopupEvent::Close) => {
                tab.autocomplete.on_pointer_outside();
            }
            None => {}
        }

        output.response
    }
}

fn take_navigation_key(input: &mut egui::InputState) -> Option<NavigationKey> {
    NAVIGATION_KEYS
        .iter()
        .find(|(key, _)| input.consume_key(Modifiers::NONE, *key))
        .map(|(_, nav)| *nav)
}

/// Write an accepted completion back into the tab and move the caret after it
fn apply(ui: &Ui, id: egui::Id, tab: &mut Tab, completion: Completion) {
    tab.content = completion.document;

    let mut state = egui::TextEdit::load_state(ui.ctx(), id).unwrap_or_default();
    state
        .cursor
        .set_char_range(Some(CCursorRange::one(CCursor::new(completion.cursor))));
    state.store(ui.ctx(), id);
    ui.memory_mut(|m| m.request_focus(id));
}

/// Syntax highlighter for Lua scripts (basic implementation)
pub fn highlight_lua_script(text: &str, font_size: f32) -> LayoutJob {
    let mut job = LayoutJob::default();

    let format = |color: Color32| TextFormat {
        font_id: FontId::monospace(font_size),
        color,
        ..Default::default()
    };

    let default_format = format(Color32::LIGHT_GRAY);
    let keyword_format = format(Color32::from_rgb(197, 134, 192)); // Purple
    let function_format = format(Color32::from_rgb(220, 220, 170)); // Yellow
    let number_format = format(Color32::from_rgb(181, 206, 168)); // Light green
    let comment_format = format(Color32::from_rgb(106, 153, 85)); // Green
    let string_format = format(Color32::from_rgb(206, 145, 120)); // Orange

    let word_format = |word: &str| {
        if catalog::is_reserved(word) {
            keyword_format.clone()
        } else if catalog::CATALOG.iter().any(|entry| {
            entry.category == catalog::CandidateCategory::Function && entry.text == word
        }) {
            function_format.clone()
        } else if word.chars().all(|c| c.is_ascii_digit() || c == '.') {
            number_format.clone()
        } else {
            default_format.clone()
        }
    };

    let mut chars = text.chars().peekable();
    let mut current_word = String::new();

    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            current_word.push(c);
            continue;
        }

        // Flush current word
        if !current_word.is_empty() {
            job.append(&current_word, 0.0, word_format(&current_word));
            current_word.clear();
        }

        if c == '-' && chars.peek() == Some(&'-') {
            // Line comment
            let mut comment = String::from("-");
            while let Some(&next) = chars.peek() {
                if next == '\n' {
                    break;
                }
                comment.push(next);
                chars.next();
            }
            job.append(&comment, 0.0, comment_format.clone());
        } else if c == '"' || c == '\'' {
            // String literal
            let mut literal = String::from(c);
            while let Some(next) = chars.next() {
                literal.push(next);
                if next == c || next == '\n' {
                    break;
                }
                if next == '\\' {
                    if let Some(escaped) = chars.next() {
                        literal.push(escaped);
                    }
                }
            }
            job.append(&literal, 0.0, string_format.clone());
        } else {
            job.append(&c.to_string(), 0.0, default_format.clone());
        }
    }

    // Flush final word
    if !current_word.is_empty() {
        job.append(&current_word, 0.0, word_format(&current_word));
    }

    job
}
