//! In-process API between the text surface and the autocomplete core
//!
//! The controller owns the derived state of one document (identifier set,
//! word under the caret, popup state). Every entry point recomputes what the
//! event invalidates, then notifies the observer and hands the new state back
//! to the caller for rendering. Nothing is recomputed lazily or in the
//! background.
//!
//! # Example
//!
//! ```
//! use luapad_rs::autocomplete::{AutocompleteController, KeyOutcome, NavigationKey};
//!
//! let mut controller = AutocompleteController::default();
//! assert!(controller.on_document_changed("loc", 3).is_open());
//!
//! let KeyOutcome::Consumed(Some(completion)) = controller.on_key(NavigationKey::Tab) else {
//!     panic!("expected a completion");
//! };
//! assert_eq!(completion.document, "local");
//! assert_eq!(completion.cursor, 5);
//! assert!(!controller.state().is_open());
//! ```

use std::fmt;

use super::catalog::CATALOG;
use super::geometry::{resolve_anchor, Point};
use super::identifiers::{extract_identifiers, IdentifierSet};
use super::matcher::{apply_completion, word_at_cursor, Candidate, CandidateMatcher, WordSpan};
use super::navigation::{NavigationKey, NavigationState, Transition};
use crate::config::options::{AutocompleteOptions, SurfaceMetrics};
use crate::error::{Result, ResultExt};

/// Receives the popup state after every recomputation
pub trait SuggestionObserver {
    fn on_state_changed(&mut self, state: &NavigationState);
}

impl<F> SuggestionObserver for F
where
    F: FnMut(&NavigationState),
{
    fn on_state_changed(&mut self, state: &NavigationState) {
        self(state)
    }
}

/// An accepted suggestion already spliced into the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The accepted candidate text
    pub text: String,
    /// Document with the partial word replaced
    pub document: String,
    /// Caret offset just past the inserted text
    pub cursor: usize,
}

/// Answer to a forwarded key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The popup is closed or the key is not a navigation key; apply it to the text
    NotConsumed,
    /// The popup handled the key, possibly accepting a suggestion
    Consumed(Option<Completion>),
}

/// Autocomplete state for a single document
pub struct AutocompleteController {
    options: AutocompleteOptions,
    metrics: SurfaceMetrics,
    matcher: CandidateMatcher,
    origin: Point,
    document: String,
    cursor: usize,
    identifiers: IdentifierSet,
    word: WordSpan,
    state: NavigationState,
    observer: Option<Box<dyn SuggestionObserver>>,
}

impl fmt::Debug for AutocompleteController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteController")
            .field("options", &self.options)
            .field("metrics", &self.metrics)
            .field("cursor", &self.cursor)
            .field("word", &self.word)
            .field("identifiers", &self.identifiers.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for AutocompleteController {
    fn default() -> Self {
        Self::from_validated(AutocompleteOptions::default(), SurfaceMetrics::default())
    }
}

impl AutocompleteController {
    /// Create a controller, rejecting options that can never work
    pub fn new(options: AutocompleteOptions, metrics: SurfaceMetrics) -> Result<Self> {
        options
            .validate()
            .and_then(|()| metrics.validate())
            .context("Invalid autocomplete configuration")
            .inspect_err(|e| tracing::debug!("Rejected autocomplete options: {}", e))?;
        Ok(Self::from_validated(options, metrics))
    }

    /// Create a controller from options that already passed validation
    pub(crate) fn from_validated(options: AutocompleteOptions, metrics: SurfaceMetrics) -> Self {
        Self {
            options,
            metrics,
            matcher: CandidateMatcher::new(CATALOG, options.max_candidates),
            origin: Point::default(),
            document: String::new(),
            cursor: 0,
            identifiers: IdentifierSet::new(),
            word: WordSpan::default(),
            state: NavigationState::Closed,
            observer: None,
        }
    }

    /// Swap in new options and metrics, keeping the document
    ///
    /// An open popup is closed; the next edit recomputes it under the new
    /// options.
    pub fn reconfigure(&mut self, options: AutocompleteOptions, metrics: SurfaceMetrics) -> Result<()> {
        options
            .validate()
            .and_then(|()| metrics.validate())
            .context("Invalid autocomplete configuration")?;
        self.options = options;
        self.metrics = metrics;
        self.matcher = CandidateMatcher::new(CATALOG, options.max_candidates);
        if self.state.dismiss() == Transition::Dismissed {
            self.notify();
        }
        Ok(())
    }

    /// Register the observer notified after every state recomputation
    pub fn set_observer(&mut self, observer: impl SuggestionObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn options(&self) -> &AutocompleteOptions {
        &self.options
    }

    pub fn metrics(&self) -> &SurfaceMetrics {
        &self.metrics
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn identifiers(&self) -> &IdentifierSet {
        &self.identifiers
    }

    /// Partial word in front of the caret
    pub fn word(&self) -> &WordSpan {
        &self.word
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Current suggestions; empty while closed
    pub fn candidates(&self) -> &[Candidate] {
        self.state.candidates()
    }

    /// Set the screen position of the text surface's top-left text cell
    pub fn set_surface_origin(&mut self, origin: Point) {
        if self.origin != origin {
            self.origin = origin;
            self.reanchor();
        }
    }

    /// Replace the whole document without opening the popup
    ///
    /// Used when a tab is created or its content is swapped out wholesale;
    /// identifiers are harvested but no suggestion is offered.
    pub fn load_document(&mut self, text: impl Into<String>) {
        self.document = text.into();
        self.cursor = 0;
        self.identifiers = extract_identifiers(&self.document);
        self.word = WordSpan::default();
        if self.state.dismiss() == Transition::Dismissed {
            self.notify();
        }
    }

    /// The text changed; recompute identifiers and suggestions
    ///
    /// `cursor` is the caret's char offset after the edit and is clamped to
    /// the document.
    pub fn on_document_changed(&mut self, text: impl Into<String>, cursor: usize) -> &NavigationState {
        self.document = text.into();
        self.cursor = self.clamp(cursor);
        self.identifiers = extract_identifiers(&self.document);
        self.refresh();
        self.notify();
        &self.state
    }

    /// The caret moved without a text change
    ///
    /// While the caret stays inside the word the list was matched against,
    /// the list is kept and only the anchor follows the caret. Moving to a
    /// different word closes the popup.
    pub fn on_cursor_moved(&mut self, cursor: usize) -> &NavigationState {
        self.cursor = self.clamp(cursor);
        let word = word_at_cursor(&self.document, self.cursor);
        let left_word = word.start != self.word.start;
        self.word = word;

        if !self.state.is_open() {
            return &self.state;
        }
        if left_word {
            self.state.dismiss();
            tracing::trace!("Popup dismissed by caret leaving the word");
        } else {
            self.reanchor();
        }
        self.notify();
        &self.state
    }

    /// Offer a key press to the popup
    pub fn on_key(&mut self, key: NavigationKey) -> KeyOutcome {
        match self.state.handle_key(key) {
            Transition::Ignored => KeyOutcome::NotConsumed,
            Transition::Moved { .. } | Transition::Dismissed => {
                self.notify();
                KeyOutcome::Consumed(None)
            }
            Transition::Accepted(candidate) => {
                KeyOutcome::Consumed(Some(self.complete(candidate)))
            }
        }
    }

    /// A pointer was pressed outside the popup's bounds
    pub fn on_pointer_outside(&mut self) -> &NavigationState {
        if self.state.dismiss() == Transition::Dismissed {
            tracing::trace!("Popup dismissed by outside click");
            self.notify();
        }
        &self.state
    }

    /// A popup row was clicked
    pub fn on_pointer_select(&mut self, index: usize) -> Option<Completion> {
        match self.state.select_row(index) {
            Transition::Accepted(candidate) => Some(self.complete(candidate)),
            _ => None,
        }
    }

    fn clamp(&self, cursor: usize) -> usize {
        cursor.min(self.document.chars().count())
    }

    fn refresh(&mut self) {
        self.word = word_at_cursor(&self.document, self.cursor);

        let was_open = self.state.is_open();
        self.state = if self.word.len() < self.options.min_prefix_length {
            NavigationState::Closed
        } else {
            let candidates = self.matcher.matches(&self.word.text, &self.identifiers);
            NavigationState::open(candidates, self.anchor())
        };

        if was_open != self.state.is_open() {
            tracing::trace!(
                word = %self.word.text,
                open = self.state.is_open(),
                "Popup state changed"
            );
        }
    }

    fn anchor(&self) -> Point {
        resolve_anchor(&self.document, self.cursor, self.origin, &self.metrics)
    }

    fn reanchor(&mut self) {
        let anchor = self.anchor();
        self.state.set_anchor(anchor);
    }

    /// Splice the accepted candidate over the partial word
    ///
    /// The document is replaced before the caret is recomputed, and the popup
    /// is already closed, so the next event starts from fresh state.
    fn complete(&mut self, candidate: Candidate) -> Completion {
        let (document, cursor) = apply_completion(&self.document, &self.word, &candidate.text);
        self.document = document;
        self.cursor = cursor;
        self.identifiers = extract_identifiers(&self.document);
        self.word = word_at_cursor(&self.document, self.cursor);

        tracing::debug!(text = %candidate.text, cursor, "Accepted completion");
        self.notify();

        Completion {
            text: candidate.text.into_owned(),
            document: self.document.clone(),
            cursor,
        }
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_state_changed(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_rejects_invalid_options() {
        let options = AutocompleteOptions {
            max_candidates: 0,
            ..Default::default()
        };
        let err = AutocompleteController::new(options, SurfaceMetrics::default()).unwrap_err();
        assert!(err.to_string().contains("max_candidates"));
    }

    #[test]
    fn test_typing_opens_popup() {
        let mut controller = AutocompleteController::default();
        let state = controller.on_document_changed("pri", 3);
        assert!(state.is_open());
        assert_eq!(state.candidates()[0].text, "print");
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_no_match_closes_popup() {
        let mut controller = AutocompleteController::default();
        controller.on_document_changed("pri", 3);
        assert!(!controller.on_document_changed("priq", 4).is_open());
    }

    #[test]
    fn test_empty_word_closes_popup() {
        let mut controller = AutocompleteController::default();
        controller.on_document_changed("pri", 3);
        assert!(!controller.on_document_changed("pri ", 4).is_open());
        assert!(!controller.on_document_changed("", 0).is_open());
    }

    #[test]
    fn test_min_prefix_length_respected() {
        let options = AutocompleteOptions {
            min_prefix_length: 2,
            ..Default::default()
        };
        let mut controller =
            AutocompleteController::new(options, SurfaceMetrics::default()).unwrap();
        assert!(!controller.on_document_changed("p", 1).is_open());
        assert!(controller.on_document_changed("pr", 2).is_open());
    }

    #[test]
    fn test_max_candidates_respected() {
        let options = AutocompleteOptions {
            max_candidates: 2,
            ..Default::default()
        };
        let mut controller =
            AutocompleteController::new(options, SurfaceMetrics::default()).unwrap();
        assert_eq!(controller.on_document_changed("s", 1).candidates().len(), 2);
    }

    #[test]
    fn test_identifiers_recomputed_on_change() {
        let mut controller = AutocompleteController::default();
        controller.on_document_changed("local speed = 1\nspe", 19);
        assert!(controller.identifiers().contains("speed"));
        assert_eq!(controller.candidates()[0].text, "speed");

        controller.on_document_changed("spe", 3);
        assert!(controller.identifiers().is_empty());
        assert!(!controller.state().is_open());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut controller = AutocompleteController::default();
        controller.on_document_changed("loc", 42);
        assert_eq!(controller.cursor(), 3);
        assert!(controller.state().is_open());
    }

    #[test]
    fn test_key_not_consumed_when_closed() {
        let mut controller = AutocompleteController::default();
        assert_eq!(
            controller.on_key(NavigationKey::Enter),
            KeyOutcome::NotConsumed
        );
    }

    #[test]
    fn test_enter_splices_selection() {
        let mut controller = AutocompleteController::default();
        controller.on_document_changed("x = to", 6);
        // tostring, tonumber
        assert_eq!(
            controller.on_key(NavigationKey::ArrowDown),
            KeyOutcome::Consumed(None)
        );
        let outcome = controller.on_key(NavigationKey::Enter);
        assert_eq!(
            outcome,
            KeyOutcome::Consumed(Some(Completion {
                text: "tonumber".to_string(),
                document: "x = tonumber".to_string(),
                cursor: 12,
            }))
        );
        assert_eq!(controller.document(), "x = tonumber");
        assert!(!controller.state().is_open());
    }

    #[test]
    fn test_escape_and_outside_click_dismiss() {
        let mut controller = AutocompleteController::default();
        controller.on_document_changed("pri", 3);
        assert_eq!(
            controller.on_key(NavigationKey::Escape),
            KeyOutcome::Consumed(None)
        );
        assert!(!controller.state().is_open());

        controller.on_document_changed("prin", 4);
        assert!(!controller.on_pointer_outside().is_open());
        assert_eq!(controller.document(), "prin");
    }

    #[test]
    fn test_pointer_select_row() {
        let mut controller = AutocompleteController::default();
        controller.on_document_changed("local total\nto", 14);
        let candidates: Vec<String> = controller
            .candidates()
            .iter()
            .map(|c| c.text.to_string())
            .collect();
        let index = candidates.iter().position(|t| t == "total").unwrap();

        let completion = controller.on_pointer_select(index).unwrap();
        assert_eq!(completion.document, "local total\ntotal");
        assert_eq!(completion.cursor, 17);
        assert!(controller.on_pointer_select(0).is_none());
    }

    #[test]
    fn test_anchor_follows_origin_and_cursor() {
        let metrics = SurfaceMetrics {
            char_width: 10.0,
            line_height: 20.0,
            padding: 0.0,
        };
        let mut controller =
            AutocompleteController::new(AutocompleteOptions::default(), metrics).unwrap();
        controller.set_surface_origin(Point::new(5.0, 5.0));
        controller.on_document_changed("pri", 3);
        assert_eq!(controller.state().anchor(), Some(Point::new(35.0, 25.0)));

        controller.on_cursor_moved(1);
        assert_eq!(controller.state().anchor(), Some(Point::new(15.0, 25.0)));
        assert_eq!(controller.word().text, "p");

        controller.set_surface_origin(Point::new(0.0, 0.0));
        assert_eq!(controller.state().anchor(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_caret_moving_to_another_word_dismisses() {
        let mut controller = AutocompleteController::default();
        controller.on_document_changed("foo pri", 7);
        assert!(controller.state().is_open());

        assert!(!controller.on_cursor_moved(3).is_open());
        assert_eq!(
            controller.on_key(NavigationKey::Enter),
            KeyOutcome::NotConsumed
        );
        assert_eq!(controller.document(), "foo pri");
    }

    #[test]
    fn test_caret_inside_word_keeps_list() {
        let mut controller = AutocompleteController::default();
        controller.on_document_changed("pri", 3);
        assert!(controller.on_cursor_moved(2).is_open());

        let KeyOutcome::Consumed(Some(done)) = controller.on_key(NavigationKey::Enter) else {
            panic!("expected a completion");
        };
        assert_eq!(done.document, "printi");
        assert_eq!(done.cursor, 5);
    }

    #[test]
    fn test_load_document_keeps_popup_closed() {
        let mut controller = AutocompleteController::default();
        controller.on_document_changed("pri", 3);
        controller.load_document("local answer = 42\nans");
        assert!(!controller.state().is_open());
        assert!(controller.identifiers().contains("answer"));
        assert_eq!(controller.cursor(), 0);
    }

    #[test]
    fn test_observer_sees_every_recomputation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut controller = AutocompleteController::default();
        controller.set_observer(move |state: &NavigationState| {
            sink.borrow_mut().push(state.is_open());
        });

        controller.on_document_changed("l", 1);
        controller.on_document_changed("lo", 2);
        controller.on_key(NavigationKey::Escape);
        controller.on_key(NavigationKey::Escape);

        assert_eq!(*seen.borrow(), vec![true, true, false]);
    }

    #[test]
    fn test_reconfigure_applies_to_next_edit() {
        let mut controller = AutocompleteController::default();
        assert!(controller.on_document_changed("s", 1).candidates().len() > 2);

        let options = AutocompleteOptions {
            max_candidates: 2,
            ..Default::default()
        };
        controller
            .reconfigure(options, SurfaceMetrics::default())
            .unwrap();
        assert!(!controller.state().is_open());
        assert_eq!(controller.on_document_changed("s", 1).candidates().len(), 2);

        let bad = AutocompleteOptions {
            min_prefix_length: 0,
            ..Default::default()
        };
        assert!(controller.reconfigure(bad, SurfaceMetrics::default()).is_err());
        assert_eq!(controller.options().max_candidates, 2);
    }
}
