//! Inline autocomplete for Lua documents
//!
//! The pipeline runs synchronously on every text change:
//!
//! 1. [`identifiers`] harvests the names declared with `local` / `function`
//! 2. [`matcher`] finds the word before the caret and matches it against the
//!    [`catalog`] and the harvested names
//! 3. [`navigation`] opens or closes the popup and tracks the selection
//! 4. [`geometry`] places the popup under the caret
//!
//! [`AutocompleteController`] ties the steps together behind the event API
//! used by the editor widget. Everything except the controller is a pure
//! function or plain data.

pub mod catalog;
pub mod controller;
pub mod geometry;
pub mod identifiers;
pub mod matcher;
pub mod navigation;

pub use catalog::{CandidateCategory, CatalogEntry, CATALOG};
pub use controller::{AutocompleteController, Completion, KeyOutcome, SuggestionObserver};
pub use geometry::{resolve_anchor, Point};
pub use identifiers::{extract_identifiers, IdentifierSet};
pub use matcher::{match_candidates, word_at_cursor, Candidate, CandidateMatcher, WordSpan};
pub use navigation::{NavigationKey, NavigationState, Transition};
