//! Candidate matching and word-under-cursor handling
//!
//! Matching is a case-insensitive (ASCII only) "starts with" comparison.
//! Catalog entries are listed first in catalog order, followed by user
//! identifiers in set order, and the merged list is cut to the configured
//! maximum. There is no relevance ranking beyond that.
//!
//! All offsets here are char offsets, the unit the text surface reports for
//! its caret.

use std::borrow::Cow;

use super::catalog::{CandidateCategory, CatalogEntry, CATALOG};
use super::identifiers::IdentifierSet;
use crate::config::options::DEFAULT_MAX_CANDIDATES;

/// Description attached to every identifier-derived candidate
pub const USER_VARIABLE_DESCRIPTION: &str = "user defined variable";

/// One entry of the suggestion popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: Cow<'static, str>,
    pub category: CandidateCategory,
    pub description: Option<Cow<'static, str>>,
}

impl Candidate {
    /// Candidate for a name declared in the document
    pub fn user_variable(name: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(name.into()),
            category: CandidateCategory::VariableLike,
            description: Some(Cow::Borrowed(USER_VARIABLE_DESCRIPTION)),
        }
    }
}

impl From<&CatalogEntry> for Candidate {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            text: Cow::Borrowed(entry.text),
            category: entry.category,
            description: entry.description.map(Cow::Borrowed),
        }
    }
}

/// Matches partial words against the catalog and the document identifiers
#[derive(Debug, Clone, Copy)]
pub struct CandidateMatcher {
    catalog: &'static [CatalogEntry],
    max_candidates: usize,
}

impl Default for CandidateMatcher {
    fn default() -> Self {
        Self::new(CATALOG, DEFAULT_MAX_CANDIDATES)
    }
}

impl CandidateMatcher {
    pub fn new(catalog: &'static [CatalogEntry], max_candidates: usize) -> Self {
        Self {
            catalog,
            max_candidates,
        }
    }

    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Build the suggestion list for `partial`
    ///
    /// An empty partial word always yields an empty list.
    pub fn matches(&self, partial: &str, identifiers: &IdentifierSet) -> Vec<Candidate> {
        if partial.is_empty() {
            return Vec::new();
        }

        let from_catalog = self
            .catalog
            .iter()
            .filter(|entry| starts_with_ignore_ascii_case(entry.text, partial))
            .map(Candidate::from);

        let from_identifiers = identifiers
            .iter()
            .filter(|name| starts_with_ignore_ascii_case(name, partial))
            .map(|name| Candidate::user_variable(name.as_str()));

        from_catalog
            .chain(from_identifiers)
            .take(self.max_candidates)
            .collect()
    }
}

/// Match `partial` with the default catalog and limit
pub fn match_candidates(partial: &str, identifiers: &IdentifierSet) -> Vec<Candidate> {
    CandidateMatcher::default().matches(partial, identifiers)
}

/// ASCII case-insensitive prefix test, independent of locale
pub fn starts_with_ignore_ascii_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// The partial word immediately before the caret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSpan {
    /// Char offset of the first character of the word
    pub start: usize,
    pub text: String,
}

impl WordSpan {
    /// Length of the word in chars
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Extract the word being typed at the cursor position
///
/// `cursor` is clamped to the document length.
pub fn word_at_cursor(text: &str, cursor: usize) -> WordSpan {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let mut start = cursor;

    // Walk backwards to find start of word
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }

    WordSpan {
        start,
        text: chars[start..cursor].iter().collect(),
    }
}

/// Byte index of the char at `char_offset`, or the text length past the end
pub fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Replace the partial word `span` with `completion`
///
/// Returns the new document and the caret offset just past the inserted text.
pub fn apply_completion(document: &str, span: &WordSpan, completion: &str) -> (String, usize) {
    let start = byte_index(document, span.start);
    let end = byte_index(document, span.start + span.len());

    let mut replaced = String::with_capacity(document.len() + completion.len());
    replaced.push_str(&document[..start]);
    replaced.push_str(completion);
    replaced.push_str(&document[end..]);

    (replaced, span.start + completion.chars().count())
}
