//! Harvesting of locally declared names
//!
//! Two declaration forms are recognised: `local <name>` and
//! `function <name>`. Every match anywhere in the document counts, with no
//! notion of scope, shadowing or reachability, so a name declared inside a
//! block stays visible to the matcher for the whole document.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use super::catalog;

static LOCAL_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\blocal\s+([A-Za-z_][A-Za-z0-9_]*)").expect("Valid local declaration regex")
});

static FUNCTION_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bfunction\s+([A-Za-z_][A-Za-z0-9_]*)")
        .expect("Valid function declaration regex")
});

/// Set of declared names, iterated in first-seen order
pub type IdentifierSet = IndexSet<String>;

/// Extract the names introduced by `local` and `function` declarations
///
/// Names from `local` declarations come first, then names from `function`
/// declarations, each group in document order. Reserved words are skipped so
/// that `local function f` contributes `f` and not `function`.
pub fn extract_identifiers(document: &str) -> IdentifierSet {
    let mut identifiers = IdentifierSet::new();

    for pattern in [&*LOCAL_DECLARATION, &*FUNCTION_DECLARATION] {
        for captures in pattern.captures_iter(document) {
            let Some(name) = captures.get(1) else {
                continue;
            };
            let name = name.as_str();
            if catalog::is_reserved(name) || identifiers.contains(name) {
                continue;
            }
            identifiers.insert(name.to_string());
        }
    }

    identifiers
}
