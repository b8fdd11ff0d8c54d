//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use luapad_rs::autocomplete::{AutocompleteController, NavigationState};

/// Type `text` one character at a time at the end of `document`,
/// notifying the controller after every keystroke like the editor does.
pub fn type_text(
    controller: &mut AutocompleteController,
    document: &mut String,
    text: &str,
) -> NavigationState {
    for c in text.chars() {
        document.push(c);
        let cursor = document.chars().count();
        controller.on_document_changed(document.clone(), cursor);
    }
    controller.state().clone()
}

/// Candidate texts of the current suggestion list
pub fn candidate_texts(controller: &AutocompleteController) -> Vec<String> {
    controller
        .candidates()
        .iter()
        .map(|c| c.text.to_string())
        .collect()
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
