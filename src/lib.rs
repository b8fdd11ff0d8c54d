//! # LuaPad-RS: Lua scratchpad with inline autocomplete
//!
//! A tabbed Lua editor whose main feature is a suggestion popup that follows
//! the caret while typing.
//!
//! ## Architecture
//!
//! - **Autocomplete** ([`autocomplete`]): pure, synchronous core. Extracts
//!   declared names, matches the word under the caret against a catalog of
//!   Lua keywords and builtins, tracks the popup selection and places the
//!   popup on screen.
//! - **Session** ([`session`]): open tabs, each with its own autocomplete
//!   state, plus the console log.
//! - **Frontend** ([`frontend`]): eframe/egui UI with an egui_dock workspace.
//!
//! ## Configuration
//!
//! Editor preferences are stored in the platform-appropriate data directory
//! under `dev.luapad.luapad-rs` (see [`config`]).
//!
//! ## Example
//!
//! ```
//! use luapad_rs::autocomplete::{AutocompleteController, NavigationKey, KeyOutcome};
//!
//! let mut controller = AutocompleteController::default();
//! let state = controller.on_document_changed("local count = 1\nco", 18);
//! assert_eq!(state.candidates()[0].text, "count");
//!
//! if let KeyOutcome::Consumed(Some(done)) = controller.on_key(NavigationKey::Enter) {
//!     assert_eq!(done.document, "local count = 1\ncount");
//! }
//! ```

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod frontend;
pub mod session;

pub use error::{LuaPadError, Result};
