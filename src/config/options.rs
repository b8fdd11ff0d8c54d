//! Autocomplete tuning options and text surface metrics
//!
//! These values are fixed in the default editor but are exposed as named
//! options so that a host with a different font or popup size can reuse the
//! core. Options are validated once when an
//! [`AutocompleteController`](crate::autocomplete::AutocompleteController) is
//! created; a malformed value is rejected there and never at call time.

use serde::{Deserialize, Serialize};

use crate::error::{LuaPadError, Result};

/// Default upper bound on the number of suggestions shown at once
pub const DEFAULT_MAX_CANDIDATES: usize = 8;

/// Default minimum partial word length before the popup opens
pub const DEFAULT_MIN_PREFIX_LENGTH: usize = 1;

/// Default monospace advance width in points (13pt monospace)
pub const DEFAULT_CHAR_WIDTH: f32 = 7.8;

/// Default line height in points
pub const DEFAULT_LINE_HEIGHT: f32 = 20.0;

/// Default gap between the caret cell and the popup
pub const DEFAULT_ANCHOR_PADDING: f32 = 4.0;

/// Matching options for the candidate matcher and popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteOptions {
    /// Maximum number of candidates in a suggestion list
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Shortest partial word that opens the popup
    #[serde(default = "default_min_prefix_length")]
    pub min_prefix_length: usize,
}

fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}

fn default_min_prefix_length() -> usize {
    DEFAULT_MIN_PREFIX_LENGTH
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            min_prefix_length: DEFAULT_MIN_PREFIX_LENGTH,
        }
    }
}

impl AutocompleteOptions {
    /// Check the options, failing on values that can never produce a popup
    pub fn validate(&self) -> Result<()> {
        if self.max_candidates == 0 {
            return Err(LuaPadError::Config(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        if self.min_prefix_length == 0 {
            return Err(LuaPadError::Config(
                "min_prefix_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Font metrics of the plain-text surface, in screen points
///
/// The surface is treated as a fixed-width grid: every character advances by
/// `char_width` and every line by `line_height`. Proportional glyphs, tabs and
/// wide characters are not measured individually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    pub char_width: f32,
    pub line_height: f32,
    /// Offset added on both axes so the popup does not cover the caret
    pub padding: f32,
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self {
            char_width: DEFAULT_CHAR_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
            padding: DEFAULT_ANCHOR_PADDING,
        }
    }
}

impl SurfaceMetrics {
    /// Metrics for a monospace font of the given size
    ///
    /// Uses the usual 0.6 advance ratio and 1.5 line spacing of the bundled
    /// monospace font.
    pub fn for_font_size(font_size: f32) -> Self {
        Self {
            char_width: font_size * 0.6,
            line_height: font_size * 1.5,
            padding: DEFAULT_ANCHOR_PADDING,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.char_width.is_finite() && self.char_width > 0.0) {
            return Err(LuaPadError::Config(format!(
                "char_width must be a positive number, got {}",
                self.char_width
            )));
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(LuaPadError::Config(format!(
                "line_height must be a positive number, got {}",
                self.line_height
            )));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(LuaPadError::Config(format!(
                "padding must be zero or positive, got {}",
                self.padding
            )));
        }
        Ok(())
    }
}
