//! Caret geometry for anchoring the suggestion popup
//!
//! The text surface is treated as a fixed-width monospace grid. The anchor is
//! derived from the caret's line and column only, without measuring glyphs,
//! so proportional fonts, tab stops, double-width characters and soft-wrapped
//! lines place the popup approximately rather than exactly. This is an
//! accepted approximation.

use crate::config::options::SurfaceMetrics;

/// A screen coordinate in points
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for egui::Pos2 {
    fn from(point: Point) -> Self {
        egui::pos2(point.x, point.y)
    }
}

impl From<egui::Pos2> for Point {
    fn from(pos: egui::Pos2) -> Self {
        Self::new(pos.x, pos.y)
    }
}

/// Zero-based line and column of a caret, in chars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

/// Line and column of the caret at `cursor` (clamped to the document)
pub fn line_column(document: &str, cursor: usize) -> LineColumn {
    let mut position = LineColumn::default();
    for c in document.chars().take(cursor) {
        if c == '\n' {
            position.line += 1;
            position.column = 0;
        } else {
            position.column += 1;
        }
    }
    position
}

/// Screen position for the popup below the caret at `cursor`
///
/// `x = origin.x + column * char_width + padding` and
/// `y = origin.y + (line + 1) * line_height + padding`, placing the popup
/// just under the caret's line.
pub fn resolve_anchor(
    document: &str,
    cursor: usize,
    origin: Point,
    metrics: &SurfaceMetrics,
) -> Point {
    let LineColumn { line, column } = line_column(document, cursor);
    Point::new(
        origin.x + column as f32 * metrics.char_width + metrics.padding,
        origin.y + (line + 1) as f32 * metrics.line_height + metrics.padding,
    )
}
