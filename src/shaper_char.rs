//! Per-grapheme shaping state

use crate::font_service::{FontMetrics, GlyphId};
use crate::geometry::{Point, Rect};
use runeflow_unicode::ucd::GeneralCategory;
use runeflow_unicode::{Direction, Grapheme};

/// A grapheme with its glyphs and position.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaperChar {
    /// The grapheme as given, with its script resolved.
    pub grapheme: Grapheme,
    /// The grapheme as drawn; brackets in right-to-left text are mirrored.
    pub display: Grapheme,
    pub general_category: GeneralCategory,
    /// Advance from shaping in logical order, used to fold lines.
    pub width: f32,
    /// Metrics of the font the grapheme was shaped with.
    pub metrics: FontMetrics,

    /// Advance from shaping in visual order.
    pub advance: f32,
    pub glyphs: Vec<GlyphId>,
    /// Glyph bounds relative to `position`.
    pub glyph_rectangles: Vec<Rect>,
    /// Pen position on the baseline.
    pub position: Point,
    /// The area the grapheme occupies, for hit-testing and selection.
    pub rectangle: Rect,

    pub direction: Direction,
    pub line_nr: usize,
    /// Visual position within the line.
    pub column_nr: usize,
    /// Whitespace after the last visible grapheme of a line.
    pub is_trailing_white_space: bool,
}

impl ShaperChar {
    pub fn new(grapheme: Grapheme) -> Self {
        Self {
            grapheme,
            display: grapheme,
            general_category: grapheme.general_category(),
            width: 0.0,
            metrics: FontMetrics::default(),
            advance: 0.0,
            glyphs: Vec::new(),
            glyph_rectangles: Vec::new(),
            position: Point::default(),
            rectangle: Rect::default(),
            direction: Direction::LeftToRight,
            line_nr: 0,
            column_nr: 0,
            is_trailing_white_space: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.general_category.is_visible()
    }

    /// Width for line folding, negative for whitespace.
    pub fn line_break_width(&self) -> f32 {
        if self.is_visible() {
            self.width
        } else {
            -self.width
        }
    }
}
