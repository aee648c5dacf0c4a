//! Runeflow
//!
//! Text shaping on top of `runeflow-unicode`: graphemes are measured with a
//! font service, folded into lines, reordered with the bidirectional
//! algorithm and positioned, after which the shaper answers cursor and
//! selection queries.

pub mod config;
pub mod cursor;
pub mod font_service;
pub mod geometry;
pub mod shaper;
pub mod shaper_char;
pub mod shaper_line;

pub use runeflow_unicode as unicode;

pub use config::{Alignment, HorizontalAlignment, ShaperConfig, VerticalAlignment};
pub use cursor::TextCursor;
pub use font_service::{FontMetrics, FontService, FontdueService, GlyphId, ShapedRun};
pub use geometry::{Extent, Point, Rect};
pub use shaper::TextShaper;
pub use shaper_char::ShaperChar;
pub use shaper_line::ShaperLine;

pub use runeflow_unicode::{
    apply_markup, to_gstring, BidiContext, BidiDirectionMode, Direction, GString, Grapheme, NormalizeConfig,
};
