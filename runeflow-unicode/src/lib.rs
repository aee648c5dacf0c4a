//! Unicode text analysis
//!
//! Normalization, grapheme values, the UAX #29 segmenters, UAX #14 line
//! breaking, the UAX #9 bidirectional algorithm, line fitting and inline
//! markup. Everything here is pure computation over code points; fonts and
//! positioning live in the `runeflow` crate.

mod tables;

pub mod ucd;
pub mod iso;
pub mod language;
pub mod phrasing;
pub mod utf;
pub mod normalization;
pub mod long_grapheme;
pub mod grapheme;
pub mod gstring;
pub mod break_opportunity;
pub mod grapheme_break;
pub mod word_break;
pub mod sentence_break;
pub mod line_break;
pub mod line_fit;
pub mod bidi;
pub mod markup;

// Re-export commonly used functions and types
pub use bidi::{
    bidi,
    bidi_control_filter,
    bidi_direction,
    reorder,
    BidiChar,
    BidiContext,
    BidiDirectionMode,
    BidiReorder,
    Direction,
};
pub use break_opportunity::{BreakOpportunity, BreakVector};
pub use grapheme::Grapheme;
pub use grapheme_break::{grapheme_break, graphemes};
pub use gstring::{gstring_to_string, to_gstring, GString};
pub use iso::{Iso15924, Iso3166, Iso639};
pub use language::LanguageTag;
pub use line_break::line_break;
pub use line_fit::{fold_lines, maximum_width, minimum_width};
pub use markup::{apply_markup, fixup_script};
pub use normalization::{normalize, normalize_str, NormalizeConfig};
pub use phrasing::Phrasing;
pub use sentence_break::sentence_break;
pub use utf::{decode_utf16, decode_utf32, decode_utf8};
pub use word_break::{word_break, wrap_lines};
