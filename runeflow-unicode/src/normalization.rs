//! Unicode normalization (UAX #15)
//!
//! NFD, NFC, NFKD and NFKC with configurable newline handling and control
//! character dropping. Every form runs the same pipeline: a recursive
//! decomposition, canonical reordering, an optional canonical composition
//! and finally the removal of the combining-class tags.

use crate::ucd::{self, DecompositionTag};
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// A set of newline-like characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewlineSet(u8);

impl NewlineSet {
    pub const NONE: Self = Self(0);
    /// U+000A LINE FEED
    pub const LF: Self = Self(1 << 0);
    /// U+000B LINE TABULATION
    pub const VT: Self = Self(1 << 1);
    /// U+000C FORM FEED
    pub const FF: Self = Self(1 << 2);
    /// U+000D CARRIAGE RETURN
    pub const CR: Self = Self(1 << 3);
    /// U+0085 NEXT LINE
    pub const NEL: Self = Self(1 << 4);
    /// U+2028 LINE SEPARATOR
    pub const LS: Self = Self(1 << 5);
    /// U+2029 PARAGRAPH SEPARATOR
    pub const PS: Self = Self(1 << 6);
    pub const ALL: Self = Self(0x7f);

    pub fn contains(self, c: char) -> bool {
        let bit = match c {
            '\n' => Self::LF,
            '\u{0B}' => Self::VT,
            '\u{0C}' => Self::FF,
            '\r' => Self::CR,
            '\u{85}' => Self::NEL,
            '\u{2028}' => Self::LS,
            '\u{2029}' => Self::PS,
            _ => return false,
        };
        self.0 & bit.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for NewlineSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for NewlineSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Decomposition mask expanding only canonical mappings.
pub const DECOMPOSE_CANONICAL: u32 = DecompositionTag::Canonical.bit();

/// Decomposition mask expanding canonical and every compatibility mapping.
pub const DECOMPOSE_COMPATIBILITY: u32 = DECOMPOSE_CANONICAL
    | DecompositionTag::Font.bit()
    | DecompositionTag::NoBreak.bit()
    | DecompositionTag::Initial.bit()
    | DecompositionTag::Medial.bit()
    | DecompositionTag::Final.bit()
    | DecompositionTag::Isolated.bit()
    | DecompositionTag::Circle.bit()
    | DecompositionTag::Super.bit()
    | DecompositionTag::Sub.bit()
    | DecompositionTag::Vertical.bit()
    | DecompositionTag::Wide.bit()
    | DecompositionTag::Narrow.bit()
    | DecompositionTag::Small.bit()
    | DecompositionTag::Square.bit()
    | DecompositionTag::Fraction.bit()
    | DecompositionTag::Compat.bit();

/// Configuration of a normalization pass.
///
/// The checks run in a fixed order per code point: line separators, then
/// paragraph separators, then the drop set, then C0 and C1 controls, and
/// only then decomposition. The first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Bits from [`DecompositionTag::bit`] selecting the mappings to expand.
    pub decomposition_mask: u32,
    /// Run canonical composition after reordering.
    pub compose: bool,
    /// Drop U+0000..=U+001F and U+007F.
    pub drop_c0: bool,
    /// Drop U+0080..=U+009F.
    pub drop_c1: bool,
    pub line_separators: NewlineSet,
    pub paragraph_separators: NewlineSet,
    pub drop: NewlineSet,
    /// Emitted for a line separator; a CR is followed by LF.
    pub line_separator_character: char,
    /// Emitted for a paragraph separator; a CR is followed by LF.
    pub paragraph_separator_character: char,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self::nfc()
    }
}

impl NormalizeConfig {
    pub fn nfd() -> Self {
        Self {
            decomposition_mask: DECOMPOSE_CANONICAL,
            compose: false,
            drop_c0: false,
            drop_c1: false,
            line_separators: NewlineSet::NONE,
            paragraph_separators: NewlineSet::NONE,
            drop: NewlineSet::NONE,
            line_separator_character: '\u{2028}',
            paragraph_separator_character: '\u{2029}',
        }
    }

    pub fn nfc() -> Self {
        Self { compose: true, ..Self::nfd() }
    }

    pub fn nfkd() -> Self {
        Self { decomposition_mask: DECOMPOSE_COMPATIBILITY, ..Self::nfd() }
    }

    pub fn nfkc() -> Self {
        Self { compose: true, ..Self::nfkd() }
    }

    /// NFC for editable text: control characters are dropped, CR is removed
    /// and every other newline becomes a paragraph separator.
    pub fn nfc_ps_noctr() -> Self {
        Self {
            drop_c0: true,
            drop_c1: true,
            drop: NewlineSet::CR,
            paragraph_separators: NewlineSet::LF
                | NewlineSet::VT
                | NewlineSet::FF
                | NewlineSet::NEL
                | NewlineSet::LS
                | NewlineSet::PS,
            ..Self::nfc()
        }
    }

    /// Like [`NormalizeConfig::nfc_ps_noctr`] but paragraphs end in CR LF.
    pub fn nfc_crlf_noctr() -> Self {
        Self { paragraph_separator_character: '\r', ..Self::nfc_ps_noctr() }
    }
}

const CCC_SHIFT: u32 = 21;
const CODE_POINT_MASK: u32 = (1 << CCC_SHIFT) - 1;
/// Marks a code point consumed by composition.
const SNUFFED: u32 = u32::MAX;

fn tagged(c: char) -> u32 {
    u32::from(c) | (u32::from(ucd::canonical_combining_class(c)) << CCC_SHIFT)
}

fn tag_ccc(x: u32) -> u8 {
    (x >> CCC_SHIFT) as u8
}

fn untagged(x: u32) -> char {
    char::from_u32(x & CODE_POINT_MASK).unwrap_or(ucd::REPLACEMENT_CHARACTER)
}

fn emit_separator(c: char, out: &mut Vec<u32>) {
    out.push(tagged(c));
    if c == '\r' {
        out.push(tagged('\n'));
    }
}

fn decompose_code_point(c: char, config: &NormalizeConfig, out: &mut Vec<u32>) {
    let cp = u32::from(c);

    if config.line_separators.contains(c) {
        emit_separator(config.line_separator_character, out);
    } else if config.paragraph_separators.contains(c) {
        emit_separator(config.paragraph_separator_character, out);
    } else if config.drop.contains(c) {
    } else if config.drop_c0 && (cp <= 0x1f || cp == 0x7f) {
    } else if config.drop_c1 && (0x80..=0x9f).contains(&cp) {
    } else {
        let decomposition = ucd::decomposition(c);
        if decomposition.tag.bit() & config.decomposition_mask != 0 {
            for &component in decomposition.as_slice() {
                decompose_code_point(component, config, out);
            }
        } else {
            out.push(tagged(c));
        }
    }
}

/// Canonical ordering: stable sort of every run of non-starters by class.
fn reorder(text: &mut [u32]) {
    let mut run_start = None;
    for i in 0..=text.len() {
        let is_mark = i < text.len() && tag_ccc(text[i]) != 0;
        match (run_start, is_mark) {
            (None, true) => run_start = Some(i),
            (Some(start), false) => {
                if i - start > 1 {
                    text[start..i].sort_by_key(|&x| tag_ccc(x));
                }
                run_start = None;
            }
            _ => {}
        }
    }
}

/// Canonical composition over tagged, reordered code points.
fn compose(text: &mut [u32]) {
    let mut i = 0;
    while i < text.len() {
        if tag_ccc(text[i]) != 0 {
            i += 1;
            continue;
        }

        let mut starter = untagged(text[i]);
        let mut prev_ccc: Option<u8> = None;
        let mut j = i + 1;
        while j < text.len() {
            if text[j] == SNUFFED {
                j += 1;
                continue;
            }

            let ccc = tag_ccc(text[j]);
            // Blocked when an intervening, uncomposed character has a class of zero or >= ours.
            let blocked = matches!(prev_ccc, Some(prev) if prev == 0 || prev >= ccc);
            let composite = if blocked { None } else { ucd::primary_composition(starter, untagged(text[j])) };

            if let Some(composite) = composite {
                starter = composite;
                text[i] = u32::from(composite);
                text[j] = SNUFFED;
            } else if ccc == 0 {
                break;
            } else {
                prev_ccc = Some(ccc);
            }
            j += 1;
        }
        i = j;
    }
}

/// Normalize a sequence of code points.
pub fn normalize(text: &[char], config: &NormalizeConfig) -> Vec<char> {
    let mut tagged_text = Vec::with_capacity(text.len() + text.len() / 4);
    for &c in text {
        decompose_code_point(c, config, &mut tagged_text);
    }

    reorder(&mut tagged_text);
    if config.compose {
        compose(&mut tagged_text);
    }

    tagged_text
        .into_iter()
        .filter(|&x| x != SNUFFED)
        .map(untagged)
        .collect()
}

/// Normalize a string.
pub fn normalize_str(text: &str, config: &NormalizeConfig) -> String {
    let chars: Vec<char> = text.chars().collect();
    normalize(&chars, config).into_iter().collect()
}

pub fn nfd(text: &str) -> String {
    normalize_str(text, &NormalizeConfig::nfd())
}

pub fn nfc(text: &str) -> String {
    normalize_str(text, &NormalizeConfig::nfc())
}

pub fn nfkd(text: &str) -> String {
    normalize_str(text, &NormalizeConfig::nfkd())
}

pub fn nfkc(text: &str) -> String {
    normalize_str(text, &NormalizeConfig::nfkc())
}

/// Maximum number of code points in a stream-safe grapheme.
pub const MAX_GRAPHEME_LENGTH: usize = 30;

/// Check that a sequence is a valid multi-code-point grapheme payload.
///
/// The sequence must be NFC, stream-safe, begin with a starter, and the
/// combining classes of the following marks must not decrease.
pub fn is_nfc_grapheme(code_points: &[char]) -> bool {
    let Some((&starter, marks)) = code_points.split_first() else {
        return false;
    };
    if code_points.len() > MAX_GRAPHEME_LENGTH || ucd::canonical_combining_class(starter) != 0 {
        return false;
    }

    let mut prev_ccc = 0;
    for &mark in marks {
        let ccc = ucd::canonical_combining_class(mark);
        if ccc == 0 || ccc < prev_ccc {
            return false;
        }
        prev_ccc = ccc;
    }

    normalize(code_points, &NormalizeConfig::nfc()) == code_points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_acute() {
        assert_eq!(nfc("a\u{0301}"), "\u{00E1}");
        assert_eq!(nfd("\u{00E1}"), "a\u{0301}");
    }

    #[test]
    fn canonical_ordering() {
        // Dot below (220) sorts before acute (230).
        assert_eq!(nfd("a\u{0301}\u{0323}"), "a\u{0323}\u{0301}");
        assert_eq!(nfc("a\u{0301}\u{0323}"), "\u{1EA1}\u{0301}");
        assert_eq!(nfc("\u{1E0B}\u{0323}"), "\u{1E0D}\u{0307}");
    }

    #[test]
    fn blocked_composition() {
        // There is no precomposed a-acute-acute.
        assert_eq!(nfc("a\u{0301}\u{0301}"), "\u{00E1}\u{0301}");
        // The acute attaches to b, which has no precomposed form.
        assert_eq!(nfc("a\u{0062}\u{0301}"), "ab\u{0301}");
    }

    #[test]
    fn hangul() {
        assert_eq!(nfc("\u{1100}\u{1161}\u{11A8}"), "\u{AC01}");
        assert_eq!(nfd("\u{AC01}"), "\u{1100}\u{1161}\u{11A8}");
    }

    #[test]
    fn singleton_and_exclusion() {
        // Ohm sign decomposes to omega and stays decomposed.
        assert_eq!(nfc("\u{2126}"), "\u{03A9}");
        assert_eq!(nfc("\u{0958}"), "\u{0915}\u{093C}");
    }

    #[test]
    fn compatibility_forms() {
        assert_eq!(nfkd("\u{FB01}"), "fi");
        assert_eq!(nfkc("\u{00BD}"), "1\u{2044}2");
        assert_eq!(nfkc("\u{2460}"), "1");
        assert_eq!(nfkd("\u{1E9B}\u{0323}"), "s\u{0323}\u{0307}");
        assert_eq!(nfkc("\u{1E9B}\u{0323}"), "\u{1E69}");
        assert_eq!(nfc("\u{FB01}"), "\u{FB01}");
    }

    #[test]
    fn newline_handling() {
        let config = NormalizeConfig::nfc_ps_noctr();
        assert_eq!(normalize_str("a\r\nb\x07c", &config), "a\u{2029}bc");
        assert_eq!(normalize_str("a\u{85}b", &config), "a\u{2029}b");

        let config = NormalizeConfig::nfc_crlf_noctr();
        assert_eq!(normalize_str("a\nb", &config), "a\r\nb");

        let config = NormalizeConfig {
            line_separators: NewlineSet::LF,
            paragraph_separators: NewlineSet::LF | NewlineSet::PS,
            ..NormalizeConfig::nfc()
        };
        // Line separators are checked first.
        assert_eq!(normalize_str("a\nb\u{2029}", &config), "a\u{2028}b\u{2029}");
    }

    #[test]
    fn control_dropping() {
        let config = NormalizeConfig { drop_c0: true, drop_c1: true, ..NormalizeConfig::nfd() };
        assert_eq!(normalize_str("a\u{0}b\u{7f}c\u{9f}d\u{a0}", &config), "abcd\u{a0}");
    }

    #[test]
    fn idempotence() {
        let samples = [
            "Ǆemal Bijedić",
            "\u{1E9B}\u{0323} \u{FB01}ne \u{2126}",
            "한국어 \u{1100}\u{1161}",
            "e\u{0301}\u{0302}\u{0323}",
            "\u{0958} \u{00C5} \u{212B}",
        ];
        for config in [
            NormalizeConfig::nfd(),
            NormalizeConfig::nfc(),
            NormalizeConfig::nfkd(),
            NormalizeConfig::nfkc(),
        ] {
            for sample in samples {
                let once = normalize_str(sample, &config);
                assert_eq!(normalize_str(&once, &config), once, "{:?} {:?}", config, sample);
            }
        }
    }

    #[test]
    fn nfc_grapheme_check() {
        assert!(is_nfc_grapheme(&['\u{00E1}']));
        assert!(!is_nfc_grapheme(&['\u{00E1}', '\u{0323}']));
        assert!(is_nfc_grapheme(&['\u{1EA1}', '\u{0301}']));
        assert!(!is_nfc_grapheme(&['a', '\u{0301}']));
        assert!(!is_nfc_grapheme(&['\u{0301}']));
        assert!(!is_nfc_grapheme(&[]));
        let mut long = vec!['x'];
        long.extend(std::iter::repeat('\u{0308}').take(MAX_GRAPHEME_LENGTH));
        assert!(!is_nfc_grapheme(&long));
    }
}
