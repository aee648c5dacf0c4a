//! Grapheme value type
//!
//! A grapheme is a single 64-bit value holding either one code point or an
//! index into the long-grapheme table, plus the language, script, region and
//! phrasing attributes of the cluster.

use crate::iso::{Iso15924, Iso3166, Iso639};
use crate::language::LanguageTag;
use crate::long_grapheme::LongGraphemeTable;
use crate::normalization::{self, NormalizeConfig, MAX_GRAPHEME_LENGTH};
use crate::phrasing::Phrasing;
use crate::ucd::{self, GeneralCategory, REPLACEMENT_CHARACTER};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

const INDEX_SHIFT: u32 = 0;
const INDEX_BITS: u32 = 21;
const LANGUAGE_SHIFT: u32 = INDEX_SHIFT + INDEX_BITS;
const LANGUAGE_BITS: u32 = 15;
const SCRIPT_SHIFT: u32 = LANGUAGE_SHIFT + LANGUAGE_BITS;
const SCRIPT_BITS: u32 = 10;
const REGION_SHIFT: u32 = SCRIPT_SHIFT + SCRIPT_BITS;
const REGION_BITS: u32 = 10;
const PHRASING_SHIFT: u32 = REGION_SHIFT + REGION_BITS;
const PHRASING_BITS: u32 = 6;

const fn mask(bits: u32) -> u64 {
    (1 << bits) - 1
}

/// First index referring to the long-grapheme table.
const LONG_GRAPHEME_BASE: u32 = 0x11_0000;

static TOO_MANY_LOGGED: AtomicBool = AtomicBool::new(false);

/// A grapheme cluster with its text attributes.
///
/// Equality and hashing only look at the cluster, never at the attributes.
#[derive(Clone, Copy)]
pub struct Grapheme(u64);

impl Grapheme {
    /// A single-code-point grapheme; the script attribute comes from the UCD.
    ///
    /// The code point must be a starter (combining class 0).
    pub fn from_char(c: char) -> Self {
        debug_assert_eq!(ucd::canonical_combining_class(c), 0, "{:?} is not a starter", c);
        Self::from_code_point(c)
    }

    /// A single-code-point cluster, which may be a lone combining mark.
    fn from_code_point(c: char) -> Self {
        let mut r = Self(u64::from(u32::from(c)));
        r.set_bits(SCRIPT_SHIFT, SCRIPT_BITS, u64::from(ucd::script(c).number()));
        r
    }

    /// Build from a sequence that is already NFC.
    ///
    /// A one code point sequence is stored inline, longer ones are interned.
    /// When the table is full, or the sequence is empty or longer than 30 code
    /// points, the grapheme becomes U+FFFD.
    pub fn from_composed(code_points: &[char]) -> Self {
        match code_points {
            // A mark at the start of text is a cluster of its own.
            [c] => Self::from_code_point(*c),
            [] => Self::from_char(REPLACEMENT_CHARACTER),
            _ if code_points.len() > MAX_GRAPHEME_LENGTH => Self::from_char(REPLACEMENT_CHARACTER),
            [starter, ..] => match LongGraphemeTable::global().add(code_points) {
                Some(start) => {
                    let mut r = Self(u64::from(LONG_GRAPHEME_BASE + start));
                    r.set_bits(SCRIPT_SHIFT, SCRIPT_BITS, u64::from(ucd::script(*starter).number()));
                    r
                }
                None => {
                    if !TOO_MANY_LOGGED.swap(true, AtomicOrdering::Relaxed) {
                        log::error!("grapheme::error::too-many");
                    }
                    Self::from_char(REPLACEMENT_CHARACTER)
                }
            },
        }
    }

    /// Normalize to NFC, then build from the composed sequence.
    pub fn new(code_points: &[char]) -> Self {
        Self::from_composed(&normalization::normalize(code_points, &NormalizeConfig::nfc()))
    }

    fn bits(&self, shift: u32, bits: u32) -> u64 {
        (self.0 >> shift) & mask(bits)
    }

    fn set_bits(&mut self, shift: u32, bits: u32, value: u64) {
        self.0 = (self.0 & !(mask(bits) << shift)) | ((value & mask(bits)) << shift);
    }

    /// The 21-bit index: a code point, or `0x110000 + k` for interned clusters.
    pub fn index(&self) -> u32 {
        self.bits(INDEX_SHIFT, INDEX_BITS) as u32
    }

    fn long_index(&self) -> Option<u32> {
        self.index().checked_sub(LONG_GRAPHEME_BASE)
    }

    /// Number of code points, 1 to 30.
    pub fn size(&self) -> usize {
        match self.long_index() {
            Some(start) => LongGraphemeTable::global().size(start),
            None => 1,
        }
    }

    pub fn starter(&self) -> char {
        match self.long_index() {
            Some(start) => LongGraphemeTable::global().starter(start),
            None => char::from_u32(self.index()).unwrap_or(REPLACEMENT_CHARACTER),
        }
    }

    /// Code point `i` of the NFC cluster.
    pub fn get(&self, i: usize) -> Option<char> {
        if i >= self.size() {
            return None;
        }
        match self.long_index() {
            Some(start) => Some(LongGraphemeTable::global().get(start, i)),
            None => Some(self.starter()),
        }
    }

    pub fn code_points(&self) -> CodePoints {
        CodePoints { grapheme: *self, next: 0, len: self.size() }
    }

    /// The cluster in NFC.
    pub fn composed(&self) -> Vec<char> {
        self.code_points().collect()
    }

    /// The cluster in NFD.
    pub fn decomposed(&self) -> Vec<char> {
        normalization::normalize(&self.composed(), &NormalizeConfig::nfd())
    }

    pub fn is_ascii(&self) -> bool {
        self.index() < 0x80
    }

    pub fn general_category(&self) -> GeneralCategory {
        ucd::general_category(self.starter())
    }

    pub fn language(&self) -> Iso639 {
        Iso639::from_bits(self.bits(LANGUAGE_SHIFT, LANGUAGE_BITS) as u16)
    }

    pub fn set_language(&mut self, language: Iso639) {
        self.set_bits(LANGUAGE_SHIFT, LANGUAGE_BITS, u64::from(language.to_bits()));
    }

    pub fn script(&self) -> Iso15924 {
        Iso15924::from_number(self.bits(SCRIPT_SHIFT, SCRIPT_BITS) as u16).unwrap_or_default()
    }

    /// Set the script, unless the starter already has a specific script.
    ///
    /// Only a starter whose UCD script is Common or Inherited takes the
    /// supplied script.
    pub fn set_script(&mut self, script: Iso15924) {
        let starter_script = ucd::script(self.starter());
        let script = if starter_script.is_common_or_inherited() { script } else { starter_script };
        self.set_bits(SCRIPT_SHIFT, SCRIPT_BITS, u64::from(script.number()));
    }

    pub fn region(&self) -> Iso3166 {
        Iso3166::from_number(self.bits(REGION_SHIFT, REGION_BITS) as u16).unwrap_or_default()
    }

    pub fn set_region(&mut self, region: Iso3166) {
        self.set_bits(REGION_SHIFT, REGION_BITS, u64::from(region.number()));
    }

    pub fn phrasing(&self) -> Phrasing {
        Phrasing::from_bits(self.bits(PHRASING_SHIFT, PHRASING_BITS) as u8)
    }

    pub fn set_phrasing(&mut self, phrasing: Phrasing) {
        self.set_bits(PHRASING_SHIFT, PHRASING_BITS, u64::from(phrasing.to_bits()));
    }

    /// Apply language, script and region of a (possibly partial) tag.
    pub fn set_language_tag(&mut self, tag: &LanguageTag) {
        self.set_language(tag.language);
        self.set_script(tag.default_script());
        self.set_region(tag.region.unwrap_or_default());
    }

    /// Replace the cluster with a single code point, keeping the attributes.
    pub fn replace_code_point(&mut self, c: char) {
        let script = self.script();
        self.set_bits(INDEX_SHIFT, INDEX_BITS, u64::from(u32::from(c)));
        self.set_script(script);
    }

    /// The raw packed value.
    pub fn to_bits(&self) -> u64 {
        self.0
    }
}

impl From<char> for Grapheme {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl PartialEq for Grapheme {
    fn eq(&self, other: &Self) -> bool {
        self.index() == other.index()
    }
}

impl Eq for Grapheme {}

impl PartialEq<char> for Grapheme {
    fn eq(&self, other: &char) -> bool {
        self.index() == u32::from(*other)
    }
}

impl Hash for Grapheme {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index().hash(state);
    }
}

impl Ord for Grapheme {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        self.decomposed()
            .cmp(&other.decomposed())
            .then_with(|| self.index().cmp(&other.index()))
    }
}

impl PartialOrd for Grapheme {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grapheme")
            .field("code_points", &self.composed())
            .field("language", &self.language())
            .field("script", &self.script())
            .field("region", &self.region())
            .field("phrasing", &self.phrasing())
            .finish()
    }
}

impl fmt::Display for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.code_points().try_for_each(|c| fmt::Write::write_char(f, c))
    }
}

/// Iterator over the code points of a grapheme.
#[derive(Debug, Clone)]
pub struct CodePoints {
    grapheme: Grapheme,
    next: usize,
    len: usize,
}

impl Iterator for CodePoints {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.next >= self.len {
            return None;
        }
        let r = self.grapheme.get(self.next);
        self.next += 1;
        r
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CodePoints {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_code_point() {
        let g = Grapheme::from_char('a');
        assert_eq!(g.size(), 1);
        assert_eq!(g.starter(), 'a');
        assert_eq!(g.composed(), vec!['a']);
        assert_eq!(g.script().code4(), "Latn");
        assert!(g.is_ascii());
        assert_eq!(g, 'a');
    }

    #[test]
    fn composed_on_construction() {
        let g = Grapheme::new(&['a', '\u{0301}']);
        assert_eq!(g.size(), 1);
        assert_eq!(g.starter(), '\u{00E1}');
        assert_eq!(g.decomposed(), vec!['a', '\u{0301}']);
    }

    #[test]
    fn long_grapheme() {
        let g = Grapheme::new(&['e', '\u{0302}', '\u{0323}', '\u{0308}']);
        assert_eq!(g.composed(), vec!['\u{1EC7}', '\u{0308}']);
        assert_eq!(g.size(), 2);
        assert_eq!(g.starter(), '\u{1EC7}');
        assert_eq!(g.get(1), Some('\u{0308}'));
        assert_eq!(g.get(2), None);
        assert!(g.index() >= 0x11_0000);

        let h = Grapheme::new(&['e', '\u{0323}', '\u{0302}', '\u{0308}']);
        assert_eq!(g, h);
        assert_eq!(g.to_string(), "\u{1EC7}\u{0308}");
    }

    #[test]
    fn attributes_do_not_affect_equality() {
        let mut g = Grapheme::from_char('x');
        let h = g;
        g.set_phrasing(Phrasing::Strong);
        g.set_language(Iso639::parse("nl").unwrap());
        g.set_region(Iso3166::parse("NL").unwrap());
        assert_eq!(g, h);
        assert_eq!(g.phrasing(), Phrasing::Strong);
        assert_eq!(g.language().code(), "nl");
        assert_eq!(g.region().code2(), Some("NL"));
        assert_eq!(g.starter(), 'x');
    }

    #[test]
    fn script_honors_starter() {
        let arab = Iso15924::from_code4("Arab").unwrap();

        let mut g = Grapheme::from_char('1');
        assert!(g.script().is_common_or_inherited());
        g.set_script(arab);
        assert_eq!(g.script(), arab);

        let mut g = Grapheme::from_char('a');
        g.set_script(arab);
        assert_eq!(g.script().code4(), "Latn");
    }

    #[test]
    fn ordering_uses_decomposition() {
        let a = Grapheme::from_char('a');
        let a_acute = Grapheme::from_char('\u{00E1}');
        let b = Grapheme::from_char('b');
        assert!(a < a_acute);
        assert!(a_acute < b);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn hash_ignores_attributes() {
        use std::collections::HashSet;

        let mut g = Grapheme::from_char('q');
        let mut set = HashSet::new();
        set.insert(g);
        g.set_phrasing(Phrasing::Code);
        assert!(set.contains(&g));
    }

    #[test]
    fn lone_mark_is_its_own_cluster() {
        let g = Grapheme::from_composed(&['\u{0301}']);
        assert_eq!(g.size(), 1);
        assert_eq!(g.starter(), '\u{0301}');
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not a starter")]
    fn from_char_requires_a_starter() {
        Grapheme::from_char('\u{0308}');
    }

    #[test]
    fn overlong_is_replaced() {
        let mut long = vec!['x'];
        long.extend(std::iter::repeat('\u{0308}').take(MAX_GRAPHEME_LENGTH));
        assert_eq!(Grapheme::from_composed(&long).starter(), REPLACEMENT_CHARACTER);
        assert_eq!(Grapheme::from_composed(&[]).starter(), REPLACEMENT_CHARACTER);
    }
}
