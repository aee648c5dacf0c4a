//! Unicode character database lookups
//!
//! Every query is total over U+0000..=U+10FFFF and lock-free. Properties come
//! from the ICU4X compiled tries (two-level code point tries), the script from
//! `unicode-script`, and compatibility decompositions from an embedded block
//! table. Unassigned code points return the UCD defaults.

use crate::tables::compat_decomposition::{
    COMPAT_BLOCKS, COMPAT_BLOCK_MASK, COMPAT_BLOCK_SHIFT, COMPAT_DATA, COMPAT_ENTRIES, COMPAT_INDEX,
};
use crate::iso::Iso15924;
use icu_normalizer::properties::{CanonicalComposition, CanonicalDecomposition, Decomposed};
use icu_properties::bidi_data::{self, BidiPairingProperties};
use icu_properties::{maps, sets, IndicSyllabicCategory};
use serde::{Deserialize, Serialize};
use unicode_script::{Script, UnicodeScript};

pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// General category (UAX #44).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneralCategory {
    Lu, Ll, Lt, Lm, Lo,
    Mn, Mc, Me,
    Nd, Nl, No,
    Pc, Pd, Ps, Pe, Pi, Pf, Po,
    Sm, Sc, Sk, So,
    Zs, Zl, Zp,
    Cc, Cf, Cs, Co, Cn,
}

impl GeneralCategory {
    pub fn is_letter(self) -> bool {
        matches!(self, Self::Lu | Self::Ll | Self::Lt | Self::Lm | Self::Lo)
    }

    pub fn is_mark(self) -> bool {
        matches!(self, Self::Mn | Self::Mc | Self::Me)
    }

    pub fn is_number(self) -> bool {
        matches!(self, Self::Nd | Self::Nl | Self::No)
    }

    /// Zs, Zl or Zp.
    pub fn is_separator(self) -> bool {
        matches!(self, Self::Zs | Self::Zl | Self::Zp)
    }

    /// Ends a line: LINE SEPARATOR or PARAGRAPH SEPARATOR.
    pub fn is_zp_or_zl(self) -> bool {
        matches!(self, Self::Zl | Self::Zp)
    }

    /// Anything that is not a separator or an `Other` category leaves ink on the page.
    pub fn is_visible(self) -> bool {
        !matches!(
            self,
            Self::Zs | Self::Zl | Self::Zp | Self::Cc | Self::Cf | Self::Cs | Self::Co | Self::Cn
        )
    }
}

/// Bidi class (UAX #9 table 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BidiClass {
    L, R, AL,
    EN, ES, ET, AN, CS, NSM, BN,
    B, S, WS, ON,
    LRE, LRO, RLE, RLO, PDF,
    LRI, RLI, FSI, PDI,
}

impl BidiClass {
    /// Explicit embedding and override controls plus BN, removed by rule X9.
    pub fn is_removed_by_x9(self) -> bool {
        matches!(self, Self::RLE | Self::LRE | Self::RLO | Self::LRO | Self::PDF | Self::BN)
    }

    pub fn is_isolate_formatter(self) -> bool {
        matches!(self, Self::LRI | Self::RLI | Self::FSI | Self::PDI)
    }

    /// Neutral or isolate formatting character (NI in UAX #9).
    pub fn is_neutral_or_isolate(self) -> bool {
        matches!(
            self,
            Self::B | Self::S | Self::WS | Self::ON | Self::FSI | Self::LRI | Self::RLI | Self::PDI
        )
    }

    /// Parse the short alias used by the UCD test files.
    pub fn from_alias(alias: &str) -> Option<Self> {
        Some(match alias {
            "L" => Self::L,
            "R" => Self::R,
            "AL" => Self::AL,
            "EN" => Self::EN,
            "ES" => Self::ES,
            "ET" => Self::ET,
            "AN" => Self::AN,
            "CS" => Self::CS,
            "NSM" => Self::NSM,
            "BN" => Self::BN,
            "B" => Self::B,
            "S" => Self::S,
            "WS" => Self::WS,
            "ON" => Self::ON,
            "LRE" => Self::LRE,
            "LRO" => Self::LRO,
            "RLE" => Self::RLE,
            "RLO" => Self::RLO,
            "PDF" => Self::PDF,
            "LRI" => Self::LRI,
            "RLI" => Self::RLI,
            "FSI" => Self::FSI,
            "PDI" => Self::PDI,
            _ => return None,
        })
    }
}

/// Bidi_Paired_Bracket_Type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BracketType {
    /// Not a paired bracket.
    N,
    /// Opening bracket.
    O,
    /// Closing bracket.
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EastAsianWidth {
    N, A, H, F, Na, W,
}

impl EastAsianWidth {
    /// Fullwidth, wide or halfwidth, the set excluded by rule LB30.
    pub fn is_east_asian(self) -> bool {
        matches!(self, Self::F | Self::W | Self::H)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphemeClusterBreak {
    Other,
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
}

/// Indic_Conjunct_Break, which keeps consonant conjuncts in one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicConjunctBreak {
    None,
    Linker,
    Consonant,
    Extend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordBreak {
    Other,
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentenceBreak {
    Other,
    CR,
    LF,
    Extend,
    Sep,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    SContinue,
    STerm,
    Close,
}

/// Line break class (UAX #14 table 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineBreakClass {
    AI, AL, B2, BA, BB, BK, CB, CJ, CL, CM, CP, CR, EB, EM, EX, GL,
    H2, H3, HL, HY, ID, IN, IS, JL, JT, JV, LF, NL, NS, NU, OP, PO,
    PR, QU, RI, SA, SG, SP, SY, WJ, XX, ZW, ZWJ,
    AK, AP, AS, VF, VI,
}

/// Decomposition_Type, where `Canonical` is the untagged mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecompositionTag {
    None,
    Canonical,
    Font,
    NoBreak,
    Initial,
    Medial,
    Final,
    Isolated,
    Circle,
    Super,
    Sub,
    Vertical,
    Wide,
    Narrow,
    Small,
    Square,
    Fraction,
    Compat,
}

impl DecompositionTag {
    /// Bit of this tag inside a decomposition mask.
    pub const fn bit(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Canonical => 1 << 0,
            Self::Font => 1 << 1,
            Self::NoBreak => 1 << 2,
            Self::Initial => 1 << 3,
            Self::Medial => 1 << 4,
            Self::Final => 1 << 5,
            Self::Isolated => 1 << 6,
            Self::Circle => 1 << 7,
            Self::Super => 1 << 8,
            Self::Sub => 1 << 9,
            Self::Vertical => 1 << 10,
            Self::Wide => 1 << 11,
            Self::Narrow => 1 << 12,
            Self::Small => 1 << 13,
            Self::Square => 1 << 14,
            Self::Fraction => 1 << 15,
            Self::Compat => 1 << 16,
        }
    }

    pub fn is_compatibility(self) -> bool {
        !matches!(self, Self::None | Self::Canonical)
    }
}

/// Longest Decomposition_Mapping in the UCD (U+FDFA).
pub const MAX_DECOMPOSITION_LENGTH: usize = 18;

/// A single-step decomposition mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    pub tag: DecompositionTag,
    len: u8,
    code_points: [char; MAX_DECOMPOSITION_LENGTH],
}

impl Decomposition {
    const NONE: Self = Self {
        tag: DecompositionTag::None,
        len: 0,
        code_points: ['\0'; MAX_DECOMPOSITION_LENGTH],
    };

    fn new(tag: DecompositionTag, code_points: &[char]) -> Self {
        let mut r = Self { tag, ..Self::NONE };
        for (slot, &c) in r.code_points.iter_mut().zip(code_points) {
            *slot = c;
        }
        r.len = code_points.len().min(MAX_DECOMPOSITION_LENGTH) as u8;
        r
    }

    pub fn as_slice(&self) -> &[char] {
        &self.code_points[..usize::from(self.len)]
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// Hangul syllable composition constants (Unicode ch. 3.12).
pub(crate) const HANGUL_S_BASE: u32 = 0xAC00;
pub(crate) const HANGUL_L_BASE: u32 = 0x1100;
pub(crate) const HANGUL_V_BASE: u32 = 0x1161;
pub(crate) const HANGUL_T_BASE: u32 = 0x11A7;
pub(crate) const HANGUL_L_COUNT: u32 = 19;
pub(crate) const HANGUL_V_COUNT: u32 = 21;
pub(crate) const HANGUL_T_COUNT: u32 = 28;
pub(crate) const HANGUL_N_COUNT: u32 = HANGUL_V_COUNT * HANGUL_T_COUNT;
pub(crate) const HANGUL_S_COUNT: u32 = HANGUL_L_COUNT * HANGUL_N_COUNT;

// The compiled ICU4X payloads are not `Sync`; each thread holds its own
// handle to the same static data.
thread_local! {
    static CANONICAL_DECOMPOSITION: CanonicalDecomposition = const { CanonicalDecomposition::new() };
    static CANONICAL_COMPOSITION: CanonicalComposition = const { CanonicalComposition::new() };
}

pub fn general_category(c: char) -> GeneralCategory {
    use icu_properties::GeneralCategory as G;

    match maps::general_category().get(c) {
        G::UppercaseLetter => GeneralCategory::Lu,
        G::LowercaseLetter => GeneralCategory::Ll,
        G::TitlecaseLetter => GeneralCategory::Lt,
        G::ModifierLetter => GeneralCategory::Lm,
        G::OtherLetter => GeneralCategory::Lo,
        G::NonspacingMark => GeneralCategory::Mn,
        G::SpacingMark => GeneralCategory::Mc,
        G::EnclosingMark => GeneralCategory::Me,
        G::DecimalNumber => GeneralCategory::Nd,
        G::LetterNumber => GeneralCategory::Nl,
        G::OtherNumber => GeneralCategory::No,
        G::ConnectorPunctuation => GeneralCategory::Pc,
        G::DashPunctuation => GeneralCategory::Pd,
        G::OpenPunctuation => GeneralCategory::Ps,
        G::ClosePunctuation => GeneralCategory::Pe,
        G::InitialPunctuation => GeneralCategory::Pi,
        G::FinalPunctuation => GeneralCategory::Pf,
        G::OtherPunctuation => GeneralCategory::Po,
        G::MathSymbol => GeneralCategory::Sm,
        G::CurrencySymbol => GeneralCategory::Sc,
        G::ModifierSymbol => GeneralCategory::Sk,
        G::OtherSymbol => GeneralCategory::So,
        G::SpaceSeparator => GeneralCategory::Zs,
        G::LineSeparator => GeneralCategory::Zl,
        G::ParagraphSeparator => GeneralCategory::Zp,
        G::Control => GeneralCategory::Cc,
        G::Format => GeneralCategory::Cf,
        G::Surrogate => GeneralCategory::Cs,
        G::PrivateUse => GeneralCategory::Co,
        #[allow(unreachable_patterns)]
        _ => GeneralCategory::Cn,
    }
}

pub fn canonical_combining_class(c: char) -> u8 {
    maps::canonical_combining_class().get(c).0
}

pub fn bidi_class(c: char) -> BidiClass {
    // Raw values follow ICU's UCharDirection numbering.
    match maps::bidi_class().get(c).0 {
        0 => BidiClass::L,
        1 => BidiClass::R,
        2 => BidiClass::EN,
        3 => BidiClass::ES,
        4 => BidiClass::ET,
        5 => BidiClass::AN,
        6 => BidiClass::CS,
        7 => BidiClass::B,
        8 => BidiClass::S,
        9 => BidiClass::WS,
        10 => BidiClass::ON,
        11 => BidiClass::LRE,
        12 => BidiClass::LRO,
        13 => BidiClass::AL,
        14 => BidiClass::RLE,
        15 => BidiClass::RLO,
        16 => BidiClass::PDF,
        17 => BidiClass::NSM,
        18 => BidiClass::BN,
        19 => BidiClass::FSI,
        20 => BidiClass::LRI,
        21 => BidiClass::RLI,
        22 => BidiClass::PDI,
        _ => BidiClass::L,
    }
}

pub fn bidi_bracket_type(c: char) -> BracketType {
    match bidi_data::bidi_auxiliary_properties().get32_pairing_props(u32::from(c)) {
        BidiPairingProperties::Open(_) => BracketType::O,
        BidiPairingProperties::Close(_) => BracketType::C,
        _ => BracketType::N,
    }
}

/// The Bidi_Paired_Bracket of an opening or closing bracket.
pub fn bidi_paired_bracket(c: char) -> Option<char> {
    match bidi_data::bidi_auxiliary_properties().get32_pairing_props(u32::from(c)) {
        BidiPairingProperties::Open(pair) | BidiPairingProperties::Close(pair) => Some(pair),
        _ => None,
    }
}

pub fn bidi_mirroring_glyph(c: char) -> Option<char> {
    bidi_data::bidi_auxiliary_properties()
        .get32_mirroring_props(u32::from(c))
        .mirroring_glyph
}

pub fn east_asian_width(c: char) -> EastAsianWidth {
    match maps::east_asian_width().get(c).0 {
        1 => EastAsianWidth::A,
        2 => EastAsianWidth::H,
        3 => EastAsianWidth::F,
        4 => EastAsianWidth::Na,
        5 => EastAsianWidth::W,
        _ => EastAsianWidth::N,
    }
}

pub fn grapheme_cluster_break(c: char) -> GraphemeClusterBreak {
    match maps::grapheme_cluster_break().get(c).0 {
        1 => GraphemeClusterBreak::Control,
        2 => GraphemeClusterBreak::CR,
        // E_Modifier is folded into Extend since Unicode 11.
        3 | 15 => GraphemeClusterBreak::Extend,
        4 => GraphemeClusterBreak::L,
        5 => GraphemeClusterBreak::LF,
        6 => GraphemeClusterBreak::LV,
        7 => GraphemeClusterBreak::LVT,
        8 => GraphemeClusterBreak::T,
        9 => GraphemeClusterBreak::V,
        10 => GraphemeClusterBreak::SpacingMark,
        11 => GraphemeClusterBreak::Prepend,
        12 => GraphemeClusterBreak::RegionalIndicator,
        17 => GraphemeClusterBreak::ZWJ,
        _ => GraphemeClusterBreak::Other,
    }
}

/// Indic_Conjunct_Break, derived from the script, Indic_Syllabic_Category
/// and grapheme properties.
pub fn indic_conjunct_break(c: char) -> IndicConjunctBreak {
    let conjunct_script = matches!(
        c.script(),
        Script::Bengali | Script::Devanagari | Script::Gujarati | Script::Malayalam | Script::Oriya | Script::Telugu
    );
    let category = maps::indic_syllabic_category().get(c);

    if conjunct_script && category == IndicSyllabicCategory::Virama {
        IndicConjunctBreak::Linker
    } else if conjunct_script && category == IndicSyllabicCategory::Consonant {
        IndicConjunctBreak::Consonant
    } else {
        match grapheme_cluster_break(c) {
            GraphemeClusterBreak::ZWJ => IndicConjunctBreak::Extend,
            GraphemeClusterBreak::Extend if canonical_combining_class(c) != 0 => IndicConjunctBreak::Extend,
            _ => IndicConjunctBreak::None,
        }
    }
}

pub fn word_break(c: char) -> WordBreak {
    match maps::word_break().get(c).0 {
        1 => WordBreak::ALetter,
        2 => WordBreak::Format,
        3 => WordBreak::Katakana,
        4 => WordBreak::MidLetter,
        5 => WordBreak::MidNum,
        6 => WordBreak::Numeric,
        7 => WordBreak::ExtendNumLet,
        8 => WordBreak::CR,
        9 | 19 => WordBreak::Extend,
        10 => WordBreak::LF,
        11 => WordBreak::MidNumLet,
        12 => WordBreak::Newline,
        13 => WordBreak::RegionalIndicator,
        14 => WordBreak::HebrewLetter,
        15 => WordBreak::SingleQuote,
        16 => WordBreak::DoubleQuote,
        21 => WordBreak::ZWJ,
        22 => WordBreak::WSegSpace,
        _ => WordBreak::Other,
    }
}

pub fn sentence_break(c: char) -> SentenceBreak {
    match maps::sentence_break().get(c).0 {
        1 => SentenceBreak::ATerm,
        2 => SentenceBreak::Close,
        3 => SentenceBreak::Format,
        4 => SentenceBreak::Lower,
        5 => SentenceBreak::Numeric,
        6 => SentenceBreak::OLetter,
        7 => SentenceBreak::Sep,
        8 => SentenceBreak::Sp,
        9 => SentenceBreak::STerm,
        10 => SentenceBreak::Upper,
        11 => SentenceBreak::CR,
        12 => SentenceBreak::Extend,
        13 => SentenceBreak::LF,
        14 => SentenceBreak::SContinue,
        _ => SentenceBreak::Other,
    }
}

/// Line break class as stored in the UCD, before any LB1 resolution.
pub fn line_break(c: char) -> LineBreakClass {
    use LineBreakClass::*;

    match maps::line_break().get(c).0 {
        1 => AI,
        2 => AL,
        3 => B2,
        4 => BA,
        5 => BB,
        6 => BK,
        7 => CB,
        8 => CL,
        9 => CM,
        10 => CR,
        11 => EX,
        12 => GL,
        13 => HY,
        14 => ID,
        15 => IN,
        16 => IS,
        17 => LF,
        18 => NS,
        19 => NU,
        20 => OP,
        21 => PO,
        22 => PR,
        23 => QU,
        24 => SA,
        25 => SG,
        26 => SP,
        27 => SY,
        28 => ZW,
        29 => NL,
        30 => WJ,
        31 => H2,
        32 => H3,
        33 => JL,
        34 => JT,
        35 => JV,
        36 => CP,
        37 => CJ,
        38 => HL,
        39 => RI,
        40 => EB,
        41 => EM,
        42 => ZWJ,
        43 => AK,
        44 => AP,
        45 => AS,
        46 => VF,
        47 => VI,
        _ => XX,
    }
}

pub fn is_extended_pictographic(c: char) -> bool {
    sets::extended_pictographic().contains(c)
}

/// ISO 15924 script of the code point; Zyyy for Common and Zinh for Inherited.
pub fn script(c: char) -> Iso15924 {
    Iso15924::from(c.script())
}

/// Single-step decomposition of a code point.
///
/// Canonical mappings (including the algorithmic Hangul syllables) take
/// precedence over the tagged compatibility mappings.
pub fn decomposition(c: char) -> Decomposition {
    let cp = u32::from(c);

    let s_index = cp.wrapping_sub(HANGUL_S_BASE);
    if s_index < HANGUL_S_COUNT {
        let t_index = s_index % HANGUL_T_COUNT;
        let (first, second) = if t_index == 0 {
            (
                HANGUL_L_BASE + s_index / HANGUL_N_COUNT,
                HANGUL_V_BASE + (s_index % HANGUL_N_COUNT) / HANGUL_T_COUNT,
            )
        } else {
            (cp - t_index, HANGUL_T_BASE + t_index)
        };
        if let (Some(first), Some(second)) = (char::from_u32(first), char::from_u32(second)) {
            return Decomposition::new(DecompositionTag::Canonical, &[first, second]);
        }
    }

    // The decomposition trie stores the combining class of non-starters in
    // place of a mapping, so only starters and the few non-starters with a
    // canonical mapping may be looked up.
    let decomposed = if canonical_combining_class(c) == 0 {
        CANONICAL_DECOMPOSITION.with(|decomposer| decomposer.decompose(c))
    } else {
        non_starter_decomposition(c)
    };
    match decomposed {
        Decomposed::Singleton(a) => return Decomposition::new(DecompositionTag::Canonical, &[a]),
        Decomposed::Expansion(a, b) => {
            return Decomposition::new(DecompositionTag::Canonical, &[a, b])
        }
        _ => {}
    }

    compat_decomposition(cp).unwrap_or(Decomposition::NONE)
}

/// Canonical mappings of code points with a non-zero combining class.
fn non_starter_decomposition(c: char) -> Decomposed {
    match c {
        '\u{0340}' => Decomposed::Singleton('\u{0300}'),
        '\u{0341}' => Decomposed::Singleton('\u{0301}'),
        '\u{0343}' => Decomposed::Singleton('\u{0313}'),
        '\u{0344}' => Decomposed::Expansion('\u{0308}', '\u{0301}'),
        _ => Decomposed::Default,
    }
}

fn compat_decomposition(cp: u32) -> Option<Decomposition> {
    let block = *COMPAT_INDEX.get((cp >> COMPAT_BLOCK_SHIFT) as usize)?;
    let slot = (usize::from(block) << COMPAT_BLOCK_SHIFT) + (cp & COMPAT_BLOCK_MASK) as usize;
    let entry = usize::from(COMPAT_BLOCKS[slot]).checked_sub(1)?;
    let (tag, offset, len) = COMPAT_ENTRIES[entry];

    let offset = usize::from(offset);
    let mut code_points = ['\0'; MAX_DECOMPOSITION_LENGTH];
    let mapping = &COMPAT_DATA[offset..offset + usize::from(len)];
    for (slot, &cp) in code_points.iter_mut().zip(mapping) {
        *slot = char::from_u32(cp).unwrap_or(REPLACEMENT_CHARACTER);
    }
    Some(Decomposition::new(tag, &code_points[..usize::from(len)]))
}

/// Primary composite of a starter and a following code point.
///
/// Composition exclusions are honored; the Hangul LV and LVT syllables are
/// composed algorithmically.
pub fn primary_composition(first: char, second: char) -> Option<char> {
    let (a, b) = (u32::from(first), u32::from(second));

    let l_index = a.wrapping_sub(HANGUL_L_BASE);
    let v_index = b.wrapping_sub(HANGUL_V_BASE);
    if l_index < HANGUL_L_COUNT && v_index < HANGUL_V_COUNT {
        return char::from_u32(
            HANGUL_S_BASE + (l_index * HANGUL_V_COUNT + v_index) * HANGUL_T_COUNT,
        );
    }

    let s_index = a.wrapping_sub(HANGUL_S_BASE);
    let t_index = b.wrapping_sub(HANGUL_T_BASE);
    if s_index < HANGUL_S_COUNT && s_index % HANGUL_T_COUNT == 0 && t_index > 0 && t_index < HANGUL_T_COUNT {
        return char::from_u32(a + t_index);
    }

    CANONICAL_COMPOSITION.with(|composer| composer.compose(first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_categories() {
        assert_eq!(general_category('a'), GeneralCategory::Ll);
        assert_eq!(general_category('A'), GeneralCategory::Lu);
        assert_eq!(general_category(' '), GeneralCategory::Zs);
        assert_eq!(general_category('\u{2028}'), GeneralCategory::Zl);
        assert_eq!(general_category('\u{2029}'), GeneralCategory::Zp);
        assert_eq!(general_category('\u{0301}'), GeneralCategory::Mn);
        assert_eq!(general_category('\u{0378}'), GeneralCategory::Cn);
        assert!(!general_category('\t').is_visible());
    }

    #[test]
    fn combining_classes() {
        assert_eq!(canonical_combining_class('a'), 0);
        assert_eq!(canonical_combining_class('\u{0301}'), 230);
        assert_eq!(canonical_combining_class('\u{0323}'), 220);
    }

    #[test]
    fn bidi_properties() {
        assert_eq!(bidi_class('a'), BidiClass::L);
        assert_eq!(bidi_class('\u{05D0}'), BidiClass::R);
        assert_eq!(bidi_class('\u{0627}'), BidiClass::AL);
        assert_eq!(bidi_class('1'), BidiClass::EN);
        assert_eq!(bidi_class('\u{2029}'), BidiClass::B);
        assert_eq!(bidi_class('\u{202E}'), BidiClass::RLO);
        assert_eq!(bidi_class('\u{2068}'), BidiClass::FSI);

        assert_eq!(bidi_bracket_type('('), BracketType::O);
        assert_eq!(bidi_bracket_type(')'), BracketType::C);
        assert_eq!(bidi_bracket_type('a'), BracketType::N);
        assert_eq!(bidi_paired_bracket('['), Some(']'));
        assert_eq!(bidi_mirroring_glyph('('), Some(')'));
        assert_eq!(bidi_mirroring_glyph('<'), Some('>'));
        assert_eq!(bidi_mirroring_glyph('a'), None);
    }

    #[test]
    fn segmentation_properties() {
        assert_eq!(grapheme_cluster_break('\r'), GraphemeClusterBreak::CR);
        assert_eq!(grapheme_cluster_break('\u{200D}'), GraphemeClusterBreak::ZWJ);
        assert_eq!(grapheme_cluster_break('\u{1F1E6}'), GraphemeClusterBreak::RegionalIndicator);
        assert_eq!(word_break('a'), WordBreak::ALetter);
        assert_eq!(word_break('\''), WordBreak::SingleQuote);
        assert_eq!(word_break(' '), WordBreak::WSegSpace);
        assert_eq!(sentence_break('.'), SentenceBreak::ATerm);
        assert_eq!(sentence_break('?'), SentenceBreak::STerm);
        assert_eq!(sentence_break('a'), SentenceBreak::Lower);
        assert_eq!(line_break(' '), LineBreakClass::SP);
        assert_eq!(line_break('('), LineBreakClass::OP);
        assert_eq!(line_break('\u{0378}'), LineBreakClass::XX);
        assert_eq!(line_break('\u{1B05}'), LineBreakClass::AK);
        assert_eq!(line_break('\u{1B44}'), LineBreakClass::VI);
        assert_eq!(line_break('\u{1BF2}'), LineBreakClass::VF);
        assert_eq!(indic_conjunct_break('\u{0915}'), IndicConjunctBreak::Consonant);
        assert_eq!(indic_conjunct_break('\u{094D}'), IndicConjunctBreak::Linker);
        assert_eq!(indic_conjunct_break('\u{093C}'), IndicConjunctBreak::Extend);
        assert_eq!(indic_conjunct_break('\u{200D}'), IndicConjunctBreak::Extend);
        // A Tamil virama does not link consonants.
        assert_eq!(indic_conjunct_break('\u{0BCD}'), IndicConjunctBreak::Extend);
        assert_eq!(indic_conjunct_break('a'), IndicConjunctBreak::None);
        assert_eq!(east_asian_width('\u{4E00}'), EastAsianWidth::W);
        assert!(is_extended_pictographic('\u{1F600}'));
        assert!(!is_extended_pictographic('a'));
    }

    #[test]
    fn decompositions() {
        let d = decomposition('\u{00E1}');
        assert_eq!(d.tag, DecompositionTag::Canonical);
        assert_eq!(d.as_slice(), &['a', '\u{0301}']);

        let d = decomposition('\u{00A0}');
        assert_eq!(d.tag, DecompositionTag::NoBreak);
        assert_eq!(d.as_slice(), &[' ']);

        let d = decomposition('\u{FDFA}');
        assert_eq!(d.tag, DecompositionTag::Isolated);
        assert_eq!(d.as_slice().len(), MAX_DECOMPOSITION_LENGTH);

        let d = decomposition('\u{AC01}');
        assert_eq!(d.as_slice(), &['\u{AC00}', '\u{11A8}']);

        // Cyrillic modifier letters, added in Unicode 15.0.
        let d = decomposition('\u{1E030}');
        assert_eq!(d.tag, DecompositionTag::Super);
        assert_eq!(d.as_slice(), &['\u{0430}']);
        assert_eq!(decomposition('\u{1E051}').tag, DecompositionTag::Sub);

        assert!(decomposition('a').is_empty());
        assert!(decomposition('\u{10FFFF}').is_empty());
    }

    #[test]
    fn combining_marks_do_not_decompose() {
        for c in ('\u{0300}'..='\u{036F}').chain(['\u{05B0}', '\u{093C}', '\u{1D165}']) {
            let d = decomposition(c);
            match c {
                '\u{0340}' => assert_eq!(d.as_slice(), &['\u{0300}']),
                '\u{0341}' => assert_eq!(d.as_slice(), &['\u{0301}']),
                '\u{0343}' => assert_eq!(d.as_slice(), &['\u{0313}']),
                '\u{0344}' => assert_eq!(d.as_slice(), &['\u{0308}', '\u{0301}']),
                _ => assert!(d.is_empty(), "{:04X} decomposed to {:?}", u32::from(c), d.as_slice()),
            }
        }
    }

    #[test]
    fn every_code_point_has_a_decomposition() {
        for c in (0..=0x10FFFF).filter_map(char::from_u32) {
            let d = decomposition(c);
            assert!(d.as_slice().len() <= MAX_DECOMPOSITION_LENGTH);
            assert!(!d.as_slice().contains(&c), "{:04X} maps to itself", u32::from(c));
        }
    }

    #[test]
    fn compositions() {
        assert_eq!(primary_composition('a', '\u{0301}'), Some('\u{00E1}'));
        assert_eq!(primary_composition('\u{1100}', '\u{1161}'), Some('\u{AC00}'));
        assert_eq!(primary_composition('\u{AC00}', '\u{11A8}'), Some('\u{AC01}'));
        assert_eq!(primary_composition('a', 'b'), None);
        // Composition exclusion.
        assert_eq!(primary_composition('\u{0915}', '\u{093C}'), None);
    }

    #[test]
    fn scripts() {
        assert_eq!(script('a').code4(), "Latn");
        assert_eq!(script('\u{05D0}').code4(), "Hebr");
        assert_eq!(script(' ').code4(), "Zyyy");
        assert_eq!(script('\u{0301}').code4(), "Zinh");
    }
}
