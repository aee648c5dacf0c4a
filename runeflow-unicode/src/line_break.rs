//! Line break opportunities (UAX #14)
//!
//! The rules are applied in passes over a per-character state. Each pass only
//! fills in opportunities that an earlier pass left unassigned, except LB9
//! which glues combining marks to their base unconditionally.

use crate::break_opportunity::{BreakOpportunity, BreakVector};
use crate::ucd::{self, EastAsianWidth, GeneralCategory, LineBreakClass};

/// U+25CC DOTTED CIRCLE, the base of a Brahmic syllable shown on its own.
const DOTTED_CIRCLE: char = '\u{25CC}';

#[derive(Debug, Clone, Copy)]
struct LineBreakInfo {
    current_class: LineBreakClass,
    general_category: GeneralCategory,
    east_asian_width: EastAsianWidth,
    is_extended_pictographic: bool,
    is_dotted_circle: bool,
    /// A mark that LB9 merged into the character before it.
    absorbed: bool,
}

impl LineBreakInfo {
    /// LB1: resolve the classes that have no rules of their own.
    fn new(c: char) -> Self {
        use LineBreakClass::*;

        let general_category = ucd::general_category(c);
        let class = match ucd::line_break(c) {
            AI | SG | XX => AL,
            CJ => NS,
            SA if matches!(general_category, GeneralCategory::Mn | GeneralCategory::Mc) => CM,
            SA => AL,
            class => class,
        };

        Self {
            current_class: class,
            general_category,
            east_asian_width: ucd::east_asian_width(c),
            is_extended_pictographic: ucd::is_extended_pictographic(c),
            is_dotted_circle: c == DOTTED_CIRCLE,
            absorbed: false,
        }
    }

    fn is(&self, class: LineBreakClass) -> bool {
        self.current_class == class
    }

    fn is_any(&self, classes: &[LineBreakClass]) -> bool {
        classes.contains(&self.current_class)
    }

    fn is_wide(&self) -> bool {
        matches!(self.east_asian_width, EastAsianWidth::F | EastAsianWidth::W | EastAsianWidth::H)
    }

    fn is_initial_quote(&self) -> bool {
        self.is(LineBreakClass::QU) && self.general_category == GeneralCategory::Pi
    }

    fn is_final_quote(&self) -> bool {
        self.is(LineBreakClass::QU) && self.general_category == GeneralCategory::Pf
    }

    /// AK, AS or a dotted circle: a base of a Brahmic orthographic syllable.
    fn is_aksara(&self) -> bool {
        self.is_any(&[LineBreakClass::AK, LineBreakClass::AS]) || self.is_dotted_circle
    }
}

/// Context handed to each rule of a walk.
///
/// Marks absorbed by LB9 are invisible to `prev` and `next2` and do not
/// advance the carried state.
struct Walk<'a> {
    prev: Option<&'a LineBreakInfo>,
    cur: &'a LineBreakInfo,
    next: &'a LineBreakInfo,
    /// `None` at the end of the text.
    next2: Option<&'a LineBreakInfo>,
    /// Class of the last non-SP character up to and including `cur`.
    cur_sp: LineBreakClass,
    /// The last non-SP character is an initial quotation mark that opens.
    cur_initial_quote: bool,
    /// `NU` inside `NU (NU|SY|IS)*`, `CL` right after its closing `CL|CP`.
    cur_nu: LineBreakClass,
    /// Regional indicators ending at `cur`.
    num_ri: usize,
}

impl Walk<'_> {
    fn next2_is_any(&self, classes: &[LineBreakClass]) -> bool {
        self.next2.is_some_and(|info| info.is_any(classes))
    }
}

fn walk(r: &mut BreakVector, infos: &[LineBreakInfo], rule: impl Fn(&Walk) -> BreakOpportunity) {
    use LineBreakClass::*;

    let mut prev: Option<&LineBreakInfo> = None;
    let mut base: Option<&LineBreakInfo> = None;
    let mut cur_sp = XX;
    let mut cur_initial_quote = false;
    let mut cur_nu = XX;
    let mut num_ri = 0;

    for (i, pair) in infos.windows(2).enumerate() {
        let (cur, next) = (&pair[0], &pair[1]);
        let next2 = infos[i + 2..].iter().find(|info| !info.absorbed);

        if !cur.absorbed {
            prev = base;
            base = Some(cur);

            if !cur.is(SP) {
                cur_sp = cur.current_class;
                cur_initial_quote = cur.is_initial_quote()
                    && prev.map_or(true, |p| p.is_any(&[BK, CR, LF, NL, OP, QU, GL, SP, ZW]));
            }

            cur_nu = match cur_nu {
                CL => XX,
                NU if cur.is_any(&[CL, CP]) => CL,
                NU if cur.is_any(&[NU, SY, IS]) => NU,
                NU => XX,
                _ if cur.is(NU) => NU,
                state => state,
            };

            num_ri = if cur.is(RI) { num_ri + 1 } else { 0 };
        }

        if r[i + 1] == BreakOpportunity::Unassigned {
            r[i + 1] = rule(&Walk { prev, cur, next, next2, cur_sp, cur_initial_quote, cur_nu, num_ri });
        }
    }
}

fn rules_lb4_lb8a(w: &Walk) -> BreakOpportunity {
    use BreakOpportunity::*;
    use LineBreakClass::*;

    if w.cur.is(BK) {
        Mandatory // LB4
    } else if w.cur.is(CR) && w.next.is(LF) {
        No // LB5
    } else if w.cur.is_any(&[CR, LF, NL]) {
        Mandatory // LB5
    } else if w.next.is_any(&[BK, CR, LF, NL]) {
        No // LB6
    } else if w.next.is_any(&[SP, ZW]) {
        No // LB7
    } else if w.cur_sp == ZW {
        Yes // LB8
    } else if w.cur.is(ZWJ) {
        No // LB8a
    } else {
        Unassigned
    }
}

/// LB9: `X (CM|ZWJ)*` is treated as `X`, for any X other than BK CR LF NL SP ZW.
fn rule_lb9(r: &mut BreakVector, infos: &mut [LineBreakInfo]) {
    use LineBreakClass::*;

    let mut base: Option<LineBreakInfo> = None;
    for i in 0..infos.len() {
        if infos[i].is_any(&[CM, ZWJ]) {
            if let Some(base) = base {
                infos[i] = LineBreakInfo { absorbed: true, ..base };
            }
        } else {
            base = None;
        }

        let cur = infos[i];
        let next_is_mark = infos.get(i + 1).map(|next| next.is_any(&[CM, ZWJ])).unwrap_or(false);
        if !cur.is_any(&[BK, CR, LF, NL, SP, ZW]) && next_is_mark {
            r[i + 1] = BreakOpportunity::No;
            if base.is_none() {
                base = Some(cur);
            }
        }
    }
}

/// LB10: remaining marks are alphabetic.
fn rule_lb10(infos: &mut [LineBreakInfo]) {
    for info in infos.iter_mut().filter(|info| info.is_any(&[LineBreakClass::CM, LineBreakClass::ZWJ])) {
        info.current_class = LineBreakClass::AL;
    }
}

fn rules_lb11_lb31(w: &Walk) -> BreakOpportunity {
    use BreakOpportunity::*;
    use LineBreakClass::*;

    let (cur, next) = (w.cur, w.next);

    if cur.is(WJ) || next.is(WJ) {
        No // LB11
    } else if cur.is(GL) {
        No // LB12
    } else if !cur.is_any(&[SP, BA, HY]) && next.is(GL) {
        No // LB12a
    } else if next.is_any(&[CL, CP, EX, IS, SY]) {
        No // LB13
    } else if w.cur_sp == OP {
        No // LB14
    } else if w.cur_initial_quote {
        No // LB15a
    } else if next.is_final_quote()
        && w.next2.map_or(true, |n| n.is_any(&[SP, GL, WJ, CL, QU, CP, EX, IS, SY, BK, CR, LF, NL, ZW]))
    {
        No // LB15b
    } else if matches!(w.cur_sp, CL | CP) && next.is(NS) {
        No // LB16
    } else if w.cur_sp == B2 && next.is(B2) {
        No // LB17
    } else if cur.is(SP) {
        Yes // LB18
    } else if cur.is(QU) || next.is(QU) {
        No // LB19
    } else if cur.is(CB) || next.is(CB) {
        Yes // LB20
    } else if cur.is(BB) || next.is_any(&[BA, HY, NS]) {
        No // LB21
    } else if w.prev.is_some_and(|p| p.is(HL)) && cur.is_any(&[HY, BA]) {
        No // LB21a
    } else if cur.is(SY) && next.is(HL) {
        No // LB21b
    } else if next.is(IN) {
        No // LB22
    } else if cur.is_any(&[AL, HL]) && next.is(NU) {
        No // LB23
    } else if cur.is(NU) && next.is_any(&[AL, HL]) {
        No // LB23
    } else if cur.is(PR) && next.is_any(&[ID, EB, EM]) {
        No // LB23a
    } else if cur.is_any(&[ID, EB, EM]) && next.is(PO) {
        No // LB23a
    } else if cur.is_any(&[PR, PO]) && next.is_any(&[AL, HL]) {
        No // LB24
    } else if cur.is_any(&[AL, HL]) && next.is_any(&[PR, PO]) {
        No // LB24
    } else if cur.is_any(&[PR, PO]) && ((next.is_any(&[OP, HY]) && w.next2_is_any(&[NU])) || next.is(NU)) {
        No // LB25
    } else if cur.is_any(&[OP, HY]) && next.is(NU) {
        No // LB25
    } else if cur.is(NU) && next.is_any(&[NU, SY, IS]) {
        No // LB25
    } else if w.cur_nu == NU && next.is_any(&[NU, SY, IS, CL, CP]) {
        No // LB25
    } else if matches!(w.cur_nu, NU | CL) && next.is_any(&[PO, PR]) {
        No // LB25
    } else if cur.is(JL) && next.is_any(&[JL, JV, H2, H3]) {
        No // LB26
    } else if cur.is_any(&[JV, H2]) && next.is_any(&[JV, JT]) {
        No // LB26
    } else if cur.is_any(&[JT, H3]) && next.is(JT) {
        No // LB26
    } else if cur.is_any(&[JL, JV, JT, H2, H3]) && next.is(PO) {
        No // LB27
    } else if cur.is(PR) && next.is_any(&[JL, JV, JT, H2, H3]) {
        No // LB27
    } else if cur.is_any(&[AL, HL]) && next.is_any(&[AL, HL]) {
        No // LB28
    } else if cur.is(AP) && next.is_aksara() {
        No // LB28a
    } else if cur.is_aksara() && next.is_any(&[VF, VI]) {
        No // LB28a
    } else if w.prev.is_some_and(LineBreakInfo::is_aksara)
        && cur.is(VI)
        && (next.is(AK) || next.is_dotted_circle)
    {
        No // LB28a
    } else if cur.is_aksara() && next.is_aksara() && w.next2_is_any(&[VF]) {
        No // LB28a
    } else if cur.is(IS) && next.is_any(&[AL, HL]) {
        No // LB29
    } else if cur.is_any(&[AL, HL, NU]) && next.is(OP) && !next.is_wide() {
        No // LB30
    } else if cur.is(CP) && !cur.is_wide() && next.is_any(&[AL, HL, NU]) {
        No // LB30
    } else if cur.is(RI) && next.is(RI) && w.num_ri % 2 == 1 {
        No // LB30a
    } else if cur.is(EB) && next.is(EM) {
        No // LB30b
    } else if cur.is_extended_pictographic && cur.general_category == GeneralCategory::Cn && next.is(EM) {
        No // LB30b
    } else {
        Yes // LB31
    }
}

/// Line break opportunities of `text`.
///
/// Entry 0 is `yes` and the last entry is `mandatory`.
pub fn line_break(text: &[char]) -> BreakVector {
    let mut r = vec![BreakOpportunity::Unassigned; text.len() + 1];
    let mut infos: Vec<LineBreakInfo> = text.iter().map(|&c| LineBreakInfo::new(c)).collect();

    if let Some(first) = r.first_mut() {
        *first = BreakOpportunity::Yes; // LB2
    }
    if let Some(last) = r.last_mut() {
        *last = BreakOpportunity::Mandatory; // LB3
    }

    walk(&mut r, &infos, rules_lb4_lb8a);
    rule_lb9(&mut r, &mut infos);
    rule_lb10(&mut infos);
    walk(&mut r, &infos, rules_lb11_lb31);
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use BreakOpportunity::*;

    fn breaks(s: &str) -> BreakVector {
        line_break(&s.chars().collect::<Vec<_>>())
    }

    /// The text split at every `yes` or `mandatory` opportunity.
    fn segments(s: &str) -> Vec<String> {
        let text: Vec<char> = s.chars().collect();
        let r = line_break(&text);
        let mut segments = Vec::new();
        let mut segment = String::new();
        for (i, &c) in text.iter().enumerate() {
            if i > 0 && r[i].is_break() {
                segments.push(std::mem::take(&mut segment));
            }
            segment.push(c);
        }
        segments.push(segment);
        segments
    }

    #[test]
    fn crlf() {
        assert_eq!(breaks("\r\n"), vec![Yes, No, Mandatory]);
        assert_eq!(breaks("a\nb"), vec![Yes, No, Mandatory, Mandatory]);
        assert_eq!(breaks(""), vec![Mandatory]);
    }

    #[test]
    fn spaces() {
        assert_eq!(segments("aa bb  cc"), vec!["aa ", "bb  ", "cc"]);
        assert_eq!(breaks("aa bb"), vec![Yes, No, No, Yes, No, Mandatory]);
    }

    #[test]
    fn punctuation() {
        assert_eq!(segments("Hello, world!"), vec!["Hello, ", "world!"]);
        assert_eq!(segments("(a) [b]"), vec!["(a) ", "[b]"]);
        assert_eq!(segments("well-known"), vec!["well-", "known"]);
        assert_eq!(segments("\u{201C}quoted\u{201D} text"), vec!["\u{201C}quoted\u{201D} ", "text"]);
    }

    #[test]
    fn numbers() {
        assert_eq!(segments("$-1,234.56% off"), vec!["$-1,234.56% ", "off"]);
        assert_eq!(segments("(12)a"), vec!["(12)a"]);
        // A mark on the closing parenthesis does not end the number.
        assert_eq!(segments("1)\u{0301}%"), vec!["1)\u{0301}%"]);
    }

    #[test]
    fn quotation_marks() {
        // An opening quote holds on to what follows, even across spaces.
        assert_eq!(segments("\u{00AB} a"), vec!["\u{00AB} a"]);
        assert_eq!(segments("x \u{00AB} a"), vec!["x ", "\u{00AB} a"]);
        assert_eq!(segments("x\u{00AB} a"), vec!["x\u{00AB} ", "a"]);
        // A closing quote stays with the text before it.
        assert_eq!(segments("a \u{00BB}"), vec!["a \u{00BB}"]);
        assert_eq!(segments("a \u{00BB}."), vec!["a \u{00BB}."]);
        assert_eq!(segments("a \u{00BB}b"), vec!["a ", "\u{00BB}b"]);
    }

    #[test]
    fn brahmic_syllables() {
        // Balinese akara, adeg adeg; Batak pangolat; Brahmi jihvamuliya.
        assert_eq!(segments("\u{1B05}\u{1B05}"), vec!["\u{1B05}", "\u{1B05}"]);
        assert_eq!(segments("\u{1B05}\u{1B44}\u{1B05}"), vec!["\u{1B05}\u{1B44}\u{1B05}"]);
        assert_eq!(segments("\u{1B05}\u{1B05}\u{1BF2}"), vec!["\u{1B05}\u{1B05}\u{1BF2}"]);
        assert_eq!(segments("\u{11003}\u{1B05}"), vec!["\u{11003}\u{1B05}"]);
        assert_eq!(segments("\u{25CC}\u{1B44}"), vec!["\u{25CC}\u{1B44}"]);
        assert_eq!(segments("\u{1B05}\u{0308}\u{1BF2}"), vec!["\u{1B05}\u{0308}\u{1BF2}"]);
    }

    #[test]
    fn combining_marks_stick() {
        assert_eq!(segments("a\u{0301}b c\u{0301}"), vec!["a\u{0301}b ", "c\u{0301}"]);
        // A leading mark is alphabetic.
        assert_eq!(segments(" \u{0301}a"), vec![" ", "\u{0301}a"]);
    }

    #[test]
    fn ideographs() {
        assert_eq!(segments("\u{6F22}\u{5B57}\u{3002}\u{6F22}"), vec!["\u{6F22}", "\u{5B57}\u{3002}", "\u{6F22}"]);
    }

    #[test]
    fn glue_and_zero_width_space() {
        assert_eq!(segments("a\u{00A0}b c"), vec!["a\u{00A0}b ", "c"]);
        assert_eq!(segments("ab\u{200B}cd"), vec!["ab\u{200B}", "cd"]);
        assert_eq!(segments("a\u{2060}b"), vec!["a\u{2060}b"]);
    }

    #[test]
    fn regional_indicators() {
        let flags = "\u{1F1F3}\u{1F1F1}\u{1F1E9}\u{1F1EA}";
        assert_eq!(segments(flags), vec!["\u{1F1F3}\u{1F1F1}", "\u{1F1E9}\u{1F1EA}"]);
    }

    #[test]
    fn emoji_modifier() {
        assert_eq!(segments("\u{1F44D}\u{1F3FD}\u{1F44D}"), vec!["\u{1F44D}\u{1F3FD}", "\u{1F44D}"]);
    }

    #[test]
    fn paragraph_separator_is_mandatory() {
        let r = breaks("a\u{2029}b");
        assert_eq!(r[2], Mandatory);
        assert_eq!(r[3], Mandatory);
    }
}
