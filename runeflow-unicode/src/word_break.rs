//! Word boundaries (UAX #29, rules WB1 to WB999) and greedy word wrap

use crate::break_opportunity::{BreakOpportunity, BreakVector};
use crate::ucd::{self, GeneralCategory, WordBreak};

#[derive(Debug, Clone, Copy)]
struct WordBreakInfo {
    property: WordBreak,
    pictographic: bool,
    /// Extend, Format or ZWJ absorbed into the previous character by WB4.
    skip: bool,
}

impl Default for WordBreakInfo {
    fn default() -> Self {
        Self { property: WordBreak::Other, pictographic: false, skip: false }
    }
}

impl WordBreakInfo {
    fn new(c: char) -> Self {
        Self { property: ucd::word_break(c), pictographic: ucd::is_extended_pictographic(c), skip: false }
    }

    fn is(&self, property: WordBreak) -> bool {
        self.property == property
    }

    fn is_ah_letter(&self) -> bool {
        matches!(self.property, WordBreak::ALetter | WordBreak::HebrewLetter)
    }

    fn is_mid_num_let_q(&self) -> bool {
        matches!(self.property, WordBreak::MidNumLet | WordBreak::SingleQuote)
    }

    fn is_newline(&self) -> bool {
        matches!(self.property, WordBreak::Newline | WordBreak::CR | WordBreak::LF)
    }
}

fn rules_wb1_wb3d(r: &mut BreakVector, infos: &[WordBreakInfo]) {
    use BreakOpportunity::*;
    use WordBreak::*;

    debug_assert_eq!(r.len(), infos.len() + 1);

    if let Some(first) = r.first_mut() {
        *first = Yes; // WB1
    }
    if let Some(last) = r.last_mut() {
        *last = Yes; // WB2
    }

    for i in 1..infos.len() {
        let prev = infos[i - 1];
        let next = infos[i];

        r[i] = if prev.is(CR) && next.is(LF) {
            No // WB3
        } else if prev.is_newline() {
            Yes // WB3a
        } else if next.is_newline() {
            Yes // WB3b
        } else if prev.is(ZWJ) && next.pictographic {
            No // WB3c
        } else if prev.is(WSegSpace) && next.is(WSegSpace) {
            No // WB3d
        } else {
            Unassigned
        };
    }
}

fn rule_wb4(r: &mut BreakVector, infos: &mut [WordBreakInfo]) {
    use WordBreak::*;

    for i in 1..infos.len() {
        let prev = infos[i - 1];
        let next = &mut infos[i];

        if !prev.is_newline() && matches!(next.property, Extend | Format | ZWJ) {
            if r[i] == BreakOpportunity::Unassigned {
                r[i] = BreakOpportunity::No;
            }
            next.skip = true;
        }
    }
}

fn rules_wb5_wb999(r: &mut BreakVector, infos: &[WordBreakInfo]) {
    use BreakOpportunity::*;
    use WordBreak::*;

    // Index of the first non-skipped info at or after each position.
    let mut visible = vec![infos.len(); infos.len() + 1];
    for i in (0..infos.len()).rev() {
        visible[i] = if infos[i].skip { visible[i + 1] } else { i };
    }

    let mut prev = WordBreakInfo::default();
    let mut prev_prev = WordBreakInfo::default();
    // Regional indicators ending at `prev`.
    let mut num_ri = 0usize;

    for (i, &next) in infos.iter().enumerate() {
        if next.skip {
            continue;
        }
        if r[i] == Unassigned {
            let next_next = infos.get(visible[i + 1]).copied().unwrap_or_default();
            r[i] = break_between(prev_prev, prev, next, next_next, num_ri);
        }

        prev_prev = prev;
        prev = next;
        num_ri = if next.is(RegionalIndicator) { num_ri + 1 } else { 0 };
    }
}

fn break_between(
    prev_prev: WordBreakInfo,
    prev: WordBreakInfo,
    next: WordBreakInfo,
    next_next: WordBreakInfo,
    num_ri: usize,
) -> BreakOpportunity {
    use BreakOpportunity::*;
    use WordBreak::*;

    if prev.is_ah_letter() && next.is_ah_letter() {
        No // WB5
    } else if prev.is_ah_letter()
        && (next.is(MidLetter) || next.is_mid_num_let_q())
        && next_next.is_ah_letter()
    {
        No // WB6
    } else if prev_prev.is_ah_letter() && (prev.is(MidLetter) || prev.is_mid_num_let_q()) && next.is_ah_letter() {
        No // WB7
    } else if prev.is(HebrewLetter) && next.is(SingleQuote) {
        No // WB7a
    } else if prev.is(HebrewLetter) && next.is(DoubleQuote) && next_next.is(HebrewLetter) {
        No // WB7b
    } else if prev_prev.is(HebrewLetter) && prev.is(DoubleQuote) && next.is(HebrewLetter) {
        No // WB7c
    } else if prev.is(Numeric) && next.is(Numeric) {
        No // WB8
    } else if prev.is_ah_letter() && next.is(Numeric) {
        No // WB9
    } else if prev.is(Numeric) && next.is_ah_letter() {
        No // WB10
    } else if prev_prev.is(Numeric) && (prev.is(MidNum) || prev.is_mid_num_let_q()) && next.is(Numeric) {
        No // WB11
    } else if prev.is(Numeric) && (next.is(MidNum) || next.is_mid_num_let_q()) && next_next.is(Numeric) {
        No // WB12
    } else if prev.is(Katakana) && next.is(Katakana) {
        No // WB13
    } else if (prev.is_ah_letter() || prev.is(Numeric) || prev.is(Katakana) || prev.is(ExtendNumLet))
        && next.is(ExtendNumLet)
    {
        No // WB13a
    } else if prev.is(ExtendNumLet) && (next.is_ah_letter() || next.is(Numeric) || next.is(Katakana)) {
        No // WB13b
    } else if prev.is(RegionalIndicator) && next.is(RegionalIndicator) && num_ri % 2 == 1 {
        No // WB15, WB16
    } else {
        Yes // WB999
    }
}

/// Word break opportunities of `text`.
pub fn word_break(text: &[char]) -> BreakVector {
    let mut r = vec![BreakOpportunity::Unassigned; text.len() + 1];
    let mut infos: Vec<WordBreakInfo> = text.iter().map(|&c| WordBreakInfo::new(c)).collect();

    rules_wb1_wb3d(&mut r, &infos);
    rule_wb4(&mut r, &mut infos);
    rules_wb5_wb999(&mut r, &infos);
    r
}

/// Wrap plain text greedily by turning spaces into line separators.
///
/// When the running width of a line reaches `max_width`, the last space seen
/// on that line becomes U+2028 LINE SEPARATOR. Existing line and paragraph
/// separators start a new line. A line without any space is left overlong.
pub fn wrap_lines<T>(
    items: &mut [T],
    max_width: f32,
    get_width: impl Fn(&T) -> f32,
    get_code_point: impl Fn(&T) -> char,
    mut set_code_point: impl FnMut(&mut T, char),
) {
    let mut last_space: Option<usize> = None;
    let mut width_after_space = 0.0;
    let mut current_width = 0.0;

    for i in 0..items.len() {
        let general_category = ucd::general_category(get_code_point(&items[i]));

        if matches!(general_category, GeneralCategory::Zp | GeneralCategory::Zl) {
            last_space = None;
            current_width = 0.0;
            continue;
        }

        current_width += get_width(&items[i]);
        if general_category == GeneralCategory::Zs {
            last_space = Some(i);
            width_after_space = current_width;
        }

        if current_width > max_width {
            if let Some(space) = last_space.take() {
                set_code_point(&mut items[space], '\u{2028}');
                current_width -= width_after_space;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        let text: Vec<char> = s.chars().collect();
        let breaks = word_break(&text);
        let mut r = Vec::new();
        let mut word = String::new();
        for (i, &c) in text.iter().enumerate() {
            if i > 0 && breaks[i].is_break() {
                r.push(std::mem::take(&mut word));
            }
            word.push(c);
        }
        if !word.is_empty() {
            r.push(word);
        }
        r
    }

    #[test]
    fn letters_and_punctuation() {
        assert_eq!(words("The quick (\"brown\") fox"), vec![
            "The", " ", "quick", " ", "(", "\"", "brown", "\"", ")", " ", "fox"
        ]);
        assert_eq!(words("can't stop"), vec!["can't", " ", "stop"]);
    }

    #[test]
    fn numbers() {
        assert_eq!(words("3.14 1,000"), vec!["3.14", " ", "1,000"]);
        assert_eq!(words("a1b2"), vec!["a1b2"]);
        assert_eq!(words("foo_bar"), vec!["foo_bar"]);
    }

    #[test]
    fn extend_is_transparent() {
        assert_eq!(words("e\u{0301}t\u{0301}e\u{0301} x"), vec!["e\u{0301}t\u{0301}e\u{0301}", " ", "x"]);
        assert_eq!(words("a\u{00AD}b"), vec!["a\u{00AD}b"]);
    }

    #[test]
    fn long_extend_runs() {
        let marks = "\u{0301}".repeat(50_000);
        let text = format!("a{marks}b {marks}");
        assert_eq!(words(&text), vec![format!("a{marks}b"), format!(" {marks}")]);
    }

    #[test]
    fn regional_indicator_pairs() {
        let flags = "\u{1F1F3}\u{1F1F1}\u{1F1E9}\u{200D}\u{1F1EA}\u{1F1EB}";
        assert_eq!(words(flags), vec!["\u{1F1F3}\u{1F1F1}", "\u{1F1E9}\u{200D}\u{1F1EA}", "\u{1F1EB}"]);
    }

    #[test]
    fn spaces_and_newlines() {
        assert_eq!(words("a  b"), vec!["a", "  ", "b"]);
        assert_eq!(words("a\r\nb"), vec!["a", "\r\n", "b"]);
    }

    #[test]
    fn end_points() {
        let text: Vec<char> = "ab".chars().collect();
        let breaks = word_break(&text);
        assert_eq!(breaks.len(), 3);
        assert_eq!(breaks[0], BreakOpportunity::Yes);
        assert_eq!(breaks[2], BreakOpportunity::Yes);
        assert_eq!(word_break(&[]), vec![BreakOpportunity::Yes]);
    }

    #[test]
    fn wrap_at_spaces() {
        let mut text: Vec<char> = "aaa bbb ccc\u{2029}dd ee".chars().collect();
        wrap_lines(&mut text, 5.0, |_| 1.0, |c| *c, |c, new| *c = new);
        let wrapped: String = text.into_iter().collect();
        assert_eq!(wrapped, "aaa\u{2028}bbb\u{2028}ccc\u{2029}dd ee");
    }

    #[test]
    fn wrap_leaves_long_words() {
        let mut text: Vec<char> = "abcdefgh".chars().collect();
        wrap_lines(&mut text, 3.0, |_| 1.0, |c| *c, |c, new| *c = new);
        assert_eq!(text.into_iter().collect::<String>(), "abcdefgh");
    }
}
