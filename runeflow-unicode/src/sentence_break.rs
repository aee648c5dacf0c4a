//! Sentence boundaries (UAX #29, rules SB1 to SB998)

use crate::break_opportunity::{BreakOpportunity, BreakVector};
use crate::ucd::{self, SentenceBreak};

#[derive(Debug, Clone, Copy)]
struct SentenceBreakInfo {
    property: SentenceBreak,
    /// Extend or Format absorbed into the previous character by SB5.
    skip: bool,
}

impl SentenceBreakInfo {
    fn is(&self, property: SentenceBreak) -> bool {
        self.property == property
    }

    fn is_para_sep(&self) -> bool {
        matches!(self.property, SentenceBreak::Sep | SentenceBreak::CR | SentenceBreak::LF)
    }

    fn is_s_a_term(&self) -> bool {
        matches!(self.property, SentenceBreak::STerm | SentenceBreak::ATerm)
    }
}

/// The `SATerm Close* Sp*` suffix ending just before a position.
#[derive(Debug, Default)]
struct Terminator {
    term: Option<SentenceBreak>,
    sp: usize,
}

fn terminator_before(infos: &[SentenceBreakInfo]) -> Terminator {
    let mut r = Terminator::default();
    let mut it = infos.iter().rev().filter(|info| !info.skip).peekable();

    while it.next_if(|info| info.is(SentenceBreak::Sp)).is_some() {
        r.sp += 1;
    }
    while it.next_if(|info| info.is(SentenceBreak::Close)).is_some() {}
    r.term = it.next().filter(|info| info.is_s_a_term()).map(|info| info.property);
    r
}

/// SB8: the next letter-like character is `Lower`.
fn lower_follows(infos: &[SentenceBreakInfo]) -> bool {
    use SentenceBreak::*;

    infos
        .iter()
        .filter(|info| !info.skip)
        .find(|info| matches!(info.property, OLetter | Upper | Lower) || info.is_para_sep() || info.is_s_a_term())
        .map(|info| info.is(Lower))
        .unwrap_or(false)
}

/// Sentence break opportunities of `text`.
pub fn sentence_break(text: &[char]) -> BreakVector {
    use BreakOpportunity::*;
    use SentenceBreak::*;

    let mut infos: Vec<SentenceBreakInfo> = text
        .iter()
        .map(|&c| SentenceBreakInfo { property: ucd::sentence_break(c), skip: false })
        .collect();

    let mut r = vec![Unassigned; text.len() + 1];
    if let Some(first) = r.first_mut() {
        *first = Yes; // SB1
    }
    if let Some(last) = r.last_mut() {
        *last = Yes; // SB2
    }

    for i in 1..infos.len() {
        let prev = infos[i - 1];
        let next = infos[i];

        if prev.is(CR) && next.is(LF) {
            r[i] = No; // SB3
        } else if prev.is_para_sep() {
            r[i] = Yes; // SB4
        } else if matches!(next.property, Extend | Format) {
            r[i] = No; // SB5
            infos[i].skip = true;
        }
    }

    for i in 1..infos.len() {
        if r[i] != Unassigned {
            continue;
        }

        let next = infos[i];
        let mut before = infos[..i].iter().rev().filter(|info| !info.skip);
        let prev = before.next().map(|info| info.property);
        let prev_prev = before.next().map(|info| info.property);
        let terminator = terminator_before(&infos[..i]);

        r[i] = if prev == Some(ATerm) && next.is(Numeric) {
            No // SB6
        } else if matches!(prev_prev, Some(Upper | Lower)) && prev == Some(ATerm) && next.is(Upper) {
            No // SB7
        } else if terminator.term == Some(ATerm) && lower_follows(&infos[i..]) {
            No // SB8
        } else if terminator.term.is_some() && (next.is(SContinue) || next.is_s_a_term()) {
            No // SB8a
        } else if terminator.term.is_some() && terminator.sp == 0 && (next.is(Close) || next.is(Sp) || next.is_para_sep()) {
            No // SB9
        } else if terminator.term.is_some() && (next.is(Sp) || next.is_para_sep()) {
            No // SB10
        } else if terminator.term.is_some() {
            Yes // SB11
        } else {
            No // SB998
        };
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(s: &str) -> Vec<String> {
        let text: Vec<char> = s.chars().collect();
        let breaks = sentence_break(&text);
        let mut r = Vec::new();
        let mut sentence = String::new();
        for (i, &c) in text.iter().enumerate() {
            if i > 0 && breaks[i].is_break() {
                r.push(std::mem::take(&mut sentence));
            }
            sentence.push(c);
        }
        if !sentence.is_empty() {
            r.push(sentence);
        }
        r
    }

    #[test]
    fn simple_sentences() {
        assert_eq!(sentences("Hello there. How are you? Fine!"), vec![
            "Hello there. ",
            "How are you? ",
            "Fine!"
        ]);
    }

    #[test]
    fn abbreviations_and_numbers() {
        assert_eq!(sentences("Mr. Smith is here."), vec!["Mr. ", "Smith is here."]);
        assert_eq!(sentences("e.g. this one."), vec!["e.g. this one."]);
        assert_eq!(sentences("Pi is 3.14 today."), vec!["Pi is 3.14 today."]);
        assert_eq!(sentences("U.S.A. rocks"), vec!["U.S.A. rocks"]);
    }

    #[test]
    fn closing_punctuation() {
        assert_eq!(sentences("(He left.) Then"), vec!["(He left.) ", "Then"]);
        assert_eq!(sentences("\u{201C}Go!\u{201D} She"), vec!["\u{201C}Go!\u{201D} ", "She"]);
    }

    #[test]
    fn paragraph_separators() {
        assert_eq!(sentences("one\ntwo"), vec!["one\n", "two"]);
        assert_eq!(sentences("end.\r\nNext"), vec!["end.\r\n", "Next"]);
    }

    #[test]
    fn end_points() {
        assert_eq!(sentence_break(&[]), vec![BreakOpportunity::Yes]);
        let text: Vec<char> = "a.".chars().collect();
        assert_eq!(
            sentence_break(&text),
            vec![BreakOpportunity::Yes, BreakOpportunity::No, BreakOpportunity::Yes]
        );
    }
}
