//! Grapheme cluster boundaries (UAX #29, rules GB1 to GB999)

use crate::break_opportunity::{split_ranges, BreakOpportunity, BreakVector};
use crate::ucd::{self, GraphemeClusterBreak, IndicConjunctBreak};

/// Streaming state of the grapheme break rules.
///
/// Feed code points in order to [`GraphemeBreakState::breaks_before`].
#[derive(Debug, Clone, Default)]
pub struct GraphemeBreakState {
    previous: Option<GraphemeClusterBreak>,
    /// Consecutive Regional_Indicator code points ending at `previous`.
    ri_count: usize,
    /// `previous` ends an `Extended_Pictographic Extend* ZWJ?` sequence.
    in_extended_pictographic: bool,
    /// `previous` ends `Consonant [Extend Linker]*`; the flag is set once a
    /// Linker has been seen.
    conjunct: Option<bool>,
}

impl GraphemeBreakState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous code points, the next one starts a cluster.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Consume `c`, returning true when a cluster boundary precedes it.
    pub fn breaks_before(&mut self, c: char) -> bool {
        let next = ucd::grapheme_cluster_break(c);
        let pictographic = ucd::is_extended_pictographic(c);
        let conjunct_break = ucd::indic_conjunct_break(c);

        let r = match self.previous {
            None => true, // GB1
            Some(prev) => self.rule(prev, next, pictographic, conjunct_break),
        };

        self.in_extended_pictographic = pictographic
            || (self.in_extended_pictographic
                && self.previous != Some(GraphemeClusterBreak::ZWJ)
                && matches!(next, GraphemeClusterBreak::Extend | GraphemeClusterBreak::ZWJ));
        self.conjunct = match (conjunct_break, self.conjunct) {
            (IndicConjunctBreak::Consonant, _) => Some(false),
            (IndicConjunctBreak::Linker, Some(_)) => Some(true),
            (IndicConjunctBreak::Extend, linked) => linked,
            _ => None,
        };
        self.ri_count = if next == GraphemeClusterBreak::RegionalIndicator { self.ri_count + 1 } else { 0 };
        self.previous = Some(next);
        r
    }

    fn rule(
        &self,
        prev: GraphemeClusterBreak,
        next: GraphemeClusterBreak,
        pictographic: bool,
        conjunct_break: IndicConjunctBreak,
    ) -> bool {
        use GraphemeClusterBreak::*;

        if prev == CR && next == LF {
            false // GB3
        } else if matches!(prev, Control | CR | LF) {
            true // GB4
        } else if matches!(next, Control | CR | LF) {
            true // GB5
        } else if prev == L && matches!(next, L | V | LV | LVT) {
            false // GB6
        } else if matches!(prev, LV | V) && matches!(next, V | T) {
            false // GB7
        } else if matches!(prev, LVT | T) && next == T {
            false // GB8
        } else if matches!(next, Extend | ZWJ) {
            false // GB9
        } else if next == SpacingMark {
            false // GB9a
        } else if prev == Prepend {
            false // GB9b
        } else if conjunct_break == IndicConjunctBreak::Consonant && self.conjunct == Some(true) {
            false // GB9c
        } else if prev == ZWJ && self.in_extended_pictographic && pictographic {
            false // GB11
        } else if prev == RegionalIndicator && next == RegionalIndicator && self.ri_count % 2 == 1 {
            false // GB12, GB13
        } else {
            true // GB999
        }
    }
}

/// Grapheme cluster break opportunities of `text`.
pub fn grapheme_break(text: &[char]) -> BreakVector {
    let mut state = GraphemeBreakState::new();
    let mut r: BreakVector = text
        .iter()
        .map(|&c| if state.breaks_before(c) { BreakOpportunity::Yes } else { BreakOpportunity::No })
        .collect();
    r.push(BreakOpportunity::Yes); // GB2
    r
}

/// Split `text` into grapheme clusters.
pub fn graphemes(text: &[char]) -> Vec<&[char]> {
    split_ranges(&grapheme_break(text), BreakOpportunity::is_break)
        .into_iter()
        .map(|range| &text[range])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(s: &str) -> Vec<String> {
        let text: Vec<char> = s.chars().collect();
        graphemes(&text).into_iter().map(|g| g.iter().collect()).collect()
    }

    #[test]
    fn crlf_is_one_cluster() {
        assert_eq!(clusters("\r\n"), vec!["\r\n"]);
        assert_eq!(clusters("\n\r"), vec!["\n", "\r"]);
        let text: Vec<char> = "\r\n".chars().collect();
        assert_eq!(
            grapheme_break(&text),
            vec![BreakOpportunity::Yes, BreakOpportunity::No, BreakOpportunity::Yes]
        );
    }

    #[test]
    fn combining_marks() {
        assert_eq!(clusters("a\u{0301}b"), vec!["a\u{0301}", "b"]);
        assert_eq!(clusters("\u{0915}\u{093F}"), vec!["\u{0915}\u{093F}"]);
    }

    #[test]
    fn consonant_conjuncts() {
        // Ka, virama, ta: one cluster.
        assert_eq!(clusters("\u{0915}\u{094D}\u{0924}"), vec!["\u{0915}\u{094D}\u{0924}"]);
        assert_eq!(
            clusters("\u{0915}\u{093C}\u{200D}\u{094D}\u{0924}\u{094D}\u{092F}"),
            vec!["\u{0915}\u{093C}\u{200D}\u{094D}\u{0924}\u{094D}\u{092F}"]
        );
        // Without a virama the consonants stay apart.
        assert_eq!(clusters("\u{0915}\u{093C}\u{0924}"), vec!["\u{0915}\u{093C}", "\u{0924}"]);
        // A virama alone does not start a conjunct.
        assert_eq!(clusters("a\u{094D}\u{0924}"), vec!["a\u{094D}", "\u{0924}"]);
        // Tamil does not form them.
        assert_eq!(clusters("\u{0B95}\u{0BCD}\u{0BA4}"), vec!["\u{0B95}\u{0BCD}", "\u{0BA4}"]);
    }

    #[test]
    fn hangul_jamo() {
        assert_eq!(clusters("\u{1100}\u{1161}\u{11A8}\u{1100}"), vec!["\u{1100}\u{1161}\u{11A8}", "\u{1100}"]);
    }

    #[test]
    fn emoji_zwj_sequence() {
        // Man, ZWJ, woman, ZWJ, girl.
        assert_eq!(clusters("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}").len(), 1);
        // Skin tone modifier attaches.
        assert_eq!(clusters("\u{1F44D}\u{1F3FD}").len(), 1);
        // ZWJ after a letter does not glue the pictograph.
        assert_eq!(clusters("a\u{200D}\u{1F469}").len(), 2);
    }

    #[test]
    fn regional_indicator_pairs() {
        let flags = "\u{1F1F3}\u{1F1F1}\u{1F1E9}\u{1F1EA}\u{1F1EB}";
        assert_eq!(
            clusters(flags),
            vec!["\u{1F1F3}\u{1F1F1}", "\u{1F1E9}\u{1F1EA}", "\u{1F1EB}"]
        );
    }

    #[test]
    fn empty_text() {
        assert_eq!(grapheme_break(&[]), vec![BreakOpportunity::Yes]);
        assert!(graphemes(&[]).is_empty());
    }
}
