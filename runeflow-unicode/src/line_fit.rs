//! Folding text into lines of a maximum width
//!
//! Widths are given per cluster. A negative width marks whitespace: its
//! magnitude is the advance, but when it trails a line it does not count
//! against the line's width.

use crate::break_opportunity::BreakOpportunity;

/// Width of a line, excluding trailing whitespace.
pub fn line_width(widths: &[f32]) -> f32 {
    match widths.iter().rposition(|&w| w >= 0.0) {
        Some(last_visible) => widths[..=last_visible].iter().map(|w| w.abs()).sum(),
        None => 0.0,
    }
}

/// Lengths of the lines when splitting on `is_end`; the end of text always ends a line.
fn split_lines(opportunities: &[BreakOpportunity], is_end: impl Fn(BreakOpportunity) -> bool) -> Vec<usize> {
    let mut r = Vec::new();
    let mut length = 0;
    for (i, &opportunity) in opportunities.iter().enumerate().skip(1) {
        length += 1;
        if is_end(opportunity) || i + 1 == opportunities.len() {
            r.push(length);
            length = 0;
        }
    }
    r
}

/// Line lengths when only breaking at mandatory opportunities.
pub fn mandatory_lines(opportunities: &[BreakOpportunity]) -> Vec<usize> {
    split_lines(opportunities, |o| o == BreakOpportunity::Mandatory)
}

/// Line lengths when breaking at every opportunity.
pub fn optional_lines(opportunities: &[BreakOpportunity]) -> Vec<usize> {
    split_lines(opportunities, BreakOpportunity::is_break)
}

/// Width of the widest line.
fn widest(widths: &[f32], lengths: &[usize]) -> f32 {
    let mut start = 0;
    let mut r = 0.0f32;
    for &length in lengths {
        r = r.max(line_width(&widths[start..start + length]));
        start += length;
    }
    r
}

fn all_fit(widths: &[f32], lengths: &[usize], max_width: f32) -> bool {
    widest(widths, lengths) <= max_width
}

/// The narrowest the text can be laid out: its widest unbreakable run.
pub fn minimum_width(widths: &[f32], opportunities: &[BreakOpportunity]) -> f32 {
    widest(widths, &optional_lines(opportunities))
}

/// The widest the text needs to be: its widest paragraph line.
pub fn maximum_width(widths: &[f32], opportunities: &[BreakOpportunity]) -> f32 {
    widest(widths, &mandatory_lines(opportunities))
}

fn opportunity(opportunities: &[BreakOpportunity], i: usize) -> BreakOpportunity {
    opportunities.get(i).copied().unwrap_or(BreakOpportunity::Mandatory)
}

/// Walk forward until the line is too wide; returns the last usable break.
///
/// Indices are into `opportunities`, where opportunity `i` ends the line
/// after cluster `i - 1`. Returns `first` when no break was found.
fn fast_fit(opportunities: &[BreakOpportunity], widths: &[f32], first: usize, max_width: f32) -> usize {
    let mut width = 0.0;
    let mut end_of_line = first;
    let mut i = first;
    while let Some(w) = widths.get(i - 1) {
        width += w.abs();
        match opportunity(opportunities, i) {
            _ if width > max_width => return end_of_line,
            BreakOpportunity::Mandatory => return i,
            BreakOpportunity::Yes => end_of_line = i,
            _ => {}
        }
        i += 1;
    }
    end_of_line
}

/// Continue past the fast fit while the width without trailing whitespace fits.
fn slow_fit(
    opportunities: &[BreakOpportunity],
    widths: &[f32],
    first: usize,
    mut end_of_line: usize,
    max_width: f32,
) -> usize {
    let mut i = end_of_line;
    while i <= widths.len() {
        if line_width(&widths[first - 1..i]) > max_width {
            return end_of_line;
        }
        match opportunity(opportunities, i) {
            BreakOpportunity::Mandatory => return i,
            BreakOpportunity::Yes => end_of_line = i,
            _ => {}
        }
        i += 1;
    }
    end_of_line
}

/// When nothing fits, overflow up to the next break opportunity.
fn finish_fit(opportunities: &[BreakOpportunity], first: usize, mut end_of_line: usize) -> usize {
    if end_of_line == first {
        while opportunity(opportunities, end_of_line) == BreakOpportunity::No {
            end_of_line += 1;
        }
    }
    end_of_line + 1
}

/// Line lengths after folding to `max_width`.
///
/// Lines that cannot be broken small enough overflow `max_width`.
pub fn fit_lines(opportunities: &[BreakOpportunity], widths: &[f32], max_width: f32) -> Vec<usize> {
    debug_assert_eq!(opportunities.len(), widths.len() + 1);

    let mut r = Vec::new();
    let mut first = 1;
    while first <= widths.len() {
        let end_of_line = fast_fit(opportunities, widths, first, max_width);
        let end_of_line = slow_fit(opportunities, widths, first, end_of_line, max_width);
        let end_of_line = finish_fit(opportunities, first, end_of_line).min(widths.len() + 1);

        let length = end_of_line - first;
        r.push(length);
        first += length;
    }
    r
}

/// Line lengths for `widths`, split at mandatory breaks and folded to `max_width`.
///
/// When every paragraph line already fits, no optional break is used.
/// The lengths sum to the number of clusters and each is at least one.
pub fn fold_lines(opportunities: &[BreakOpportunity], widths: &[f32], max_width: f32) -> Vec<usize> {
    let r = mandatory_lines(opportunities);
    if all_fit(widths, &r, max_width) {
        return r;
    }
    fit_lines(opportunities, widths, max_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_break::line_break;
    use BreakOpportunity::*;

    fn text(s: &str) -> (Vec<BreakOpportunity>, Vec<f32>) {
        let chars: Vec<char> = s.chars().collect();
        let widths = chars.iter().map(|c| if c.is_whitespace() { -1.0 } else { 1.0 }).collect();
        (line_break(&chars), widths)
    }

    #[test]
    fn fold_at_spaces() {
        let chars: Vec<char> = "aa bb cc".chars().collect();
        let opportunities = line_break(&chars);
        let widths = vec![1.0; chars.len()];

        // "bb cc" is exactly 5 wide, which still fits.
        assert_eq!(fold_lines(&opportunities, &widths, 5.0), vec![3, 5]);
        assert_eq!(fold_lines(&opportunities, &widths, 4.99), vec![3, 3, 2]);
        assert_eq!(fold_lines(&opportunities, &widths, 4.0), vec![3, 3, 2]);
    }

    #[test]
    fn exactly_full_line() {
        let (opportunities, widths) = text("abc def");
        assert_eq!(fold_lines(&opportunities, &widths, 7.0), vec![7]);
        assert_eq!(fold_lines(&opportunities, &widths, 6.0), vec![4, 3]);
        assert_eq!(fold_lines(&opportunities, &widths, 3.0), vec![4, 3]);
        assert_eq!(fold_lines(&opportunities, &widths, 2.0), vec![4, 3]);
    }

    #[test]
    fn trailing_whitespace_does_not_count() {
        let (opportunities, widths) = text("aaaa bbbb");
        assert_eq!(fold_lines(&opportunities, &widths, 4.0), vec![5, 4]);
        let (opportunities, widths) = text("aaaa     bbbb");
        assert_eq!(fold_lines(&opportunities, &widths, 4.0), vec![9, 4]);
    }

    #[test]
    fn mandatory_lines_fit() {
        let (opportunities, widths) = text("ab cd\nef");
        assert_eq!(mandatory_lines(&opportunities), vec![6, 2]);
        assert_eq!(fold_lines(&opportunities, &widths, 10.0), vec![6, 2]);
        assert_eq!(fold_lines(&opportunities, &widths, 3.0), vec![3, 3, 2]);
    }

    #[test]
    fn overlong_word_overflows() {
        let (opportunities, widths) = text("abcdefgh ij");
        assert_eq!(fold_lines(&opportunities, &widths, 3.0), vec![9, 2]);
    }

    #[test]
    fn lengths_cover_text() {
        let (opportunities, widths) = text("The quick brown fox jumps over the lazy dog.\nAnd again.");
        for max_width in [1.0, 4.0, 7.5, 20.0, 100.0] {
            let lengths = fold_lines(&opportunities, &widths, max_width);
            assert_eq!(lengths.iter().sum::<usize>(), widths.len());
            assert!(lengths.iter().all(|&n| n >= 1));
        }
    }

    #[test]
    fn widths() {
        let (opportunities, widths) = text("ab cdef\ng");
        assert_eq!(minimum_width(&widths, &opportunities), 4.0);
        assert_eq!(maximum_width(&widths, &opportunities), 7.0);
        assert_eq!(optional_lines(&opportunities), vec![3, 5, 1]);
    }

    #[test]
    fn empty() {
        assert!(fold_lines(&[Mandatory], &[], 10.0).is_empty());
        assert!(mandatory_lines(&[Mandatory]).is_empty());
    }
}
