//! Strings of graphemes

use crate::grapheme::Grapheme;
use crate::grapheme_break::graphemes;
use crate::normalization::{normalize, NormalizeConfig};

/// A string of grapheme clusters.
pub type GString = Vec<Grapheme>;

/// Normalize `text`, then split it into grapheme clusters.
pub fn to_gstring(text: &str, config: &NormalizeConfig) -> GString {
    let code_points: Vec<char> = text.chars().collect();
    chars_to_gstring(&code_points, config)
}

pub fn chars_to_gstring(text: &[char], config: &NormalizeConfig) -> GString {
    let normalized = normalize(text, config);
    graphemes(&normalized)
        .into_iter()
        .map(|cluster| if config.compose { Grapheme::from_composed(cluster) } else { Grapheme::new(cluster) })
        .collect()
}

/// The NFC text of a grapheme string.
pub fn gstring_to_string(text: &[Grapheme]) -> String {
    text.iter().flat_map(|g| g.code_points()).collect()
}

/// The starter of every grapheme, the form the segmenters work on.
pub fn starters(text: &[Grapheme]) -> Vec<char> {
    text.iter().map(|g| g.starter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_marks_form_one_grapheme() {
        let s = to_gstring("a\u{0301}", &NormalizeConfig::nfc());
        assert_eq!(s.len(), 1);
        assert_eq!(s[0], '\u{00E1}');
        assert_eq!(gstring_to_string(&s), "\u{00E1}");
    }

    #[test]
    fn round_trip() {
        let text = "Hello, \u{05D0}\u{05D1} \u{1F469}\u{200D}\u{1F4BB}!";
        let s = to_gstring(text, &NormalizeConfig::nfc());
        assert_eq!(gstring_to_string(&s), text);
        assert_eq!(s.len(), 12);
    }

    #[test]
    fn paragraphs() {
        let s = to_gstring("a\r\nb", &NormalizeConfig::nfc_ps_noctr());
        assert_eq!(gstring_to_string(&s), "a\u{2029}b");
        assert_eq!(starters(&s), vec!['a', '\u{2029}', 'b']);
    }
}
