use runeflow_unicode::bidi::{bidi, reorder, BidiContext, BidiDirectionMode, Direction};
use runeflow_unicode::break_opportunity::BreakOpportunity;
use runeflow_unicode::normalization::nfc;
use runeflow_unicode::{
    apply_markup, decode_utf16, decode_utf8, fold_lines, grapheme_break, gstring_to_string, line_break,
    normalize, normalize_str, sentence_break, to_gstring, word_break, Grapheme, Iso15924, NormalizeConfig, Phrasing,
};

const TEXTS: &[&str] = &[
    "",
    "a",
    "Hello, world!\n",
    "e\u{0301}\u{0323}\u{0302} \u{1E9B}\u{0323} \u{212B}\u{2126}",
    "\u{05D0}\u{05D1}\u{05D2} (abc) [\u{05D3}] 12.5%\u{2029}second \u{0661}\u{0662} paragraph",
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{1F1F3}\u{1F1F1}\u{2028}\u{202B}x\u{202C}\u{2067}y\u{2069}",
    "\u{FB01}\u{2460}\u{FF76}\u{FF9E}\u{AC00}\u{11A8}\u{1100}\u{1161}",
    "  leading and trailing  \r\n",
];

#[test]
fn nfc_combines_marks() {
    let text = to_gstring("a\u{0301}", &NormalizeConfig::nfc());
    assert_eq!(gstring_to_string(&text), "\u{00E1}");
    assert_eq!(text.len(), 1);
}

#[test]
fn crlf_is_one_grapheme() {
    let text: Vec<char> = "\r\n".chars().collect();
    assert_eq!(runeflow_unicode::graphemes(&text).len(), 1);

    use BreakOpportunity::*;
    let breaks = line_break(&text);
    assert_eq!(breaks[0], Yes);
    assert_eq!(breaks[1], No);
    assert_eq!(breaks[2], Mandatory);
}

#[test]
fn mixed_direction_paragraph() {
    let text: Vec<char> = "abc \u{05D0}\u{05D1}\u{05D2}".chars().collect();
    let context = BidiContext { direction_mode: BidiDirectionMode::AutoLtr, ..BidiContext::default() };
    let r = reorder(&text, &context);
    assert_eq!(r.paragraph_directions, vec![Direction::LeftToRight]);
    let visual: String = r.visual.iter().map(|c| c.code_point).collect();
    assert_eq!(visual, "abc \u{05D2}\u{05D1}\u{05D0}");
}

#[test]
fn brackets_are_mirrored_right_to_left() {
    let mut items: Vec<char> = "(abc)".chars().collect();
    let mut directions = Vec::new();
    let context = BidiContext { direction_mode: BidiDirectionMode::Rtl, ..BidiContext::default() };
    let (len, paragraphs) = bidi(&mut items, |c| *c, |c, mirrored| *c = mirrored, |_, d| directions.push(d), &context);

    assert_eq!(len, 5);
    assert_eq!(paragraphs, vec![Direction::RightToLeft]);
    // The closing bracket is now first and drawn as an opening one.
    assert_eq!(items, vec!['(', 'a', 'b', 'c', ')']);
    assert_eq!(directions[0], Direction::RightToLeft);
    assert_eq!(directions[1], Direction::LeftToRight);
}

#[test]
fn fold_at_spaces() {
    let text: Vec<char> = "aa bb cc".chars().collect();
    let widths = vec![1.0; text.len()];
    let opportunities = line_break(&text);
    // "bb cc" is exactly as wide as the line.
    assert_eq!(fold_lines(&opportunities, &widths, 5.0), vec![3, 5]);
    assert_eq!(fold_lines(&opportunities, &widths, 4.0), vec![3, 3, 2]);
}

#[test]
fn markup_phrasing() {
    let mut text = to_gstring("a[e]b[.]c", &NormalizeConfig::nfc());
    let languages: Vec<_> = text.iter().map(|g| g.language()).collect();
    apply_markup(&mut text, Iso15924::default());

    assert_eq!(text.len(), 3);
    let phrasings: Vec<Phrasing> = text.iter().map(|g| g.phrasing()).collect();
    assert_eq!(phrasings, vec![Phrasing::Regular, Phrasing::Emphasis, Phrasing::Regular]);
    assert!(text.iter().all(|g| g.language() == languages[0]));
}

#[test]
fn normalization_is_idempotent() {
    for config in [NormalizeConfig::nfd(), NormalizeConfig::nfc(), NormalizeConfig::nfkd(), NormalizeConfig::nfkc()] {
        for text in TEXTS {
            let once = normalize_str(text, &config);
            assert_eq!(normalize_str(&once, &config), once, "{:?}", text);
        }
    }
}

#[test]
fn nfc_and_nfd_are_equivalent() {
    for text in TEXTS {
        let nfd = normalize_str(text, &NormalizeConfig::nfd());
        assert_eq!(nfc(&nfd), nfc(text));
        assert_eq!(normalize_str(&nfc(text), &NormalizeConfig::nfd()), nfd);
    }
}

#[test]
fn grapheme_code_points_are_nfc() {
    for text in TEXTS {
        for g in to_gstring(text, &NormalizeConfig::nfc()) {
            assert!((1..=30).contains(&g.size()));
            assert_eq!(Some(g.starter()), g.code_points().next());

            let cluster: String = g.code_points().collect();
            assert_eq!(nfc(&cluster), cluster);
            assert_eq!(Grapheme::new(&g.decomposed()), g);
        }
    }
}

#[test]
fn bidi_is_a_permutation() {
    for text in TEXTS {
        let text: Vec<char> = text.chars().collect();
        for direction_mode in [BidiDirectionMode::Ltr, BidiDirectionMode::Rtl, BidiDirectionMode::AutoLtr] {
            let mut items: Vec<usize> = (0..text.len()).collect();
            let context = BidiContext { direction_mode, ..BidiContext::default() };
            bidi(&mut items, |&i| text[i], |_, _| {}, |_, _| {}, &context);

            let mut sorted = items.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..text.len()).collect::<Vec<_>>());
        }
    }
}

#[test]
fn left_to_right_without_brackets_is_identity() {
    let text: Vec<char> = "Plain text, with punctuation; and 42 numbers.".chars().collect();
    let r = reorder(&text, &BidiContext::default());
    assert_eq!(r.order(), (0..text.len()).collect::<Vec<_>>());
}

#[test]
fn break_vector_end_points() {
    for text in TEXTS {
        let text: Vec<char> = text.chars().collect();
        let n = text.len();

        for breaks in [grapheme_break(&text), word_break(&text), sentence_break(&text)] {
            assert_eq!(breaks.len(), n + 1);
            assert_eq!(breaks[0], BreakOpportunity::Yes);
            assert_eq!(breaks[n], BreakOpportunity::Yes);
        }

        let breaks = line_break(&text);
        assert_eq!(breaks.len(), n + 1);
        assert_eq!(breaks[n], BreakOpportunity::Mandatory);
        assert!(breaks.iter().all(|&o| o != BreakOpportunity::Unassigned));
    }
}

#[test]
fn paragraph_separator_is_mandatory() {
    let text: Vec<char> = "one\u{2029}two\u{2029}".chars().collect();
    let breaks = line_break(&text);
    assert_eq!(breaks[4], BreakOpportunity::Mandatory);
    assert_eq!(breaks[8], BreakOpportunity::Mandatory);
}

#[test]
fn fitted_lines_cover_clusters() {
    for text in TEXTS {
        let text = normalize(&text.chars().collect::<Vec<_>>(), &NormalizeConfig::nfc());
        let widths: Vec<f32> = text.iter().map(|c| if c.is_whitespace() { -1.0 } else { 1.5 }).collect();
        for max_width in [0.5, 3.0, 10.0, 1000.0] {
            let lengths = fold_lines(&line_break(&text), &widths, max_width);
            assert_eq!(lengths.iter().sum::<usize>(), text.len());
            assert!(lengths.iter().all(|&n| n > 0));
        }
    }
}

#[test]
fn malformed_utf_is_replaced() {
    assert_eq!(decode_utf8(b"a\xFFb\xE2\x82"), vec!['a', '\u{FFFD}', 'b', '\u{FFFD}']);
    assert_eq!(decode_utf16(&[0x61, 0xD800, 0x62]), vec!['a', '\u{FFFD}', 'b']);
}
