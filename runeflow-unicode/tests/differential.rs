//! Compare against other implementations on text whose properties have not
//! changed between Unicode versions.

use runeflow_unicode::bidi::{reorder, BidiContext};
use runeflow_unicode::break_opportunity::BreakOpportunity;
use runeflow_unicode::{graphemes, normalize_str, word_break, NormalizeConfig};
use unicode_segmentation::UnicodeSegmentation;

const SAMPLES: &[&str] = &[
    "",
    "Hello, world!",
    "The quick brown fox jumps over the lazy dog.",
    "e\u{0301}le\u{0300}ve \u{00E9}cole",
    "\u{1100}\u{1161}\u{11A8}\u{AC00}\u{11A8} \u{D55C}\u{AD6D}\u{C5B4}",
    "\u{1F469}\u{200D}\u{1F4BB} \u{1F44D}\u{1F3FD} \u{1F1F3}\u{1F1F1}\u{1F1E9}\u{1F1EA}",
    "line one\r\nline two\nline three",
    "3.14159 and 1,000,000 items cost $20.",
    "don't stop_believing",
    "\u{05E9}\u{05DC}\u{05D5}\u{05DD} world",
    "\u{0645}\u{0631}\u{062D}\u{0628}\u{0627} 123",
    "\u{30AB}\u{30BF}\u{30AB}\u{30CA} \u{6F22}\u{5B57}",
];

#[test]
fn graphemes_match_unicode_segmentation() {
    for sample in SAMPLES {
        let text: Vec<char> = sample.chars().collect();
        let ours: Vec<String> = graphemes(&text).into_iter().map(|g| g.iter().collect()).collect();
        let theirs: Vec<&str> = sample.graphemes(true).collect();
        assert_eq!(ours, theirs, "{:?}", sample);
    }
}

#[test]
fn words_match_unicode_segmentation() {
    for sample in SAMPLES {
        let text: Vec<char> = sample.chars().collect();
        let breaks = word_break(&text);

        let mut ours = Vec::new();
        let mut word = String::new();
        for (i, &c) in text.iter().enumerate() {
            if i > 0 && breaks[i] == BreakOpportunity::Yes {
                ours.push(std::mem::take(&mut word));
            }
            word.push(c);
        }
        if !word.is_empty() {
            ours.push(word);
        }

        let theirs: Vec<&str> = sample.split_word_bounds().collect();
        assert_eq!(ours, theirs, "{:?}", sample);
    }
}

#[test]
fn normal_forms_match_icu() {
    let samples = [
        "e\u{0301}cole",
        "\u{00C5}ngstr\u{00F6}m \u{212B}",
        "q\u{0307}\u{0323}",
        "\u{FB01}ve \u{2460} \u{FF76}\u{FF9E}",
        "\u{1E9B}\u{0323}",
        "\u{D55C}\u{1100}\u{1161}\u{11A8}",
        "x\u{00B2} \u{2126}",
    ];

    let nfc = icu_normalizer::ComposingNormalizer::new_nfc();
    let nfkc = icu_normalizer::ComposingNormalizer::new_nfkc();
    let nfd = icu_normalizer::DecomposingNormalizer::new_nfd();
    let nfkd = icu_normalizer::DecomposingNormalizer::new_nfkd();

    for sample in samples {
        assert_eq!(normalize_str(sample, &NormalizeConfig::nfc()), nfc.normalize(sample), "NFC {:?}", sample);
        assert_eq!(normalize_str(sample, &NormalizeConfig::nfd()), nfd.normalize(sample), "NFD {:?}", sample);
        assert_eq!(normalize_str(sample, &NormalizeConfig::nfkc()), nfkc.normalize(sample), "NFKC {:?}", sample);
        assert_eq!(normalize_str(sample, &NormalizeConfig::nfkd()), nfkd.normalize(sample), "NFKD {:?}", sample);
    }
}

#[test]
fn bidi_levels_match_unicode_bidi() {
    // No brackets and no trailing whitespace, where the two may legitimately
    // differ in L1 handling or bracket pairing versions.
    let samples = [
        "Hello world",
        "abc \u{05D0}\u{05D1}\u{05D2}",
        "\u{05D0}\u{05D1} abc \u{05D2}",
        "\u{05E9}\u{05DC}\u{05D5}\u{05DD} 123 \u{05E2}\u{05D5}\u{05DC}\u{05DD}",
        "\u{0645}\u{0631}\u{062D}\u{0628}\u{0627} 12.5",
        "x \u{0661}\u{0662} y",
        "a-b \u{05D0}-\u{05D1}",
    ];

    for sample in samples {
        let text: Vec<char> = sample.chars().collect();
        let ours = reorder(&text, &BidiContext::default()).levels(text.len());

        let info = unicode_bidi::BidiInfo::new(sample, None);
        let theirs: Vec<Option<i8>> = sample
            .char_indices()
            .map(|(i, _)| Some(info.levels[i].number() as i8))
            .collect();
        assert_eq!(ours, theirs, "{:?}", sample);
    }
}
