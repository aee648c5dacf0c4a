//! Runs the UCD test files in `tests/data`.
//!
//! The segmentation files are Unicode 15.1, matching the compiled property
//! data. `LineBreakTest.txt` is generated without the LB25 tailoring for
//! numbers; the bidi files are the 8.0 release.

use anyhow::{anyhow, Context, Result};
use runeflow_unicode::bidi::{reorder, reorder_classes, BidiContext, BidiDirectionMode, Direction};
use runeflow_unicode::ucd::BidiClass;
use runeflow_unicode::{grapheme_break, line_break, sentence_break, word_break, BreakVector};
use std::path::PathBuf;

fn load(name: &str) -> Result<String> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data");
    let path = dir.join(format!("{}.txt", name));
    std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_code_point(s: &str) -> Result<char> {
    u32::from_str_radix(s, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| anyhow!("Invalid code point {:?}", s))
}

/// A line of a break test: the code points and whether each position breaks.
struct BreakTest {
    line_nr: usize,
    code_points: Vec<char>,
    breaks: Vec<bool>,
    /// Rule number deciding each position, from the comment; may be empty.
    rules: Vec<String>,
}

fn parse_break_tests(text: &str) -> Result<Vec<BreakTest>> {
    let mut r = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let (data, comment) = line.split_once('#').unwrap_or((line, ""));
        let data = data.trim();
        if data.is_empty() {
            continue;
        }

        let rules = comment
            .split_whitespace()
            .filter_map(|token| token.strip_prefix('[')?.strip_suffix(']'))
            .map(str::to_string)
            .collect();
        let mut test = BreakTest { line_nr: i + 1, code_points: Vec::new(), breaks: Vec::new(), rules };
        for token in data.split_whitespace() {
            match token {
                "÷" => test.breaks.push(true),
                "×" => test.breaks.push(false),
                hex => test.code_points.push(parse_code_point(hex)?),
            }
        }
        anyhow::ensure!(
            test.breaks.len() == test.code_points.len() + 1,
            "Malformed break test on line {}",
            test.line_nr
        );
        if test.rules.len() != test.breaks.len() {
            test.rules.clear();
        }
        r.push(test);
    }
    Ok(r)
}

/// Compare every position from `first` on; returns the number of positions
/// where the engine breaks and the file does not because of a rule that
/// `tailored` accepts.
fn run_break_tests(
    name: &str,
    first: usize,
    algorithm: impl Fn(&[char]) -> BreakVector,
    tailored: impl Fn(&str) -> bool,
) -> usize {
    let text = load(name).unwrap();
    let tests = parse_break_tests(&text).unwrap();
    assert!(!tests.is_empty(), "{} has no tests", name);

    let mut tailorings = 0;
    for test in &tests {
        let result: Vec<bool> = algorithm(&test.code_points).iter().map(|o| o.is_break()).collect();
        let mut expected = test.breaks.clone();
        for (i, rule) in test.rules.iter().enumerate().skip(first) {
            if result.get(i) == Some(&true) && !expected[i] && tailored(rule) {
                expected[i] = true;
                tailorings += 1;
            }
        }
        assert_eq!(
            result[first..],
            expected[first..],
            "{} line {}: {:04X?}",
            name,
            test.line_nr,
            test.code_points.iter().map(|&c| u32::from(c)).collect::<Vec<_>>()
        );
    }
    tailorings
}

#[test]
fn grapheme_break_test() {
    assert_eq!(run_break_tests("GraphemeBreakTest", 0, grapheme_break, |_| false), 0);
}

#[test]
fn word_break_test() {
    assert_eq!(run_break_tests("WordBreakTest", 0, word_break, |_| false), 0);
}

#[test]
fn sentence_break_test() {
    assert_eq!(run_break_tests("SentenceBreakTest", 0, sentence_break, |_| false), 0);
}

#[test]
fn line_break_test() {
    // The file marks the start of text as no-break (LB2), where the vector
    // records the start as a boundary; mandatory breaks count as breaks.
    // Numbers follow the LB25 regular expression, which keeps fewer pairs
    // together than the pair rules the file was generated with.
    run_break_tests("LineBreakTest", 1, line_break, |rule| rule.starts_with("25."));
}

fn parse_levels(s: &str) -> Result<Vec<Option<i8>>> {
    s.split_whitespace()
        .map(|level| match level {
            "x" => Ok(None),
            level => level.parse().map(Some).map_err(|e| anyhow!("Invalid level {:?}: {}", level, e)),
        })
        .collect()
}

fn parse_order(s: &str) -> Result<Vec<usize>> {
    s.split_whitespace()
        .map(|i| i.parse().map_err(|e| anyhow!("Invalid index {:?}: {}", i, e)))
        .collect()
}

#[test]
fn bidi_test() {
    let text = load("BidiTest").unwrap();

    let mut levels = Vec::new();
    let mut order = Vec::new();
    let mut count = 0;

    for (line_nr, line) in text.lines().enumerate().map(|(i, line)| (i + 1, line)) {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        } else if let Some(value) = line.strip_prefix("@Levels:") {
            levels = parse_levels(value).unwrap();
            continue;
        } else if let Some(value) = line.strip_prefix("@Reorder:") {
            order = parse_order(value).unwrap();
            continue;
        } else if line.starts_with('@') {
            continue;
        }

        let (classes, bitset) = line.split_once(';').unwrap();
        let classes: Vec<BidiClass> = classes
            .split_whitespace()
            .map(|alias| BidiClass::from_alias(alias).unwrap())
            .collect();
        let bitset: u8 = bitset.trim().parse().unwrap();

        // Tests containing a paragraph separator before the end are run as
        // one paragraph by the reference; skip them.
        if classes.iter().rev().skip(1).any(|&c| c == BidiClass::B) {
            continue;
        }

        for (bit, direction_mode) in [
            (1, BidiDirectionMode::AutoLtr),
            (2, BidiDirectionMode::Ltr),
            (4, BidiDirectionMode::Rtl),
        ] {
            if bitset & bit == 0 {
                continue;
            }

            let context = BidiContext {
                direction_mode,
                enable_mirrored_brackets: false,
                enable_line_separator: false,
            };
            let r = reorder_classes(&classes, &context);
            assert_eq!(r.levels(classes.len()), levels, "BidiTest line {} ({:?})", line_nr, direction_mode);
            assert_eq!(r.order(), order, "BidiTest line {} ({:?})", line_nr, direction_mode);
            count += 1;
        }
    }
    assert!(count > 0);
}

#[test]
fn bidi_character_test() {
    let text = load("BidiCharacterTest").unwrap();

    let mut count = 0;
    for (line_nr, line) in text.lines().enumerate().map(|(i, line)| (i + 1, line)) {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').collect();
        assert_eq!(fields.len(), 5, "BidiCharacterTest line {}", line_nr);

        let code_points: Vec<char> = fields[0].split_whitespace().map(|s| parse_code_point(s).unwrap()).collect();
        let direction_mode = match fields[1] {
            "0" => BidiDirectionMode::Ltr,
            "1" => BidiDirectionMode::Rtl,
            _ => BidiDirectionMode::AutoLtr,
        };
        let paragraph_direction = match fields[2] {
            "1" => Direction::RightToLeft,
            _ => Direction::LeftToRight,
        };
        let levels = parse_levels(fields[3]).unwrap();
        let order = parse_order(fields[4]).unwrap();

        let context = BidiContext { direction_mode, ..BidiContext::default() };
        let r = reorder(&code_points, &context);
        assert_eq!(r.paragraph_directions.first(), Some(&paragraph_direction), "BidiCharacterTest line {}", line_nr);
        assert_eq!(r.levels(code_points.len()), levels, "BidiCharacterTest line {}", line_nr);
        assert_eq!(r.order(), order, "BidiCharacterTest line {}", line_nr);
        count += 1;
    }
    assert!(count > 0);
}
