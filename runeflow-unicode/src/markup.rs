//! Inline `[tag]` markup
//!
//! `[e]` selects a phrasing, `[nl-NL]` a language, `[.]` goes back to the
//! defaults and `[[` is a literal `[`. Anything else is kept as text.

use crate::gstring::GString;
use crate::grapheme::Grapheme;
use crate::iso::{Iso15924, Iso639};
use crate::language::LanguageTag;
use crate::phrasing::Phrasing;
use crate::ucd;

#[derive(Debug, Clone, Copy, Default)]
struct Attributes {
    phrasing: Phrasing,
    language: Option<LanguageTag>,
}

impl Attributes {
    fn apply(&self, mut g: Grapheme) -> Grapheme {
        g.set_phrasing(self.phrasing);
        if let Some(tag) = &self.language {
            g.set_language_tag(tag);
        }
        g
    }

    /// Execute a complete command; `false` when it is not a valid command.
    fn execute(&mut self, command: &str) -> bool {
        let mut chars = command.chars();
        match (chars.next(), chars.next()) {
            (Some('.'), None) => {
                *self = Self::default();
                true
            }
            (Some(c), None) => match Phrasing::from_markup_char(c) {
                Some(phrasing) => {
                    self.phrasing = phrasing;
                    true
                }
                None => false,
            },
            (Some(c), Some(_)) if c.is_ascii_alphabetic() => match LanguageTag::parse(command) {
                Ok(tag) => {
                    self.language = Some(tag.expand());
                    true
                }
                Err(e) => {
                    log::debug!("Ignoring markup [{}]: {}", command, e);
                    false
                }
            },
            _ => false,
        }
    }
}

/// Output side of the in-place rewrite.
struct Writer<'a> {
    text: &'a mut [Grapheme],
    len: usize,
}

impl Writer<'_> {
    fn push(&mut self, g: Grapheme) {
        debug_assert!(self.len < self.text.len());
        self.text[self.len] = g;
        self.len += 1;
    }

    fn push_literal(&mut self, attributes: &Attributes, command: &str, close: bool) {
        self.push(attributes.apply(Grapheme::from_char('[')));
        for c in command.chars() {
            self.push(attributes.apply(Grapheme::from_char(c)));
        }
        if close {
            self.push(attributes.apply(Grapheme::from_char(']')));
        }
    }
}

/// Interpret markup in `text`, rewriting it in place.
///
/// Graphemes that follow a command take its phrasing and language. Returns
/// the new length, which is never more than the old one; the graphemes past
/// it are left unspecified.
pub fn apply_markup_in_place(text: &mut [Grapheme]) -> usize {
    let mut attributes = Attributes::default();
    let mut command: Option<String> = None;
    let mut out = Writer { text, len: 0 };

    // The writer trails the reader: a command is only written back after
    // all of its characters have been read.
    for i in 0..out.text.len() {
        let g = out.text[i];

        let Some(capture) = command.as_mut() else {
            if g == '[' {
                command = Some(String::new());
            } else {
                out.push(attributes.apply(g));
            }
            continue;
        };

        if g == ']' {
            let valid = attributes.execute(capture.as_str());
            if !valid {
                let capture = std::mem::take(capture);
                out.push_literal(&attributes, &capture, true);
            }
            command = None;
        } else if g == '[' && capture.is_empty() {
            out.push(attributes.apply(g));
            command = None;
        } else if g.size() == 1 && g.is_ascii() {
            capture.push(g.starter());
        } else {
            let capture = std::mem::take(capture);
            out.push_literal(&attributes, &capture, false);
            out.push(attributes.apply(g));
            command = None;
        }
    }

    if let Some(capture) = command {
        out.push_literal(&attributes, &capture, false);
    }
    out.len
}

/// Interpret markup in `text` and resolve the script of every grapheme.
pub fn apply_markup(text: &mut GString, default_script: Iso15924) {
    let len = apply_markup_in_place(text);
    text.truncate(len);
    fixup_script(text, default_script);
}

fn is_resolved(script: Iso15924) -> bool {
    !script.is_common_or_inherited() && !script.is_unknown()
}

/// Give every grapheme a concrete script.
///
/// The forward pass lets graphemes without a script of their own take the
/// script of the text before them, within the same language. The backward
/// pass fills what is left from the text after them, then from the language,
/// then from `default_script`.
pub fn fixup_script(text: &mut [Grapheme], default_script: Iso15924) {
    let mut last_language: Option<Iso639> = None;
    let mut last_script: Option<Iso15924> = None;
    let mut missing = 0usize;

    for g in text.iter_mut() {
        if last_language != Some(g.language()) {
            last_language = Some(g.language());
            last_script = None;
        }

        let starter_script = ucd::script(g.starter());
        let script = if is_resolved(starter_script) {
            starter_script
        } else if is_resolved(g.script()) {
            g.script()
        } else {
            last_script.unwrap_or(g.script())
        };

        if script != g.script() {
            g.set_script(script);
        }
        if is_resolved(script) {
            last_script = Some(script);
        } else {
            missing += 1;
        }
    }

    if missing == 0 {
        return;
    }

    let mut last_script: Option<Iso15924> = None;
    for g in text.iter_mut().rev() {
        if is_resolved(g.script()) {
            last_script = Some(g.script());
            continue;
        }

        let language_script = LanguageTag::new(g.language()).default_script();
        let script = last_script
            .or_else(|| is_resolved(language_script).then_some(language_script))
            .unwrap_or(default_script);
        g.set_script(script);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gstring::{gstring_to_string, to_gstring};
    use crate::normalization::NormalizeConfig;

    fn markup(s: &str) -> GString {
        let mut text = to_gstring(s, &NormalizeConfig::nfc());
        apply_markup(&mut text, Iso15924::from_code4("Latn").unwrap());
        text
    }

    #[test]
    fn phrasing_commands() {
        let text = markup("a[e]b[.]c");
        assert_eq!(gstring_to_string(&text), "abc");
        let phrasings: Vec<Phrasing> = text.iter().map(|g| g.phrasing()).collect();
        assert_eq!(phrasings, vec![Phrasing::Regular, Phrasing::Emphasis, Phrasing::Regular]);
        assert!(text.iter().all(|g| g.language().is_none()));
    }

    #[test]
    fn escaped_bracket() {
        let text = markup("[[x]");
        assert_eq!(gstring_to_string(&text), "[x]");
    }

    #[test]
    fn unknown_commands_stay_literal() {
        assert_eq!(gstring_to_string(&markup("a[w]b")), "a[w]b");
        assert_eq!(gstring_to_string(&markup("a[]b")), "a[]b");
        assert_eq!(gstring_to_string(&markup("a[1x]b")), "a[1x]b");
        assert_eq!(gstring_to_string(&markup("a[\u{00E9}]b")), "a[\u{00E9}]b");
        assert_eq!(gstring_to_string(&markup("open [sesame")), "open [sesame");
        assert_eq!(gstring_to_string(&markup("end[")), "end[");
    }

    #[test]
    fn language_commands() {
        let text = markup("[nl]a[s]b");
        let nl = Iso639::parse("nl").unwrap();
        assert!(text.iter().all(|g| g.language() == nl));
        assert_eq!(text[1].phrasing(), Phrasing::Strong);
        assert_eq!(text[0].region().code2(), Some("NL"));
    }

    #[test]
    fn output_is_never_longer() {
        for s in ["", "[", "[[", "[[[", "a[e", "[.]", "[en-US]x", "[zz-99-ÿ]", "[e][s][.]"] {
            let mut text = to_gstring(s, &NormalizeConfig::nfc());
            let len = text.len();
            assert!(apply_markup_in_place(&mut text) <= len, "{:?}", s);
        }
    }

    #[test]
    fn scripts_are_resolved() {
        let latn = Iso15924::from_code4("Latn").unwrap();
        let hebr = Iso15924::from_code4("Hebr").unwrap();

        let text = markup("a, b");
        assert!(text.iter().all(|g| g.script() == latn));

        // Punctuation takes the script of the text before it.
        let text = markup("\u{05D0}, b");
        assert_eq!(text[1].script(), hebr);
        assert_eq!(text[2].script(), hebr);
        assert_eq!(text[3].script(), latn);

        // Leading punctuation takes the script after it.
        let text = markup("(\u{05D0})");
        assert!(text.iter().all(|g| g.script() == hebr));
    }
}
