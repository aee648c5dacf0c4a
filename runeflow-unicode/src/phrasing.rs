//! Semantic text roles carried per grapheme.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Phrasing {
    #[default]
    Regular = 0,
    Emphasis = 1,
    Strong = 2,
    Code = 3,
    Abbreviation = 4,
    Quote = 5,
    Keyboard = 6,
    Highlight = 7,
    Math = 8,
    Example = 9,
    Unarticulated = 10,
    Title = 11,
    Success = 12,
    Warning = 13,
    Error = 14,
}

impl Phrasing {
    const ALL: [Phrasing; 15] = [
        Self::Regular,
        Self::Emphasis,
        Self::Strong,
        Self::Code,
        Self::Abbreviation,
        Self::Quote,
        Self::Keyboard,
        Self::Highlight,
        Self::Math,
        Self::Example,
        Self::Unarticulated,
        Self::Title,
        Self::Success,
        Self::Warning,
        Self::Error,
    ];

    /// The single-character markup command selecting this phrasing.
    pub fn markup_char(self) -> char {
        match self {
            Self::Regular => 'r',
            Self::Emphasis => 'e',
            Self::Strong => 's',
            Self::Code => 'c',
            Self::Abbreviation => 'a',
            Self::Quote => 'q',
            Self::Keyboard => 'k',
            Self::Highlight => 'h',
            Self::Math => 'm',
            Self::Example => 'x',
            Self::Unarticulated => 'u',
            Self::Title => 't',
            Self::Success => 'S',
            Self::Warning => 'W',
            Self::Error => 'E',
        }
    }

    pub fn from_markup_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.markup_char() == c)
    }

    pub fn from_bits(bits: u8) -> Self {
        Self::ALL.get(usize::from(bits)).copied().unwrap_or_default()
    }

    pub fn to_bits(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_chars() {
        assert_eq!(Phrasing::from_markup_char('e'), Some(Phrasing::Emphasis));
        assert_eq!(Phrasing::from_markup_char('W'), Some(Phrasing::Warning));
        assert_eq!(Phrasing::from_markup_char('w'), None);
        for p in Phrasing::ALL {
            assert_eq!(Phrasing::from_markup_char(p.markup_char()), Some(p));
            assert_eq!(Phrasing::from_bits(p.to_bits()), p);
        }
    }
}
