//! ISO 15924 scripts, ISO 3166 regions and ISO 639 languages
//!
//! Each code is stored in the compact numeric form used inside a packed
//! grapheme: scripts and regions as their 10-bit ISO numbers, languages as
//! three 5-bit letters.

use crate::tables::iso_15924::ISO_15924;
use crate::tables::iso_3166::ISO_3166;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_script::Script;

/// ISO 15924 script, stored as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Iso15924(u16);

impl Iso15924 {
    /// Zinh, inherits the script of the preceding character.
    pub const INHERITED: Self = Self(994);
    /// Zyyy, shared by many scripts.
    pub const COMMON: Self = Self(998);
    /// Zzzz, unknown or unencoded script.
    pub const UNKNOWN: Self = Self(999);

    /// Create from the numeric ISO code, returns `None` outside 0..=999.
    pub fn from_number(number: u16) -> Option<Self> {
        (number <= 999).then_some(Self(number))
    }

    /// Parse a four-letter code, case-insensitively.
    pub fn from_code4(code: &str) -> Result<Self> {
        if code.len() != 4 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(anyhow!("Invalid ISO 15924 code: {:?}", code));
        }

        let mut title = code.to_ascii_lowercase();
        title[..1].make_ascii_uppercase();

        ISO_15924
            .binary_search_by(|(code4, _)| (*code4).cmp(title.as_str()))
            .map(|i| Self(ISO_15924[i].1))
            .map_err(|_| anyhow!("Unknown ISO 15924 code: {:?}", code))
    }

    pub fn number(self) -> u16 {
        self.0
    }

    /// The title-case four-letter code, "Zzzz" for numbers without a code.
    pub fn code4(self) -> &'static str {
        ISO_15924
            .iter()
            .find(|(_, number)| *number == self.0)
            .map(|(code4, _)| *code4)
            .unwrap_or("Zzzz")
    }

    /// Common and Inherited do not pin a script; the surrounding text does.
    pub fn is_common_or_inherited(self) -> bool {
        self == Self::COMMON || self == Self::INHERITED
    }

    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

impl Default for Iso15924 {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<Script> for Iso15924 {
    fn from(script: Script) -> Self {
        Self::from_code4(script.short_name()).unwrap_or(Self::UNKNOWN)
    }
}

impl fmt::Display for Iso15924 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code4())
    }
}

/// ISO 3166-1 region, stored as its numeric code. Zero means "no region".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Iso3166(u16);

impl Iso3166 {
    pub const NONE: Self = Self(0);

    pub fn from_number(number: u16) -> Option<Self> {
        (number <= 999).then_some(Self(number))
    }

    /// Parse an alpha-2, alpha-3 or three-digit numeric code.
    pub fn parse(code: &str) -> Result<Self> {
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_digit()) {
            let number: u16 = code.parse()?;
            return Ok(Self(number));
        }

        let upper = code.to_ascii_uppercase();
        ISO_3166
            .iter()
            .find(|(code2, code3, _)| match upper.len() {
                2 => *code2 == upper,
                3 => *code3 == upper,
                _ => false,
            })
            .map(|(_, _, number)| Self(*number))
            .ok_or_else(|| anyhow!("Unknown ISO 3166 code: {:?}", code))
    }

    pub fn number(self) -> u16 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    fn info(self) -> Option<&'static (&'static str, &'static str, u16)> {
        ISO_3166
            .binary_search_by_key(&self.0, |(_, _, number)| *number)
            .ok()
            .map(|i| &ISO_3166[i])
    }

    pub fn code2(self) -> Option<&'static str> {
        self.info().map(|(code2, _, _)| *code2)
    }

    pub fn code3(self) -> Option<&'static str> {
        self.info().map(|(_, code3, _)| *code3)
    }
}

impl fmt::Display for Iso3166 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code2() {
            Some(code2) => f.write_str(code2),
            None => write!(f, "{:03}", self.0),
        }
    }
}

/// ISO 639 language, two or three lowercase letters packed in 15 bits.
///
/// Each letter occupies 5 bits holding `letter - 'a' + 1`; a zero field marks
/// an absent letter, so the empty language is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Iso639(u16);

impl Iso639 {
    pub const NONE: Self = Self(0);

    pub fn parse(code: &str) -> Result<Self> {
        if !(2..=3).contains(&code.len()) || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(anyhow!("Invalid ISO 639 code: {:?}", code));
        }

        let mut value = 0u16;
        for (i, b) in code.bytes().enumerate() {
            let letter = u16::from(b.to_ascii_lowercase() - b'a' + 1);
            value |= letter << (i * 5);
        }
        Ok(Self(value))
    }

    /// Rebuild from the 15-bit packed form.
    pub fn from_bits(bits: u16) -> Self {
        Self(bits & 0x7fff)
    }

    pub fn to_bits(self) -> u16 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    pub fn code(self) -> String {
        (0..3)
            .map(|i| (self.0 >> (i * 5)) & 0x1f)
            .take_while(|&letter| letter != 0)
            .map(|letter| char::from(b'a' + letter as u8 - 1))
            .collect()
    }
}

impl fmt::Display for Iso639 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_codes() {
        let latn = Iso15924::from_code4("latn").unwrap();
        assert_eq!(latn.number(), 215);
        assert_eq!(latn.code4(), "Latn");
        assert_eq!(Iso15924::from_code4("Arab").unwrap().number(), 160);
        assert!(Iso15924::from_code4("Qwer").is_err());
        assert!(Iso15924::from_code4("La").is_err());
        assert_eq!(Iso15924::from(Script::Common), Iso15924::COMMON);
        assert_eq!(Iso15924::from(Script::Inherited), Iso15924::INHERITED);
        assert_eq!(Iso15924::from(Script::Hebrew).code4(), "Hebr");
    }

    #[test]
    fn region_codes() {
        let nl = Iso3166::parse("NL").unwrap();
        assert_eq!(nl.number(), 528);
        assert_eq!(Iso3166::parse("nld").unwrap(), nl);
        assert_eq!(Iso3166::parse("528").unwrap(), nl);
        assert_eq!(nl.code2(), Some("NL"));
        assert_eq!(nl.code3(), Some("NLD"));
        assert_eq!(nl.to_string(), "NL");
        assert!(Iso3166::parse("XQ").is_err());
    }

    #[test]
    fn language_codes() {
        let en = Iso639::parse("en").unwrap();
        assert_eq!(en.code(), "en");
        assert!(en.to_bits() < 0x8000);
        assert_eq!(Iso639::from_bits(en.to_bits()), en);

        let fil = Iso639::parse("FIL").unwrap();
        assert_eq!(fil.to_string(), "fil");
        assert!(Iso639::parse("e").is_err());
        assert!(Iso639::parse("e1").is_err());
        assert!(Iso639::NONE.is_none());
    }
}
