//! BCP-47 language tags
//!
//! Only the `language[-script][-region]` prefix of a tag is kept; variants,
//! extensions and private-use subtags are accepted and ignored.

use crate::iso::{Iso15924, Iso3166, Iso639};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageTag {
    pub language: Iso639,
    pub script: Option<Iso15924>,
    pub region: Option<Iso3166>,
}

/// Likely script and region per language, a subset of CLDR likely-subtags.
const LIKELY_SUBTAGS: &[(&str, &str, &str)] = &[
    ("af", "Latn", "ZA"),
    ("am", "Ethi", "ET"),
    ("ar", "Arab", "EG"),
    ("az", "Latn", "AZ"),
    ("be", "Cyrl", "BY"),
    ("bg", "Cyrl", "BG"),
    ("bn", "Beng", "BD"),
    ("ca", "Latn", "ES"),
    ("cs", "Latn", "CZ"),
    ("cy", "Latn", "GB"),
    ("da", "Latn", "DK"),
    ("de", "Latn", "DE"),
    ("el", "Grek", "GR"),
    ("en", "Latn", "US"),
    ("es", "Latn", "ES"),
    ("et", "Latn", "EE"),
    ("eu", "Latn", "ES"),
    ("fa", "Arab", "IR"),
    ("fi", "Latn", "FI"),
    ("fil", "Latn", "PH"),
    ("fr", "Latn", "FR"),
    ("ga", "Latn", "IE"),
    ("gu", "Gujr", "IN"),
    ("he", "Hebr", "IL"),
    ("hi", "Deva", "IN"),
    ("hr", "Latn", "HR"),
    ("hu", "Latn", "HU"),
    ("hy", "Armn", "AM"),
    ("id", "Latn", "ID"),
    ("is", "Latn", "IS"),
    ("it", "Latn", "IT"),
    ("ja", "Jpan", "JP"),
    ("ka", "Geor", "GE"),
    ("kk", "Cyrl", "KZ"),
    ("km", "Khmr", "KH"),
    ("kn", "Knda", "IN"),
    ("ko", "Kore", "KR"),
    ("lo", "Laoo", "LA"),
    ("lt", "Latn", "LT"),
    ("lv", "Latn", "LV"),
    ("mk", "Cyrl", "MK"),
    ("ml", "Mlym", "IN"),
    ("mn", "Cyrl", "MN"),
    ("mr", "Deva", "IN"),
    ("ms", "Latn", "MY"),
    ("my", "Mymr", "MM"),
    ("nb", "Latn", "NO"),
    ("ne", "Deva", "NP"),
    ("nl", "Latn", "NL"),
    ("no", "Latn", "NO"),
    ("pa", "Guru", "IN"),
    ("pl", "Latn", "PL"),
    ("pt", "Latn", "BR"),
    ("ro", "Latn", "RO"),
    ("ru", "Cyrl", "RU"),
    ("si", "Sinh", "LK"),
    ("sk", "Latn", "SK"),
    ("sl", "Latn", "SI"),
    ("sq", "Latn", "AL"),
    ("sr", "Cyrl", "RS"),
    ("sv", "Latn", "SE"),
    ("sw", "Latn", "TZ"),
    ("ta", "Taml", "IN"),
    ("te", "Telu", "IN"),
    ("th", "Thai", "TH"),
    ("tr", "Latn", "TR"),
    ("uk", "Cyrl", "UA"),
    ("ur", "Arab", "PK"),
    ("uz", "Latn", "UZ"),
    ("vi", "Latn", "VN"),
    ("yi", "Hebr", "001"),
    ("zh", "Hans", "CN"),
    ("zu", "Latn", "ZA"),
];

impl LanguageTag {
    pub fn new(language: Iso639) -> Self {
        Self { language, script: None, region: None }
    }

    /// Parse a tag such as `en`, `en-US`, `nl-Latn-NL` or `zh-Hant-TW-x-private`.
    pub fn parse(tag: &str) -> Result<Self> {
        let mut subtags = tag.split(['-', '_']);

        let language = subtags
            .next()
            .ok_or_else(|| anyhow!("Empty language tag"))
            .and_then(Iso639::parse)
            .map_err(|e| anyhow!("Invalid language tag {:?}: {}", tag, e))?;

        let mut r = Self::new(language);
        for subtag in subtags {
            let is_alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
            let is_digit = subtag.bytes().all(|b| b.is_ascii_digit());

            if subtag.len() == 1 {
                // Start of an extension or private-use section.
                break;
            } else if r.script.is_none() && r.region.is_none() && subtag.len() == 4 && is_alpha {
                r.script = Some(Iso15924::from_code4(subtag)?);
            } else if r.region.is_none() && ((subtag.len() == 2 && is_alpha) || (subtag.len() == 3 && is_digit)) {
                r.region = Some(Iso3166::parse(subtag)?);
            }
        }
        Ok(r)
    }

    fn likely(&self) -> Option<&'static (&'static str, &'static str, &'static str)> {
        let code = self.language.code();
        LIKELY_SUBTAGS.iter().find(|(language, _, _)| *language == code)
    }

    /// Fill in a missing script and region from the likely-subtags table.
    pub fn expand(&self) -> Self {
        let mut r = *self;
        if let Some((_, script, region)) = self.likely() {
            if r.script.is_none() {
                r.script = Iso15924::from_code4(script).ok();
            }
            if r.region.is_none() {
                r.region = Iso3166::parse(region).ok();
            }
        }
        r
    }

    /// The script used for Common and Inherited characters in this language.
    pub fn default_script(&self) -> Iso15924 {
        self.script
            .or_else(|| self.expand().script)
            .unwrap_or(Iso15924::UNKNOWN)
    }
}

impl FromStr for LanguageTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(script) = self.script {
            write!(f, "-{}", script)?;
        }
        if let Some(region) = self.region {
            write!(f, "-{}", region)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags() {
        let tag = LanguageTag::parse("nl-Latn-NL").unwrap();
        assert_eq!(tag.language.code(), "nl");
        assert_eq!(tag.script.map(|s| s.code4()), Some("Latn"));
        assert_eq!(tag.region.and_then(|r| r.code2()), Some("NL"));
        assert_eq!(tag.to_string(), "nl-Latn-NL");

        let tag: LanguageTag = "en-US".parse().unwrap();
        assert!(tag.script.is_none());
        assert_eq!(tag.region.map(|r| r.number()), Some(840));

        let tag = LanguageTag::parse("zh-Hant-x-private").unwrap();
        assert_eq!(tag.script.map(|s| s.code4()), Some("Hant"));
        assert!(tag.region.is_none());

        assert!(LanguageTag::parse("").is_err());
        assert!(LanguageTag::parse("english").is_err());
        assert!(LanguageTag::parse("en-Qwer").is_err());
    }

    #[test]
    fn expand_likely_subtags() {
        let tag = LanguageTag::parse("ar").unwrap().expand();
        assert_eq!(tag.to_string(), "ar-Arab-EG");

        let tag = LanguageTag::parse("en-GB").unwrap().expand();
        assert_eq!(tag.to_string(), "en-Latn-GB");

        let tag = LanguageTag::parse("tlh").unwrap().expand();
        assert!(tag.script.is_none());
        assert_eq!(tag.default_script(), Iso15924::UNKNOWN);

        assert_eq!(LanguageTag::parse("ja").unwrap().default_script().code4(), "Jpan");
    }
}
