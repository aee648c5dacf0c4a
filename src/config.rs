//! Shaper configuration

use crate::geometry::Extent;
use anyhow::{Context, Result};
use runeflow_unicode::{BidiContext, Iso15924};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    Left,
    Right,
    Center,
    /// Stretch internal whitespace to fill the line, flush when that would
    /// stretch too far.
    Justified,
    /// Left for left-to-right paragraphs, right for right-to-left ones.
    #[default]
    Flush,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    /// The first baseline sits on the layout baseline.
    Top,
    /// The middle baseline, or between the middle two.
    #[default]
    Middle,
    /// The last baseline sits on the layout baseline.
    Bottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self { horizontal, vertical }
    }
}

/// Layout settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaperConfig {
    /// Multiplier of the baseline distance between lines of a paragraph.
    pub line_spacing: f32,
    /// Multiplier of the baseline distance after a paragraph separator.
    pub paragraph_spacing: f32,
    pub alignment: Alignment,
    /// Glyph positions are rounded to multiples of this size.
    pub sub_pixel: Extent,
    /// Fraction of the line width that justification may add.
    pub justify_max_stretch: f32,
    pub bidi: BidiContext,
    /// Script for text that has none of its own.
    pub default_script: Iso15924,
}

impl Default for ShaperConfig {
    fn default() -> Self {
        Self {
            line_spacing: 1.0,
            paragraph_spacing: 1.5,
            alignment: Alignment::default(),
            sub_pixel: Extent::default(),
            justify_max_stretch: 0.25,
            bidi: BidiContext::default(),
            default_script: Iso15924::COMMON,
        }
    }
}

impl ShaperConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse shaper configuration")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize shaper configuration")
    }

    pub fn with_alignment(mut self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        self.alignment = Alignment::new(horizontal, vertical);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeflow_unicode::BidiDirectionMode;

    #[test]
    fn partial_json() {
        let config = ShaperConfig::from_json(
            r#"{
                "line_spacing": 1.2,
                "alignment": { "horizontal": "justified" },
                "bidi": { "direction_mode": "Rtl" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.line_spacing, 1.2);
        assert_eq!(config.paragraph_spacing, 1.5);
        assert_eq!(config.alignment.horizontal, HorizontalAlignment::Justified);
        assert_eq!(config.alignment.vertical, VerticalAlignment::Middle);
        assert_eq!(config.bidi.direction_mode, BidiDirectionMode::Rtl);
        assert!(config.bidi.enable_mirrored_brackets);
        assert_eq!(config.justify_max_stretch, 0.25);
    }

    #[test]
    fn round_trip() {
        let config = ShaperConfig::default().with_alignment(HorizontalAlignment::Center, VerticalAlignment::Top);
        let json = config.to_json().unwrap();
        assert_eq!(ShaperConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn invalid_json() {
        assert!(ShaperConfig::from_json("{ \"line_spacing\": \"wide\" }").is_err());
        assert!(ShaperConfig::from_json("not json").is_err());
    }
}
