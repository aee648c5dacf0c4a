//! Font service
//!
//! The shaper asks a [`FontService`] for the advance, glyphs and metrics of
//! runs of graphemes. [`FontdueService`] answers from TrueType/OpenType
//! fonts loaded with fontdue, falling back through a list of fonts for code
//! points the primary font lacks.

use crate::geometry::Rect;
use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings};
use runeflow_unicode::{Grapheme, Iso15924, Iso639};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub type GlyphId = u16;

/// Vertical metrics of a font at a size, in pixels.
///
/// `descender` is positive, measured downward from the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    pub ascender: f32,
    pub descender: f32,
    pub line_gap: f32,
    pub x_height: f32,
}

impl FontMetrics {
    /// Component-wise maximum.
    pub fn max(self, other: FontMetrics) -> FontMetrics {
        FontMetrics {
            ascender: self.ascender.max(other.ascender),
            descender: self.descender.max(other.descender),
            line_gap: self.line_gap.max(other.line_gap),
            x_height: self.x_height.max(other.x_height),
        }
    }

    pub fn scale(self, factor: f32) -> FontMetrics {
        FontMetrics {
            ascender: self.ascender * factor,
            descender: self.descender * factor,
            line_gap: self.line_gap * factor,
            x_height: self.x_height * factor,
        }
    }
}

/// A shaped run of graphemes.
///
/// `advances` and `glyph_count` have one entry per grapheme; `glyphs` and
/// `glyph_rectangles` hold the glyphs of all graphemes back to back.
/// Rectangles are relative to the grapheme's pen position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedRun {
    pub advances: Vec<f32>,
    pub glyph_count: Vec<u16>,
    pub glyphs: Vec<GlyphId>,
    pub glyph_rectangles: Vec<Rect>,
    pub metrics: FontMetrics,
}

impl ShapedRun {
    pub fn len(&self) -> usize {
        self.advances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advances.is_empty()
    }

    /// Scale every length; advances are linear in the font size.
    pub fn scale(&mut self, factor: f32) {
        for advance in &mut self.advances {
            *advance *= factor;
        }
        for r in &mut self.glyph_rectangles {
            *r = Rect::new(r.left * factor, r.bottom * factor, r.right * factor, r.top * factor);
        }
        self.metrics = self.metrics.scale(factor);
    }
}

/// Supplies glyph data to the shaper.
pub trait FontService {
    /// Metrics of the primary font, used for lines without visible text.
    fn metrics(&self) -> FontMetrics;

    /// Shape graphemes that share a language and script.
    fn shape_run(&self, language: Iso639, script: Iso15924, run: &[Grapheme]) -> ShapedRun;
}

struct NamedFont {
    name: String,
    font: Font,
}

impl NamedFont {
    fn from_bytes(name: &str, data: Vec<u8>, size: f32) -> Result<Self> {
        let settings = FontSettings { scale: size, ..FontSettings::default() };
        let font = Font::from_bytes(data, settings).map_err(|e| anyhow!("Failed to load font {}: {}", name, e))?;
        log::info!("Loaded font {} ({} glyphs)", name, font.glyph_count());
        Ok(Self { name: name.to_string(), font })
    }

    fn has_glyph(&self, c: char) -> bool {
        self.font.lookup_glyph_index(c) != 0
    }

    fn metrics(&self, size: f32) -> FontMetrics {
        let x_height = self.font.metrics('x', size).height as f32;
        match self.font.horizontal_line_metrics(size) {
            Some(line) => FontMetrics {
                ascender: line.ascent,
                descender: -line.descent,
                line_gap: line.line_gap,
                x_height,
            },
            None => FontMetrics { ascender: size * 0.8, descender: size * 0.2, line_gap: 0.0, x_height },
        }
    }
}

/// Font service backed by fontdue, without complex-script shaping.
///
/// Every code point of a grapheme maps to one glyph drawn at the pen
/// position; the advance of the grapheme is that of its starter plus the
/// kerning towards the next grapheme in the run.
pub struct FontdueService {
    primary: NamedFont,
    fallbacks: Vec<NamedFont>,
    size: f32,
}

impl FontdueService {
    /// Load a font from memory, rendering at `size` pixels per em.
    pub fn from_bytes(name: &str, data: Vec<u8>, size: f32) -> Result<Self> {
        Ok(Self { primary: NamedFont::from_bytes(name, data, size)?, fallbacks: Vec::new(), size })
    }

    /// Load a font file.
    pub fn load(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
        Self::from_bytes(&font_name(path), data, size)
    }

    /// Load the first of `candidates` (name, path) that exists.
    pub fn load_first(candidates: &[(&str, &str)], size: f32) -> Result<Self> {
        for (name, path) in candidates {
            if Path::new(path).exists() {
                let data = std::fs::read(path).with_context(|| format!("Failed to read font {}", path))?;
                return Self::from_bytes(name, data, size);
            }
        }
        Err(anyhow!("No suitable font found"))
    }

    /// Add a font consulted for code points the earlier fonts lack.
    pub fn add_fallback(&mut self, name: &str, data: Vec<u8>) -> Result<()> {
        self.fallbacks.push(NamedFont::from_bytes(name, data, self.size)?);
        Ok(())
    }

    pub fn add_fallback_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
        self.add_fallback(&font_name(path), data)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn font_names(&self) -> Vec<&str> {
        std::iter::once(&self.primary).chain(&self.fallbacks).map(|f| f.name.as_str()).collect()
    }

    fn select(&self, c: char) -> &NamedFont {
        if self.primary.has_glyph(c) {
            return &self.primary;
        }
        self.fallbacks.iter().find(|f| f.has_glyph(c)).unwrap_or(&self.primary)
    }
}

impl FontService for FontdueService {
    fn metrics(&self) -> FontMetrics {
        self.primary.metrics(self.size)
    }

    fn shape_run(&self, _language: Iso639, _script: Iso15924, run: &[Grapheme]) -> ShapedRun {
        let mut r = ShapedRun {
            advances: Vec::with_capacity(run.len()),
            glyph_count: Vec::with_capacity(run.len()),
            ..ShapedRun::default()
        };

        let fonts: Vec<&NamedFont> = run.iter().map(|g| self.select(g.starter())).collect();
        for (i, g) in run.iter().enumerate() {
            let font = fonts[i];
            r.metrics = r.metrics.max(font.metrics(self.size));

            let mut advance = font.font.metrics(g.starter(), self.size).advance_width;
            if let Some(next) = run.get(i + 1) {
                if std::ptr::eq(font, fonts[i + 1]) {
                    advance += font.font.horizontal_kern(g.starter(), next.starter(), self.size).unwrap_or(0.0);
                }
            }
            r.advances.push(advance);

            let mut count = 0u16;
            for c in g.code_points() {
                let glyph = font.font.lookup_glyph_index(c);
                let bounds = font.font.metrics_indexed(glyph, self.size).bounds;
                r.glyphs.push(glyph);
                r.glyph_rectangles.push(Rect::new(
                    bounds.xmin,
                    bounds.ymin,
                    bounds.xmin + bounds.width,
                    bounds.ymin + bounds.height,
                ));
                count += 1;
            }
            r.glyph_count.push(count);
        }
        r
    }
}

fn font_name(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_max() {
        let a = FontMetrics { ascender: 10.0, descender: 2.0, line_gap: 1.0, x_height: 5.0 };
        let b = FontMetrics { ascender: 8.0, descender: 3.0, line_gap: 0.5, x_height: 6.0 };
        assert_eq!(a.max(b), FontMetrics { ascender: 10.0, descender: 3.0, line_gap: 1.0, x_height: 6.0 });
    }

    #[test]
    fn scaled_run() {
        let mut run = ShapedRun {
            advances: vec![0.5, 0.25],
            glyph_count: vec![1, 1],
            glyphs: vec![3, 4],
            glyph_rectangles: vec![Rect::new(0.0, 0.0, 0.5, 0.75), Rect::new(0.0, -0.25, 0.25, 0.5)],
            metrics: FontMetrics { ascender: 0.75, descender: 0.25, line_gap: 0.0, x_height: 0.5 },
        };
        run.scale(12.0);

        assert_eq!(run.len(), 2);
        assert_eq!(run.advances, vec![6.0, 3.0]);
        assert_eq!(run.glyph_rectangles[1], Rect::new(0.0, -3.0, 3.0, 6.0));
        assert_eq!(run.metrics.ascender, 9.0);
    }

    #[test]
    fn invalid_font_data() {
        assert!(FontdueService::from_bytes("broken", vec![0, 1, 2, 3], 12.0).is_err());
        assert!(FontdueService::load("/nonexistent/font.ttf", 12.0).is_err());
        assert!(FontdueService::load_first(&[("Missing", "/nonexistent/font.ttf")], 12.0).is_err());
    }
}
