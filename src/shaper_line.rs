//! Layout of a single line

use crate::config::HorizontalAlignment;
use crate::font_service::{FontMetrics, FontService};
use crate::geometry::{Point, Rect};
use crate::shaper_char::ShaperChar;
use runeflow_unicode::ucd::GeneralCategory;
use runeflow_unicode::{Direction, Grapheme};

/// A line of text: a logical range of graphemes and their visual order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaperLine {
    pub line_nr: usize,
    /// First grapheme of the line, in logical order.
    pub first: usize,
    /// One past the last grapheme of the line.
    pub last: usize,
    /// Grapheme indices in visual order, left to right.
    pub columns: Vec<usize>,
    pub metrics: FontMetrics,
    /// Baseline.
    pub y: f32,
    /// Width without trailing whitespace, from the logical advances.
    pub width: f32,
    /// Category of the last grapheme, `Cn` for an empty line.
    pub last_category: GeneralCategory,
    pub paragraph_direction: Direction,
    pub rectangle: Rect,
}

impl ShaperLine {
    /// Create the line `first..last`, marking the whitespace that trails it.
    ///
    /// The metrics are the maximum of `metrics` and those of the visible
    /// graphemes.
    pub(crate) fn new(
        line_nr: usize,
        text: &mut [ShaperChar],
        first: usize,
        last: usize,
        width: f32,
        metrics: FontMetrics,
    ) -> Self {
        let mut line_metrics = metrics;
        let mut last_visible = None;
        for (i, c) in text[first..last].iter_mut().enumerate() {
            c.is_trailing_white_space = false;
            if c.is_visible() {
                line_metrics = line_metrics.max(c.metrics);
                last_visible = Some(first + i);
            }
        }

        let trailing_start = last_visible.map_or(first, |i| i + 1);
        for c in &mut text[trailing_start..last] {
            c.is_trailing_white_space = true;
        }

        let last_category = if first != last { text[last - 1].general_category } else { GeneralCategory::Cn };

        Self {
            line_nr,
            first,
            last,
            columns: Vec::new(),
            metrics: line_metrics,
            y: 0.0,
            width,
            last_category,
            paragraph_direction: Direction::LeftToRight,
            rectangle: Rect::default(),
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The leftmost grapheme, or `first` for an empty line.
    pub fn front(&self) -> usize {
        self.columns.first().copied().unwrap_or(self.first)
    }

    /// The rightmost grapheme, or `first` for an empty line.
    pub fn back(&self) -> usize {
        self.columns.last().copied().unwrap_or(self.first)
    }

    pub fn ends_paragraph(&self) -> bool {
        self.last_category == GeneralCategory::Zp
    }

    /// Shape, align and round the line between `min_x` and `max_x`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn layout(
        &mut self,
        text: &mut [ShaperChar],
        font: &dyn FontService,
        alignment: HorizontalAlignment,
        min_x: f32,
        max_x: f32,
        sub_pixel_width: f32,
        justify_max_stretch: f32,
    ) {
        advance_glyphs(text, &self.columns, self.y, font);
        let (visible_width, num_internal_white_space) = calculate_precise_width(text, &self.columns);
        align_glyphs(
            text,
            &self.columns,
            alignment,
            self.paragraph_direction,
            max_x - min_x,
            visible_width,
            num_internal_white_space,
            justify_max_stretch,
        );
        move_glyphs(text, &self.columns, min_x);
        round_glyph_positions(text, &self.columns, sub_pixel_width);
        create_bounding_rectangles(text, &self.columns, self.y, self.metrics.ascender, self.metrics.descender);

        self.rectangle = match (self.columns.first(), self.columns.last()) {
            (Some(&front), Some(&back)) => text[front].rectangle.union(&text[back].rectangle),
            _ => Rect::new(min_x, self.y - self.metrics.descender, min_x + 1.0, self.y + self.metrics.ascender),
        };
    }

    /// The grapheme nearest to `x` and whether `x` is on its trailing side.
    ///
    /// Never lands on a line or paragraph separator; on an empty line returns
    /// `last`.
    pub fn get_nearest(&self, text: &[ShaperChar], x: f32) -> (usize, bool) {
        if self.columns.is_empty() {
            return (self.last, false);
        }

        let mut column = self
            .columns
            .partition_point(|&i| text[i].rectangle.right < x)
            .min(self.columns.len() - 1);

        if text[self.columns[column]].general_category.is_zp_or_zl() {
            let moved = if self.paragraph_direction.is_left_to_right() {
                column.checked_sub(1)
            } else {
                Some(column + 1).filter(|&c| c < self.columns.len())
            };
            match moved {
                Some(c) => column = c,
                None => return (self.columns[column], false),
            }
        }

        let c = &text[self.columns[column]];
        let after = c.direction.is_left_to_right() == (x > c.rectangle.center_x());
        (self.columns[column], after)
    }
}

/// Shape runs of graphemes with equal language and script, in visual order.
fn advance_glyphs(text: &mut [ShaperChar], columns: &[usize], y: f32, font: &dyn FontService) {
    let mut p = Point::new(0.0, y);
    let mut start = 0;
    while start < columns.len() {
        let first = text[columns[start]].display;
        let end = columns[start..]
            .iter()
            .position(|&i| !same_attributes(&first, &text[i].display))
            .map_or(columns.len(), |n| start + n);

        advance_glyphs_run(text, &columns[start..end], &mut p, font);
        start = end;
    }
}

fn same_attributes(a: &Grapheme, b: &Grapheme) -> bool {
    a.language() == b.language() && a.script() == b.script()
}

fn advance_glyphs_run(text: &mut [ShaperChar], run_columns: &[usize], p: &mut Point, font: &dyn FontService) {
    let first = text[run_columns[0]].display;
    let run: Vec<Grapheme> = run_columns.iter().map(|&i| text[i].display).collect();
    let result = font.shape_run(first.language(), first.script(), &run);
    debug_assert_eq!(result.advances.len(), run.len());

    let mut glyph_index = 0;
    for (n, &i) in run_columns.iter().enumerate() {
        let c = &mut text[i];
        c.position = *p;
        c.advance = result.advances.get(n).copied().unwrap_or(c.width);
        c.glyphs.clear();
        c.glyph_rectangles.clear();

        let glyph_count = usize::from(result.glyph_count.get(n).copied().unwrap_or(0));
        for j in glyph_index..glyph_index + glyph_count {
            if let (Some(&glyph), Some(&rectangle)) = (result.glyphs.get(j), result.glyph_rectangles.get(j)) {
                c.glyphs.push(glyph);
                c.glyph_rectangles.push(rectangle);
            }
        }
        glyph_index += glyph_count;
        p.x += c.advance;
    }
}

/// Width from the left edge of the first to the right edge of the last
/// non-trailing grapheme, and the number of whitespace graphemes in between.
///
/// Positions are shifted so that the first non-trailing grapheme is at zero.
fn calculate_precise_width(text: &mut [ShaperChar], columns: &[usize]) -> (f32, usize) {
    let Some(start) = columns.iter().position(|&i| !text[i].is_trailing_white_space) else {
        return (0.0, 0);
    };

    let left_x = text[columns[start]].position.x;
    let mut right_x = left_x;
    let mut num_white_space = 0;
    for &i in columns[start..].iter().take_while(|&&i| !text[i].is_trailing_white_space) {
        let c = &text[i];
        right_x = c.position.x + c.advance;
        if !c.is_visible() {
            num_white_space += 1;
        }
    }

    move_glyphs(text, columns, -left_x);
    (right_x - left_x, num_white_space)
}

fn move_glyphs(text: &mut [ShaperChar], columns: &[usize], offset: f32) {
    for &i in columns {
        text[i].position.x += offset;
    }
}

fn align_glyphs_justified(
    text: &mut [ShaperChar],
    columns: &[usize],
    max_line_width: f32,
    visible_width: f32,
    num_internal_white_space: usize,
    justify_max_stretch: f32,
) -> bool {
    if num_internal_white_space == 0 {
        return false;
    }

    let extra_space = max_line_width - visible_width;
    if extra_space > max_line_width * justify_max_stretch {
        return false;
    }

    let extra_space_per_white_space = extra_space / num_internal_white_space as f32;
    let mut offset = 0.0;
    for &i in columns {
        let c = &mut text[i];
        c.position.x += offset;
        if !c.is_trailing_white_space && !c.is_visible() {
            offset += extra_space_per_white_space;
        }
    }
    true
}

#[allow(clippy::too_many_arguments)]
fn align_glyphs(
    text: &mut [ShaperChar],
    columns: &[usize],
    mut alignment: HorizontalAlignment,
    paragraph_direction: Direction,
    max_line_width: f32,
    visible_width: f32,
    num_internal_white_space: usize,
    justify_max_stretch: f32,
) {
    if alignment == HorizontalAlignment::Justified {
        if align_glyphs_justified(
            text,
            columns,
            max_line_width,
            visible_width,
            num_internal_white_space,
            justify_max_stretch,
        ) {
            return;
        }
        log::debug!(
            "Justification of a line of width {} to {} falls back to flush",
            visible_width,
            max_line_width
        );
    }

    if matches!(alignment, HorizontalAlignment::Flush | HorizontalAlignment::Justified) {
        alignment = if paragraph_direction.is_left_to_right() {
            HorizontalAlignment::Left
        } else {
            HorizontalAlignment::Right
        };
    }

    let offset = match alignment {
        HorizontalAlignment::Right => max_line_width - visible_width,
        HorizontalAlignment::Center => (max_line_width - visible_width) * 0.5,
        _ => 0.0,
    };
    move_glyphs(text, columns, offset);
}

fn round_glyph_positions(text: &mut [ShaperChar], columns: &[usize], sub_pixel_width: f32) {
    let rcp_sub_pixel_width = 1.0 / sub_pixel_width;
    for &i in columns {
        let x = &mut text[i].position.x;
        *x = (*x * rcp_sub_pixel_width).round() * sub_pixel_width;
    }
}

/// Each grapheme reaches to the next one on its right, the last one to its
/// own advance.
fn create_bounding_rectangles(text: &mut [ShaperChar], columns: &[usize], y: f32, ascender: f32, descender: f32) {
    for (n, &i) in columns.iter().enumerate() {
        let left = text[i].position.x;
        let right = match columns.get(n + 1) {
            Some(&next) if text[next].position.x > left => text[next].position.x,
            _ => left + text[i].advance,
        };
        text[i].rectangle = Rect::new(left, y - descender, right, y + ascender);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_service::ShapedRun;
    use runeflow_unicode::{Iso15924, Iso639};

    struct Mono;

    impl FontService for Mono {
        fn metrics(&self) -> FontMetrics {
            FontMetrics { ascender: 8.0, descender: 2.0, line_gap: 1.0, x_height: 4.0 }
        }

        fn shape_run(&self, _: Iso639, _: Iso15924, run: &[Grapheme]) -> ShapedRun {
            ShapedRun {
                advances: vec![10.0; run.len()],
                glyph_count: vec![1; run.len()],
                glyphs: run.iter().map(|g| g.starter() as u16).collect(),
                glyph_rectangles: vec![Rect::new(0.0, 0.0, 10.0, 8.0); run.len()],
                metrics: self.metrics(),
            }
        }
    }

    fn line(s: &str) -> (Vec<ShaperChar>, ShaperLine) {
        let mut text: Vec<ShaperChar> = s.chars().map(|c| ShaperChar::new(Grapheme::from_char(c))).collect();
        for c in &mut text {
            c.width = 10.0;
            c.metrics = Mono.metrics();
        }
        let len = text.len();
        let mut line = ShaperLine::new(0, &mut text, 0, len, 0.0, FontMetrics::default());
        line.columns = (0..len).collect();
        (text, line)
    }

    fn xs(text: &[ShaperChar]) -> Vec<f32> {
        text.iter().map(|c| c.position.x).collect()
    }

    #[test]
    fn trailing_white_space() {
        let (text, line) = line("ab c  ");
        let trailing: Vec<bool> = text.iter().map(|c| c.is_trailing_white_space).collect();
        assert_eq!(trailing, vec![false, false, false, false, true, true]);
        assert_eq!(line.metrics.ascender, 8.0);
        assert_eq!(line.last_category, GeneralCategory::Zs);
    }

    #[test]
    fn alignments() {
        let cases = [
            (HorizontalAlignment::Left, 0.0),
            (HorizontalAlignment::Flush, 0.0),
            (HorizontalAlignment::Right, 70.0),
            (HorizontalAlignment::Center, 35.0),
        ];
        for (alignment, offset) in cases {
            let (mut text, mut line) = line("abc ");
            line.layout(&mut text, &Mono, alignment, 0.0, 100.0, 1.0, 0.25);
            assert_eq!(xs(&text)[..3], [offset, offset + 10.0, offset + 20.0], "{:?}", alignment);
        }
    }

    #[test]
    fn justified() {
        let (mut text, mut line) = line("ab cd ef");
        line.layout(&mut text, &Mono, HorizontalAlignment::Justified, 0.0, 100.0, 1.0, 0.25);
        // 80 wide, 20 spread over two spaces.
        assert_eq!(xs(&text), vec![0.0, 10.0, 20.0, 40.0, 50.0, 60.0, 80.0, 90.0]);
        assert_eq!(line.rectangle, Rect::new(0.0, -2.0, 100.0, 8.0));
    }

    #[test]
    fn justified_falls_back_to_flush() {
        let (mut text, mut line) = line("ab cd");
        line.layout(&mut text, &Mono, HorizontalAlignment::Justified, 0.0, 100.0, 1.0, 0.25);
        assert_eq!(xs(&text), vec![0.0, 10.0, 20.0, 30.0, 40.0]);

        line.paragraph_direction = Direction::RightToLeft;
        line.layout(&mut text, &Mono, HorizontalAlignment::Justified, 0.0, 100.0, 1.0, 0.25);
        assert_eq!(xs(&text), vec![50.0, 60.0, 70.0, 80.0, 90.0]);
    }

    #[test]
    fn sub_pixel_rounding() {
        let (mut text, mut line) = line("abc");
        line.layout(&mut text, &Mono, HorizontalAlignment::Center, 0.0, 100.0, 4.0, 0.25);
        // Centered at 35, rounded to a multiple of four.
        assert_eq!(xs(&text), vec![36.0, 44.0, 56.0]);
    }

    #[test]
    fn nearest() {
        let (mut text, mut line) = line("abc\u{2029}");
        line.layout(&mut text, &Mono, HorizontalAlignment::Left, 0.0, 100.0, 1.0, 0.25);

        assert_eq!(line.get_nearest(&text, 2.0), (0, false));
        assert_eq!(line.get_nearest(&text, 8.0), (0, true));
        assert_eq!(line.get_nearest(&text, 21.0), (2, false));
        // Past the separator the cursor stays on the last visible grapheme.
        assert_eq!(line.get_nearest(&text, 95.0), (2, true));
    }

    #[test]
    fn empty_line() {
        let mut text = Vec::new();
        let mut line = ShaperLine::new(3, &mut text, 0, 0, 0.0, Mono.metrics());
        line.y = -20.0;
        line.layout(&mut text, &Mono, HorizontalAlignment::Left, 0.0, 100.0, 1.0, 0.25);

        assert_eq!(line.last_category, GeneralCategory::Cn);
        assert_eq!(line.rectangle, Rect::new(0.0, -22.0, 1.0, -12.0));
        assert_eq!(line.get_nearest(&text, 50.0), (0, false));
    }
}
