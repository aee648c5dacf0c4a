//! Text shaper
//!
//! Turns a grapheme string into positioned lines: graphemes are measured
//! with a [`FontService`], folded into lines at their line-break
//! opportunities, reordered per line with the bidirectional algorithm and
//! aligned inside a rectangle. After layout the shaper answers cursor
//! navigation and selection queries.

use crate::config::{ShaperConfig, VerticalAlignment};
use crate::cursor::TextCursor;
use crate::font_service::{FontMetrics, FontService};
use crate::geometry::{Extent, Point, Rect};
use crate::shaper_char::ShaperChar;
use crate::shaper_line::ShaperLine;
use runeflow_unicode::line_fit::line_width;
use runeflow_unicode::ucd::{self, BidiClass, GeneralCategory};
use runeflow_unicode::{
    apply_markup, bidi, bidi_direction, fixup_script, fold_lines, line_break, maximum_width, minimum_width,
    sentence_break, to_gstring, word_break, BidiContext, BreakOpportunity, BreakVector, Direction, Grapheme,
    NormalizeConfig,
};

const LINE_SEPARATOR: char = '\u{2028}';
const PARAGRAPH_SEPARATOR: char = '\u{2029}';

pub struct TextShaper<'a> {
    font: &'a dyn FontService,
    config: ShaperConfig,
    text: Vec<ShaperChar>,
    line_break_opportunities: BreakVector,
    line_break_widths: Vec<f32>,
    word_break_opportunities: BreakVector,
    sentence_break_opportunities: BreakVector,
    text_direction: Direction,
    initial_metrics: FontMetrics,
    lines: Vec<ShaperLine>,
    rectangle: Rect,
}

impl<'a> TextShaper<'a> {
    /// Measure and analyze `text`; call [`TextShaper::layout`] before
    /// querying positions or cursors.
    ///
    /// A LINE FEED is treated as a paragraph separator.
    pub fn new(font: &'a dyn FontService, text: &[Grapheme], config: ShaperConfig) -> Self {
        let mut graphemes: Vec<Grapheme> = text
            .iter()
            .map(|&g| {
                let mut g = g;
                if g == '\n' {
                    g.replace_code_point(PARAGRAPH_SEPARATOR);
                }
                g
            })
            .collect();
        fixup_script(&mut graphemes, config.default_script);

        let mut text: Vec<ShaperChar> = graphemes.into_iter().map(ShaperChar::new).collect();
        measure(&mut text, font);

        let starters: Vec<char> = text.iter().map(|c| c.grapheme.starter()).collect();
        let text_direction = bidi_direction(&starters, &config.bidi);
        let line_break_opportunities = line_break(&starters);
        let line_break_widths = text.iter().map(ShaperChar::line_break_width).collect();
        let word_break_opportunities = word_break(&starters);
        let sentence_break_opportunities = sentence_break(&starters);

        Self {
            font,
            config,
            text,
            line_break_opportunities,
            line_break_widths,
            word_break_opportunities,
            sentence_break_opportunities,
            text_direction,
            initial_metrics: font.metrics(),
            lines: Vec::new(),
            rectangle: Rect::default(),
        }
    }

    /// Shape plain text, normalized to NFC with newlines as paragraph separators.
    pub fn from_text(font: &'a dyn FontService, text: &str, config: ShaperConfig) -> Self {
        Self::new(font, &to_gstring(text, &NormalizeConfig::nfc_ps_noctr()), config)
    }

    /// Shape text containing `[tag]` markup.
    pub fn from_markup(font: &'a dyn FontService, text: &str, config: ShaperConfig) -> Self {
        let mut text = to_gstring(text, &NormalizeConfig::nfc_ps_noctr());
        apply_markup(&mut text, config.default_script);
        Self::new(font, &text, config)
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn chars(&self) -> &[ShaperChar] {
        &self.text
    }

    pub fn lines(&self) -> &[ShaperLine] {
        &self.lines
    }

    /// The rectangle of the last layout.
    pub fn rectangle(&self) -> Rect {
        self.rectangle
    }

    /// Direction of the first paragraph.
    pub fn text_direction(&self) -> Direction {
        self.text_direction
    }

    pub fn config(&self) -> &ShaperConfig {
        &self.config
    }

    /// The narrowest and the widest the text can be laid out.
    pub fn width_range(&self) -> (f32, f32) {
        (
            minimum_width(&self.line_break_widths, &self.line_break_opportunities),
            maximum_width(&self.line_break_widths, &self.line_break_opportunities),
        )
    }

    /// Size of the text when folded to `max_width`.
    pub fn bounding_size(&mut self, max_width: f32) -> Extent {
        let rectangle = Rect::new(0.0, f32::MIN, max_width, f32::MAX);
        let lines = self.make_lines(rectangle, 0.0, 1.0);

        let width = lines.iter().map(|line| line.width).fold(0.0f32, f32::max);
        let (Some(front), Some(back)) = (lines.first(), lines.last()) else {
            return Extent::new(0.0, 0.0);
        };
        let max_y = front.y + front.metrics.ascender.ceil();
        let min_y = back.y - back.metrics.descender.ceil();
        Extent::new(width.ceil(), max_y - min_y)
    }

    /// Lay the text out inside `rectangle`, aligning the lines vertically
    /// around `baseline`.
    pub fn layout(&mut self, rectangle: Rect, baseline: f32) {
        self.rectangle = rectangle;
        self.lines = self.make_lines(rectangle, baseline, self.config.sub_pixel.height);

        let context = BidiContext { enable_line_separator: true, ..self.config.bidi };
        bidi_algorithm(&mut self.lines, &mut self.text, &context, self.text_direction);

        for line in &mut self.lines {
            line.layout(
                &mut self.text,
                self.font,
                self.config.alignment.horizontal,
                rectangle.left,
                rectangle.right,
                self.config.sub_pixel.width,
                self.config.justify_max_stretch,
            );
        }
        log::debug!("Laid out {} graphemes in {} lines", self.text.len(), self.lines.len());
    }

    fn make_lines(&mut self, rectangle: Rect, baseline: f32, sub_pixel_height: f32) -> Vec<ShaperLine> {
        let line_sizes = fold_lines(&self.line_break_opportunities, &self.line_break_widths, rectangle.width());

        let mut lines = Vec::with_capacity(line_sizes.len() + 1);
        let mut first = 0;
        for size in line_sizes {
            let last = first + size;
            let width = line_width(&self.line_break_widths[first..last]);
            lines.push(ShaperLine::new(lines.len(), &mut self.text, first, last, width, self.initial_metrics));
            first = last;
        }

        // The cursor needs a line after a final paragraph separator, or in an empty text.
        if lines.last().map_or(true, |line: &ShaperLine| line.last_category.is_zp_or_zl()) {
            if self.text.is_empty() {
                log::debug!("Empty text, adding an empty line");
            }
            let len = self.text.len();
            let mut line = ShaperLine::new(lines.len(), &mut self.text, len, len, 0.0, self.initial_metrics);
            line.paragraph_direction = self.text_direction;
            lines.push(line);
        }

        layout_lines_vertical_spacing(&mut lines, self.config.line_spacing, self.config.paragraph_spacing);
        layout_lines_vertical_alignment(
            &mut lines,
            self.config.alignment.vertical,
            baseline,
            rectangle.bottom,
            rectangle.top,
            sub_pixel_height,
        );
        lines
    }

    /// Column and line of a grapheme; `len()` is just past the end of the last line.
    pub fn get_column_line(&self, index: usize) -> (usize, usize) {
        match self.text.get(index) {
            Some(c) => (c.column_nr, c.line_nr),
            None => (self.lines.last().map_or(0, ShaperLine::len), self.lines.len().saturating_sub(1)),
        }
    }

    /// Grapheme at a column of a line.
    ///
    /// Stepping off either end of a line continues on the previous or next
    /// line, depending on the paragraph direction. Returns `len()` past the
    /// end of the text and 0 before its start.
    fn get_index(&self, column_nr: isize, line_nr: isize) -> usize {
        if line_nr < 0 {
            return 0;
        }
        let line_nr = line_nr as usize;
        let Some(line) = self.lines.get(line_nr) else {
            return self.text.len();
        };

        let left_of_line = column_nr < 0;
        let right_of_line = column_nr >= line.len() as isize;
        if !left_of_line && !right_of_line {
            return line.columns[column_nr as usize];
        }

        let go_up = left_of_line == line.paragraph_direction.is_left_to_right();
        if go_up {
            match line_nr.checked_sub(1).and_then(|n| self.lines.get(n)) {
                Some(prev) if prev.paragraph_direction.is_left_to_right() => prev.back(),
                Some(prev) => prev.front(),
                None => 0,
            }
        } else {
            match self.lines.get(line_nr + 1) {
                Some(next) if next.paragraph_direction.is_left_to_right() => next.front(),
                Some(next) => next.back(),
                None => self.text.len(),
            }
        }
    }

    fn move_left_index(&self, index: usize) -> usize {
        let (column_nr, line_nr) = self.get_column_line(index);
        self.get_index(column_nr as isize - 1, line_nr as isize)
    }

    fn move_right_index(&self, index: usize) -> usize {
        let (column_nr, line_nr) = self.get_column_line(index);
        self.get_index(column_nr as isize + 1, line_nr as isize)
    }

    pub fn begin_cursor(&self) -> TextCursor {
        TextCursor::default()
    }

    pub fn end_cursor(&self) -> TextCursor {
        TextCursor::new(self.len().saturating_sub(1), true).resize(self.len())
    }

    pub fn before_cursor(&self, index: usize) -> TextCursor {
        TextCursor::new(index, false).resize(self.len())
    }

    pub fn after_cursor(&self, index: usize) -> TextCursor {
        TextCursor::new(index, true).resize(self.len())
    }

    /// The cursor on the visual left side of a grapheme.
    pub fn left_cursor(&self, index: usize) -> TextCursor {
        match self.text.get(index) {
            Some(c) if c.direction.is_left_to_right() => self.before_cursor(index),
            Some(_) => self.after_cursor(index),
            None => self.end_cursor(),
        }
    }

    /// The cursor on the visual right side of a grapheme.
    pub fn right_cursor(&self, index: usize) -> TextCursor {
        match self.text.get(index) {
            Some(c) if c.direction.is_left_to_right() => self.after_cursor(index),
            Some(_) => self.before_cursor(index),
            None => self.end_cursor(),
        }
    }

    pub fn is_on_left(&self, cursor: TextCursor) -> bool {
        match self.text.get(cursor.index()) {
            Some(c) => c.direction.is_left_to_right() == cursor.before(),
            None => true,
        }
    }

    pub fn is_on_right(&self, cursor: TextCursor) -> bool {
        match self.text.get(cursor.index()) {
            Some(c) => c.direction.is_left_to_right() == cursor.after(),
            None => true,
        }
    }

    /// The cursor nearest to `point`: the line with the closest baseline,
    /// then the closest grapheme on it.
    pub fn get_nearest_cursor(&self, point: Point) -> TextCursor {
        if self.text.is_empty() {
            return TextCursor::default();
        }

        let nearest_line = self
            .lines
            .iter()
            .min_by(|a, b| (a.y - point.y).abs().total_cmp(&(b.y - point.y).abs()));
        match nearest_line {
            Some(line) => {
                let (index, after) = line.get_nearest(&self.text, point.x);
                TextCursor::new(index, after).resize(self.len())
            }
            None => TextCursor::default(),
        }
    }

    /// In overwrite mode the cursor is always on the leading side of the
    /// grapheme to overwrite.
    pub fn move_left_char(&self, cursor: TextCursor, overwrite_mode: bool) -> TextCursor {
        let index = cursor.index();
        if overwrite_mode {
            self.before_cursor(self.move_left_index(index))
        } else if self.is_on_left(cursor) {
            self.left_cursor(self.move_left_index(index))
        } else {
            self.left_cursor(index)
        }
    }

    pub fn move_right_char(&self, cursor: TextCursor, overwrite_mode: bool) -> TextCursor {
        let index = cursor.index();
        if overwrite_mode {
            self.before_cursor(self.move_right_index(index))
        } else if self.is_on_right(cursor) {
            self.right_cursor(self.move_right_index(index))
        } else {
            self.right_cursor(index)
        }
    }

    /// Horizontal position of a cursor, used when moving between lines.
    fn cursor_x(&self, cursor: TextCursor) -> f32 {
        match self.text.get(cursor.index()) {
            Some(c) if self.is_on_left(cursor) => c.rectangle.left,
            Some(c) => c.rectangle.right,
            None => 0.0,
        }
    }

    /// Move to the line below, keeping the horizontal position in `x`
    /// across repeated moves. Start with `x = None`.
    pub fn move_down_char(&self, cursor: TextCursor, x: &mut Option<f32>) -> TextCursor {
        if self.text.is_empty() {
            return TextCursor::default();
        }

        let (_, line_nr) = self.get_column_line(cursor.index());
        let Some(line) = self.lines.get(line_nr + 1) else {
            return self.end_cursor();
        };

        let x = *x.get_or_insert_with(|| self.cursor_x(cursor));
        let (index, _) = line.get_nearest(&self.text, x);
        self.before_cursor(index)
    }

    /// Move to the line above, see [`TextShaper::move_down_char`].
    pub fn move_up_char(&self, cursor: TextCursor, x: &mut Option<f32>) -> TextCursor {
        if self.text.is_empty() {
            return TextCursor::default();
        }

        let (_, line_nr) = self.get_column_line(cursor.index());
        let Some(line) = line_nr.checked_sub(1).and_then(|n| self.lines.get(n)) else {
            return TextCursor::default();
        };

        let x = *x.get_or_insert_with(|| self.cursor_x(cursor));
        let (index, _) = line.get_nearest(&self.text, x);
        self.before_cursor(index)
    }

    fn is_word_start(&self, index: usize) -> bool {
        self.text[index].general_category != GeneralCategory::Zs
            && self.word_break_opportunities[index] != BreakOpportunity::No
    }

    fn move_word(&self, cursor: TextCursor, step: impl Fn(usize) -> usize) -> TextCursor {
        let mut index = cursor.before_neighbor(self.len()).index();
        for _ in 0..=self.len() {
            if index >= self.len() {
                break;
            }
            if self.is_word_start(index) {
                return self.before_cursor(index);
            }
            let next = step(index);
            if next == index {
                return self.before_cursor(index);
            }
            index = next;
        }
        self.end_cursor()
    }

    /// Move to the start of the word on the left.
    pub fn move_left_word(&self, cursor: TextCursor, overwrite_mode: bool) -> TextCursor {
        self.move_word(self.move_left_char(cursor, overwrite_mode), |i| self.move_left_index(i))
    }

    /// Move to the start of the word on the right.
    pub fn move_right_word(&self, cursor: TextCursor, overwrite_mode: bool) -> TextCursor {
        self.move_word(self.move_right_char(cursor, overwrite_mode), |i| self.move_right_index(i))
    }

    pub fn move_begin_line(&self, cursor: TextCursor) -> TextCursor {
        let (_, line_nr) = self.get_column_line(cursor.index());
        match self.lines.get(line_nr) {
            Some(line) => self.before_cursor(line.first),
            None => TextCursor::default(),
        }
    }

    /// After the last grapheme of the line that is not trailing whitespace.
    pub fn move_end_line(&self, cursor: TextCursor) -> TextCursor {
        let (_, line_nr) = self.get_column_line(cursor.index());
        let Some(line) = self.lines.get(line_nr) else {
            return self.end_cursor();
        };

        let mut index = line.last;
        while index != line.first {
            index -= 1;
            if !self.text[index].is_trailing_white_space {
                break;
            }
        }
        self.after_cursor(index)
    }

    /// The cursor moved back one step, so that repeating the move continues
    /// to the previous boundary.
    fn step_back(&self, cursor: TextCursor) -> TextCursor {
        if cursor.after() {
            TextCursor::new(cursor.index(), false)
        } else if cursor.index() != 0 {
            TextCursor::new(cursor.index() - 1, false)
        } else {
            cursor
        }
    }

    fn step_forward(&self, cursor: TextCursor) -> TextCursor {
        if cursor.before() {
            TextCursor::new(cursor.index(), true)
        } else if cursor.index() + 1 < self.len() {
            TextCursor::new(cursor.index() + 1, true)
        } else {
            cursor
        }
    }

    pub fn move_begin_sentence(&self, cursor: TextCursor) -> TextCursor {
        let (first, _) = self.select_sentence(self.step_back(cursor));
        first.before_neighbor(self.len())
    }

    pub fn move_end_sentence(&self, cursor: TextCursor) -> TextCursor {
        let (_, last) = self.select_sentence(self.step_forward(cursor));
        last.before_neighbor(self.len())
    }

    pub fn move_begin_paragraph(&self, cursor: TextCursor) -> TextCursor {
        let (first, _) = self.select_paragraph(self.step_back(cursor));
        first.before_neighbor(self.len())
    }

    pub fn move_end_paragraph(&self, cursor: TextCursor) -> TextCursor {
        let (_, last) = self.select_paragraph(self.step_forward(cursor));
        last.before_neighbor(self.len())
    }

    pub fn move_begin_document(&self, _cursor: TextCursor) -> TextCursor {
        self.begin_cursor()
    }

    pub fn move_end_document(&self, _cursor: TextCursor) -> TextCursor {
        self.end_cursor()
    }

    fn get_selection_from_break(&self, cursor: TextCursor, opportunities: &[BreakOpportunity]) -> (TextCursor, TextCursor) {
        if self.text.is_empty() {
            return (TextCursor::default(), TextCursor::default());
        }

        let index = cursor.resize(self.len()).index();
        let mut first = index;
        while first > 0 && opportunities[first] == BreakOpportunity::No {
            first -= 1;
        }
        let mut last = index;
        while last + 1 < self.len() && opportunities[last + 1] == BreakOpportunity::No {
            last += 1;
        }
        (self.before_cursor(first), self.after_cursor(last))
    }

    pub fn select_char(&self, cursor: TextCursor) -> (TextCursor, TextCursor) {
        (self.before_cursor(cursor.index()), self.after_cursor(cursor.index()))
    }

    pub fn select_word(&self, cursor: TextCursor) -> (TextCursor, TextCursor) {
        self.get_selection_from_break(cursor, &self.word_break_opportunities)
    }

    pub fn select_sentence(&self, cursor: TextCursor) -> (TextCursor, TextCursor) {
        self.get_selection_from_break(cursor, &self.sentence_break_opportunities)
    }

    /// From after the previous paragraph separator up to and including the next one.
    pub fn select_paragraph(&self, cursor: TextCursor) -> (TextCursor, TextCursor) {
        let is_separator = |c: &ShaperChar| c.general_category == GeneralCategory::Zp;
        let index = cursor.index().min(self.len());
        let first = self.text[..index].iter().rposition(is_separator).map_or(0, |i| i + 1);
        let last = self.text[index..].iter().position(is_separator).map_or(self.len(), |i| index + i);
        (self.before_cursor(first), self.after_cursor(last))
    }

    pub fn select_document(&self, _cursor: TextCursor) -> (TextCursor, TextCursor) {
        (self.begin_cursor(), self.end_cursor())
    }
}

/// Measure graphemes in logical order, in runs of equal language and script.
fn measure(text: &mut [ShaperChar], font: &dyn FontService) {
    let mut start = 0;
    while start < text.len() {
        let first = text[start].grapheme;
        let end = text[start..]
            .iter()
            .position(|c| c.grapheme.language() != first.language() || c.grapheme.script() != first.script())
            .map_or(text.len(), |n| start + n);

        let run: Vec<Grapheme> = text[start..end].iter().map(|c| c.grapheme).collect();
        let result = font.shape_run(first.language(), first.script(), &run);
        for (n, c) in text[start..end].iter_mut().enumerate() {
            c.width = result.advances.get(n).copied().unwrap_or(0.0);
            c.metrics = result.metrics;
        }
        start = end;
    }
}

/// Baselines going down; after a paragraph separator use paragraph spacing.
fn layout_lines_vertical_spacing(lines: &mut [ShaperLine], line_spacing: f32, paragraph_spacing: f32) {
    let Some(front) = lines.first_mut() else {
        return;
    };
    front.y = 0.0;

    for i in 1..lines.len() {
        let (prev, line) = (&lines[i - 1], &lines[i]);
        let height = prev.metrics.descender + prev.metrics.line_gap.max(line.metrics.line_gap) + line.metrics.ascender;
        let spacing = if prev.ends_paragraph() { paragraph_spacing } else { line_spacing };
        let y = prev.y - spacing * height;
        lines[i].y = y;
    }
}

/// Move the baselines onto `baseline`, keeping all lines between `min_y`
/// and `max_y` where possible, and round them to the sub-pixel grid.
fn layout_lines_vertical_alignment(
    lines: &mut [ShaperLine],
    alignment: VerticalAlignment,
    baseline: f32,
    min_y: f32,
    max_y: f32,
    sub_pixel_height: f32,
) {
    let (Some(front_y), Some(back_y)) = (lines.first().map(|l| l.y), lines.last().map(|l| l.y)) else {
        return;
    };

    let mut adjustment = baseline
        + match alignment {
            VerticalAlignment::Top => -front_y,
            VerticalAlignment::Bottom => -back_y,
            VerticalAlignment::Middle => {
                let middle = lines.len() / 2;
                if lines.len() % 2 == 1 {
                    -lines[middle].y
                } else {
                    -(lines[middle - 1].y + lines[middle].y) * 0.5
                }
            }
        };

    if back_y + adjustment < min_y {
        adjustment = min_y - back_y;
    }
    if front_y + adjustment > max_y {
        adjustment = max_y - front_y;
    }

    let rcp_sub_pixel_height = 1.0 / sub_pixel_height;
    for line in lines {
        line.y = ((line.y + adjustment) * rcp_sub_pixel_height).round() * sub_pixel_height;
    }
}

/// Reorder every line into visual columns.
///
/// The whole text is one run of the bidirectional algorithm so that
/// paragraphs keep one direction across their lines; a virtual LINE
/// SEPARATOR ends each line that has none. Explicit directional controls
/// are placed after the visual text of their line.
fn bidi_algorithm(lines: &mut [ShaperLine], text: &mut [ShaperChar], context: &BidiContext, text_direction: Direction) {
    let mut items: Vec<Option<usize>> = Vec::with_capacity(text.len() + lines.len());
    for line in lines.iter() {
        items.extend((line.first..line.last).map(Some));
        if !line.last_category.is_zp_or_zl() {
            items.push(None);
        }
    }

    let mut mirrored = Vec::new();
    let mut directions = vec![None; text.len()];
    let (_, paragraph_directions) = {
        let text = &*text;
        bidi(
            &mut items,
            |item| item.map_or(LINE_SEPARATOR, |i| text[i].grapheme.starter()),
            |item, code_point| {
                if let Some(i) = *item {
                    mirrored.push((i, code_point));
                }
            },
            |item, direction| {
                if let Some(i) = *item {
                    directions[i] = Some(direction);
                }
            },
            context,
        )
    };

    let mut paragraph = 0;
    for line in lines.iter_mut() {
        line.paragraph_direction = paragraph_directions.get(paragraph).copied().unwrap_or(text_direction);
        let ends_paragraph = line.last > line.first
            && ucd::bidi_class(text[line.last - 1].grapheme.starter()) == BidiClass::B;
        if ends_paragraph {
            paragraph += 1;
        }
    }

    let mut line_of = vec![0; text.len()];
    for line in lines.iter_mut() {
        line_of[line.first..line.last].fill(line.line_nr);
        line.columns.clear();
    }
    for &i in items.iter().flatten() {
        lines[line_of[i]].columns.push(i);
    }

    for c in text.iter_mut() {
        c.display = c.grapheme;
    }
    for line in lines.iter() {
        for (column_nr, &i) in line.columns.iter().enumerate() {
            let c = &mut text[i];
            c.line_nr = line.line_nr;
            c.column_nr = column_nr;
            c.direction = directions[i].unwrap_or(line.paragraph_direction);
        }
    }
    for (i, code_point) in mirrored {
        text[i].display.replace_code_point(code_point);
    }
}
