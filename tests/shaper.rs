use runeflow::{
    BidiContext, BidiDirectionMode, Extent, FontMetrics, FontService, Grapheme, HorizontalAlignment, Point, Rect,
    ShapedRun, ShaperConfig, TextCursor, TextShaper, VerticalAlignment,
};
use runeflow::unicode::{Iso15924, Iso639, Phrasing};

/// Every grapheme is 10 wide.
struct Mono;

impl FontService for Mono {
    fn metrics(&self) -> FontMetrics {
        FontMetrics { ascender: 8.0, descender: 2.0, line_gap: 1.0, x_height: 4.0 }
    }

    fn shape_run(&self, _language: Iso639, _script: Iso15924, run: &[Grapheme]) -> ShapedRun {
        ShapedRun {
            advances: vec![10.0; run.len()],
            glyph_count: vec![1; run.len()],
            glyphs: run.iter().map(|g| g.starter() as u16).collect(),
            glyph_rectangles: vec![Rect::new(1.0, 0.0, 9.0, 7.0); run.len()],
            metrics: self.metrics(),
        }
    }
}

fn top_left() -> ShaperConfig {
    ShaperConfig::default().with_alignment(HorizontalAlignment::Flush, VerticalAlignment::Top)
}

/// "aa bb cc" folded to 55: "aa bb " and "cc", baselines at 50 and 39.
fn wrapped(config: ShaperConfig) -> TextShaper<'static> {
    let mut shaper = TextShaper::from_text(&Mono, "aa bb cc", config);
    shaper.layout(Rect::new(0.0, 0.0, 55.0, 100.0), 50.0);
    shaper
}

fn xs(shaper: &TextShaper) -> Vec<f32> {
    shaper.chars().iter().map(|c| c.position.x).collect()
}

#[test]
fn lines_are_folded_and_stacked() {
    let shaper = wrapped(top_left());
    let lines = shaper.lines();

    assert_eq!(lines.len(), 2);
    assert_eq!((lines[0].first, lines[0].last), (0, 6));
    assert_eq!((lines[1].first, lines[1].last), (6, 8));
    assert_eq!(lines[0].y, 50.0);
    assert_eq!(lines[1].y, 39.0);
    assert_eq!(xs(&shaper), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 0.0, 10.0]);

    let c = &shaper.chars()[7];
    assert_eq!(c.line_nr, 1);
    assert_eq!(c.column_nr, 1);
    assert_eq!(c.rectangle, Rect::new(10.0, 37.0, 20.0, 47.0));
    assert_eq!(c.glyphs, vec!['c' as u16]);
    assert!(shaper.chars()[5].is_trailing_white_space);
}

#[test]
fn justified_lines() {
    let config = ShaperConfig::from_json(r#"{ "alignment": { "horizontal": "justified", "vertical": "top" } }"#).unwrap();
    let shaper = wrapped(config);

    // Five extra units go into the one internal space; the last line has none.
    assert_eq!(xs(&shaper), vec![0.0, 10.0, 20.0, 35.0, 45.0, 55.0, 0.0, 10.0]);
}

#[test]
fn centered_lines() {
    let shaper = wrapped(ShaperConfig::default().with_alignment(HorizontalAlignment::Center, VerticalAlignment::Top));
    // Visible widths 50 and 20 in 55; 2.5 rounds away from zero.
    assert_eq!(xs(&shaper)[..2], [3.0, 13.0]);
    assert_eq!(xs(&shaper)[6..], [18.0, 28.0]);
}

#[test]
fn empty_text_has_one_line() {
    let mut shaper = TextShaper::from_text(&Mono, "", top_left());
    assert_eq!(shaper.bounding_size(100.0), Extent::new(0.0, 10.0));

    shaper.layout(Rect::new(0.0, 0.0, 100.0, 100.0), 50.0);
    assert_eq!(shaper.lines().len(), 1);
    assert_eq!(shaper.get_nearest_cursor(Point::new(10.0, 50.0)), TextCursor::default());
    assert_eq!(shaper.move_end_document(TextCursor::default()), TextCursor::default());
    assert_eq!(shaper.select_word(TextCursor::default()), (TextCursor::default(), TextCursor::default()));
}

#[test]
fn final_paragraph_separator_adds_a_line() {
    let mut shaper = TextShaper::from_text(&Mono, "ab\n", ShaperConfig::default());
    assert_eq!(shaper.len(), 3);

    // Baselines 16.5 apart, centered around zero and rounded to 8 and -8.
    assert_eq!(shaper.bounding_size(100.0), Extent::new(20.0, 26.0));

    shaper.layout(Rect::new(0.0, -100.0, 100.0, 100.0), 0.0);
    let lines = shaper.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!((lines[1].first, lines[1].last), (3, 3));
    assert_eq!((lines[0].y, lines[1].y), (8.0, -8.0));
}

#[test]
fn mixed_direction_columns() {
    let mut shaper = TextShaper::from_text(&Mono, "abc \u{05D0}\u{05D1}\u{05D2}", top_left());
    shaper.layout(Rect::new(0.0, 0.0, 100.0, 100.0), 50.0);

    assert_eq!(shaper.lines()[0].columns, vec![0, 1, 2, 3, 6, 5, 4]);
    assert_eq!(shaper.chars()[6].position.x, 40.0);
    assert_eq!(shaper.chars()[4].position.x, 60.0);
    assert!(!shaper.chars()[4].direction.is_left_to_right());

    // Moving right walks the columns left to right.
    let mut cursor = shaper.begin_cursor();
    let mut visited = Vec::new();
    for _ in 0..8 {
        cursor = shaper.move_right_char(cursor, false);
        visited.push((cursor.index(), cursor.after()));
    }
    assert_eq!(
        visited,
        vec![(0, true), (1, true), (2, true), (3, true), (6, false), (5, false), (4, false), (6, true)]
    );
}

#[test]
fn right_to_left_brackets_are_mirrored() {
    let config = ShaperConfig {
        bidi: BidiContext { direction_mode: BidiDirectionMode::Rtl, ..BidiContext::default() },
        ..top_left()
    };
    let mut shaper = TextShaper::from_text(&Mono, "(abc)", config);
    shaper.layout(Rect::new(0.0, 0.0, 100.0, 100.0), 50.0);

    assert_eq!(shaper.lines()[0].columns, vec![4, 1, 2, 3, 0]);
    assert_eq!(shaper.chars()[4].grapheme, ')');
    assert_eq!(shaper.chars()[4].display, '(');
    assert_eq!(shaper.chars()[0].display, ')');
    // Flush aligns a right-to-left paragraph to the right.
    assert_eq!(shaper.chars()[4].position.x, 50.0);
}

#[test]
fn word_movement() {
    let mut shaper = TextShaper::from_text(&Mono, "hello big world", top_left());
    shaper.layout(Rect::new(0.0, 0.0, 1000.0, 100.0), 50.0);

    let mut cursor = shaper.begin_cursor();
    cursor = shaper.move_right_word(cursor, false);
    assert_eq!(cursor, TextCursor::new(6, false));
    cursor = shaper.move_right_word(cursor, false);
    assert_eq!(cursor, TextCursor::new(10, false));
    cursor = shaper.move_right_word(cursor, false);
    assert_eq!(cursor, shaper.end_cursor());

    cursor = shaper.move_left_word(cursor, false);
    assert_eq!(cursor, TextCursor::new(10, false));
    cursor = shaper.move_left_word(cursor, false);
    assert_eq!(cursor, TextCursor::new(6, false));
    cursor = shaper.move_left_word(cursor, false);
    assert_eq!(cursor, TextCursor::new(0, false));
    assert_eq!(shaper.move_left_word(cursor, false), TextCursor::new(0, false));
}

#[test]
fn overwrite_mode_stays_before() {
    let mut shaper = TextShaper::from_text(&Mono, "abc", top_left());
    shaper.layout(Rect::new(0.0, 0.0, 100.0, 100.0), 50.0);

    let cursor = shaper.move_right_char(TextCursor::new(0, false), true);
    assert_eq!(cursor, TextCursor::new(1, false));
    assert_eq!(shaper.move_left_char(cursor, true), TextCursor::new(0, false));
}

#[test]
fn line_movement() {
    let shaper = wrapped(top_left());

    assert_eq!(shaper.move_end_line(TextCursor::new(1, false)), TextCursor::new(4, true));
    assert_eq!(shaper.move_begin_line(TextCursor::new(7, false)), TextCursor::new(6, false));

    let mut x = None;
    let down = shaper.move_down_char(TextCursor::new(1, false), &mut x);
    assert_eq!(down, TextCursor::new(6, false));
    assert_eq!(x, Some(10.0));
    assert_eq!(shaper.move_up_char(down, &mut x), TextCursor::new(0, false));

    assert_eq!(shaper.move_down_char(down, &mut None), shaper.end_cursor());
    assert_eq!(shaper.move_up_char(TextCursor::new(2, false), &mut None), TextCursor::default());
}

#[test]
fn nearest_cursor() {
    let shaper = wrapped(top_left());

    assert_eq!(shaper.get_nearest_cursor(Point::new(25.0, 39.0)), TextCursor::new(7, true));
    assert_eq!(shaper.get_nearest_cursor(Point::new(12.0, 52.0)), TextCursor::new(1, false));
}

#[test]
fn selections() {
    let text = "One two. Three four.\u{2029}Next";
    let shaper = TextShaper::from_text(&Mono, text, ShaperConfig::default());
    let at = |i| TextCursor::new(i, false);
    let after = |i| TextCursor::new(i, true);

    assert_eq!(shaper.select_char(at(5)), (at(5), after(5)));
    assert_eq!(shaper.select_word(at(12)), (at(9), after(13)));
    assert_eq!(shaper.select_sentence(at(12)), (at(9), after(20)));
    assert_eq!(shaper.select_paragraph(at(12)), (at(0), after(20)));
    assert_eq!(shaper.select_paragraph(at(22)), (at(21), after(24)));
    assert_eq!(shaper.select_document(at(3)), (at(0), after(24)));

    assert_eq!(shaper.move_end_sentence(at(0)), at(9));
    assert_eq!(shaper.move_begin_sentence(at(12)), at(9));
    assert_eq!(shaper.move_begin_paragraph(at(22)), at(21));
    assert_eq!(shaper.move_end_paragraph(at(0)), at(21));
}

#[test]
fn markup_sets_phrasing() {
    let shaper = TextShaper::from_markup(&Mono, "a[e]b", ShaperConfig::default());
    assert_eq!(shaper.len(), 2);
    assert_eq!(shaper.chars()[0].grapheme.phrasing(), Phrasing::Regular);
    assert_eq!(shaper.chars()[1].grapheme.phrasing(), Phrasing::Emphasis);
}

#[test]
fn width_range() {
    let shaper = TextShaper::from_text(&Mono, "aa bbb c", ShaperConfig::default());
    assert_eq!(shaper.width_range(), (30.0, 80.0));
}
