use criterion::{black_box, criterion_group, criterion_main, Criterion};

use runeflow_unicode::bidi::{reorder, BidiContext};
use runeflow_unicode::{fold_lines, grapheme_break, line_break, normalize, sentence_break, word_break, NormalizeConfig};

static PARAGRAPHS: &[&str] = &[
    "The quick brown fox jumps over the lazy dog. Pack my box with five dozen liquor jugs!",
    "Cre\u{0300}me bru\u{0302}le\u{0301}e, na\u{0308}ive cafe\u{0301} and the \u{FB01}nal \u{2460}.",
    "\u{05E9}\u{05DC}\u{05D5}\u{05DD} (world) 123 \u{05E2}\u{05D5}\u{05DC}\u{05DD} and some English text.",
    "\u{4ECA}\u{65E5}\u{306F}\u{826F}\u{3044}\u{5929}\u{6C17}\u{3067}\u{3059}\u{3002}\u{1F600}\u{1F1F3}\u{1F1F1}",
];

fn text() -> Vec<char> {
    PARAGRAPHS.join("\u{2029}").repeat(16).chars().collect()
}

fn normalization_bench(c: &mut Criterion) {
    let text = text();
    c.bench_function("normalize_nfc", |b| b.iter(|| normalize(black_box(&text), &NormalizeConfig::nfc())));
    c.bench_function("normalize_nfkd", |b| b.iter(|| normalize(black_box(&text), &NormalizeConfig::nfkd())));
}

fn segmentation_bench(c: &mut Criterion) {
    let text = text();
    c.bench_function("grapheme_break", |b| b.iter(|| grapheme_break(black_box(&text))));
    c.bench_function("word_break", |b| b.iter(|| word_break(black_box(&text))));
    c.bench_function("sentence_break", |b| b.iter(|| sentence_break(black_box(&text))));
    c.bench_function("line_break", |b| b.iter(|| line_break(black_box(&text))));
}

fn layout_bench(c: &mut Criterion) {
    let text = text();
    let opportunities = line_break(&text);
    let widths: Vec<f32> = text.iter().map(|c| if c.is_whitespace() { -4.0 } else { 7.0 }).collect();

    c.bench_function("fold_lines", |b| b.iter(|| fold_lines(black_box(&opportunities), black_box(&widths), 300.0)));
    c.bench_function("bidi_reorder", |b| b.iter(|| reorder(black_box(&text), &BidiContext::default())));
}

criterion_group!(benches, normalization_bench, segmentation_bench, layout_bench);
criterion_main!(benches);
