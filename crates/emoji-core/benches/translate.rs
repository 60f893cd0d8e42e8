use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use emoji_core::{
    translate_to_emoji, translate_to_text_with, EmojiIndex, EmojiRecord, GlyphMatching,
    MatchOptions,
};

/// A dictionary shaped like gemoji: a few thousand records, each with one
/// alias and a handful of tags, some of them multi-word.
fn bench_index(records: usize) -> EmojiIndex {
    let base = 0x1F300u32;
    let records = (0..records)
        .map(|i| {
            let glyph = char::from_u32(base + i as u32).unwrap_or('?').to_string();
            EmojiRecord {
                emoji: glyph,
                aliases: vec![format!("word{i}")],
                tags: vec![format!("tag{i}"), format!("multi word {i}"), format!("phrase number {i} here")],
                description: None,
                category: None,
            }
        })
        .collect();
    EmojiIndex::build(records)
}

fn bench_text(words: usize) -> String {
    (0..words)
        .map(|i| match i % 4 {
            0 => format!("word{i}"),
            1 => format!("Multi Word {i},"),
            2 => "unknown".to_string(),
            _ => format!("tag{i}s"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_to_emoji(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate_to_emoji");
    for records in [100, 1000, 4000] {
        let index = bench_index(records);
        let text = bench_text(200);
        group.bench_with_input(BenchmarkId::from_parameter(records), &text, |b, text| {
            b.iter(|| translate_to_emoji(text, &index))
        });
    }
    group.finish();
}

fn bench_to_text(c: &mut Criterion) {
    let index = bench_index(1000);
    let emoji = translate_to_emoji(&bench_text(200), &index);
    let longest = MatchOptions {
        glyph_matching: GlyphMatching::Longest,
        ..MatchOptions::default()
    };
    c.bench_function("translate_to_text/char", |b| {
        b.iter(|| translate_to_text_with(&emoji, &index, &MatchOptions::default()))
    });
    c.bench_function("translate_to_text/longest", |b| {
        b.iter(|| translate_to_text_with(&emoji, &index, &longest))
    });
}

criterion_group!(benches, bench_to_emoji, bench_to_text);
criterion_main!(benches);
