use std::fs;
use std::path::Path;

use emoji_core::dict::{load_index, load_records};
use emoji_core::settings::settings;
use emoji_core::unicode::{fold_key, naive_singular};
use emoji_core::{CollisionPolicy, EmojiIndex, IndexStats};

use super::die;

pub fn compile(input_file: &str, output_file: &str) {
    let records = die!(
        load_records(Path::new(input_file)),
        "Error reading {input_file}: {}"
    );
    let policy = settings().index.collision;
    eprintln!("Indexing {} records (collision: {policy:?})...", records.len());

    let index = EmojiIndex::build_with_policy(records, policy);
    die!(
        index.save(Path::new(output_file)),
        "Error writing snapshot: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!("Wrote {output_file} ({:.1} KB)", file_size as f64 / 1024.0);
    print_stats(&index.stats());
}

/// Show index statistics for a JSON dictionary or EMDX snapshot.
pub fn info(file: &str, json: bool) {
    let index = die!(
        load_index(Path::new(file), settings().index.collision),
        "Error opening dictionary: {}"
    );
    let stats = index.stats();
    if json {
        let out = die!(
            serde_json::to_string_pretty(&stats),
            "Error serializing stats: {}"
        );
        println!("{out}");
        return;
    }
    let format = match fs::read(file).ok().as_deref().and_then(|b| b.get(..4)) {
        Some(b"EMDX") => "EMDX snapshot",
        _ => "JSON records",
    };
    println!("Format:    {format}");
    println!("Collision: {:?}", index.policy());
    print_stats(&stats);
}

fn print_stats(stats: &IndexStats) {
    println!("  records:  {}", stats.records);
    println!("  words:    {}", stats.words);
    println!("  phrases:  {} (longest {} chars)", stats.phrases, stats.longest_phrase_chars);
    println!("  glyphs:   {}", stats.glyphs);
}

pub fn lookup(dict_file: &str, query: &str) {
    let index = die!(
        load_index(Path::new(dict_file), settings().index.collision),
        "Error opening dictionary: {}"
    );
    for line in describe(&index, query) {
        println!("{line}");
    }
}

/// Everything the index knows about `query`: as a glyph, as a phrase or
/// word key, and as a plural of a word key.
pub fn describe(index: &EmojiIndex, query: &str) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(keywords) = index.keywords(query) {
        lines.push(format!("{query}: glyph, keywords: {}", keywords.join(", ")));
        let mut same_glyph = index.records().iter().filter(|r| r.emoji == query);
        let record = match index.policy() {
            CollisionPolicy::LastWins => same_glyph.last(),
            CollisionPolicy::FirstWins => same_glyph.next(),
        };
        if let Some(desc) = record.and_then(|r| r.description.as_deref()) {
            lines.push(format!("  description: {desc}"));
        }
        if let Some(cat) = record.and_then(|r| r.category.as_deref()) {
            lines.push(format!("  category: {cat}"));
        }
    }

    let key = fold_key(query);
    if key.contains(' ') {
        if let Some(glyph) = index.phrase(&key) {
            lines.push(format!("{query}: phrase -> {glyph}"));
        }
    } else if let Some(glyph) = index.word(&key).filter(|g| !g.is_empty()) {
        lines.push(format!("{query}: word -> {glyph}"));
    } else if let Some(singular) = naive_singular(&key) {
        if let Some(glyph) = index.word(singular).filter(|g| !g.is_empty()) {
            lines.push(format!("{query}: plural of {singular} -> {glyph}"));
        }
    }

    if lines.is_empty() {
        lines.push(format!("{query}: not found"));
    }
    lines
}
