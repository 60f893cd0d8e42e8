use tracing::debug_span;

use crate::dict::EmojiIndex;

use super::{GlyphMatching, MatchOptions};

/// Translate emoji to text with default (per-character) lookup.
pub fn translate_to_text(text: &str, index: &EmojiIndex) -> String {
    translate_to_text_with(text, index, &MatchOptions::default())
}

/// Replace every known glyph with its canonical keyword.
///
/// A glyph whose keyword list is empty is replaced by nothing.
pub fn translate_to_text_with(text: &str, index: &EmojiIndex, opts: &MatchOptions) -> String {
    let _span = debug_span!("translate_to_text", len = text.len(), mode = ?opts.glyph_matching)
        .entered();
    match opts.glyph_matching {
        GlyphMatching::Char => per_char(text, index),
        GlyphMatching::Longest => longest_glyph(text, index),
    }
}

fn canonical(keywords: &[String]) -> &str {
    keywords.first().map_or("", String::as_str)
}

fn per_char(text: &str, index: &EmojiIndex) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        match index.keywords(c.encode_utf8(&mut buf)) {
            Some(keywords) => out.push_str(canonical(keywords)),
            None => out.push(c),
        }
    }
    out
}

fn longest_glyph(text: &str, index: &EmojiIndex) -> String {
    let chars: Vec<char> = text.chars().collect();
    let max_len = index.max_glyph_chars();
    let mut out = String::with_capacity(text.len());
    let mut key = String::new();
    let mut i = 0;

    while i < chars.len() {
        let longest = max_len.min(chars.len() - i);
        let hit = (1..=longest).rev().find_map(|len| {
            key.clear();
            key.extend(&chars[i..i + len]);
            index.keywords(&key).map(|k| (len, k))
        });
        match hit {
            Some((len, keywords)) => {
                out.push_str(canonical(keywords));
                i += len;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}
