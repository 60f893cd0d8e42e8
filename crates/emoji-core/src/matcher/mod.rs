//! Dictionary-driven translation between text and emoji.
//!
//! Text → emoji scans the lowercased input left to right: longest phrase
//! first (with a trailing word-boundary guard), then the whole word, then a
//! naive plural retry, else the original text. Emoji → text replaces each
//! known glyph with its first keyword.

mod to_emoji;
mod to_text;
#[cfg(test)]
mod tests;

pub use to_emoji::{explain_to_emoji, translate_to_emoji, translate_to_emoji_with, Segment, SegmentKind};
pub use to_text::{translate_to_text, translate_to_text_with};

use serde::{Deserialize, Serialize};

use crate::dict::EmojiIndex;
use crate::unicode::{is_ascii_word_char, is_unicode_word_char};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    ToEmoji,
    ToText,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::ToEmoji => Direction::ToText,
            Direction::ToText => Direction::ToEmoji,
        }
    }
}

/// Which characters make up a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordChars {
    /// `[A-Za-z0-9_]`
    #[default]
    Ascii,
    /// Any alphanumeric character or `_`.
    Unicode,
}

impl WordChars {
    pub fn is_word(self, c: char) -> bool {
        match self {
            WordChars::Ascii => is_ascii_word_char(c),
            WordChars::Unicode => is_unicode_word_char(c),
        }
    }
}

/// Lookup granularity for emoji → text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphMatching {
    /// One Unicode scalar value per lookup.
    #[default]
    Char,
    /// Longest dictionary glyph starting at each position, then a single
    /// scalar value. Recognizes ZWJ sequences and variation-selector forms.
    Longest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub word_chars: WordChars,
    pub plural_fallback: bool,
    pub glyph_matching: GlyphMatching,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            word_chars: WordChars::Ascii,
            plural_fallback: true,
            glyph_matching: GlyphMatching::Char,
        }
    }
}

/// Translate with default options.
pub fn translate(text: &str, direction: Direction, index: &EmojiIndex) -> String {
    translate_with(text, direction, index, &MatchOptions::default())
}

pub fn translate_with(
    text: &str,
    direction: Direction,
    index: &EmojiIndex,
    opts: &MatchOptions,
) -> String {
    match direction {
        Direction::ToEmoji => translate_to_emoji_with(text, index, opts),
        Direction::ToText => translate_to_text_with(text, index, opts),
    }
}
