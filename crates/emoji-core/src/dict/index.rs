use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use super::EmojiRecord;
use crate::unicode::fold_key;

/// Which record keeps a keyword when several records share it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Later records overwrite earlier ones.
    #[default]
    LastWins,
    /// The earliest record keeps the key.
    FirstWins,
}

impl CollisionPolicy {
    fn insert<V>(self, map: &mut HashMap<String, V>, key: String, value: V) {
        match self {
            CollisionPolicy::LastWins => {
                map.insert(key, value);
            }
            CollisionPolicy::FirstWins => {
                map.entry(key).or_insert(value);
            }
        }
    }
}

/// A phrase key pre-split into characters, kept in longest-first order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhraseEntry {
    pub chars: Vec<char>,
    pub emoji: String,
}

/// Lookup indices derived from a record list.
///
/// Built once and read-only afterwards. Keys of `words` and `phrases` are
/// lowercase; keys of `reverse` are glyphs exactly as they appear in the
/// records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiIndex {
    records: Vec<EmojiRecord>,
    policy: CollisionPolicy,
    /// Lowercase single word → glyph.
    words: HashMap<String, String>,
    /// Lowercase keyword containing a space → glyph.
    phrases: HashMap<String, String>,
    /// `phrases`, sorted by descending character length.
    phrases_longest_first: Vec<PhraseEntry>,
    /// Glyph → aliases then tags.
    reverse: HashMap<String, Vec<String>>,
    /// Character length of the longest reverse key.
    max_glyph_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub words: usize,
    pub phrases: usize,
    pub glyphs: usize,
    pub longest_phrase_chars: usize,
}

impl Default for EmojiIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl EmojiIndex {
    /// The index of an empty dictionary: every lookup misses.
    pub fn empty() -> Self {
        Self::build(Vec::new())
    }

    /// Build with the last-write-wins collision policy.
    pub fn build(records: Vec<EmojiRecord>) -> Self {
        Self::build_with_policy(records, CollisionPolicy::LastWins)
    }

    pub fn build_with_policy(records: Vec<EmojiRecord>, policy: CollisionPolicy) -> Self {
        let _span = debug_span!("build_index", records = records.len(), ?policy).entered();

        let mut words = HashMap::new();
        let mut phrases = HashMap::new();
        let mut reverse = HashMap::new();

        for record in &records {
            let keywords: Vec<String> = record.keywords().map(str::to_string).collect();
            for keyword in &keywords {
                let key = fold_key(keyword);
                if key.contains(' ') {
                    policy.insert(&mut phrases, key, record.emoji.clone());
                } else {
                    policy.insert(&mut words, key, record.emoji.clone());
                }
            }
            policy.insert(&mut reverse, record.emoji.clone(), keywords);
        }

        let mut phrases_longest_first: Vec<PhraseEntry> = phrases
            .iter()
            .map(|(key, emoji)| PhraseEntry {
                chars: key.chars().collect(),
                emoji: emoji.clone(),
            })
            .collect();
        // Two distinct phrases of equal length can never both match at the
        // same position; the secondary key only makes the order stable.
        phrases_longest_first.sort_by(|a, b| {
            b.chars
                .len()
                .cmp(&a.chars.len())
                .then_with(|| a.chars.cmp(&b.chars))
        });

        let max_glyph_chars = reverse
            .keys()
            .map(|k: &String| k.chars().count())
            .max()
            .unwrap_or(0);

        debug!(
            words = words.len(),
            phrases = phrases.len(),
            glyphs = reverse.len(),
            "index built"
        );

        Self {
            records,
            policy,
            words,
            phrases,
            phrases_longest_first,
            reverse,
            max_glyph_chars,
        }
    }

    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty() && self.reverse.is_empty()
    }

    /// Glyph for a lowercase single word.
    pub fn word(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Glyph for a lowercase phrase.
    pub fn phrase(&self, phrase: &str) -> Option<&str> {
        self.phrases.get(phrase).map(String::as_str)
    }

    /// All keywords of a glyph, aliases first.
    pub fn keywords(&self, glyph: &str) -> Option<&[String]> {
        self.reverse.get(glyph).map(Vec::as_slice)
    }

    /// First keyword of a glyph, used when translating back to text.
    pub fn canonical_keyword(&self, glyph: &str) -> Option<&str> {
        self.keywords(glyph)
            .and_then(|k| k.first())
            .map(String::as_str)
    }

    pub(crate) fn phrases_longest_first(&self) -> &[PhraseEntry] {
        &self.phrases_longest_first
    }

    pub(crate) fn max_glyph_chars(&self) -> usize {
        self.max_glyph_chars
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.records.len(),
            words: self.words.len(),
            phrases: self.phrases.len(),
            glyphs: self.reverse.len(),
            longest_phrase_chars: self
                .phrases_longest_first
                .first()
                .map_or(0, |p| p.chars.len()),
        }
    }
}
