use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::EmojiIndex;
use crate::unicode::{fold_case, naive_singular};

use super::{MatchOptions, WordChars};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// A multi-word phrase key matched.
    Phrase,
    /// A whole word matched.
    Word,
    /// The word matched after dropping a trailing `s`.
    Plural,
    /// A word with no entry; emitted in its original case.
    Unmatched,
    /// A single non-word character, emitted as is.
    Literal,
}

/// One step of the text → emoji scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Start of the source span, in characters of the input.
    pub start: usize,
    /// End (exclusive) of the source span, in characters of the input.
    pub end: usize,
    /// The consumed input text, original casing.
    pub source: String,
    pub kind: SegmentKind,
    pub output: String,
}

impl Segment {
    pub fn is_match(&self) -> bool {
        matches!(
            self.kind,
            SegmentKind::Phrase | SegmentKind::Word | SegmentKind::Plural
        )
    }
}

/// Maps spans of the case-folded text back to the original characters.
///
/// Each original character is handed out exactly once, even when its
/// lowercase form spans several folded characters.
struct SourceCursor<'a> {
    original: &'a [char],
    owner: &'a [usize],
    next: usize,
}

impl SourceCursor<'_> {
    fn take(&mut self, folded_start: usize, folded_end: usize) -> (usize, usize, String) {
        let start = self.owner[folded_start].max(self.next);
        let end = (self.owner[folded_end - 1] + 1).max(start);
        self.next = end;
        (start, end, self.original[start..end].iter().collect())
    }

    fn segment(
        &mut self,
        folded_start: usize,
        folded_end: usize,
        kind: SegmentKind,
        output: Option<&str>,
    ) -> Segment {
        let (start, end, source) = self.take(folded_start, folded_end);
        let output = output.map_or_else(|| source.clone(), str::to_string);
        Segment {
            start,
            end,
            source,
            kind,
            output,
        }
    }
}

/// Segment `text` the way the text → emoji translation sees it.
///
/// The concatenated `source` fields reproduce `text`; the concatenated
/// `output` fields are the translation.
pub fn explain_to_emoji(text: &str, index: &EmojiIndex, opts: &MatchOptions) -> Vec<Segment> {
    let original: Vec<char> = text.chars().collect();
    let (folded, owner) = fold_case(text);
    let _span = debug_span!("explain_to_emoji", chars = original.len()).entered();

    let mut cursor = SourceCursor {
        original: &original,
        owner: &owner,
        next: 0,
    };
    let mut segments = Vec::new();
    let mut i = 0;

    while i < folded.len() {
        if let Some((len, emoji)) = match_phrase(&folded[i..], index, opts.word_chars) {
            segments.push(cursor.segment(i, i + len, SegmentKind::Phrase, Some(emoji)));
            i += len;
            continue;
        }

        let word_len = folded[i..]
            .iter()
            .take_while(|&&c| opts.word_chars.is_word(c))
            .count();
        if word_len == 0 {
            segments.push(cursor.segment(i, i + 1, SegmentKind::Literal, None));
            i += 1;
            continue;
        }

        let word: String = folded[i..i + word_len].iter().collect();
        let (kind, emoji) = lookup_word(&word, index, opts);
        segments.push(cursor.segment(i, i + word_len, kind, emoji));
        i += word_len;
    }

    debug!(
        segment_count = segments.len(),
        matched = segments.iter().filter(|s| s.is_match()).count()
    );
    segments
}

/// Longest phrase that is a prefix of `rest` and is followed by end of input
/// or a non-word character.
fn match_phrase<'a>(
    rest: &[char],
    index: &'a EmojiIndex,
    word_chars: WordChars,
) -> Option<(usize, &'a str)> {
    index
        .phrases_longest_first()
        .iter()
        .skip_while(|p| p.chars.len() > rest.len())
        .find(|p| {
            rest.starts_with(&p.chars)
                && rest
                    .get(p.chars.len())
                    .map_or(true, |&c| !word_chars.is_word(c))
        })
        .map(|p| (p.chars.len(), p.emoji.as_str()))
}

/// An empty glyph counts as a miss, so the word falls through to the plural
/// retry and finally to its original text.
fn lookup_word<'a>(
    word: &str,
    index: &'a EmojiIndex,
    opts: &MatchOptions,
) -> (SegmentKind, Option<&'a str>) {
    let hit = |w: &str| index.word(w).filter(|e| !e.is_empty());
    if let Some(emoji) = hit(word) {
        return (SegmentKind::Word, Some(emoji));
    }
    if opts.plural_fallback {
        if let Some(emoji) = naive_singular(word).and_then(hit) {
            return (SegmentKind::Plural, Some(emoji));
        }
    }
    (SegmentKind::Unmatched, None)
}

/// Translate text to emoji with default options.
pub fn translate_to_emoji(text: &str, index: &EmojiIndex) -> String {
    translate_to_emoji_with(text, index, &MatchOptions::default())
}

pub fn translate_to_emoji_with(text: &str, index: &EmojiIndex, opts: &MatchOptions) -> String {
    explain_to_emoji(text, index, opts)
        .into_iter()
        .map(|s| s.output)
        .collect()
}
