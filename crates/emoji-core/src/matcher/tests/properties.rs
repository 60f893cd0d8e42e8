//! Generative checks over arbitrary input text.

use proptest::prelude::*;

use super::test_index;
use crate::dict::EmojiIndex;
use crate::matcher::{
    explain_to_emoji, translate_to_emoji_with, translate_to_text_with, GlyphMatching,
    MatchOptions, SegmentKind, WordChars,
};

fn arb_options() -> impl Strategy<Value = MatchOptions> {
    (
        prop_oneof![Just(WordChars::Ascii), Just(WordChars::Unicode)],
        any::<bool>(),
        prop_oneof![Just(GlyphMatching::Char), Just(GlyphMatching::Longest)],
    )
        .prop_map(|(word_chars, plural_fallback, glyph_matching)| MatchOptions {
            word_chars,
            plural_fallback,
            glyph_matching,
        })
}

/// Text biased towards dictionary words, separators and odd characters.
fn arb_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        4 => prop::sample::select(vec![
            "cat", "Cats", "CAT NAP", "cat nap", "dogs", "love", "ice cream",
            "new york", "category", "kitten", "sun_with_face",
        ])
        .prop_map(str::to_string),
        3 => prop::sample::select(vec![" ", ",", ".", "!", "-", "'", "\n", "_"])
            .prop_map(str::to_string),
        2 => "[a-zA-Z0-9]{1,6}",
        1 => prop::sample::select(vec!["🐱", "❤️", "İ", "é", "ß", "猫", "\u{200D}"])
            .prop_map(str::to_string),
    ];
    prop::collection::vec(piece, 0..12).prop_map(|v| v.concat())
}

proptest! {
    #[test]
    fn empty_dictionary_is_identity(text in any::<String>(), opts in arb_options()) {
        let index = EmojiIndex::empty();
        prop_assert_eq!(translate_to_emoji_with(&text, &index, &opts), text.clone());
        prop_assert_eq!(translate_to_text_with(&text, &index, &opts), text);
    }

    #[test]
    fn every_char_consumed_once(text in arb_text(), opts in arb_options()) {
        let segs = explain_to_emoji(&text, &test_index(), &opts);
        let source: String = segs.iter().map(|s| s.source.as_str()).collect();
        prop_assert_eq!(&source, &text);

        let mut pos = 0;
        for s in &segs {
            prop_assert!(s.start >= pos || s.source.is_empty());
            prop_assert_eq!(s.end - s.start, s.source.chars().count());
            pos = s.end;
        }
        prop_assert_eq!(pos, text.chars().count());
    }

    #[test]
    fn unmatched_segments_copy_source(text in arb_text(), opts in arb_options()) {
        for s in explain_to_emoji(&text, &test_index(), &opts) {
            if matches!(s.kind, SegmentKind::Unmatched | SegmentKind::Literal) {
                prop_assert_eq!(&s.output, &s.source);
            }
        }
    }

    #[test]
    fn arbitrary_unicode_never_panics(text in any::<String>(), opts in arb_options()) {
        let index = test_index();
        let _ = translate_to_emoji_with(&text, &index, &opts);
        let _ = translate_to_text_with(&text, &index, &opts);
    }

    #[test]
    fn nonempty_input_gives_nonempty_output(text in "[a-z ,.!]{1,40}") {
        let out = translate_to_emoji_with(&text, &test_index(), &MatchOptions::default());
        prop_assert!(!out.is_empty());
    }
}
