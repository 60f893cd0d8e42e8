mod properties;

use crate::dict::{EmojiIndex, EmojiRecord};

pub(super) fn index_of(records: &[(&str, &[&str])]) -> EmojiIndex {
    EmojiIndex::build(
        records
            .iter()
            .map(|(emoji, aliases)| EmojiRecord::new(emoji, aliases, &[]))
            .collect(),
    )
}

pub(super) fn test_index() -> EmojiIndex {
    EmojiIndex::build(vec![
        EmojiRecord::new("🐱", &["cat"], &["kitten"]),
        EmojiRecord::new("🛌", &["sleeping_bed"], &["cat nap"]),
        EmojiRecord::new("🐶", &["dog"], &["puppy"]),
        EmojiRecord::new("❤️", &["heart"], &["love"]),
        EmojiRecord::new("🍦", &["icecream"], &["ice cream"]),
        EmojiRecord::new("🌞", &["sun_with_face"], &["sunny"]),
        EmojiRecord::new("🗽", &["statue_of_liberty"], &["new york"]),
    ])
}
