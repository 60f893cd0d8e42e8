mod loader;

use std::sync::Arc;

use emoji_core::{EmojiIndex, EmojiRecord};

pub(super) fn make_test_index() -> Arc<EmojiIndex> {
    Arc::new(EmojiIndex::build(vec![
        EmojiRecord::new("🐱", &["cat"], &["kitty"]),
        EmojiRecord::new("🛌", &["sleeping_bed"], &["cat nap"]),
        EmojiRecord::new("🐶", &["dog"], &["puppy"]),
        EmojiRecord::new("☀️", &["sunny"], &["sun"]),
        EmojiRecord::new("🍕", &["pizza"], &["food"]),
    ]))
}
