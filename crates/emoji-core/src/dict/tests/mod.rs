mod snapshot;

use super::EmojiRecord;

pub(super) fn sample_records() -> Vec<EmojiRecord> {
    vec![
        EmojiRecord::new("🐱", &["cat"], &["pet", "Kitty"]),
        EmojiRecord::new("🛌", &["sleeping_bed"], &["cat nap", "Power Nap"]),
        EmojiRecord::new("🐶", &["dog"], &["pet"]),
        EmojiRecord::new("🗂️", &["card_index_dividers"], &["category"]),
        EmojiRecord::new("🍦", &["icecream"], &["ice cream", "soft serve ice cream"]),
    ]
}
