pub mod dict;
pub mod matcher;
pub mod settings;
pub mod unicode;

pub use dict::{CollisionPolicy, DictError, EmojiIndex, EmojiRecord, IndexStats};
pub use matcher::{
    explain_to_emoji, translate, translate_to_emoji, translate_to_emoji_with, translate_to_text,
    translate_to_text_with, translate_with, Direction, GlyphMatching, MatchOptions, Segment,
    SegmentKind, WordChars,
};
