use std::fs;

use super::die;

pub fn settings_export() {
    print!("{}", emoji_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        emoji_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: index.collision={:?}, matching.word_chars={:?}, matching.plural_fallback={}, matching.glyph_matching={:?}",
        s.index.collision, s.matching.word_chars, s.matching.plural_fallback, s.matching.glyph_matching
    );
}
