//! Character-level classification used by the matcher.

/// ASCII word character: `[A-Za-z0-9_]`.
pub fn is_ascii_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Unicode-aware word character: any alphanumeric scalar value or `_`.
pub fn is_unicode_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercase `text` one scalar value at a time.
///
/// Returns the folded characters together with, for each folded character,
/// the index of the original character it came from. A character whose
/// lowercase form expands (e.g. `İ` → `i̇`) contributes several folded
/// characters that all point back to the same original index.
pub fn fold_case(text: &str) -> (Vec<char>, Vec<usize>) {
    let mut folded = Vec::with_capacity(text.len());
    let mut owner = Vec::with_capacity(text.len());
    for (idx, c) in text.chars().enumerate() {
        for lc in c.to_lowercase() {
            folded.push(lc);
            owner.push(idx);
        }
    }
    (folded, owner)
}

/// Lowercase a dictionary key the same way [`fold_case`] lowercases input.
///
/// Unlike `str::to_lowercase` this ignores context, so a word-final `Σ`
/// becomes `σ` here just as it does in the scanned text.
pub fn fold_key(key: &str) -> String {
    key.chars().flat_map(char::to_lowercase).collect()
}

/// Strip one trailing ASCII `s` from a word of more than one character.
pub fn naive_singular(word: &str) -> Option<&str> {
    if word.chars().count() > 1 {
        word.strip_suffix('s')
    } else {
        None
    }
}
