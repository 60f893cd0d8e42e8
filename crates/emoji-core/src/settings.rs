//! Matching and indexing knobs, read from TOML.
//!
//! The embedded `default_settings.toml` applies unless a binary installs its
//! own file with [`init_custom`] before the first [`settings`] call; after
//! that the values are fixed for the life of the process.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::dict::CollisionPolicy;
use crate::matcher::{GlyphMatching, MatchOptions, WordChars};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static ACTIVE: OnceLock<Settings> = OnceLock::new();

/// Validate `toml_content` and make it the source for [`settings`].
///
/// Fails if the text does not parse, or if a custom file was already
/// installed.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// The process-wide settings, parsed on first use.
pub fn settings() -> &'static Settings {
    ACTIVE.get_or_init(|| {
        let source = CUSTOM_TOML.get().map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        parse_settings_toml(source).expect("settings TOML must be valid")
    })
}

/// The embedded defaults, as shipped.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Bad TOML syntax, an unknown key, or a value outside its enum.
    #[error("invalid settings: {0}")]
    Parse(String),
    #[error("custom settings were already installed")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub index: IndexSettings,
    pub matching: MatchingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexSettings {
    pub collision: CollisionPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchingSettings {
    pub word_chars: WordChars,
    pub plural_fallback: bool,
    pub glyph_matching: GlyphMatching,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        let opts = MatchOptions::default();
        Self {
            word_chars: opts.word_chars,
            plural_fallback: opts.plural_fallback,
            glyph_matching: opts.glyph_matching,
        }
    }
}

impl From<&MatchingSettings> for MatchOptions {
    fn from(s: &MatchingSettings) -> Self {
        MatchOptions {
            word_chars: s.word_chars,
            plural_fallback: s.plural_fallback,
            glyph_matching: s.glyph_matching,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}
