//! Translator session: the current input/output pair, the direction flag,
//! and the dictionary it translates with.
//!
//! The dictionary arrives once, possibly from a background `DictionaryLoader`.
//! Until it does the session is not ready and `translate` leaves the output
//! alone.

mod loader;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{debug, debug_span};

use emoji_core::settings::settings;
use emoji_core::{translate_with, Direction, EmojiIndex, MatchOptions};

pub use loader::DictionaryLoader;

/// Result of [`TranslatorSession::translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateOutcome {
    /// The output now holds the translation of the input.
    Translated,
    /// The dictionary has not arrived yet; nothing changed.
    NotReady,
    /// The input is empty or whitespace only; nothing changed.
    EmptyInput,
}

pub struct TranslatorSession {
    index: Option<Arc<EmojiIndex>>,
    loader: Option<DictionaryLoader>,
    options: MatchOptions,
    direction: Direction,
    input: String,
    output: String,
}

impl Default for TranslatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslatorSession {
    /// A session with no dictionary yet, using the global matching settings.
    pub fn new() -> Self {
        Self {
            index: None,
            loader: None,
            options: MatchOptions::from(&settings().matching),
            direction: Direction::ToEmoji,
            input: String::new(),
            output: String::new(),
        }
    }

    /// A session that is ready immediately.
    pub fn with_index(index: Arc<EmojiIndex>) -> Self {
        let mut session = Self::new();
        session.install_index(index);
        session
    }

    /// A session that becomes ready when `loader` delivers.
    pub fn with_loader(loader: DictionaryLoader) -> Self {
        let mut session = Self::new();
        session.loader = Some(loader);
        session
    }

    pub fn set_options(&mut self, options: MatchOptions) {
        self.options = options;
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Install the dictionary. Later calls are ignored: the index is held for
    /// the lifetime of the session.
    pub fn install_index(&mut self, index: Arc<EmojiIndex>) {
        if self.index.is_some() {
            debug!("index already installed, ignoring");
            return;
        }
        self.loader = None;
        self.index = Some(index);
    }

    /// Pick up a finished background load, if any. Returns readiness.
    pub fn poll_loader(&mut self) -> bool {
        if let Some(index) = self.loader.as_ref().and_then(DictionaryLoader::try_take) {
            self.install_index(Arc::new(index));
        }
        self.is_ready()
    }

    /// Block until the background load (if any) finishes. Returns readiness.
    pub fn wait_ready(&mut self) -> bool {
        if let Some(loader) = self.loader.take() {
            self.install_index(Arc::new(loader.wait()));
        }
        self.is_ready()
    }

    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Option<&EmojiIndex> {
        self.index.as_deref()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Translate the input in the current direction and store the result.
    pub fn translate(&mut self) -> TranslateOutcome {
        self.poll_loader();
        let Some(index) = self.index.as_deref() else {
            return TranslateOutcome::NotReady;
        };
        if self.input.trim().is_empty() {
            return TranslateOutcome::EmptyInput;
        }
        let _span = debug_span!("session_translate", direction = ?self.direction).entered();
        self.output = translate_with(&self.input, self.direction, index, &self.options);
        TranslateOutcome::Translated
    }

    /// Reset input and output to empty. The direction is kept.
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
    }

    /// Flip the direction and exchange input and output.
    pub fn swap_direction(&mut self) {
        self.direction = self.direction.flipped();
        std::mem::swap(&mut self.input, &mut self.output);
    }

    /// Prompt text for the current direction.
    pub fn placeholder(&self) -> &'static str {
        match self.direction {
            Direction::ToEmoji => "Enter text to translate to emojis...",
            Direction::ToText => "Enter emojis to translate to text...",
        }
    }
}
