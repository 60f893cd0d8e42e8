use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use tracing::{debug, debug_span};

use emoji_core::dict::{load_index_or_empty, CollisionPolicy};
use emoji_core::EmojiIndex;

/// One-shot background dictionary load.
///
/// The worker thread always delivers an index: a missing or malformed
/// dictionary arrives as the empty index, and so does a worker that died
/// without sending.
pub struct DictionaryLoader {
    rx: mpsc::Receiver<EmojiIndex>,
}

impl DictionaryLoader {
    /// Load `path` (JSON or EMDX snapshot) on a background thread.
    pub fn spawn(path: PathBuf, policy: CollisionPolicy) -> io::Result<Self> {
        Self::from_fn(move || {
            let _span = debug_span!("dictionary_loader", path = %path.display()).entered();
            let index = load_index_or_empty(&path, policy);
            let stats = index.stats();
            debug!(
                records = stats.records,
                words = stats.words,
                phrases = stats.phrases,
                glyphs = stats.glyphs,
                "dictionary loaded"
            );
            index
        })
    }

    /// Run an arbitrary loader on a background thread.
    pub fn from_fn<F>(load: F) -> io::Result<Self>
    where
        F: FnOnce() -> EmojiIndex + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("emoji-dict-loader".into())
            .spawn(move || {
                // The receiver may already be gone if the session was dropped.
                let _ = tx.send(load());
            })?;
        Ok(Self { rx })
    }

    /// Non-blocking check. `None` while the load is still running.
    pub fn try_take(&self) -> Option<EmojiIndex> {
        match self.rx.try_recv() {
            Ok(index) => Some(index),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(EmojiIndex::empty()),
        }
    }

    /// Block until the load finishes.
    pub fn wait(self) -> EmojiIndex {
        self.rx.recv().unwrap_or_default()
    }
}
