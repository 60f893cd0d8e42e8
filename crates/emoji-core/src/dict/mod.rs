//! Emoji dictionary records and the lookup indices built from them.
//!
//! `EmojiRecord` is the raw JSON record (glyph + aliases + tags).
//! `EmojiIndex` holds the single-word, phrase and reverse indices derived
//! from a record list, plus an `EMDX` binary snapshot format for it.

mod index;
mod record;
mod snapshot;
#[cfg(test)]
mod tests;

pub use index::{CollisionPolicy, EmojiIndex, IndexStats};
pub use record::{load_records, parse_records, EmojiRecord};

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;
use tracing::{debug_span, warn};

/// Unified error type for dictionary loading and snapshot I/O.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected EMDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),
}

/// Load a dictionary file, auto-detected by its leading bytes.
///
/// Files starting with the `EMDX` magic are opened as compiled snapshots and
/// keep the collision policy they were compiled with. Anything else is parsed
/// as a JSON record array and indexed with `policy`.
pub fn load_index(path: &Path, policy: CollisionPolicy) -> Result<EmojiIndex, DictError> {
    let _span = debug_span!("load_index", path = %path.display()).entered();
    let file = File::open(path)?;
    // SAFETY: The file is opened read-only and the mapping is immutable.
    // The Mmap is dropped before this function returns.
    let mmap = unsafe { Mmap::map(&file)? };
    if snapshot::has_magic(&mmap) {
        EmojiIndex::from_bytes(&mmap)
    } else {
        let records = parse_records(&mmap)?;
        Ok(EmojiIndex::build_with_policy(records, policy))
    }
}

/// Like [`load_index`], but an unreadable or malformed file yields the empty
/// index. Every lookup then misses and translation passes text through.
pub fn load_index_or_empty(path: &Path, policy: CollisionPolicy) -> EmojiIndex {
    match load_index(path, policy) {
        Ok(index) => index,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "dictionary unavailable, using empty index");
            EmojiIndex::empty()
        }
    }
}
