use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;
use serde::{Deserialize, Serialize};

use super::{CollisionPolicy, DictError, EmojiIndex, EmojiRecord};

const MAGIC: &[u8; 4] = b"EMDX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1; // magic + version

#[derive(Serialize)]
struct SnapshotRef<'a> {
    policy: CollisionPolicy,
    records: &'a [EmojiRecord],
}

#[derive(Deserialize)]
struct SnapshotData {
    policy: CollisionPolicy,
    records: Vec<EmojiRecord>,
}

pub(super) fn has_magic(data: &[u8]) -> bool {
    data.len() >= MAGIC.len() && &data[..MAGIC.len()] == MAGIC
}

impl EmojiIndex {
    /// Serialize to bytes (EMDX format).
    ///
    /// Only the records and collision policy are stored; the lookup maps are
    /// rebuilt on load.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let body = bincode::serialize(&SnapshotRef {
            policy: self.policy(),
            records: self.records(),
        })
        .map_err(DictError::Serialize)?;

        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (EMDX format).
    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if !has_magic(data) {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        let snapshot: SnapshotData =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(DictError::Deserialize)?;
        Ok(Self::build_with_policy(snapshot.records, snapshot.policy))
    }

    /// Open a snapshot file via mmap.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        let bytes = self.to_bytes()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
