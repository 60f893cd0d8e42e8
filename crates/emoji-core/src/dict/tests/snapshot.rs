use super::sample_records;
use crate::dict::{CollisionPolicy, DictError, EmojiIndex};

#[test]
fn bytes_roundtrip_rebuilds_same_index() {
    let index = EmojiIndex::build(sample_records());
    let bytes = index.to_bytes().unwrap();
    assert_eq!(&bytes[..4], b"EMDX");
    let loaded = EmojiIndex::from_bytes(&bytes).unwrap();
    assert_eq!(loaded, index);
}

#[test]
fn snapshot_keeps_collision_policy() {
    let index = EmojiIndex::build_with_policy(sample_records(), CollisionPolicy::FirstWins);
    let loaded = EmojiIndex::from_bytes(&index.to_bytes().unwrap()).unwrap();
    assert_eq!(loaded.policy(), CollisionPolicy::FirstWins);
    assert_eq!(loaded.word("pet"), Some("🐱"));
}

#[test]
fn save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("emoji.dict");
    let index = EmojiIndex::build(sample_records());
    index.save(&path).unwrap();
    assert!(!path.with_extension("tmp").exists());
    let loaded = EmojiIndex::open(&path).unwrap();
    assert_eq!(loaded.stats(), index.stats());
    assert_eq!(loaded.phrase("cat nap"), Some("🛌"));
}

#[test]
fn error_too_short() {
    let err = EmojiIndex::from_bytes(b"EMD").unwrap_err();
    assert!(matches!(err, DictError::InvalidHeader));
}

#[test]
fn error_bad_magic() {
    let err = EmojiIndex::from_bytes(b"LXDX\x01rest").unwrap_err();
    assert!(matches!(err, DictError::InvalidMagic));
}

#[test]
fn error_unsupported_version() {
    let mut bytes = EmojiIndex::build(sample_records()).to_bytes().unwrap();
    bytes[4] = 99;
    let err = EmojiIndex::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, DictError::UnsupportedVersion(99)));
}

#[test]
fn error_truncated_body() {
    let bytes = EmojiIndex::build(sample_records()).to_bytes().unwrap();
    let err = EmojiIndex::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, DictError::Deserialize(_)));
}
