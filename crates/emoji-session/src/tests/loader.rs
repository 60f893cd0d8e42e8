use std::fs;
use std::sync::mpsc;

use emoji_core::dict::CollisionPolicy;
use emoji_core::EmojiIndex;

use super::make_test_index;
use crate::{DictionaryLoader, TranslateOutcome, TranslatorSession};

#[test]
fn test_not_ready_until_loader_delivers() {
    let (gate_tx, gate_rx) = mpsc::channel::<()>();
    let index = (*make_test_index()).clone();
    let loader = DictionaryLoader::from_fn(move || {
        let _ = gate_rx.recv();
        index
    })
    .unwrap();

    let mut session = TranslatorSession::with_loader(loader);
    session.set_input("cat");
    assert_eq!(session.translate(), TranslateOutcome::NotReady);
    assert!(!session.is_ready());

    gate_tx.send(()).unwrap();
    assert!(session.wait_ready());
    assert_eq!(session.translate(), TranslateOutcome::Translated);
    assert_eq!(session.output(), "🐱");
}

#[test]
fn test_poll_picks_up_finished_load() {
    let loader = DictionaryLoader::from_fn(|| (*make_test_index()).clone()).unwrap();
    let mut session = TranslatorSession::with_loader(loader);
    // Spin until the worker thread has delivered.
    while !session.poll_loader() {
        std::thread::yield_now();
    }
    assert_eq!(session.index().map(|i| i.stats().records), Some(5));
}

#[test]
fn test_spawn_loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emoji.json");
    fs::write(
        &path,
        r#"[{"emoji": "🐱", "aliases": ["cat"]}, {"emoji": "🐶", "tags": ["dog"]}]"#,
    )
    .unwrap();

    let loader = DictionaryLoader::spawn(path, CollisionPolicy::LastWins).unwrap();
    let mut session = TranslatorSession::with_loader(loader);
    assert!(session.wait_ready());
    session.set_input("cats and dogs");
    session.translate();
    assert_eq!(session.output(), "🐱 and 🐶");
}

#[test]
fn test_missing_dictionary_becomes_empty() {
    let dir = tempfile::tempdir().unwrap();
    let loader =
        DictionaryLoader::spawn(dir.path().join("missing.json"), CollisionPolicy::LastWins)
            .unwrap();
    let mut session = TranslatorSession::with_loader(loader);
    assert!(session.wait_ready());
    assert!(session.index().unwrap().is_empty());

    session.set_input("Cats stay Cats");
    assert_eq!(session.translate(), TranslateOutcome::Translated);
    assert_eq!(session.output(), "Cats stay Cats");
}

#[test]
fn test_dead_worker_yields_empty_index() {
    let loader = DictionaryLoader::from_fn(|| -> EmojiIndex { panic!("loader failed") }).unwrap();
    let index = loader.wait();
    assert!(index.is_empty());
}
