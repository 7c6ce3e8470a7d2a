//! Session persistence across client restarts.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::sync::Arc;

use mdd_application::{SESSION_KEY, SessionStore};
use mdd_domain::SessionInformation;
use mdd_infrastructure::FileStorage;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_session_survives_restart() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("mdd/local_storage.json");
    let session = SessionInformation::new("jwt", 12)
        .with_username("ada")
        .with_names("Ada", "Lovelace");

    {
        let store = SessionStore::new(Arc::new(FileStorage::open(&path).expect("open")));
        store.log_in(session.clone());
    }

    let restarted = SessionStore::new(Arc::new(FileStorage::open(&path).expect("reopen")));
    assert!(restarted.is_logged());
    assert_eq!(restarted.session(), Some(session));
}

#[test]
fn test_logout_survives_restart() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("local_storage.json");

    {
        let store = SessionStore::new(Arc::new(FileStorage::open(&path).expect("open")));
        store.log_in(SessionInformation::new("jwt", 12));
        store.log_out();
    }

    let storage = FileStorage::open(&path).expect("reopen");
    assert_eq!(
        mdd_application::KeyValueStorage::get_item(&storage, SESSION_KEY).expect("get"),
        None
    );
    assert!(!SessionStore::new(Arc::new(storage)).is_logged());
}

#[test]
fn test_malformed_record_is_discarded_on_disk() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("local_storage.json");
    fs::write(
        &path,
        r#"{"session_info": "{\"type\":\"Bearer\",\"id\":4}", "theme": "dark"}"#,
    )
    .expect("write");

    let store = SessionStore::new(Arc::new(FileStorage::open(&path).expect("open")));
    assert!(!store.is_logged());

    let content = fs::read_to_string(&path).expect("read");
    assert!(!content.contains(SESSION_KEY));
    assert!(content.contains("\"theme\": \"dark\""));
}

#[test]
fn test_listeners_see_restored_state() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("local_storage.json");
    fs::write(
        &path,
        r#"{"session_info": "{\"token\":\"t\",\"id\":1}"}"#,
    )
    .expect("write");

    let store = SessionStore::new(Arc::new(FileStorage::open(&path).expect("open")));
    let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _subscription = store.subscribe(move |logged| sink.lock().push(logged));

    store.log_out();

    assert_eq!(*seen.lock(), vec![true, false]);
}
