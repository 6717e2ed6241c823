use crate::{CredentialStore, FileStore, KeyValueStore};

use std::sync::Arc;

use tempfile::TempDir;

#[test]
fn given_missing_file_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("session.json"));

    assert!(store.get_item("token").unwrap().is_none());
}

#[test]
fn given_written_item_when_reopened_then_value_survives() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    FileStore::new(&path).set_item("token", "abc").unwrap();
    let reopened = FileStore::new(&path);

    assert_eq!(reopened.get_item("token").unwrap().as_deref(), Some("abc"));
}

#[test]
fn given_missing_parent_dir_when_set_then_created() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("dir").join("session.json");
    let store = FileStore::new(&path);

    store.set_item("token", "abc").unwrap();

    assert!(path.exists());
}

#[test]
fn given_write_when_done_then_no_temp_file_left() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("session.json"));

    store.set_item("token", "abc").unwrap();

    let names: Vec<String> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["session.json".to_string()]);
}

#[test]
fn given_corrupted_file_when_get_then_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();
    let store = FileStore::new(&path);

    assert!(store.get_item("token").unwrap().is_none());

    store.set_item("token", "fresh").unwrap();
    assert_eq!(store.get_item("token").unwrap().as_deref(), Some("fresh"));
}

#[test]
fn given_absent_key_when_remove_then_ok_and_file_not_created() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    let store = FileStore::new(&path);

    store.remove_item("token").unwrap();

    assert!(!path.exists());
}

#[test]
fn given_credential_store_on_file_when_reopened_then_credential_restored() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    CredentialStore::new(Arc::new(FileStore::new(&path))).set("tok", Some(&["READ".to_string()]));
    let reopened = CredentialStore::new(Arc::new(FileStore::new(&path)));

    let credential = reopened.get().unwrap();
    assert_eq!(credential.token, "tok");
    assert_eq!(credential.permissions, vec!["READ".to_string()]);

    reopened.clear();
    assert!(CredentialStore::new(Arc::new(FileStore::new(&path))).get().is_none());
}
