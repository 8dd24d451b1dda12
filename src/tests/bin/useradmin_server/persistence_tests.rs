use serde_json::json;
use tempfile::tempdir;

use super::*;

#[test]
fn missing_file_is_created_with_empty_users() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("db.json");

    let db = load_or_init_db(&path).expect("init db");
    assert!(db.users.is_empty());

    let on_disk: Value =
        serde_json::from_slice(&std::fs::read(&path).expect("read db")).expect("parse db");
    assert_eq!(on_disk, json!({"users": []}));
}

#[test]
fn other_collections_survive_a_rewrite() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("db.json");
    std::fs::write(
        &path,
        serde_json::to_vec(&json!({
            "users": [{"id": 1, "name": "Ann"}],
            "profile": {"name": "typicode"}
        }))
        .expect("serialize seed"),
    )
    .expect("write seed");

    let mut db = load_or_init_db(&path).expect("load db");
    db.users.clear();
    persist_db(&path, &db).expect("persist db");

    let on_disk: Value =
        serde_json::from_slice(&std::fs::read(&path).expect("read db")).expect("parse db");
    assert_eq!(on_disk["users"], json!([]));
    assert_eq!(on_disk["profile"], json!({"name": "typicode"}));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("db.json");
    std::fs::write(&path, b"{not json").expect("write garbage");
    assert!(load_or_init_db(&path).is_err());
}
