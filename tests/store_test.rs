//! Store integration tests against on-disk documents.

use std::fs;

use serde_json::Value;
use tempfile::TempDir;

use postdb::{JsonStore, StoreError};

const EXISTING_DOCUMENT: &str = r#"{
  "users": {
    "a@x.com": {"createdAt": "2023-05-01T10:00:00.123456789Z", "email": "a@x.com",
                "password": "pw", "name": "Ann", "age": 30}
  },
  "posts": {
    "8d3c1a9e-0000-4000-8000-000000000001": {"id": "8d3c1a9e-0000-4000-8000-000000000001",
        "createdAt": "2023-05-02T10:00:00Z", "userEmail": "a@x.com", "text": "first"},
    "8d3c1a9e-0000-4000-8000-000000000002": {"id": "8d3c1a9e-0000-4000-8000-000000000002",
        "createdAt": "2023-05-03T10:00:00Z", "userEmail": "b@x.com", "text": "orphan"}
  }
}"#;

fn seeded() -> (TempDir, JsonStore) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");
    fs::write(&path, EXISTING_DOCUMENT).unwrap();
    (dir, JsonStore::new(path))
}

fn on_disk(store: &JsonStore) -> Value {
    serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap()
}

#[tokio::test]
async fn test_reads_existing_document() {
    let (_dir, store) = seeded();

    let user = store.get_user("a@x.com").await.unwrap();
    assert_eq!(user.name, "Ann");
    assert_eq!(user.created_at.timestamp_subsec_nanos(), 123456789);

    let posts = store.get_posts("a@x.com").await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].text, "first");
}

#[tokio::test]
async fn test_ensure_database_does_not_touch_existing_file() {
    let (_dir, store) = seeded();
    store.ensure_database().await.unwrap();
    assert_eq!(fs::read_to_string(store.path()).unwrap(), EXISTING_DOCUMENT);
}

#[tokio::test]
async fn test_written_document_keeps_field_names() {
    let (_dir, store) = seeded();
    store
        .create_user("c@x.com".into(), "pw".into(), "Cat".into(), 22)
        .await
        .unwrap();
    let post = store.create_post("c@x.com".into(), "hello".into()).await.unwrap();

    let doc = on_disk(&store);
    let mut root: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    root.sort();
    assert_eq!(root, vec!["posts", "users"]);

    let user = &doc["users"]["c@x.com"];
    for key in ["createdAt", "email", "password", "name", "age"] {
        assert!(user.get(key).is_some(), "missing user key {}", key);
    }
    assert_eq!(user["age"], 22);

    let stored = &doc["posts"][post.id.as_str()];
    assert_eq!(stored["id"], post.id.as_str());
    assert_eq!(stored["userEmail"], "c@x.com");
    assert_eq!(stored["text"], "hello");
    assert!(stored["createdAt"].as_str().unwrap().ends_with('Z'));

    // Existing entries survive the rewrite
    assert_eq!(doc["posts"].as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_orphaned_posts_stay_listed() {
    let (_dir, store) = seeded();

    let posts = store.get_posts("b@x.com").await.unwrap();
    assert_eq!(posts.len(), 1);
    assert!(matches!(
        store.get_user("b@x.com").await.unwrap_err(),
        StoreError::UserNotFound(_)
    ));
}

#[tokio::test]
async fn test_deleting_user_leaves_posts_in_document() {
    let (_dir, store) = seeded();

    store.delete_user("a@x.com").await.unwrap();

    let doc = on_disk(&store);
    assert!(doc["users"].as_object().unwrap().is_empty());
    assert_eq!(doc["posts"].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_corrupt_document_is_an_error_not_a_reset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");
    fs::write(&path, r#"{"users": []}"#).unwrap();
    let store = JsonStore::new(&path);

    let err = store
        .create_user("a@x.com".into(), "pw".into(), "Ann".into(), 30)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Decode { .. }));
    assert!(matches!(
        store.delete_post("x").await.unwrap_err(),
        StoreError::Decode { .. }
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"users": []}"#);
}
