//! Integration tests for budget store operations.

use tally_core::{Database, Error};
use uuid::Uuid;

fn temp_db_path() -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    let filename = format!("tally-budget-test-{}.db", Uuid::new_v4());
    path.push(filename);
    path
}

#[tokio::test]
async fn create_load_round_trip() {
    let db_path = temp_db_path();
    let db = Database::open(&db_path).await.expect("open db");

    // Non-UTF8 binary data
    let contents: Vec<u8> = vec![0x00, 0x9f, 0x92, 0x96, 0xff];
    let id = db.insert_budget(&contents).await.expect("insert");

    let fetched = db.get_budget(id).await.expect("get").expect("exists");
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.contents, contents);
}

#[tokio::test]
async fn empty_contents_round_trip() {
    let db_path = temp_db_path();
    let db = Database::open(&db_path).await.expect("open db");

    let id = db.insert_budget(&[]).await.expect("insert");
    let fetched = db.get_budget(id).await.expect("get").expect("exists");
    assert!(fetched.contents.is_empty());
}

#[tokio::test]
async fn save_overwrites_contents_fully() {
    let db_path = temp_db_path();
    let db = Database::open(&db_path).await.expect("open db");

    let id = db.insert_budget(b"original payload").await.expect("insert");
    db.save_budget(id, b"xy").await.expect("save");

    let fetched = db.get_budget(id).await.expect("get").expect("exists");
    // Full overwrite, not a merge
    assert_eq!(fetched.contents, b"xy");
}

#[tokio::test]
async fn save_missing_budget_is_not_found() {
    let db_path = temp_db_path();
    let db = Database::open(&db_path).await.expect("open db");

    let err = db
        .save_budget(999_999, b"data")
        .await
        .expect_err("should fail");
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn get_missing_budget_returns_none() {
    let db_path = temp_db_path();
    let db = Database::open(&db_path).await.expect("open db");

    assert!(db.get_budget(999_999).await.expect("get").is_none());
}

#[tokio::test]
async fn delete_budget_removes_row() {
    let db_path = temp_db_path();
    let db = Database::open(&db_path).await.expect("open db");

    let id = db.insert_budget(b"doomed").await.expect("insert");
    db.delete_budget(id).await.expect("delete");

    assert!(db.get_budget(id).await.expect("get").is_none());
}

#[tokio::test]
async fn delete_missing_budget_is_not_found() {
    let db_path = temp_db_path();
    let db = Database::open(&db_path).await.expect("open db");

    let err = db.delete_budget(999_999).await.expect_err("should fail");
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn list_budget_ids_returns_all() {
    let db_path = temp_db_path();
    let db = Database::open(&db_path).await.expect("open db");

    let mut ids = Vec::new();
    for i in 0..3u8 {
        ids.push(db.insert_budget(&[i]).await.expect("insert"));
    }

    let listed = db.list_budget_ids().await.expect("list");
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn list_budget_ids_empty_database() {
    let db_path = temp_db_path();
    let db = Database::open(&db_path).await.expect("open db");

    assert!(db.list_budget_ids().await.expect("list").is_empty());
}

#[tokio::test]
async fn budget_persists_across_reopen() {
    let db_path = temp_db_path();

    // Phase 1: Create and populate
    let id = {
        let db = Database::open(&db_path).await.expect("open db");
        let id = db.insert_budget(b"persisted bytes").await.expect("insert");
        db.close().await;
        id
    };

    // Phase 2: Reopen and verify
    {
        let db = Database::open(&db_path).await.expect("reopen db");
        let fetched = db.get_budget(id).await.expect("get").expect("exists");
        assert_eq!(fetched.contents, b"persisted bytes");
        db.close().await;
    }
}
