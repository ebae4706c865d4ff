//! Integration tests for `PackSizeRepository`.
//!
//! Runs against an in-memory SQLite database: connect, migrate, exercise.

use packwise_db::migration::Migrator;
use packwise_db::{PackSizeError, PackSizeRepository, DEFAULT_PACK_SIZES};
use sea_orm_migration::MigratorTrait;

/// Connects to a fresh in-memory database and runs migrations.
///
/// The pool is pinned to a single connection; each pooled connection would
/// otherwise see its own empty in-memory database.
async fn setup() -> PackSizeRepository {
    let db = packwise_db::connect("sqlite::memory:", 1, 1)
        .await
        .expect("Failed to connect to in-memory database");
    Migrator::up(&db, None).await.expect("Failed to migrate");
    PackSizeRepository::new(db)
}

#[tokio::test]
async fn test_create_and_list_ordered() {
    let repo = setup().await;

    repo.create(500).await.expect("create 500");
    repo.create(250).await.expect("create 250");
    repo.create(1000).await.expect("create 1000");

    let rows = repo.list().await.expect("list");
    let sizes: Vec<i64> = rows.iter().map(|r| r.size).collect();
    assert_eq!(sizes, vec![250, 500, 1000]);
    assert!(rows.iter().all(|r| r.id > 0));
}

#[tokio::test]
async fn test_create_duplicate_conflicts() {
    let repo = setup().await;

    repo.create(250).await.expect("create 250");
    let result = repo.create(250).await;
    assert!(matches!(result, Err(PackSizeError::Conflict)));
}

#[tokio::test]
async fn test_update_changes_size() {
    let repo = setup().await;

    let created = repo.create(250).await.expect("create 250");
    let updated = repo.update(created.id, 300).await.expect("update");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.size, 300);

    let sizes: Vec<i64> = repo.list().await.expect("list").iter().map(|r| r.size).collect();
    assert_eq!(sizes, vec![300]);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let repo = setup().await;

    let result = repo.update(9999, 300).await;
    assert!(matches!(result, Err(PackSizeError::NotFound)));
}

#[tokio::test]
async fn test_update_to_existing_size_conflicts() {
    let repo = setup().await;

    repo.create(250).await.expect("create 250");
    let other = repo.create(500).await.expect("create 500");

    let result = repo.update(other.id, 250).await;
    assert!(matches!(result, Err(PackSizeError::Conflict)));
}

#[tokio::test]
async fn test_update_to_own_size_is_allowed() {
    let repo = setup().await;

    let created = repo.create(250).await.expect("create 250");
    let updated = repo.update(created.id, 250).await.expect("no-op update");
    assert_eq!(updated.size, 250);
}

#[tokio::test]
async fn test_delete() {
    let repo = setup().await;

    let created = repo.create(250).await.expect("create 250");
    repo.delete(created.id).await.expect("delete");
    assert!(repo.list().await.expect("list").is_empty());

    let result = repo.delete(created.id).await;
    assert!(matches!(result, Err(PackSizeError::NotFound)));
}

#[tokio::test]
async fn test_reset_to_default() {
    let repo = setup().await;

    repo.create(7).await.expect("create 7");
    let defaults = repo.reset_to_default().await.expect("reset");
    assert_eq!(defaults, DEFAULT_PACK_SIZES.to_vec());

    let sizes: Vec<i64> = repo.list().await.expect("list").iter().map(|r| r.size).collect();
    assert_eq!(sizes, DEFAULT_PACK_SIZES.to_vec());
}

#[tokio::test]
async fn test_reset_is_idempotent() {
    let repo = setup().await;

    repo.reset_to_default().await.expect("first reset");
    repo.reset_to_default().await.expect("second reset");

    let rows = repo.list().await.expect("list");
    assert_eq!(rows.len(), DEFAULT_PACK_SIZES.len());
}
