#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `SqliteStore` — covers the `RecordRepository`
//! implementation and the bulk delete handler running on top of it.

use std::sync::Arc;

use deleterious_app::adapters::{SqliteRecordRepository, SqliteStore};
use deleterious_core::error::CoreError;
use deleterious_core::services::DeleteMultipleService;
use deleterious_core::traits::RecordRepository;
use deleterious_core::types::{
    DeleteEnvelope, DeleteMessages, IdType, RecordId, ResourceDescriptor,
};

// ===== Helpers =====

async fn create_test_store() -> (SqliteStore, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = tmp.path().join("nested").join("test.db");
    let store = SqliteStore::new(&db_path)
        .await
        .expect("failed to create SqliteStore");
    (store, tmp)
}

fn widget() -> ResourceDescriptor {
    ResourceDescriptor::new("Widget")
}

fn ints(values: &[i64]) -> Vec<RecordId> {
    values.iter().copied().map(RecordId::Int).collect()
}

async fn seeded_widgets(store: &SqliteStore, ids: &[i64]) -> SqliteRecordRepository {
    let repo = store.repository(&widget(), IdType::Integer);
    repo.save_all(&ints(ids)).await.unwrap();
    repo
}

fn sorted(mut ids: Vec<RecordId>) -> Vec<RecordId> {
    ids.sort();
    ids
}

// ===== RecordRepository Tests =====

#[tokio::test]
async fn find_existing_returns_only_stored_ids() {
    let (store, _tmp) = create_test_store().await;
    let repo = seeded_widgets(&store, &[1, 3]).await;

    let found = repo.find_existing(&ints(&[1, 2, 3])).await.unwrap();
    assert_eq!(sorted(found), ints(&[1, 3]));
}

#[tokio::test]
async fn find_existing_on_empty_input() {
    let (store, _tmp) = create_test_store().await;
    let repo = seeded_widgets(&store, &[1]).await;

    assert!(repo.find_existing(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_by_ids_reports_rows_affected() {
    let (store, _tmp) = create_test_store().await;
    let repo = seeded_widgets(&store, &[1, 2, 3, 4]).await;

    let deleted = repo.delete_by_ids(&ints(&[2, 4, 4, 99])).await.unwrap();
    assert_eq!(deleted, 2);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn numeric_strings_match_integer_ids() {
    let (store, _tmp) = create_test_store().await;
    let repo = seeded_widgets(&store, &[7]).await;

    let deleted = repo.delete_by_ids(&[RecordId::from("7")]).await.unwrap();
    assert_eq!(deleted, 1);
}

#[tokio::test]
async fn non_numeric_id_on_integer_store_is_validation_error() {
    let (store, _tmp) = create_test_store().await;
    let repo = seeded_widgets(&store, &[7]).await;

    let err = repo.find_existing(&[RecordId::from("abc")]).await.unwrap_err();
    assert!(matches!(err, CoreError::ValidationError(_)));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn string_ids_are_kept_verbatim() {
    let (store, _tmp) = create_test_store().await;
    let repo = store.repository(&ResourceDescriptor::new("tag"), IdType::String);
    repo.save(&RecordId::from("rust"), Some("Rust")).await.unwrap();
    repo.save(&RecordId::from("go"), None).await.unwrap();

    let found = repo
        .find_existing(&[RecordId::from("rust"), RecordId::from("zig")])
        .await
        .unwrap();
    assert_eq!(found, vec![RecordId::from("rust")]);
}

#[tokio::test]
async fn resource_kinds_are_isolated() {
    let (store, _tmp) = create_test_store().await;
    let widgets = seeded_widgets(&store, &[1, 2]).await;
    let gadgets = store.repository(&ResourceDescriptor::new("gadget"), IdType::Integer);
    gadgets.save_all(&ints(&[1, 2])).await.unwrap();

    assert_eq!(gadgets.delete_by_ids(&ints(&[1, 2])).await.unwrap(), 2);
    assert_eq!(widgets.count().await.unwrap(), 2);
}

#[tokio::test]
async fn save_is_an_upsert() {
    let (store, _tmp) = create_test_store().await;
    let repo = store.repository(&widget(), IdType::Integer);
    repo.save(&RecordId::Int(1), Some("first")).await.unwrap();
    repo.save(&RecordId::Int(1), Some("second")).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn data_survives_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("test.db");
    {
        let store = SqliteStore::new(&db_path).await.unwrap();
        seeded_widgets(&store, &[1, 2]).await;
    }

    let store = SqliteStore::new(&db_path).await.unwrap();
    let repo = store.repository(&widget(), IdType::Integer);
    assert_eq!(repo.count().await.unwrap(), 2);
}

// ===== Handler over SQLite =====

fn widget_service(repo: SqliteRecordRepository) -> DeleteMultipleService {
    DeleteMultipleService::new(widget(), Arc::new(repo), DeleteMessages::default())
}

fn body(envelope: &DeleteEnvelope) -> &str {
    match envelope {
        DeleteEnvelope::Message { message } => message,
        DeleteEnvelope::Error { error } => error,
    }
}

#[tokio::test]
async fn handler_deletes_matching_widgets() {
    let (store, _tmp) = create_test_store().await;
    let svc = widget_service(seeded_widgets(&store, &[1, 3]).await);

    let outcome = svc.handle(&ints(&[1, 2, 3])).await;
    assert_eq!(outcome.status, 200);
    assert_eq!(body(&outcome.body), "Successfully deleted 2 Widgets");

    let outcome = svc.handle(&ints(&[1, 2, 3])).await;
    assert_eq!(outcome.status, 400);
    assert_eq!(body(&outcome.body), "None of the provided Widgets exist");
}

#[tokio::test]
async fn handler_reports_bad_id_through_error_template() {
    let (store, _tmp) = create_test_store().await;
    let svc = widget_service(seeded_widgets(&store, &[1]).await);

    let outcome = svc.handle(&[RecordId::from("abc")]).await;
    assert_eq!(outcome.status, 400);
    assert_eq!(
        body(&outcome.body),
        "Something went wrong: Field 'id' expected a number but got 'abc'."
    );
}

#[tokio::test]
async fn atomic_delete_skips_existence_check() {
    let (store, _tmp) = create_test_store().await;
    let repo = seeded_widgets(&store, &[5]).await.with_atomic_delete(true);
    assert!(repo.atomic_delete());
    let svc = widget_service(repo);

    let outcome = svc.handle(&ints(&[5, 6])).await;
    assert_eq!(body(&outcome.body), "Successfully deleted 1 Widgets");

    let outcome = svc.handle(&ints(&[5])).await;
    assert_eq!(body(&outcome.body), "None of the provided Widgets exist");
}
