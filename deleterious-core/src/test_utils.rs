//! Test helper module
//!
//! Provides a mock repository and convenient factory methods.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::DeleteMultipleService;
use crate::traits::RecordRepository;
use crate::types::{DeleteMessages, RecordId, ResourceDescriptor};

// ===== MockRecordRepository =====

pub struct MockRecordRepository {
    records: RwLock<BTreeSet<RecordId>>,
    /// If Some, `find_existing` returns this error
    find_error: RwLock<Option<String>>,
    /// If Some, `delete_by_ids` returns this error
    delete_error: RwLock<Option<String>>,
    /// Removed right before `delete_by_ids` runs, as if by a concurrent caller
    vanish_before_delete: RwLock<Vec<RecordId>>,
    atomic: bool,
    find_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeSet::new()),
            find_error: RwLock::new(None),
            delete_error: RwLock::new(None),
            vanish_before_delete: RwLock::new(Vec::new()),
            atomic: false,
            find_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_ids(ids: &[i64]) -> Self {
        let repo = Self::new();
        *repo.records.try_write().unwrap() = ids.iter().copied().map(RecordId::Int).collect();
        repo
    }

    pub fn atomic(mut self) -> Self {
        self.atomic = true;
        self
    }

    pub async fn set_find_error(&self, err: Option<String>) {
        *self.find_error.write().await = err;
    }

    pub async fn set_delete_error(&self, err: Option<String>) {
        *self.delete_error.write().await = err;
    }

    pub async fn vanish_before_delete(&self, ids: Vec<RecordId>) {
        *self.vanish_before_delete.write().await = ids;
    }

    pub async fn remaining(&self) -> Vec<RecordId> {
        self.records.read().await.iter().cloned().collect()
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn find_existing(&self, ids: &[RecordId]) -> CoreResult<Vec<RecordId>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = *self.find_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        let store = self.records.read().await;
        Ok(ids.iter().filter(|id| store.contains(id)).cloned().collect())
    }

    async fn delete_by_ids(&self, ids: &[RecordId]) -> CoreResult<u64> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = *self.delete_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        let mut store = self.records.write().await;
        for id in self.vanish_before_delete.read().await.iter() {
            store.remove(id);
        }
        let mut deleted = 0;
        for id in ids {
            if store.remove(id) {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    fn atomic_delete(&self) -> bool {
        self.atomic
    }
}

// ===== Factory methods =====

/// Create a `DeleteMultipleService` for the `Widget` resource over `repo`
pub fn create_widget_service(repo: Arc<MockRecordRepository>) -> DeleteMultipleService {
    DeleteMultipleService::new(
        ResourceDescriptor::new("widget"),
        repo,
        DeleteMessages::default(),
    )
}

/// Create a `Widget` service backed by a mock holding `ids`
pub fn create_test_service(ids: &[i64]) -> (DeleteMultipleService, Arc<MockRecordRepository>) {
    let repo = Arc::new(MockRecordRepository::with_ids(ids));
    (create_widget_service(Arc::clone(&repo)), repo)
}
