//! Record deletion abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::RecordId;

/// Record Repository Trait
///
/// The data-access collaborator of the bulk delete handler. One instance is
/// bound to one resource kind.
///
/// Platform implementation:
/// - `SqliteRecordRepository` (`SeaORM`, deleterious-app)
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Find which of the supplied ids belong to existing records
    ///
    /// # Arguments
    /// * `ids` - Candidate ids, possibly with duplicates
    ///
    /// # Returns
    /// * The ids that exist (order and duplicates unspecified)
    async fn find_existing(&self, ids: &[RecordId]) -> CoreResult<Vec<RecordId>>;

    /// Delete every record whose id is in `ids`
    ///
    /// # Returns
    /// * Number of rows actually deleted
    async fn delete_by_ids(&self, ids: &[RecordId]) -> CoreResult<u64>;

    /// Whether `delete_by_ids` is natively atomic and its count can stand in
    /// for a separate existence check.
    fn atomic_delete(&self) -> bool {
        false
    }
}
