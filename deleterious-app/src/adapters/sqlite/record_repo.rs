//! `RecordRepository` implementation for `SqliteStore`.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};

use deleterious_core::error::{CoreError, CoreResult};
use deleterious_core::traits::RecordRepository;
use deleterious_core::types::{IdType, RecordId};

use super::entity::record;

/// Records of one resource kind in the `records` table.
#[derive(Clone)]
pub struct SqliteRecordRepository {
    db: DatabaseConnection,
    kind: String,
    id_type: IdType,
    atomic: bool,
}

impl SqliteRecordRepository {
    pub(crate) fn new(db: DatabaseConnection, kind: &str, id_type: IdType) -> Self {
        Self {
            db,
            kind: kind.to_string(),
            id_type,
            atomic: false,
        }
    }

    /// Skip the existence check and rely on the delete count alone.
    #[must_use]
    pub fn with_atomic_delete(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Insert or relabel a record.
    pub async fn save(&self, id: &RecordId, label: Option<&str>) -> CoreResult<()> {
        let active_model = record::ActiveModel {
            kind: Set(self.kind.clone()),
            id: Set(self.id_type.to_storage_key(id)?),
            label: Set(label.map(String::from)),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
        };

        record::Entity::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([record::Column::Kind, record::Column::Id])
                    .update_column(record::Column::Label)
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to save record: {e}")))?;

        Ok(())
    }

    /// Insert several records.
    pub async fn save_all(&self, ids: &[RecordId]) -> CoreResult<()> {
        for id in ids {
            self.save(id, None).await?;
        }
        Ok(())
    }

    /// Number of stored records of this kind.
    pub async fn count(&self) -> CoreResult<u64> {
        record::Entity::find()
            .filter(record::Column::Kind.eq(&self.kind))
            .count(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to count records: {e}")))
    }

    /// Canonical, de-duplicated storage keys for `ids`.
    fn storage_keys(&self, ids: &[RecordId]) -> CoreResult<Vec<String>> {
        let keys = ids
            .iter()
            .map(|id| self.id_type.to_storage_key(id))
            .collect::<CoreResult<BTreeSet<String>>>()?;
        Ok(keys.into_iter().collect())
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    async fn find_existing(&self, ids: &[RecordId]) -> CoreResult<Vec<RecordId>> {
        let keys = self.storage_keys(ids)?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let rows = record::Entity::find()
            .filter(record::Column::Kind.eq(&self.kind))
            .filter(record::Column::Id.is_in(keys))
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query records: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| self.id_type.from_storage_key(&row.id))
            .collect())
    }

    async fn delete_by_ids(&self, ids: &[RecordId]) -> CoreResult<u64> {
        let keys = self.storage_keys(ids)?;
        if keys.is_empty() {
            return Ok(0);
        }

        let result = record::Entity::delete_many()
            .filter(record::Column::Kind.eq(&self.kind))
            .filter(record::Column::Id.is_in(keys))
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete records: {e}")))?;

        Ok(result.rows_affected)
    }

    fn atomic_delete(&self) -> bool {
        self.atomic
    }
}
