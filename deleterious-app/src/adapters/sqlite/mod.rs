//! SQLite-based record store using `SeaORM`.
//!
//! A single `records` table holds the records of every resource kind, keyed by
//! `(kind, id)`. `SqliteStore::repository` hands out a `RecordRepository`
//! bound to one kind.

pub(crate) mod entity;
mod migration;
mod record_repo;

use std::path::Path;

use deleterious_core::error::{CoreError, CoreResult};
use deleterious_core::types::{IdType, ResourceDescriptor};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use migration::Migrator;

pub use record_repo::SqliteRecordRepository;

/// SQLite-based record store.
pub struct SqliteStore {
    /// Shared `SeaORM` database connection.
    pub(crate) db: DatabaseConnection,
}

impl SqliteStore {
    /// Create a new `SQLite` store.
    ///
    /// - `db_path`: Path to the `SQLite` database file (created if not exists).
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if directory creation, database
    /// connection, or schema migration fails.
    pub async fn new(db_path: &Path) -> CoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to connect to SQLite: {e}")))?;

        let store = Self { db };

        // Ensure schema is up to date before the store is used.
        Migrator::up(&store.db, None)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to run migrations: {e}")))?;

        log::info!("SQLite record store ready at {}", db_path.display());
        Ok(store)
    }

    /// Repository for the records of one resource kind.
    #[must_use]
    pub fn repository(&self, resource: &ResourceDescriptor, id_type: IdType) -> SqliteRecordRepository {
        SqliteRecordRepository::new(self.db.clone(), resource.model_name(), id_type)
    }
}
