//! Storage adapters implementing the core `RecordRepository` trait.

#[cfg(feature = "sqlite-store")]
mod sqlite;

#[cfg(feature = "sqlite-store")]
pub use sqlite::{SqliteRecordRepository, SqliteStore};
