//! `SeaORM` entities for `SqliteStore`.

pub mod record;
