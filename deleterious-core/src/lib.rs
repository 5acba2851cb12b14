//! Deleterious Core Library
//!
//! Provides the bulk-delete logic shared by every frontend:
//! - Resource description (label and route name derivation)
//! - The delete-multiple handler (`DeleteMultipleService`)
//! - Message templates and the JSON response envelope
//!
//! The library is storage-agnostic: records are reached only through the
//! `RecordRepository` trait, implemented by the app layer (`SeaORM`) or by tests.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::DeleteMultipleService;
pub use traits::RecordRepository;
