//! Storage layer abstraction trait definition

mod record_repository;

pub use record_repository::RecordRepository;
