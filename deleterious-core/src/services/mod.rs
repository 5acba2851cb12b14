//! Business logic service layer

mod delete_multiple_service;

pub use delete_multiple_service::DeleteMultipleService;
