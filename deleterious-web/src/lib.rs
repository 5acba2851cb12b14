//! Actix-web frontend for Deleterious bulk delete endpoints.

pub mod auth;
pub mod config;
pub mod logger;
pub mod routes;
pub mod server;
