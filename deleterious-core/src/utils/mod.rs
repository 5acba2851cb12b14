//! Utility functions

pub mod template;
