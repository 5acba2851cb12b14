//! Response message templates

use serde::{Deserialize, Serialize};

/// Default template for an empty request
pub const DEFAULT_INVALID_BODY_MESSAGE: &str = "No {model_name}s provided";
/// Default template when no supplied id exists
pub const DEFAULT_NONE_EXIST_MESSAGE: &str = "None of the provided {model_name}s exist";
/// Default template for a successful delete
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Successfully deleted {count} {model_name}s";
/// Default template for collaborator failures
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong: {error}";

/// Overridable message templates
///
/// Placeholders: `{model_name}`, `{count}`, `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteMessages {
    /// No identifiers supplied
    pub invalid_body: String,
    /// None of the identifiers exist
    pub none_exist: String,
    /// Records deleted
    pub success: String,
    /// Any other failure
    pub error: String,
}

impl Default for DeleteMessages {
    fn default() -> Self {
        Self {
            invalid_body: DEFAULT_INVALID_BODY_MESSAGE.to_string(),
            none_exist: DEFAULT_NONE_EXIST_MESSAGE.to_string(),
            success: DEFAULT_SUCCESS_MESSAGE.to_string(),
            error: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}
