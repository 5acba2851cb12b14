//! Response envelope

use serde::{Deserialize, Serialize};

/// HTTP status for a successful delete
pub const STATUS_OK: u16 = 200;
/// HTTP status for every client-visible failure
pub const STATUS_BAD_REQUEST: u16 = 400;

/// JSON body of a delete response: `{"message": ...}` or `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeleteEnvelope {
    /// Success message
    Message { message: String },
    /// Failure message
    Error { error: String },
}

/// Status code plus envelope, produced once per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub status: u16,
    pub body: DeleteEnvelope,
}

impl DeleteOutcome {
    /// 200 with a message body
    #[must_use]
    pub fn success(message: String) -> Self {
        Self {
            status: STATUS_OK,
            body: DeleteEnvelope::Message { message },
        }
    }

    /// 400 with an error body
    #[must_use]
    pub fn bad_request(error: String) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            body: DeleteEnvelope::Error { error },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.body, DeleteEnvelope::Message { .. })
    }
}
