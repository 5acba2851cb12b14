//! Type definitions

mod messages;
mod record;
mod request;
mod resource;
mod response;

pub use messages::{
    DeleteMessages, DEFAULT_ERROR_MESSAGE, DEFAULT_INVALID_BODY_MESSAGE,
    DEFAULT_NONE_EXIST_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
};
pub use record::{IdType, RecordId};
pub use request::parse_ids;
pub use resource::ResourceDescriptor;
pub use response::{DeleteEnvelope, DeleteOutcome, STATUS_BAD_REQUEST, STATUS_OK};
