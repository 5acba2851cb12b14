//! Bulk delete service

use std::sync::Arc;

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::traits::RecordRepository;
use crate::types::{parse_ids, DeleteMessages, DeleteOutcome, RecordId, ResourceDescriptor};
use crate::utils::template;

/// Deletes several records of one resource kind in a single request
///
/// Stateless between calls; the resource, messages and repository are fixed
/// when the service is wired up.
pub struct DeleteMultipleService {
    resource: ResourceDescriptor,
    repository: Arc<dyn RecordRepository>,
    messages: DeleteMessages,
}

impl DeleteMultipleService {
    /// Create a service instance
    #[must_use]
    pub fn new(
        resource: ResourceDescriptor,
        repository: Arc<dyn RecordRepository>,
        messages: DeleteMessages,
    ) -> Self {
        Self {
            resource,
            repository,
            messages,
        }
    }

    pub fn resource(&self) -> &ResourceDescriptor {
        &self.resource
    }

    /// Handle a raw JSON request body.
    ///
    /// Payload errors are reported through the error template like any other failure.
    pub async fn handle_payload(&self, payload: &Value) -> DeleteOutcome {
        match parse_ids(payload) {
            Ok(ids) => self.handle(&ids).await,
            Err(e) => self.reject(&e),
        }
    }

    /// Delete the records matching `ids` and build the response.
    ///
    /// Never fails: every error becomes a 400 envelope.
    pub async fn handle(&self, ids: &[RecordId]) -> DeleteOutcome {
        match self.delete_multiple(ids).await {
            Ok(count) => {
                log::info!(
                    "Deleted {count} {} record(s) ({} requested)",
                    self.resource.model_name(),
                    ids.len()
                );
                let count = count.to_string();
                let label = self.resource.label();
                DeleteOutcome::success(template::render(
                    &self.messages.success,
                    &[("count", count.as_str()), ("model_name", label.as_str())],
                ))
            }
            Err(e) => self.reject(&e),
        }
    }

    /// Delete the records matching `ids`, returning the number actually deleted.
    ///
    /// The existence check and the delete are two separate store calls unless
    /// the repository reports an atomic delete; records removed concurrently in
    /// between simply lower the returned count.
    ///
    /// # Errors
    /// - `CoreError::EmptyRequest` if `ids` is empty (the store is not touched)
    /// - `CoreError::NoMatches` if none of the ids exist
    /// - any error raised by the repository
    pub async fn delete_multiple(&self, ids: &[RecordId]) -> CoreResult<u64> {
        if ids.is_empty() {
            return Err(CoreError::EmptyRequest);
        }

        if self.repository.atomic_delete() {
            return match self.repository.delete_by_ids(ids).await? {
                0 => Err(CoreError::NoMatches),
                count => Ok(count),
            };
        }

        let existing = self.repository.find_existing(ids).await?;
        if existing.is_empty() {
            return Err(CoreError::NoMatches);
        }

        self.repository.delete_by_ids(ids).await
    }

    /// Render an error through the matching template as a 400 response.
    pub fn reject(&self, err: &CoreError) -> DeleteOutcome {
        if err.is_expected() {
            log::warn!("Delete {} rejected: {err}", self.resource.model_name());
        } else {
            log::error!("Delete {} failed: {err}", self.resource.model_name());
        }

        let label = self.resource.label();
        let error = match err {
            CoreError::EmptyRequest => {
                template::render(&self.messages.invalid_body, &[("model_name", label.as_str())])
            }
            CoreError::NoMatches => {
                template::render(&self.messages.none_exist, &[("model_name", label.as_str())])
            }
            other => {
                let detail = other.detail();
                template::render(&self.messages.error, &[("error", &*detail)])
            }
        };
        DeleteOutcome::bad_request(error)
    }
}
