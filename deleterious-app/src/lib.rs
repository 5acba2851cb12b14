//! Application wiring for Deleterious.
//!
//! Provides `AppState` (one delete handler per resource), `AppStateBuilder`
//! (resource and adapter injection) and the storage adapters.

pub mod adapters;

use std::collections::HashSet;
use std::sync::Arc;

use deleterious_core::error::{CoreError, CoreResult};
use deleterious_core::services::DeleteMultipleService;
use deleterious_core::traits::RecordRepository;
use deleterious_core::types::{DeleteMessages, ResourceDescriptor};

/// Application state.
///
/// Holds the delete handler of every registered resource. Every frontend
/// constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    services: Vec<Arc<DeleteMultipleService>>,
}

impl AppState {
    /// All registered handlers, in registration order
    pub fn services(&self) -> &[Arc<DeleteMultipleService>] {
        &self.services
    }

    /// Look up a handler by route name (`delete_<model_name>`)
    pub fn service(&self, url_name: &str) -> Option<&Arc<DeleteMultipleService>> {
        self.services
            .iter()
            .find(|svc| svc.resource().url_name() == url_name)
    }
}

/// A resource waiting to be turned into a handler
struct PendingResource {
    resource: ResourceDescriptor,
    repository: Arc<dyn RecordRepository>,
    messages: DeleteMessages,
}

/// Builder for constructing `AppState`.
///
/// At least one resource is required, and route names must be unique.
pub struct AppStateBuilder {
    resources: Vec<PendingResource>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            resources: Vec::new(),
        }
    }

    /// Register a resource with the default messages.
    #[must_use]
    pub fn resource(
        self,
        resource: ResourceDescriptor,
        repository: Arc<dyn RecordRepository>,
    ) -> Self {
        self.resource_with_messages(resource, repository, DeleteMessages::default())
    }

    /// Register a resource with custom messages.
    #[must_use]
    pub fn resource_with_messages(
        mut self,
        resource: ResourceDescriptor,
        repository: Arc<dyn RecordRepository>,
        messages: DeleteMessages,
    ) -> Self {
        self.resources.push(PendingResource {
            resource,
            repository,
            messages,
        });
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if no resource is registered or two
    /// resources share a route name.
    pub fn build(self) -> CoreResult<AppState> {
        if self.resources.is_empty() {
            return Err(CoreError::ValidationError(
                "at least one resource is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let mut services = Vec::with_capacity(self.resources.len());
        for pending in self.resources {
            let url_name = pending.resource.url_name();
            if !seen.insert(url_name.clone()) {
                return Err(CoreError::ValidationError(format!(
                    "duplicate resource: {url_name}"
                )));
            }

            log::info!(
                "Registered bulk delete for {} as {url_name}",
                pending.resource.label()
            );
            services.push(Arc::new(DeleteMultipleService::new(
                pending.resource,
                pending.repository,
                pending.messages,
            )));
        }

        Ok(AppState { services })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
