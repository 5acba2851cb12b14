//! HTTP routes for the bulk delete endpoints

use std::sync::Arc;

use actix_web::{HttpResponse, http::StatusCode, middleware::from_fn, web};
use serde_json::Value;

use deleterious_core::error::CoreError;
use deleterious_core::services::DeleteMultipleService;

use crate::auth;

/// One mounted delete endpoint
#[derive(Clone)]
pub struct ResourceRoute {
    path: String,
    service: Arc<DeleteMultipleService>,
}

impl ResourceRoute {
    /// Mount `service` at `/<prefix>/<url_path>`.
    pub fn new(prefix: &str, service: Arc<DeleteMultipleService>) -> Self {
        let segments: Vec<&str> = [prefix.trim_matches('/'), service.resource().url_path()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            path: format!("/{}", segments.join("/")),
            service,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn service(&self) -> &Arc<DeleteMultipleService> {
        &self.service
    }
}

impl std::fmt::Debug for ResourceRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceRoute")
            .field("path", &self.path)
            .field("resource", self.service.resource())
            .finish_non_exhaustive()
    }
}

/// Register every route on `cfg`, each behind the token check.
pub fn configure(cfg: &mut web::ServiceConfig, routes: &[ResourceRoute]) {
    for route in routes {
        let url_name = route.service.resource().url_name();
        cfg.service(
            web::resource(route.path.as_str())
                .name(&url_name)
                .app_data(web::Data::from(Arc::clone(&route.service)))
                .route(web::delete().to(delete_multiple))
                .wrap(from_fn(auth::require_token)),
        );
    }
}

#[tracing_attributes::instrument(
    skip_all,
    fields(
        resource = %service.resource().url_name(),
        request_id = %uuid::Uuid::new_v4(),
    )
)]
async fn delete_multiple(service: web::Data<DeleteMultipleService>, body: web::Bytes) -> HttpResponse {
    let outcome = match parse_body(&body) {
        Ok(payload) => service.handle_payload(&payload).await,
        Err(e) => service.reject(&e),
    };

    let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::BAD_REQUEST);
    tracing::debug!(status = status.as_u16(), "Bulk delete finished");
    HttpResponse::build(status).json(&outcome.body)
}

/// An empty body counts as a request without ids.
fn parse_body(body: &[u8]) -> Result<Value, CoreError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|e| CoreError::ValidationError(format!("JSON parse error - {e}")))
}
