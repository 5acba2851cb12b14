//! HTTP server bootstrap

use std::collections::HashSet;
use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use anyhow::bail;

use deleterious_app::AppStateBuilder;
use deleterious_app::adapters::SqliteStore;

use crate::auth::TokenAuthenticator;
use crate::config::Config;
use crate::routes::{self, ResourceRoute};

/// Open the store and build one route per configured resource.
pub async fn build_routes(config: &Config) -> anyhow::Result<Vec<ResourceRoute>> {
    let store = SqliteStore::new(&config.database.path).await?;
    tracing::info!(path = %config.database.path.display(), "Opened record store");

    let mut builder = AppStateBuilder::new();
    let mut prefixes = Vec::with_capacity(config.resources.len());
    for resource in &config.resources {
        let descriptor = resource.descriptor();
        let repository = store
            .repository(&descriptor, resource.id_type)
            .with_atomic_delete(resource.atomic_delete);
        builder = builder.resource_with_messages(
            descriptor,
            Arc::new(repository),
            resource.messages.clone(),
        );
        prefixes.push(resource.prefix());
    }
    let state = builder.build()?;

    let mut seen = HashSet::new();
    let mut routes = Vec::with_capacity(prefixes.len());
    for (prefix, service) in prefixes.iter().zip(state.services()) {
        let route = ResourceRoute::new(prefix, Arc::clone(service));
        if !seen.insert(route.path().to_string()) {
            bail!("two resources are mounted at {}", route.path());
        }
        tracing::info!(
            path = route.path(),
            name = %route.service().resource().url_name(),
            "Mounted bulk delete endpoint"
        );
        routes.push(route);
    }

    Ok(routes)
}

/// Run the server until shutdown.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let mounted = build_routes(&config).await?;
    let auth = TokenAuthenticator::from_config(&config.auth);
    if !auth.is_enabled() {
        tracing::warn!("Authentication is disabled");
    }

    let workers = config.server.workers();
    let host = config.server.host.clone();
    let port = config.server.port;
    tracing::info!("Starting server on {host}:{port} with {workers} worker(s)");

    HttpServer::new(move || {
        let mounted = mounted.clone();
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(auth.clone()))
            .configure(move |cfg| routes::configure(cfg, &mounted))
    })
    .workers(workers)
    .bind((host.as_str(), port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
