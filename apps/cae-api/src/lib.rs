//! CAE Project API
//!
//! HTTP server for the in-memory CAE project tracker. Wires the store
//! through the repository and service into the domain router, and adds
//! the app-level concerns: request tracing, Swagger UI and the 404
//! fallback.

pub mod config;
pub mod openapi;

use axum::Router;
use axum_helpers::not_found;
use domain_cae_projects::{InMemoryProjectRepository, ProjectService, SharedStore, handlers};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the full application router around an injected store.
///
/// The binary passes the process-lifetime store; tests pass a fresh
/// one per test for isolation.
pub fn build_router(store: SharedStore) -> Router {
    let repository = InMemoryProjectRepository::new(store);
    let service = ProjectService::new(repository);

    Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .nest("/projects", handlers::router(service))
        // The wire contract answers 404 to everything outside the route
        // table, including wrong methods on known paths.
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
