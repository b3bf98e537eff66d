//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the CAE Project API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CAE Project API",
        version = "0.1.0",
        description = "In-memory REST API for tracking CAE analysis projects",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/projects", api = domain_cae_projects::handlers::ApiDoc)
    ),
    tags(
        (name = "Projects", description = "CAE project tracking endpoints")
    )
)]
pub struct ApiDoc;
