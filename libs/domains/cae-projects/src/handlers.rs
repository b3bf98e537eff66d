use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::models::{CreateProjectCommand, Project, SolverConfig};
use crate::repository::ProjectRepository;
use crate::service::ProjectService;

/// OpenAPI documentation for the Projects API
#[derive(OpenApi)]
#[openapi(
    paths(list_projects, create_project),
    components(schemas(Project, CreateProjectRequest)),
    tags(
        (name = "Projects", description = "CAE project tracking endpoints")
    )
)]
pub struct ApiDoc;

/// Wire-level request body for POST /projects.
///
/// Only a body that is not valid JSON at all is a parse error. Every
/// field deserializes leniently: a missing field and a wrong-typed one
/// (`"name": 123`) both reach the application service as absent, so the
/// service reports them through its per-field rules. The `type` field
/// stays a string here for the same reason: an unknown kind is a
/// validation error, not a parse error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub project_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub mesh_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub solver_config: Option<SolverConfig>,
}

/// Treat a field value of the wrong JSON type as absent instead of
/// failing the whole body.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl From<CreateProjectRequest> for CreateProjectCommand {
    fn from(request: CreateProjectRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            project_type: request.project_type,
            mesh_count: request.mesh_count,
            solver_config: request.solver_config,
        }
    }
}

/// Create the project router. The app mounts this at `/projects`.
pub fn router<R: ProjectRepository + 'static>(service: ProjectService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_projects).post(create_project))
        .with_state(shared_service)
}

/// List all projects
#[utoipa::path(
    get,
    path = "",
    tag = "Projects",
    responses(
        (status = 200, description = "All projects in insertion order", body = Vec<Project>)
    )
)]
async fn list_projects<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = service.list_projects().await?;
    Ok(Json(projects))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "",
    tag = "Projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created successfully", body = Project),
        (status = 400, description = "Malformed JSON or invalid project data", body = axum_helpers::ErrorResponse)
    )
)]
async fn create_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;

    let project = service.create_project(request.into()).await?;
    Ok((StatusCode::CREATED, Json(project)))
}
