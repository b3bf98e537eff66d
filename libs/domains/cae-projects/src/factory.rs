//! Domain factory for project data.
//!
//! Builds a well-formed [`ProjectData`] with defaulted status and
//! timestamps. Performs no validation: the application service runs the
//! validation rules before calling in here.

use chrono::Utc;

use crate::models::{ProjectData, ProjectStatus, ProjectType, SolverConfig};

/// Validated input for [`new_project`]: the caller-supplied fields,
/// without the store- or factory-assigned ones.
#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub name: String,
    pub description: String,
    pub project_type: ProjectType,
    pub mesh_count: Option<u64>,
    pub solver_config: Option<SolverConfig>,
}

/// Build project data ready to be persisted by a repository.
///
/// Stamps `status = created` and equal creation/update timestamps.
pub fn new_project(data: CreateProjectData) -> ProjectData {
    let now = Utc::now();
    ProjectData {
        name: data.name,
        description: data.description,
        project_type: data.project_type,
        status: ProjectStatus::Created,
        mesh_count: data.mesh_count,
        solver_config: data.solver_config,
        created_at: now,
        updated_at: now,
    }
}
