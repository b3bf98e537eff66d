use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Kind of CAE analysis a project performs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectType {
    Structural,
    Fluid,
    Thermal,
    Coupled,
}

/// Project lifecycle status
///
/// Write-once at creation for now; transition rules between the solver
/// stages are a future extension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Created,
    Preprocessing,
    Solving,
    Postprocessing,
    Completed,
    Failed,
}

/// Solver parameters, every field optional
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convergence_criteria: Option<f64>,
}

/// Project entity - a persisted CAE analysis job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, assigned by the store at insertion (starts at 1)
    pub id: u64,
    /// Non-empty, trimmed project name
    pub name: String,
    /// Free-form description (may be empty)
    pub description: String,
    /// Kind of analysis
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    /// Current lifecycle status, always `created` at construction
    pub status: ProjectStatus,
    /// Optional mesh element count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_count: Option<u64>,
    /// Optional solver parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver_config: Option<SolverConfig>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, equal to `created_at` at creation
    pub updated_at: DateTime<Utc>,
}

/// Entity shape minus the id: the factory's output and the repository's
/// input. The store assigns the id at insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectData {
    pub name: String,
    pub description: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub mesh_count: Option<u64>,
    pub solver_config: Option<SolverConfig>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectData {
    /// Attach a store-assigned id, producing the full entity.
    pub fn into_project(self, id: u64) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            project_type: self.project_type,
            status: self.status,
            mesh_count: self.mesh_count,
            solver_config: self.solver_config,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Command for the create-project use case.
///
/// Distinct from the wire-level request DTO so the application layer
/// never depends on the HTTP layer. Fields are optional because absent
/// wire fields pass through as absent: validation reports every missing
/// field instead of failing at deserialization.
#[derive(Debug, Clone, Default)]
pub struct CreateProjectCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_type: Option<String>,
    pub mesh_count: Option<u64>,
    pub solver_config: Option<SolverConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_parses_lowercase() {
        assert_eq!("structural".parse::<ProjectType>().unwrap(), ProjectType::Structural);
        assert_eq!("coupled".parse::<ProjectType>().unwrap(), ProjectType::Coupled);
        assert!("STRUCTURAL".parse::<ProjectType>().is_err());
        assert!("magnetic".parse::<ProjectType>().is_err());
    }

    #[test]
    fn test_status_defaults_to_created() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Created);
    }

    #[test]
    fn test_project_serializes_with_wire_field_names() {
        let now = Utc::now();
        let project = Project {
            id: 7,
            name: "Pump Housing".to_string(),
            description: String::new(),
            project_type: ProjectType::Fluid,
            status: ProjectStatus::Created,
            mesh_count: Some(120_000),
            solver_config: Some(SolverConfig {
                time_step: Some(0.01),
                iterations: Some(500),
                convergence_criteria: None,
            }),
            created_at: now,
            updated_at: now,
        };

        let json: serde_json::Value = serde_json::to_value(&project).unwrap();
        assert_eq!(json["type"], "fluid");
        assert_eq!(json["status"], "created");
        assert_eq!(json["meshCount"], 120_000);
        assert_eq!(json["solverConfig"]["timeStep"], 0.01);
        assert!(json["solverConfig"].get("convergenceCriteria").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let now = Utc::now();
        let project = ProjectData {
            name: "n".to_string(),
            description: "d".to_string(),
            project_type: ProjectType::Thermal,
            status: ProjectStatus::Created,
            mesh_count: None,
            solver_config: None,
            created_at: now,
            updated_at: now,
        }
        .into_project(1);

        let json: serde_json::Value = serde_json::to_value(&project).unwrap();
        assert!(json.get("meshCount").is_none());
        assert!(json.get("solverConfig").is_none());
    }
}
