use std::sync::Arc;

use crate::error::{ProjectError, ProjectResult};
use crate::factory::{self, CreateProjectData};
use crate::models::{CreateProjectCommand, Project, ProjectType};
use crate::repository::ProjectRepository;

/// Application service for project use cases.
///
/// Validation lives here and nowhere else: the handlers pass commands
/// through untouched and the repository assumes its input is valid.
#[derive(Clone)]
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new CAE project.
    ///
    /// Runs every validation rule and reports all violations together;
    /// nothing is persisted unless the whole command is valid. On
    /// success the name is trimmed, the factory builds the project data
    /// and the repository's result is returned verbatim.
    pub async fn create_project(&self, command: CreateProjectCommand) -> ProjectResult<Project> {
        let (name, description, project_type) =
            validate(&command).map_err(ProjectError::InvalidData)?;

        let data = factory::new_project(CreateProjectData {
            name,
            description,
            project_type,
            mesh_count: command.mesh_count,
            solver_config: command.solver_config,
        });

        self.repository.add(data).await
    }

    /// List all projects in insertion order.
    pub async fn list_projects(&self) -> ProjectResult<Vec<Project>> {
        self.repository.list_all().await
    }
}

/// Evaluate every creation rule independently so all violations are
/// reported together, in rule order.
fn validate(
    command: &CreateProjectCommand,
) -> Result<(String, String, ProjectType), Vec<String>> {
    let mut violations = Vec::new();

    let name = command
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    if name.is_none() {
        violations.push("Name is required and must be a non-empty string.".to_string());
    }

    let description = command.description.as_deref();
    if description.is_none() {
        violations.push("Description is required and must be a string.".to_string());
    }

    let project_type = command
        .project_type
        .as_deref()
        .and_then(|t| t.parse::<ProjectType>().ok());
    if project_type.is_none() {
        violations.push(
            "Type is required and must be one of: structural, fluid, thermal, coupled."
                .to_string(),
        );
    }

    match (name, description, project_type) {
        (Some(name), Some(description), Some(project_type)) => {
            Ok((name.to_string(), description.to_string(), project_type))
        }
        _ => Err(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectStatus;
    use crate::repository::MockProjectRepository;

    fn command(name: &str, description: &str, project_type: &str) -> CreateProjectCommand {
        CreateProjectCommand {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            project_type: Some(project_type.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_command_reports_all_three_violations() {
        // No expectations set: any repository call would panic, which
        // also proves nothing is persisted on validation failure.
        let service = ProjectService::new(MockProjectRepository::new());

        let result = service
            .create_project(CreateProjectCommand::default())
            .await;

        match result {
            Err(ProjectError::InvalidData(details)) => {
                assert_eq!(details.len(), 3);
                assert!(details[0].contains("Name"));
                assert!(details[1].contains("Description"));
                assert!(details[2].contains("Type"));
            }
            other => panic!("Expected InvalidData, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_whitespace_name_is_rejected() {
        let service = ProjectService::new(MockProjectRepository::new());

        let result = service.create_project(command("   ", "d", "structural")).await;

        match result {
            Err(ProjectError::InvalidData(details)) => {
                assert_eq!(details.len(), 1);
                assert!(details[0].contains("Name"));
            }
            other => panic!("Expected InvalidData, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_type_is_rejected() {
        let service = ProjectService::new(MockProjectRepository::new());

        let result = service.create_project(command("n", "d", "magnetic")).await;

        match result {
            Err(ProjectError::InvalidData(details)) => {
                assert_eq!(details.len(), 1);
                assert!(details[0].contains("structural, fluid, thermal, coupled"));
            }
            other => panic!("Expected InvalidData, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_description_is_accepted() {
        let mut mock_repo = MockProjectRepository::new();
        mock_repo
            .expect_add()
            .returning(|data| Ok(data.into_project(1)));
        let service = ProjectService::new(mock_repo);

        let project = service
            .create_project(command("Pump Housing", "", "fluid"))
            .await
            .unwrap();

        assert_eq!(project.description, "");
        assert_eq!(project.project_type, ProjectType::Fluid);
    }

    #[tokio::test]
    async fn test_name_is_trimmed_before_construction() {
        let mut mock_repo = MockProjectRepository::new();
        mock_repo
            .expect_add()
            .withf(|data| data.name == "Aircraft Wing Analysis")
            .returning(|data| Ok(data.into_project(1)));
        let service = ProjectService::new(mock_repo);

        let project = service
            .create_project(command("  Aircraft Wing Analysis  ", "d", "structural"))
            .await
            .unwrap();

        assert_eq!(project.name, "Aircraft Wing Analysis");
        assert_eq!(project.status, ProjectStatus::Created);
        assert_eq!(project.created_at, project.updated_at);
    }
}
