use async_trait::async_trait;

use crate::error::ProjectResult;
use crate::models::{Project, ProjectData};
use crate::store::SharedStore;

/// Repository trait for Project persistence.
///
/// The only abstraction the service and handlers see; implementations
/// own all access to the underlying storage. Input is assumed validated
/// upstream, so no validation happens at this layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Full snapshot of all projects in insertion order.
    ///
    /// Returned projects are copies; mutating them never affects stored
    /// state.
    async fn list_all(&self) -> ProjectResult<Vec<Project>>;

    /// Persist project data, assigning the next id from the store's
    /// counter. Returns a copy of the stored record.
    async fn add(&self, data: ProjectData) -> ProjectResult<Project>;
}

/// In-memory implementation of ProjectRepository.
///
/// Holds a handle to the injected store and is the sole component that
/// touches the store's project list and id counter directly.
#[derive(Debug, Clone)]
pub struct InMemoryProjectRepository {
    store: SharedStore,
}

impl InMemoryProjectRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list_all(&self) -> ProjectResult<Vec<Project>> {
        let store = self.store.read().await;
        Ok(store.projects.clone())
    }

    async fn add(&self, data: ProjectData) -> ProjectResult<Project> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let project = data.into_project(id);
        store.projects.push(project.clone());

        tracing::info!(project_id = project.id, "Created project");
        Ok(project)
    }
}
