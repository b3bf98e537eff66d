use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Project;

/// Handle to a store shared between the repository and its owner.
pub type SharedStore = Arc<RwLock<InMemoryStore>>;

/// Raw in-memory state: the project list and the id counter.
///
/// Pure storage, no validation, no copying. Fields are crate-private;
/// the repository is the only module that reads or writes them. The
/// binary constructs one instance at startup and injects it; tests
/// construct their own isolated instances.
#[derive(Debug)]
pub struct InMemoryStore {
    pub(crate) projects: Vec<Project>,
    pub(crate) next_id: u64,
}

impl InMemoryStore {
    /// Fresh, independent store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_id: 1,
        }
    }

    /// Fresh store wrapped for shared ownership.
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
