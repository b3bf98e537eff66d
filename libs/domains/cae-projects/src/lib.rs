//! CAE Projects Domain
//!
//! Layered implementation of the CAE project tracking service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, wire DTOs
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Service   │  ← use cases, validation (the only place it lives)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Factory   │  ← builds well-formed project data, no validation
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory implementation
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │    Store    │  ← raw state: project list + id counter
//! └─────────────┘
//! ```
//!
//! The store is constructed once (by the binary, or per test) and
//! injected into the repository; only the repository touches its
//! internals. Everything above the repository is polymorphic over the
//! [`ProjectRepository`] trait.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_cae_projects::{
//!     handlers,
//!     repository::InMemoryProjectRepository,
//!     service::ProjectService,
//!     store::InMemoryStore,
//! };
//!
//! let store = InMemoryStore::shared();
//! let repository = InMemoryProjectRepository::new(store);
//! let service = ProjectService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod factory;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{ProjectError, ProjectResult};
pub use models::{
    CreateProjectCommand, Project, ProjectData, ProjectStatus, ProjectType, SolverConfig,
};
pub use repository::{InMemoryProjectRepository, ProjectRepository};
pub use service::ProjectService;
pub use store::{InMemoryStore, SharedStore};
