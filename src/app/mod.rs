//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (DocumentModel, Transcript, EngineSettings)
//! - `services/` - Engine operations (classifier, templates, resolver, serializer)
//! - `controllers/` - Orchestration (Session, PreviewController)
//! - `infrastructure/` - External integrations (preview files, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::preview::{PreviewController, SANDBOX_POLICY, compose_document};
pub use controllers::session::{Reply, Session};
pub use domain::{Command, DocumentModel, Element, EngineSettings, GeneratedArtifacts, Role, Transcript};
pub use infrastructure::error::{AppError, Result};
pub use services::classifier::{Intent, classify};
pub use services::resolver::{ModificationResolver, Resolution, TargetElement};
pub use services::serializer::render;
pub use services::templates::{Template, TemplateLibrary};
