//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The document model (elements, stylesheet, scripts) and its artifacts
//! - Transcript entries
//! - Engine settings

pub mod messages;
pub mod model;
pub mod settings;

pub use messages::{Command, GREETING, Role, Transcript};
pub use model::{
    Attributes, Declarations, DocumentModel, Element, GeneratedArtifacts, OrderedMap, ScriptSet,
    StyleSheet,
};
pub use settings::EngineSettings;
