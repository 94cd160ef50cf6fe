//! Services layer - the engine's business operations.
//!
//! - Intent classification
//! - Template library
//! - Modification rules
//! - Serialization to markup, stylesheet and script text

pub mod classifier;
pub mod resolver;
pub mod serializer;
pub mod templates;
