//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that touches the outside world:
//! - Error types
//! - Reading command lines
//! - Preview files on disk

pub mod error;
pub mod input;
pub mod preview_files;
