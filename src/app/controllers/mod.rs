//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the outside world:
//! - The command session
//! - Preview page composition

pub mod preview;
pub mod session;
