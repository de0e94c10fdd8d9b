//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the turn driver can stay focused on orchestration.

pub mod collaborators;
pub mod errors;

pub use collaborators::{CommandSource, Outcome, Renderer};
pub use errors::{CollaboratorKind, Result, RuntimeError};
