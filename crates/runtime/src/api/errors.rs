//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the collaborators, level setup and the simulation so
//! clients can bubble them up with consistent context.
use std::fmt;
use std::io;

use game_core::{GameError, StatusError};
use thiserror::Error;

use crate::scenario::ScenarioError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{kind} not set")]
    CollaboratorNotSet { kind: CollaboratorKind },

    #[error("command source failed")]
    Input(#[source] io::Error),

    #[error("renderer failed")]
    Render(#[source] io::Error),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Status(#[from] StatusError),

    /// The simulation reached a state it should never be in.
    #[error("simulation invariant violated ({code}): {message}")]
    Invariant { code: &'static str, message: String },
}

impl RuntimeError {
    pub fn invariant(error: &impl GameError) -> Self {
        Self::Invariant {
            code: error.error_code(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CollaboratorKind {
    CommandSource,
    Renderer,
}

impl fmt::Display for CollaboratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CollaboratorKind::CommandSource => "command source",
            CollaboratorKind::Renderer => "renderer",
        };
        write!(f, "{}", label)
    }
}
