//! Error types for the action execution pipeline.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::StateError;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an order through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("{action} action failed: {source}")]
    Action {
        action: &'static str,
        source: TransitionPhaseError<ActionError>,
    },

    /// The acting entity itself could not be looked up.
    #[error(transparent)]
    State(#[from] StateError),
}

impl ExecuteError {
    /// The action-level error, if the failure came out of a transition.
    pub fn action_error(&self) -> Option<&ActionError> {
        match self {
            Self::Action { source, .. } => Some(&source.error),
            Self::State(_) => None,
        }
    }

    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            Self::Action { source, .. } => Some(source.phase),
            Self::State(_) => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action { source, .. } => source.error.severity(),
            Self::State(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Action { source, .. } => source.error.error_code(),
            Self::State(error) => error.error_code(),
        }
    }
}
