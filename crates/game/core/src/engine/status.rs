//! Top-level game status machine.

use crate::error::{ErrorSeverity, GameError};

/// Session status. Transitions only move forward: `Running → Lost`, and
/// either of those `→ Terminated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Running,
    /// The hero died; the loss screen is still pending.
    Lost,
    /// The session is over with this process exit code.
    Terminated(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition { from: GameStatus, to: GameStatus },
}

impl GameError for StatusError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "STATUS_INVALID_TRANSITION",
        }
    }
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GameStatus::Terminated(code) => Some(*code),
            GameStatus::Running | GameStatus::Lost => None,
        }
    }

    /// `Running → Lost`. Anything else is rejected and leaves `self` unchanged.
    pub fn lose(&mut self) -> Result<(), StatusError> {
        match self {
            GameStatus::Running => {
                *self = GameStatus::Lost;
                Ok(())
            }
            GameStatus::Lost | GameStatus::Terminated(_) => Err(StatusError::InvalidTransition {
                from: *self,
                to: GameStatus::Lost,
            }),
        }
    }

    /// `Running | Lost → Terminated(code)`.
    pub fn terminate(&mut self, code: i32) -> Result<(), StatusError> {
        match self {
            GameStatus::Running | GameStatus::Lost => {
                *self = GameStatus::Terminated(code);
                Ok(())
            }
            GameStatus::Terminated(_) => Err(StatusError::InvalidTransition {
                from: *self,
                to: GameStatus::Terminated(code),
            }),
        }
    }
}
