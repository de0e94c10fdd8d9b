//! Errors produced while executing an actor's order.
//!
//! Most of these are reported no-ops: the actor loses its action and the turn
//! carries on. Only lookups of identities the engine generated itself are
//! fatal, because they mean the store no longer matches the turn order.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, ItemId, Position, StateError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Store-level failure (unknown identity, full inventory, ...).
    #[error(transparent)]
    State(#[from] StateError),

    /// Destination is a wall, void, or outside the map.
    #[error("destination {destination} is blocked")]
    Blocked { destination: Position },

    #[error("actor {0} is dead and cannot act")]
    ActorDead(EntityId),

    #[error("nothing to pick up at {position}")]
    NothingToPickUp { position: Position },

    #[error("{item} is not consumable")]
    NotConsumable { item: ItemId },

    #[error("{item} is not in the inventory of actor {actor}")]
    ItemNotHeld { actor: EntityId, item: ItemId },

    /// More than one actor ended up on the same cell.
    #[error("occupancy desync: actors {first} and {second} share {position}")]
    OccupancyDesync {
        position: Position,
        first: EntityId,
        second: EntityId,
    },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::State(inner) => inner.severity(),
            Self::Blocked { .. }
            | Self::ActorDead(_)
            | Self::NothingToPickUp { .. }
            | Self::NotConsumable { .. }
            | Self::ItemNotHeld { .. } => ErrorSeverity::Recoverable,
            Self::OccupancyDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::State(inner) => inner.error_code(),
            Self::Blocked { .. } => "ACTION_BLOCKED",
            Self::ActorDead(_) => "ACTION_ACTOR_DEAD",
            Self::NothingToPickUp { .. } => "ACTION_NOTHING_TO_PICK_UP",
            Self::NotConsumable { .. } => "ACTION_NOT_CONSUMABLE",
            Self::ItemNotHeld { .. } => "ACTION_ITEM_NOT_HELD",
            Self::OccupancyDesync { .. } => "ACTION_OCCUPANCY_DESYNC",
        }
    }
}
