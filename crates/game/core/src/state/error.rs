//! State management errors.
//!
//! Errors related to the entity store, identity lookups and item construction.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, ItemId, Position};

/// Errors that occur during entity store operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// No actor with this identity exists (never added, or already removed).
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// No item with this identity exists.
    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    /// A hero was added after other actors.
    #[error("the hero must be the first actor added")]
    HeroNotFirst,

    /// A hostile was added before the hero.
    #[error("a hero must exist before hostiles are added")]
    MissingHero,

    /// Removal of the hero was requested.
    #[error("the hero is never removed from the store")]
    HeroNotRemovable,

    /// Another actor already stands on the target cell.
    #[error("position {position} is already occupied by actor {occupant}")]
    PositionOccupied {
        position: Position,
        occupant: EntityId,
    },

    /// Another item already lies on the target cell.
    #[error("position {position} already holds {item}")]
    GroundOccupied { position: Position, item: ItemId },

    #[error("{0} is not lying on the ground")]
    ItemNotOnGround(ItemId),

    #[error("{0} is not held by anyone")]
    ItemNotHeld(ItemId),

    #[error("inventory of actor {actor} is full ({capacity} slots)")]
    InventoryFull { actor: EntityId, capacity: usize },

    /// Identity allocation overflow (all ids exhausted).
    #[error("entity id overflow")]
    EntityIdOverflow,
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            ActorNotFound(_) | ItemNotFound(_) | EntityIdOverflow => ErrorSeverity::Fatal,
            HeroNotRemovable => ErrorSeverity::Internal,
            InventoryFull { .. } | ItemNotOnGround(_) | ItemNotHeld(_) => {
                ErrorSeverity::Recoverable
            }
            HeroNotFirst | MissingHero | PositionOccupied { .. } | GroundOccupied { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            ActorNotFound(_) => "STATE_ACTOR_NOT_FOUND",
            ItemNotFound(_) => "STATE_ITEM_NOT_FOUND",
            HeroNotFirst => "STATE_HERO_NOT_FIRST",
            MissingHero => "STATE_MISSING_HERO",
            HeroNotRemovable => "STATE_HERO_NOT_REMOVABLE",
            PositionOccupied { .. } => "STATE_POSITION_OCCUPIED",
            GroundOccupied { .. } => "STATE_GROUND_OCCUPIED",
            ItemNotOnGround(_) => "STATE_ITEM_NOT_ON_GROUND",
            ItemNotHeld(_) => "STATE_ITEM_NOT_HELD",
            InventoryFull { .. } => "STATE_INVENTORY_FULL",
            EntityIdOverflow => "STATE_ENTITY_ID_OVERFLOW",
        }
    }
}

/// Rejected item blueprints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ItemDefinitionError {
    #[error("item name must not be empty")]
    EmptyName,

    #[error("item '{name}' has an effect with zero magnitude")]
    ZeroMagnitude { name: String },
}

impl GameError for ItemDefinitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "ITEM_EMPTY_NAME",
            Self::ZeroMagnitude { .. } => "ITEM_ZERO_MAGNITUDE",
        }
    }
}
