//! Authoritative game state representation.
//!
//! This module owns the entity store, the tile classifier and the snapshot
//! projections. Runtime layers query this state but mutate it exclusively
//! through the engine.
pub mod error;
pub mod snapshot;
pub mod tile;
pub mod types;

use crate::env::MapOracle;
pub use error::{ItemDefinitionError, StateError};
pub use snapshot::{Glyph, InventoryEntry, Snapshot, inventory_listing};
pub use tile::{TileKind, classify};
pub use types::{
    ActorState, ActorTemplate, EntitiesState, EntityId, InventoryState, ItemDefinition, ItemEffect,
    ItemId, ItemLocation, ItemProperties, ItemState, Position, Role,
};

/// Canonical state of one dungeon session.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GameState {
    /// All actors and items, keyed by stable identities.
    pub entities: EntitiesState,
}

impl GameState {
    pub fn new(entities: EntitiesState) -> Self {
        Self { entities }
    }

    /// Creates an empty state with no entities (for scenario initialization).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Classifies a cell against this state and the static map.
    pub fn classify<M>(&self, map: &M, position: Position) -> TileKind
    where
        M: MapOracle + ?Sized,
    {
        classify(&self.entities, map, position)
    }

    /// Projects the state into what a renderer is allowed to see.
    pub fn snapshot(&self) -> Result<Snapshot, StateError> {
        Snapshot::capture(&self.entities)
    }
}
