//! Deterministic dungeon rules and data types shared across clients.
//!
//! `game-core` defines the canonical rules (orders, intent resolution, action
//! execution, entity store) and exposes pure APIs that the runtime drives turn
//! by turn. All state mutation flows through [`engine::GameEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod intent;
pub mod state;

#[cfg(test)]
mod testing;

pub use action::{ActionError, ActionOutcome, CardinalDirection, Order};
pub use config::GameConfig;
pub use engine::{
    CleanupReport, ExecuteError, GameEngine, GameStatus, StatusError, TransitionPhase,
};
pub use env::{MapDimensions, MapOracle, StaticTile, TerrainKind};
pub use error::{ErrorSeverity, GameError};
pub use intent::{
    Behavior, Command, HeroIntent, resolve_hero, resolve_hostile, select_item, toward,
};
pub use state::{
    ActorState, ActorTemplate, EntitiesState, EntityId, GameState, Glyph, InventoryEntry,
    InventoryState, ItemDefinition, ItemDefinitionError, ItemEffect, ItemId, ItemLocation,
    ItemProperties, ItemState, Position, Role, Snapshot, StateError, TileKind, inventory_listing,
};
