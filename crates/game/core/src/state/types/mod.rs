pub mod actor;
pub mod common;
pub mod entities;
pub mod item;

pub use actor::{ActorState, ActorTemplate, InventoryState, Role};
pub use common::{EntityId, ItemId, Position};
pub use entities::EntitiesState;
pub use item::{ItemDefinition, ItemEffect, ItemLocation, ItemProperties, ItemState};
