//! Item-related state types.
//!
//! Items carry a closed set of typed effects instead of a free-form property
//! map, and their location is an explicit enum so an item can never be both
//! on the ground and in an inventory.

use super::{EntityId, ItemId, Position};
use crate::state::ItemDefinitionError;

/// Effect applied to the holder when an item is consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Restores hit points, capped at the actor maximum.
    Heal { amount: u32 },
}

/// Typed item properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemProperties {
    /// `Some` makes the item consumable.
    pub on_consume: Option<ItemEffect>,
}

impl ItemProperties {
    pub fn consumable(effect: ItemEffect) -> Self {
        Self {
            on_consume: Some(effect),
        }
    }

    pub fn is_consumable(&self) -> bool {
        self.on_consume.is_some()
    }
}

/// Where an item currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemLocation {
    OnGround(Position),
    Held(EntityId),
}

/// Validated blueprint for an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDefinition {
    name: String,
    symbol: char,
    durability: u32,
    properties: ItemProperties,
}

impl ItemDefinition {
    pub fn new(
        name: impl Into<String>,
        symbol: char,
        durability: u32,
        properties: ItemProperties,
    ) -> Result<Self, ItemDefinitionError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ItemDefinitionError::EmptyName);
        }
        if let Some(ItemEffect::Heal { amount: 0 }) = properties.on_consume {
            return Err(ItemDefinitionError::ZeroMagnitude { name });
        }

        Ok(Self {
            name,
            symbol,
            durability,
            properties,
        })
    }

    /// The healing potion placed next to the hero in the default room.
    pub fn potion() -> Self {
        Self {
            name: "Potion".to_owned(),
            symbol: '^',
            durability: 3,
            properties: ItemProperties::consumable(ItemEffect::Heal { amount: 3 }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn durability(&self) -> u32 {
        self.durability
    }

    pub fn properties(&self) -> ItemProperties {
        self.properties
    }

    pub(crate) fn to_item(&self, id: ItemId, location: ItemLocation) -> ItemState {
        ItemState {
            id,
            name: self.name.clone(),
            symbol: self.symbol,
            durability: self.durability,
            properties: self.properties,
            location,
        }
    }
}

/// An item instance tracked by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemState {
    pub id: ItemId,
    pub name: String,
    pub symbol: char,
    /// Remaining charges. Each consumption spends one.
    pub durability: u32,
    pub properties: ItemProperties,
    location: ItemLocation,
}

impl ItemState {
    pub fn location(&self) -> ItemLocation {
        self.location
    }

    pub fn ground_position(&self) -> Option<Position> {
        match self.location {
            ItemLocation::OnGround(position) => Some(position),
            ItemLocation::Held(_) => None,
        }
    }

    pub fn holder(&self) -> Option<EntityId> {
        match self.location {
            ItemLocation::Held(owner) => Some(owner),
            ItemLocation::OnGround(_) => None,
        }
    }

    pub fn is_consumable(&self) -> bool {
        self.properties.is_consumable()
    }

    pub(crate) fn set_location(&mut self, location: ItemLocation) {
        self.location = location;
    }
}
