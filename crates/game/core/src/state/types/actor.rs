//! Actor state: hero and hostiles share one representation.

use arrayvec::ArrayVec;

use super::{EntityId, ItemId, Position};
use crate::action::Order;
use crate::config::GameConfig;

/// Which side an actor is on.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    /// The player-controlled actor. Always `EntityId::HERO`.
    Hero,
    /// Everything else on the map.
    Hostile,
}

/// Blueprint used to create an actor when it is added to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub role: Role,
    pub symbol: char,
    pub hit_points: u32,
    pub damage: u32,
}

impl ActorTemplate {
    pub fn new(role: Role, symbol: char, hit_points: u32, damage: u32) -> Self {
        Self {
            role,
            symbol,
            hit_points,
            damage,
        }
    }

    pub fn hero(hit_points: u32, damage: u32) -> Self {
        Self::new(Role::Hero, '@', hit_points, damage)
    }

    pub fn hostile(symbol: char, hit_points: u32, damage: u32) -> Self {
        Self::new(Role::Hostile, symbol, hit_points, damage)
    }

    /// Materialises the template. Hit points are clamped to the shared ceiling.
    pub fn to_actor(&self, id: EntityId, position: Position) -> ActorState {
        ActorState {
            id,
            position,
            hit_points: self.hit_points.min(GameConfig::MAX_HIT_POINTS),
            damage: self.damage,
            symbol: self.symbol,
            role: self.role,
            order: Order::None,
            inventory: InventoryState::empty(),
        }
    }
}

/// Complete actor state.
///
/// # Invariants
///
/// - `hit_points` stays within `0..=GameConfig::MAX_HIT_POINTS`; it is only
///   mutated through [`ActorState::take_damage`] and [`ActorState::heal`]
/// - an actor with zero hit points is dead and never acts again
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorState {
    pub id: EntityId,
    pub position: Position,
    hit_points: u32,
    pub damage: u32,
    pub symbol: char,
    pub role: Role,

    /// Order pending for this turn. Cleared back to `Order::None` after execution.
    pub order: Order,

    pub inventory: InventoryState,
}

impl ActorState {
    #[inline]
    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    #[inline]
    pub fn is_hero(&self) -> bool {
        matches!(self.role, Role::Hero)
    }

    /// Subtracts `amount`, flooring at zero. Returns the remaining hit points.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hit_points = self.hit_points.saturating_sub(amount);
        self.hit_points
    }

    /// Adds `amount`, capped at [`GameConfig::MAX_HIT_POINTS`]. Returns the
    /// number of hit points actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hit_points;
        self.hit_points = before
            .saturating_add(amount)
            .min(GameConfig::MAX_HIT_POINTS);
        self.hit_points - before
    }
}

/// Ordered list of held items. Slot indices are what the hero selects from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InventoryState {
    items: ArrayVec<ItemId, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).copied()
    }

    /// Appends to the end. Returns the item back if every slot is taken.
    pub(crate) fn push(&mut self, item: ItemId) -> Result<(), ItemId> {
        self.items.try_push(item).map_err(|err| err.element())
    }

    /// Removes `item`, keeping the relative order of the remaining slots.
    pub(crate) fn remove(&mut self, item: ItemId) -> bool {
        match self.items.iter().position(|held| *held == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}
