//! Entity store: every actor and item in the dungeon.
//!
//! Identities come from monotonically increasing counters and entities live
//! in `BTreeMap`s keyed by those identities. Removing an actor therefore never
//! shifts or reuses anyone else's id, and iterating the map yields actors in
//! creation order, which is also the turn order.
//!
//! Position lookups are linear scans. Dungeons hold a handful of entities, so
//! this stays cheap; an index by position would be the next step at scale.

use std::collections::BTreeMap;

use super::{
    ActorState, ActorTemplate, EntityId, ItemDefinition, ItemId, ItemLocation, ItemState,
    Position, Role,
};
use crate::config::GameConfig;
use crate::state::StateError;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EntitiesState {
    actors: BTreeMap<EntityId, ActorState>,
    items: BTreeMap<ItemId, ItemState>,
    next_actor_id: u32,
    next_item_id: u32,
}

impl EntitiesState {
    pub fn empty() -> Self {
        Self::default()
    }

    // ===== creation =====

    /// Adds an actor built from `template` at `position`.
    ///
    /// The hero must be the first actor added (it receives `EntityId::HERO`),
    /// and hostiles can only follow an existing hero.
    pub fn add_actor(
        &mut self,
        template: &ActorTemplate,
        position: Position,
    ) -> Result<EntityId, StateError> {
        match (template.role, self.next_actor_id) {
            (Role::Hero, 0) | (Role::Hostile, 1..) => {}
            (Role::Hero, _) => return Err(StateError::HeroNotFirst),
            (Role::Hostile, 0) => return Err(StateError::MissingHero),
        }
        if let Some(occupant) = self.actor_at(position) {
            return Err(StateError::PositionOccupied {
                position,
                occupant: occupant.id,
            });
        }

        let id = EntityId(self.next_actor_id);
        self.next_actor_id = self
            .next_actor_id
            .checked_add(1)
            .ok_or(StateError::EntityIdOverflow)?;

        self.actors.insert(id, template.to_actor(id, position));
        Ok(id)
    }

    /// Places a new item on the ground.
    pub fn add_item(
        &mut self,
        definition: &ItemDefinition,
        position: Position,
    ) -> Result<ItemId, StateError> {
        if let Some(existing) = self.item_at(position) {
            return Err(StateError::GroundOccupied {
                position,
                item: existing.id,
            });
        }

        let id = ItemId(self.next_item_id);
        self.next_item_id = self
            .next_item_id
            .checked_add(1)
            .ok_or(StateError::EntityIdOverflow)?;

        self.items
            .insert(id, definition.to_item(id, ItemLocation::OnGround(position)));
        Ok(id)
    }

    // ===== lookup =====

    pub fn actor(&self, id: EntityId) -> Result<&ActorState, StateError> {
        self.actors.get(&id).ok_or(StateError::ActorNotFound(id))
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Result<&mut ActorState, StateError> {
        self.actors.get_mut(&id).ok_or(StateError::ActorNotFound(id))
    }

    pub fn hero(&self) -> Result<&ActorState, StateError> {
        self.actor(EntityId::HERO)
    }

    pub fn item(&self, id: ItemId) -> Result<&ItemState, StateError> {
        self.items.get(&id).ok_or(StateError::ItemNotFound(id))
    }

    pub fn item_mut(&mut self, id: ItemId) -> Result<&mut ItemState, StateError> {
        self.items.get_mut(&id).ok_or(StateError::ItemNotFound(id))
    }

    /// Actor standing on `position`, dead or alive. O(n).
    pub fn actor_at(&self, position: Position) -> Option<&ActorState> {
        self.actors
            .values()
            .find(|actor| actor.position == position)
    }

    /// Item lying on the ground at `position`. Held items have no position. O(n).
    pub fn item_at(&self, position: Position) -> Option<&ItemState> {
        self.items
            .values()
            .find(|item| item.ground_position() == Some(position))
    }

    // ===== iteration =====

    /// Identities of actors with hit points left, in creation order.
    ///
    /// The iterator borrows the store; call again for a fresh pass.
    pub fn alive_actors(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.actors
            .values()
            .filter(|actor| actor.is_alive())
            .map(|actor| actor.id)
    }

    /// Every stored actor, including dead ones awaiting cleanup.
    pub fn actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemState> {
        self.items.values()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // ===== lifecycle =====

    /// Deletes an actor together with everything it was holding.
    ///
    /// The hero is never removed; its death ends the game instead.
    pub fn remove_actor(&mut self, id: EntityId) -> Result<ActorState, StateError> {
        if id.is_hero() {
            return Err(StateError::HeroNotRemovable);
        }
        let actor = self.actors.remove(&id).ok_or(StateError::ActorNotFound(id))?;
        for item in actor.inventory.items() {
            self.items.remove(item);
        }
        Ok(actor)
    }

    /// Moves a ground item into `holder`'s inventory.
    pub fn pick_up(&mut self, item_id: ItemId, holder: EntityId) -> Result<(), StateError> {
        let item = self.items.get(&item_id).ok_or(StateError::ItemNotFound(item_id))?;
        if item.ground_position().is_none() {
            return Err(StateError::ItemNotOnGround(item_id));
        }

        let actor = self
            .actors
            .get_mut(&holder)
            .ok_or(StateError::ActorNotFound(holder))?;
        actor
            .inventory
            .push(item_id)
            .map_err(|_| StateError::InventoryFull {
                actor: holder,
                capacity: GameConfig::MAX_INVENTORY_SLOTS,
            })?;

        self.item_mut(item_id)?
            .set_location(ItemLocation::Held(holder));
        Ok(())
    }

    /// Takes a held item out of its owner's inventory and puts it on the ground.
    pub fn drop_item(&mut self, item_id: ItemId, position: Position) -> Result<(), StateError> {
        let owner = self
            .item(item_id)?
            .holder()
            .ok_or(StateError::ItemNotHeld(item_id))?;
        if let Some(existing) = self.item_at(position) {
            return Err(StateError::GroundOccupied {
                position,
                item: existing.id,
            });
        }

        self.actor_mut(owner)?.inventory.remove(item_id);
        self.item_mut(item_id)?
            .set_location(ItemLocation::OnGround(position));
        Ok(())
    }

    /// Destroys an item wherever it is, removing it from any inventory.
    pub fn discard_item(&mut self, item_id: ItemId) -> Result<ItemState, StateError> {
        let item = self
            .items
            .remove(&item_id)
            .ok_or(StateError::ItemNotFound(item_id))?;
        if let Some(actor) = item.holder().and_then(|owner| self.actors.get_mut(&owner)) {
            actor.inventory.remove(item_id);
        }
        Ok(item)
    }
}
