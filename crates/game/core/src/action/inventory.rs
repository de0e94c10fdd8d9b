use crate::action::{ActionError, ActionOutcome, ActionTransition, require_living};
use crate::env::MapOracle;
use crate::state::{EntityId, GameState, ItemEffect, ItemId};

/// Picks up the item lying under the actor, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickUpAction {
    pub actor: EntityId,
}

impl PickUpAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for PickUpAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _map: &dyn MapOracle) -> Result<(), ActionError> {
        require_living(state, self.actor)?;

        let position = state.entities.actor(self.actor)?.position;
        if state.entities.item_at(position).is_none() {
            return Err(ActionError::NothingToPickUp { position });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _map: &dyn MapOracle,
    ) -> Result<ActionOutcome, ActionError> {
        let position = state.entities.actor(self.actor)?.position;
        let item = state
            .entities
            .item_at(position)
            .map(|item| item.id)
            .ok_or(ActionError::NothingToPickUp { position })?;

        state.entities.pick_up(item, self.actor)?;
        Ok(ActionOutcome::PickedUp { item })
    }

    fn post_validate(
        &self,
        state: &GameState,
        outcome: &ActionOutcome,
    ) -> Result<(), ActionError> {
        let ActionOutcome::PickedUp { item } = *outcome else {
            return Ok(());
        };
        if state.entities.item(item)?.holder() != Some(self.actor) {
            return Err(ActionError::ItemNotHeld {
                actor: self.actor,
                item,
            });
        }
        Ok(())
    }
}

/// Consumes one charge of a held item and applies its effect to the holder.
///
/// An item reaching zero durability leaves the inventory and the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsumeAction {
    pub actor: EntityId,
    pub item: ItemId,
}

impl ConsumeAction {
    pub fn new(actor: EntityId, item: ItemId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for ConsumeAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _map: &dyn MapOracle) -> Result<(), ActionError> {
        require_living(state, self.actor)?;

        let item = state.entities.item(self.item)?;
        if item.holder() != Some(self.actor) {
            return Err(ActionError::ItemNotHeld {
                actor: self.actor,
                item: self.item,
            });
        }
        if !item.is_consumable() {
            return Err(ActionError::NotConsumable { item: self.item });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _map: &dyn MapOracle,
    ) -> Result<ActionOutcome, ActionError> {
        let item = state.entities.item_mut(self.item)?;
        let Some(effect) = item.properties.on_consume else {
            return Err(ActionError::NotConsumable { item: self.item });
        };

        let mut healed = 0;
        if item.durability > 0 {
            item.durability -= 1;
            match effect {
                ItemEffect::Heal { amount } => {
                    healed = state.entities.actor_mut(self.actor)?.heal(amount);
                }
            }
        }

        let remaining_durability = state.entities.item(self.item)?.durability;
        if remaining_durability == 0 {
            state.entities.discard_item(self.item)?;
        }

        Ok(ActionOutcome::Consumed {
            item: self.item,
            healed,
            remaining_durability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ItemDefinition, ItemProperties, Position};
    use crate::testing::{StubRoom, hero_at};

    fn run<A: ActionTransition>(
        action: &A,
        state: &mut GameState,
    ) -> Result<ActionOutcome, ActionError> {
        let map = StubRoom::new(10, 10);
        action.pre_validate(state, &map)?;
        let outcome = action.apply(state, &map)?;
        action.post_validate(state, &outcome)?;
        Ok(outcome)
    }

    fn hero_holding(definition: &ItemDefinition, hit_points_lost: u32) -> (GameState, ItemId) {
        let mut state = hero_at(Position::new(5, 5));
        let item = state
            .entities
            .add_item(definition, Position::new(5, 5))
            .unwrap();
        state.entities.pick_up(item, EntityId::HERO).unwrap();
        state
            .entities
            .actor_mut(EntityId::HERO)
            .unwrap()
            .take_damage(hit_points_lost);
        (state, item)
    }

    #[test]
    fn pick_up_moves_item_into_inventory() {
        let mut state = hero_at(Position::new(5, 5));
        let potion = state
            .entities
            .add_item(&ItemDefinition::potion(), Position::new(5, 5))
            .unwrap();

        let outcome = run(&PickUpAction::new(EntityId::HERO), &mut state).unwrap();

        assert_eq!(outcome, ActionOutcome::PickedUp { item: potion });
        assert_eq!(state.entities.hero().unwrap().inventory.items(), &[potion]);
        assert_eq!(state.entities.item(potion).unwrap().ground_position(), None);
    }

    #[test]
    fn pick_up_with_nothing_underfoot_changes_nothing() {
        let mut state = hero_at(Position::new(5, 5));
        state
            .entities
            .add_item(&ItemDefinition::potion(), Position::new(6, 6))
            .unwrap();
        let before = state.clone();

        let err = run(&PickUpAction::new(EntityId::HERO), &mut state).unwrap_err();

        assert_eq!(
            err,
            ActionError::NothingToPickUp {
                position: Position::new(5, 5)
            }
        );
        assert_eq!(state.entities.hero().unwrap().inventory.len(), 0);
        assert_eq!(state, before);
    }

    /// Two rules are pinned here: a consumable item applies its effect when
    /// consumed, and every use decrements its durability by one.
    #[test]
    fn consumable_applies_its_effect_and_use_decrements_durability() {
        let (mut state, potion) = hero_holding(&ItemDefinition::potion(), 5);

        let outcome = run(&ConsumeAction::new(EntityId::HERO, potion), &mut state).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Consumed {
                item: potion,
                healed: 3,
                remaining_durability: 2,
            }
        );
        assert_eq!(state.entities.hero().unwrap().hit_points(), 18);
        assert_eq!(state.entities.item(potion).unwrap().durability, 2);
    }

    #[test]
    fn healing_is_capped_at_twenty() {
        let (mut state, potion) = hero_holding(&ItemDefinition::potion(), 1);

        let outcome = run(&ConsumeAction::new(EntityId::HERO, potion), &mut state).unwrap();

        assert!(matches!(outcome, ActionOutcome::Consumed { healed: 1, .. }));
        assert_eq!(state.entities.hero().unwrap().hit_points(), 20);
    }

    #[test]
    fn last_charge_removes_the_item() {
        let (mut state, potion) = hero_holding(&ItemDefinition::potion(), 10);

        for _ in 0..3 {
            run(&ConsumeAction::new(EntityId::HERO, potion), &mut state).unwrap();
        }

        assert!(state.entities.hero().unwrap().inventory.is_empty());
        assert!(state.entities.item(potion).is_err());
        assert_eq!(state.entities.hero().unwrap().hit_points(), 19);
    }

    #[test]
    fn spent_item_is_dropped_without_effect() {
        let empty_flask = ItemDefinition::new(
            "Empty Flask",
            '!',
            0,
            ItemProperties::consumable(ItemEffect::Heal { amount: 5 }),
        )
        .unwrap();
        let (mut state, flask) = hero_holding(&empty_flask, 10);

        let outcome = run(&ConsumeAction::new(EntityId::HERO, flask), &mut state).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Consumed {
                item: flask,
                healed: 0,
                remaining_durability: 0,
            }
        );
        assert_eq!(state.entities.hero().unwrap().hit_points(), 10);
        assert!(state.entities.hero().unwrap().inventory.is_empty());
    }

    #[test]
    fn non_consumable_changes_neither_hit_points_nor_durability() {
        let rock = ItemDefinition::new("Rock", '*', 5, ItemProperties::default()).unwrap();
        let (mut state, rock_id) = hero_holding(&rock, 4);

        let err = run(&ConsumeAction::new(EntityId::HERO, rock_id), &mut state).unwrap_err();

        assert_eq!(err, ActionError::NotConsumable { item: rock_id });
        assert_eq!(state.entities.hero().unwrap().hit_points(), 16);
        assert_eq!(state.entities.item(rock_id).unwrap().durability, 5);
    }

    #[test]
    fn cannot_consume_an_item_lying_on_the_ground() {
        let mut state = hero_at(Position::new(5, 5));
        let potion = state
            .entities
            .add_item(&ItemDefinition::potion(), Position::new(7, 7))
            .unwrap();

        let err = run(&ConsumeAction::new(EntityId::HERO, potion), &mut state).unwrap_err();

        assert_eq!(
            err,
            ActionError::ItemNotHeld {
                actor: EntityId::HERO,
                item: potion,
            }
        );
    }
}
