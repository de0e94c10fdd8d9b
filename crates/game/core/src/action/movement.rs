use crate::action::{
    ActionError, ActionOutcome, ActionTransition, AttackAction, CardinalDirection, require_living,
};
use crate::env::MapOracle;
use crate::state::{EntityId, GameState, Position, TileKind};

/// One step in a cardinal direction.
///
/// Walking into another actor attacks it instead of moving. Walking onto an
/// item moves without picking it up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: EntityId,
    pub direction: CardinalDirection,
}

impl MoveAction {
    pub fn new(actor: EntityId, direction: CardinalDirection) -> Self {
        Self { actor, direction }
    }

    fn destination(&self, state: &GameState) -> Result<Position, ActionError> {
        let origin = state.entities.actor(self.actor)?.position;
        Ok(self.direction.step_from(origin))
    }

    /// The actor standing on the destination cell, if any.
    pub fn bump_target(&self, state: &GameState, map: &dyn MapOracle) -> Option<EntityId> {
        let destination = self.destination(state).ok()?;
        match state.classify(map, destination) {
            TileKind::Actor => state.entities.actor_at(destination).map(|actor| actor.id),
            TileKind::Empty | TileKind::Item | TileKind::Obstacle => None,
        }
    }
}

impl ActionTransition for MoveAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, map: &dyn MapOracle) -> Result<(), ActionError> {
        require_living(state, self.actor)?;

        let destination = self.destination(state)?;
        if state.classify(map, destination) == TileKind::Obstacle {
            return Err(ActionError::Blocked { destination });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        map: &dyn MapOracle,
    ) -> Result<ActionOutcome, ActionError> {
        let destination = self.destination(state)?;

        match state.classify(map, destination) {
            TileKind::Empty | TileKind::Item => {
                let actor = state.entities.actor_mut(self.actor)?;
                let from = actor.position;
                actor.position = destination;
                Ok(ActionOutcome::Moved {
                    from,
                    to: destination,
                })
            }
            TileKind::Actor => {
                let target = state.entities.actor_at(destination).map(|actor| actor.id);
                AttackAction::new(self.actor, target).apply(state, map)
            }
            TileKind::Obstacle => Err(ActionError::Blocked { destination }),
        }
    }

    fn post_validate(
        &self,
        state: &GameState,
        outcome: &ActionOutcome,
    ) -> Result<(), ActionError> {
        let ActionOutcome::Moved { to, .. } = *outcome else {
            return Ok(());
        };

        match state
            .entities
            .actors()
            .find(|actor| actor.position == to && actor.id != self.actor)
        {
            Some(other) => Err(ActionError::OccupancyDesync {
                position: to,
                first: self.actor,
                second: other.id,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorTemplate, ItemDefinition};
    use crate::testing::{StubRoom, hero_at};

    fn run(action: &MoveAction, state: &mut GameState) -> Result<ActionOutcome, ActionError> {
        let map = StubRoom::new(10, 10);
        action.pre_validate(state, &map)?;
        let outcome = action.apply(state, &map)?;
        action.post_validate(state, &outcome)?;
        Ok(outcome)
    }

    #[test]
    fn moves_into_empty_cell() {
        let mut state = hero_at(Position::new(5, 5));
        let outcome = run(
            &MoveAction::new(EntityId::HERO, CardinalDirection::East),
            &mut state,
        )
        .expect("move should succeed");

        assert_eq!(
            outcome,
            ActionOutcome::Moved {
                from: Position::new(5, 5),
                to: Position::new(5, 6),
            }
        );
        assert_eq!(state.entities.hero().unwrap().position, Position::new(5, 6));
    }

    #[test]
    fn each_direction_steps_along_its_axis() {
        let cases = [
            (CardinalDirection::North, Position::new(4, 5)),
            (CardinalDirection::South, Position::new(6, 5)),
            (CardinalDirection::East, Position::new(5, 6)),
            (CardinalDirection::West, Position::new(5, 4)),
        ];
        for (direction, expected) in cases {
            let mut state = hero_at(Position::new(5, 5));
            run(&MoveAction::new(EntityId::HERO, direction), &mut state).unwrap();
            assert_eq!(state.entities.hero().unwrap().position, expected, "{direction}");
        }
    }

    #[test]
    fn wall_blocks_without_moving() {
        let mut state = hero_at(Position::new(1, 1));
        let err = run(
            &MoveAction::new(EntityId::HERO, CardinalDirection::North),
            &mut state,
        )
        .expect_err("wall should block");

        assert_eq!(
            err,
            ActionError::Blocked {
                destination: Position::new(0, 1)
            }
        );
        assert_eq!(state.entities.hero().unwrap().position, Position::new(1, 1));
    }

    #[test]
    fn walking_onto_an_item_does_not_pick_it_up() {
        let mut state = hero_at(Position::new(5, 5));
        let potion = state
            .entities
            .add_item(&ItemDefinition::potion(), Position::new(6, 5))
            .unwrap();

        run(
            &MoveAction::new(EntityId::HERO, CardinalDirection::South),
            &mut state,
        )
        .unwrap();

        let hero = state.entities.hero().unwrap();
        assert_eq!(hero.position, Position::new(6, 5));
        assert!(hero.inventory.is_empty());
        assert_eq!(
            state.entities.item(potion).unwrap().ground_position(),
            Some(Position::new(6, 5))
        );
    }

    #[test]
    fn bumping_an_actor_attacks_instead_of_moving() {
        let mut state = hero_at(Position::new(5, 5));
        let zombie = state
            .entities
            .add_actor(&ActorTemplate::hostile('Z', 4, 1), Position::new(5, 6))
            .unwrap();

        let outcome = run(
            &MoveAction::new(EntityId::HERO, CardinalDirection::East),
            &mut state,
        )
        .unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Attacked {
                target: zombie,
                damage: 2,
                remaining_hit_points: 2,
            }
        );
        assert_eq!(state.entities.hero().unwrap().position, Position::new(5, 5));
        assert_eq!(state.entities.actor(zombie).unwrap().position, Position::new(5, 6));
    }

    #[test]
    fn dead_actor_cannot_move() {
        let mut state = hero_at(Position::new(5, 5));
        let zombie = state
            .entities
            .add_actor(&ActorTemplate::hostile('Z', 4, 1), Position::new(3, 3))
            .unwrap();
        state.entities.actor_mut(zombie).unwrap().take_damage(4);

        let err = run(&MoveAction::new(zombie, CardinalDirection::East), &mut state)
            .expect_err("dead actors do not act");
        assert_eq!(err, ActionError::ActorDead(zombie));
    }
}
