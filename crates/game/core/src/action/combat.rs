use crate::action::{ActionError, ActionOutcome, ActionTransition, require_living};
use crate::env::MapOracle;
use crate::state::{EntityId, GameState};

/// Melee attack. A missing target makes this a no-op.
///
/// Death is only marked here (hit points reach zero); the body stays on the
/// grid until the turn's cleanup removes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackAction {
    pub actor: EntityId,
    pub target: Option<EntityId>,
}

impl AttackAction {
    pub fn new(actor: EntityId, target: Option<EntityId>) -> Self {
        Self { actor, target }
    }
}

impl ActionTransition for AttackAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _map: &dyn MapOracle) -> Result<(), ActionError> {
        require_living(state, self.actor)
    }

    fn apply(
        &self,
        state: &mut GameState,
        _map: &dyn MapOracle,
    ) -> Result<ActionOutcome, ActionError> {
        let damage = state.entities.actor(self.actor)?.damage;

        let Some(target) = self
            .target
            .and_then(|id| state.entities.actor_mut(id).ok())
        else {
            return Ok(ActionOutcome::Idle);
        };

        let remaining_hit_points = target.take_damage(damage);
        Ok(ActionOutcome::Attacked {
            target: target.id,
            damage,
            remaining_hit_points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorTemplate, Position};
    use crate::testing::{StubRoom, hero_at};

    #[test]
    fn four_hits_of_one_leave_the_hero_at_sixteen() {
        let mut state = hero_at(Position::new(5, 5));
        let zombie = state
            .entities
            .add_actor(&ActorTemplate::hostile('Z', 4, 1), Position::new(5, 6))
            .unwrap();
        let map = StubRoom::new(10, 10);
        let attack = AttackAction::new(zombie, Some(EntityId::HERO));

        for _ in 0..4 {
            attack.apply(&mut state, &map).unwrap();
        }

        let hero = state.entities.hero().unwrap();
        assert_eq!(hero.hit_points(), 16);
        assert!(hero.is_alive());
    }

    #[test]
    fn lethal_hit_floors_at_zero_and_keeps_the_body() {
        let mut state = hero_at(Position::new(5, 5));
        let zombie = state
            .entities
            .add_actor(&ActorTemplate::hostile('Z', 4, 1), Position::new(5, 6))
            .unwrap();
        state.entities.actor_mut(EntityId::HERO).unwrap().damage = 4;

        let outcome = AttackAction::new(EntityId::HERO, Some(zombie))
            .apply(&mut state, &StubRoom::new(10, 10))
            .unwrap();

        assert!(outcome.is_kill());
        let body = state.entities.actor(zombie).unwrap();
        assert_eq!(body.hit_points(), 0);
        assert!(!body.is_alive());
    }

    #[test]
    fn overkill_does_not_underflow() {
        let mut state = hero_at(Position::new(5, 5));
        let zombie = state
            .entities
            .add_actor(&ActorTemplate::hostile('Z', 1, 1), Position::new(5, 6))
            .unwrap();

        AttackAction::new(EntityId::HERO, Some(zombie))
            .apply(&mut state, &StubRoom::new(10, 10))
            .unwrap();

        assert_eq!(state.entities.actor(zombie).unwrap().hit_points(), 0);
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let mut state = hero_at(Position::new(5, 5));
        let before = state.clone();
        let map = StubRoom::new(10, 10);

        assert_eq!(
            AttackAction::new(EntityId::HERO, None).apply(&mut state, &map),
            Ok(ActionOutcome::Idle)
        );
        assert_eq!(
            AttackAction::new(EntityId::HERO, Some(EntityId(42))).apply(&mut state, &map),
            Ok(ActionOutcome::Idle)
        );
        assert_eq!(state, before);
    }
}
