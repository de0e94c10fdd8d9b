//! Order execution pipeline and turn bookkeeping.
//!
//! The [`GameEngine`] is the only writer of [`GameState`] during play. Every
//! order goes through the same three phases (pre_validate → apply →
//! post_validate), and failures are tagged with the phase that produced them.
//! Sequencing actors, rendering and logging belong to the runtime.

mod errors;
mod status;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use status::{GameStatus, StatusError};
pub use turns::CleanupReport;

use crate::action::{ActionError, ActionOutcome, ActionTransition, Order};
use crate::env::MapOracle;
use crate::state::{EntityId, GameState};

/// Game engine borrowing the session state for one step.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Runs `order` for `actor` and clears the actor's pending order.
    ///
    /// The order is cleared whether or not the action succeeded.
    /// `Order::None` is an idle turn and never fails.
    pub fn execute(
        &mut self,
        map: &dyn MapOracle,
        actor: EntityId,
        order: Order,
    ) -> Result<ActionOutcome, ExecuteError> {
        self.state.entities.actor_mut(actor)?.order = order;

        let action = order
            .into_action(actor)
            .map(|action| action.resolve(&*self.state, map));
        let result = match action {
            None => Ok(ActionOutcome::Idle),
            Some(action) => drive_transition(action.as_transition(), self.state, map).map_err(
                |source| ExecuteError::Action {
                    action: action.as_snake_case(),
                    source,
                },
            ),
        };

        self.state.entities.actor_mut(actor)?.order = Order::None;
        result
    }
}

#[inline]
fn drive_transition(
    transition: &dyn ActionTransition,
    state: &mut GameState,
    map: &dyn MapOracle,
) -> Result<ActionOutcome, TransitionPhaseError<ActionError>> {
    transition
        .pre_validate(state, map)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let outcome = transition
        .apply(state, map)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, &outcome)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::CardinalDirection;
    use crate::config::GameConfig;
    use crate::error::{ErrorSeverity, GameError};
    use crate::state::{ActorTemplate, Position, StateError};
    use crate::testing::{StubRoom, hero_at};
    use proptest::prelude::*;

    #[test]
    fn executes_and_clears_the_order() {
        let map = StubRoom::new(6, 6);
        let mut state = hero_at(Position::new(2, 2));
        let mut engine = GameEngine::new(&mut state);

        let outcome = engine
            .execute(&map, EntityId::HERO, Order::Move(CardinalDirection::South))
            .unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Moved {
                from: Position::new(2, 2),
                to: Position::new(3, 2),
            }
        );
        assert!(state.entities.hero().unwrap().order.is_none());
    }

    #[test]
    fn no_order_is_idle() {
        let map = StubRoom::new(6, 6);
        let mut state = hero_at(Position::new(2, 2));
        let before = state.clone();

        let outcome = GameEngine::new(&mut state)
            .execute(&map, EntityId::HERO, Order::None)
            .unwrap();

        assert_eq!(outcome, ActionOutcome::Idle);
        assert_eq!(state, before);
    }

    #[test]
    fn blocked_move_is_tagged_and_recoverable() {
        let map = StubRoom::new(6, 6);
        let mut state = hero_at(Position::new(1, 1));

        let error = GameEngine::new(&mut state)
            .execute(&map, EntityId::HERO, Order::Move(CardinalDirection::North))
            .unwrap_err();

        assert_eq!(error.phase(), Some(TransitionPhase::PreValidate));
        assert!(matches!(
            error.action_error(),
            Some(ActionError::Blocked { .. })
        ));
        assert_eq!(error.severity(), ErrorSeverity::Recoverable);
        assert_eq!(state.entities.hero().unwrap().position, Position::new(1, 1));
        assert!(state.entities.hero().unwrap().order.is_none());
    }

    #[test]
    fn unknown_actor_is_fatal() {
        let map = StubRoom::new(6, 6);
        let mut state = hero_at(Position::new(1, 1));

        let error = GameEngine::new(&mut state)
            .execute(&map, EntityId(7), Order::PickUp)
            .unwrap_err();

        assert_eq!(error, ExecuteError::State(StateError::ActorNotFound(EntityId(7))));
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn bump_is_dispatched_as_an_attack() {
        let map = StubRoom::new(6, 6);
        let mut state = hero_at(Position::new(2, 2));
        let zombie = state
            .entities
            .add_actor(&ActorTemplate::hostile('Z', 4, 1), Position::new(2, 3))
            .unwrap();
        state
            .entities
            .actor_mut(EntityId::HERO)
            .unwrap()
            .take_damage(20);

        let error = GameEngine::new(&mut state)
            .execute(&map, EntityId::HERO, Order::Move(CardinalDirection::East))
            .unwrap_err();

        assert!(matches!(
            error,
            ExecuteError::Action {
                action: "attack",
                ..
            }
        ));
        assert!(matches!(
            error.action_error(),
            Some(ActionError::ActorDead(EntityId::HERO))
        ));
        assert_eq!(error.phase(), Some(TransitionPhase::PreValidate));
        assert_eq!(state.entities.actor(zombie).unwrap().hit_points(), 4);
    }

    #[test]
    fn killed_hostile_is_removed_at_cleanup() {
        let map = StubRoom::new(6, 6);
        let mut state = GameState::empty();
        state
            .entities
            .add_actor(&ActorTemplate::hero(20, 4), Position::new(2, 2))
            .unwrap();
        let zombie = state
            .entities
            .add_actor(&ActorTemplate::hostile('Z', 4, 1), Position::new(2, 3))
            .unwrap();
        let rat = state
            .entities
            .add_actor(&ActorTemplate::hostile('r', 2, 1), Position::new(4, 4))
            .unwrap();

        let mut engine = GameEngine::new(&mut state);
        let outcome = engine
            .execute(&map, EntityId::HERO, Order::Move(CardinalDirection::East))
            .unwrap();
        assert!(outcome.is_kill());
        assert!(!engine.is_alive(zombie));
        assert_eq!(engine.turn_order(), vec![EntityId::HERO, rat]);

        let report = engine.cleanup().unwrap();
        assert_eq!(
            report,
            CleanupReport {
                hero_dead: false,
                removed: vec![zombie],
            }
        );

        assert_eq!(
            state.entities.actor(zombie),
            Err(StateError::ActorNotFound(zombie))
        );
        assert_eq!(state.entities.hero().unwrap().id, EntityId::HERO);
        assert_eq!(state.entities.actor(rat).unwrap().id, rat);
    }

    #[test]
    fn dead_hero_is_reported_not_removed() {
        let map = StubRoom::new(6, 6);
        let mut state = GameState::empty();
        state
            .entities
            .add_actor(&ActorTemplate::hero(1, 2), Position::new(2, 2))
            .unwrap();
        let brute = state
            .entities
            .add_actor(&ActorTemplate::hostile('Z', 4, 5), Position::new(2, 3))
            .unwrap();

        let mut engine = GameEngine::new(&mut state);
        engine
            .execute(&map, brute, Order::Move(CardinalDirection::West))
            .unwrap();
        let report = engine.cleanup().unwrap();

        assert!(report.hero_dead);
        assert!(report.removed.is_empty());
        assert_eq!(state.entities.hero().unwrap().hit_points(), 0);
    }

    #[derive(Clone, Debug)]
    enum Step {
        Hit(u32),
        Drink,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![(0u32..40).prop_map(Step::Hit), Just(Step::Drink)]
    }

    proptest! {
        #[test]
        fn hit_points_stay_in_range(
            start in 0u32..40,
            steps in proptest::collection::vec(step(), 0..40),
        ) {
            let map = StubRoom::new(8, 8);
            let mut state = GameState::empty();
            state
                .entities
                .add_actor(&ActorTemplate::hero(start, 2), Position::new(3, 3))
                .unwrap();

            for step in steps {
                match step {
                    Step::Hit(damage) => {
                        let pos = Position::new(3, 4);
                        let id = state
                            .entities
                            .add_actor(&ActorTemplate::hostile('Z', 4, damage), pos)
                            .unwrap();
                        let _ = GameEngine::new(&mut state).execute(
                            &map,
                            id,
                            Order::Move(CardinalDirection::West),
                        );
                        state.entities.remove_actor(id).unwrap();
                    }
                    Step::Drink => {
                        let potion = state
                            .entities
                            .add_item(&crate::state::ItemDefinition::potion(), Position::new(3, 3))
                            .unwrap();
                        state.entities.pick_up(potion, EntityId::HERO).unwrap();
                        let _ = GameEngine::new(&mut state).execute(
                            &map,
                            EntityId::HERO,
                            Order::ConsumeItem(potion),
                        );
                        let _ = state.entities.discard_item(potion);
                    }
                }

                let hp = state.entities.hero().unwrap().hit_points();
                prop_assert!(hp <= GameConfig::MAX_HIT_POINTS);
            }
        }
    }
}
