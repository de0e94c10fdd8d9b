use crate::state::{EntityId, StateError};

use super::GameEngine;

/// What [`GameEngine::cleanup`] did at the end of a turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// The hero is at zero hit points. The hero itself is never removed.
    pub hero_dead: bool,
    /// Dead non-hero actors taken out of the store, ascending by id.
    pub removed: Vec<EntityId>,
}

/// Turn bookkeeping for GameEngine.
impl GameEngine<'_> {
    /// Living actors at the start of the turn, hero first then creation order.
    ///
    /// Callers still check [`GameEngine::is_alive`] before each actor acts,
    /// since earlier actors may kill later ones.
    pub fn turn_order(&self) -> Vec<EntityId> {
        self.state.entities.alive_actors().collect()
    }

    pub fn is_alive(&self, actor: EntityId) -> bool {
        self.state
            .entities
            .actor(actor)
            .is_ok_and(|state| state.is_alive())
    }

    /// Removes dead hostiles and reports whether the hero died.
    pub fn cleanup(&mut self) -> Result<CleanupReport, StateError> {
        let dead: Vec<EntityId> = self
            .state
            .entities
            .actors()
            .filter(|actor| !actor.is_alive())
            .map(|actor| actor.id)
            .collect();

        let mut report = CleanupReport::default();
        for id in dead {
            if id.is_hero() {
                report.hero_dead = true;
            } else {
                self.state.entities.remove_actor(id)?;
                report.removed.push(id);
            }
        }
        Ok(report)
    }
}
