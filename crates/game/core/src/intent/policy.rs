//! Hostile decision making.

use crate::action::{CardinalDirection, Order};
use crate::config::GameConfig;
use crate::state::{ActorState, EntitiesState, EntityId, Position, Role, StateError};

/// How an actor picks its orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Behavior {
    /// Orders come from player input.
    Controlled,
    /// Chases the hero once it is close enough.
    Aggressive,
    /// Never acts.
    Passive,
}

impl Behavior {
    /// Symbols of hostiles that hunt the hero.
    pub const AGGRESSIVE_SYMBOLS: &'static [char] = &['Z'];

    pub fn of(actor: &ActorState) -> Self {
        match actor.role {
            Role::Hero => Behavior::Controlled,
            Role::Hostile if Self::AGGRESSIVE_SYMBOLS.contains(&actor.symbol) => {
                Behavior::Aggressive
            }
            Role::Hostile => Behavior::Passive,
        }
    }
}

/// Direction that brings `from` closer to `to`.
///
/// The axis with the larger displacement wins; ties go to the column axis.
pub fn toward(from: Position, to: Position) -> CardinalDirection {
    let dx = to.col - from.col;
    let dy = to.row - from.row;

    if dx.abs() >= dy.abs() {
        if dx > 0 {
            CardinalDirection::East
        } else {
            CardinalDirection::West
        }
    } else if dy > 0 {
        CardinalDirection::South
    } else {
        CardinalDirection::North
    }
}

/// Resolves the order of a non-hero actor from current positions alone.
pub fn resolve_hostile(
    entities: &EntitiesState,
    actor: EntityId,
    config: &GameConfig,
) -> Result<Order, StateError> {
    let actor = entities.actor(actor)?;

    match Behavior::of(actor) {
        Behavior::Aggressive => {
            let Ok(hero) = entities.hero() else {
                return Ok(Order::None);
            };
            if actor.position.manhattan(hero.position) < config.aggro_radius {
                Ok(Order::Move(toward(actor.position, hero.position)))
            } else {
                Ok(Order::None)
            }
        }
        Behavior::Controlled | Behavior::Passive => Ok(Order::None),
    }
}
