//! Order domain: what an actor attempts on its turn and how it is applied.
//!
//! # Module Structure
//!
//! - `error`: [`ActionError`] and its severity classification
//! - `movement`: walking, including bump attacks into occupied cells
//! - `combat`: melee attacks
//! - `inventory`: picking up and consuming items
//!
//! Every concrete action implements [`ActionTransition`]; the engine runs the
//! three phases in order and tags failures with the phase that produced them.

pub mod combat;
pub mod error;
pub mod inventory;
pub mod movement;

pub use combat::AttackAction;
pub use error::ActionError;
pub use inventory::{ConsumeAction, PickUpAction};
pub use movement::MoveAction;

use crate::env::MapOracle;
use crate::state::{EntityId, GameState, ItemId, Position};

/// Per-turn intent of a single actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Order {
    /// Do nothing this turn.
    #[default]
    None,
    Move(CardinalDirection),
    PickUp,
    ConsumeItem(ItemId),
}

impl Order {
    pub fn is_none(&self) -> bool {
        matches!(self, Order::None)
    }

    /// Materialises the order into the action the engine executes.
    pub fn into_action(self, actor: EntityId) -> Option<Action> {
        match self {
            Order::None => None,
            Order::Move(direction) => Some(Action::Move(MoveAction::new(actor, direction))),
            Order::PickUp => Some(Action::PickUp(PickUpAction::new(actor))),
            Order::ConsumeItem(item) => Some(Action::Consume(ConsumeAction::new(actor, item))),
        }
    }
}

/// Grid direction. Rows grow downwards, columns grow to the right.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    /// Row decreases.
    North,
    /// Row increases.
    South,
    /// Column increases.
    East,
    /// Column decreases.
    West,
}

impl CardinalDirection {
    /// `(d_row, d_col)` for one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (-1, 0),
            CardinalDirection::South => (1, 0),
            CardinalDirection::East => (0, 1),
            CardinalDirection::West => (0, -1),
        }
    }

    pub fn step_from(self, origin: Position) -> Position {
        let (d_row, d_col) = self.delta();
        origin.offset(d_row, d_col)
    }
}

/// What an executed action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// No order, or an attack on nothing.
    Idle,
    Moved {
        from: Position,
        to: Position,
    },
    Attacked {
        target: EntityId,
        damage: u32,
        remaining_hit_points: u32,
    },
    PickedUp {
        item: ItemId,
    },
    Consumed {
        item: ItemId,
        healed: u32,
        /// Zero means the item was used up and removed.
        remaining_durability: u32,
    },
}

impl ActionOutcome {
    /// True when this outcome brought its target to zero hit points.
    pub fn is_kill(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Attacked {
                remaining_hit_points: 0,
                ..
            }
        )
    }
}

/// Defines how a concrete action mutates game state.
pub trait ActionTransition {
    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _map: &dyn MapOracle) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        map: &dyn MapOracle,
    ) -> Result<ActionOutcome, ActionError>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(
        &self,
        _state: &GameState,
        _outcome: &ActionOutcome,
    ) -> Result<(), ActionError> {
        Ok(())
    }
}

/// Concrete action variants produced from orders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move(MoveAction),
    Attack(AttackAction),
    PickUp(PickUpAction),
    Consume(ConsumeAction),
}

impl Action {
    /// Turns a move into an occupied cell into an attack on the occupant.
    pub fn resolve(self, state: &GameState, map: &dyn MapOracle) -> Action {
        match self {
            Action::Move(movement) => match movement.bump_target(state, map) {
                Some(target) => Action::Attack(AttackAction::new(movement.actor, Some(target))),
                None => Action::Move(movement),
            },
            other => other,
        }
    }

    pub fn as_transition(&self) -> &dyn ActionTransition {
        match self {
            Action::Move(action) => action,
            Action::Attack(action) => action,
            Action::PickUp(action) => action,
            Action::Consume(action) => action,
        }
    }

    /// Returns the snake_case name of the action, used in logs.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Attack(_) => "attack",
            Action::PickUp(_) => "pick_up",
            Action::Consume(_) => "consume",
        }
    }
}

/// Fails with [`ActionError::ActorDead`] unless `actor` exists and is alive.
pub(crate) fn require_living(state: &GameState, actor: EntityId) -> Result<(), ActionError> {
    if state.entities.actor(actor)?.is_alive() {
        Ok(())
    } else {
        Err(ActionError::ActorDead(actor))
    }
}
