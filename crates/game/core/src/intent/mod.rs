//! Intent resolution: turning input and AI policy into orders.
//!
//! Both paths are pure functions of the current state. The hero's raw key is
//! looked up in a fixed table ([`Command::TABLE`]); hostiles follow
//! [`Behavior`]-specific policies.

mod command;
mod policy;

pub use command::{Command, HeroIntent, resolve_hero};
pub use policy::{Behavior, resolve_hostile, toward};

use crate::action::Order;
use crate::state::{EntitiesState, EntityId, StateError};

/// Turns the key pressed after a consume command into an order.
///
/// Digits select an inventory slot; anything else, or an empty slot, cancels.
pub fn select_item(
    entities: &EntitiesState,
    actor: EntityId,
    raw: char,
) -> Result<Order, StateError> {
    let inventory = &entities.actor(actor)?.inventory;

    Ok(raw
        .to_digit(10)
        .and_then(|slot| inventory.slot(slot as usize))
        .map_or(Order::None, Order::ConsumeItem))
}
