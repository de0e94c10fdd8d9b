//! Raw hero commands and the fixed key table.

use crate::action::{CardinalDirection, Order};

/// A recognised hero command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    Quit,
    Move(CardinalDirection),
    PickUp,
    Consume,
}

impl Command {
    /// Key table.
    ///
    /// `j` and `k` move along the row axis (`j` increases the row, `k`
    /// decreases it). Keep the mapping as is; players rely on it.
    pub const TABLE: [(char, Command); 7] = [
        ('q', Command::Quit),
        ('h', Command::Move(CardinalDirection::West)),
        ('j', Command::Move(CardinalDirection::South)),
        ('k', Command::Move(CardinalDirection::North)),
        ('l', Command::Move(CardinalDirection::East)),
        ('t', Command::PickUp),
        ('c', Command::Consume),
    ];

    /// Looks `raw` up in [`Command::TABLE`]. Unknown keys yield `None`.
    pub fn parse(raw: char) -> Option<Command> {
        Self::TABLE
            .iter()
            .find(|(key, _)| *key == raw)
            .map(|(_, command)| *command)
    }
}

/// What the hero wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroIntent {
    /// End the session before anyone acts.
    Quit,
    /// Act with this order.
    Act(Order),
    /// Consume something, but the inventory slot is still to be chosen.
    ChooseItem,
}

/// Resolves a raw key into the hero's intent. Unknown keys resolve to doing nothing.
pub fn resolve_hero(raw: char) -> HeroIntent {
    match Command::parse(raw) {
        Some(Command::Quit) => HeroIntent::Quit,
        Some(Command::Move(direction)) => HeroIntent::Act(Order::Move(direction)),
        Some(Command::PickUp) => HeroIntent::Act(Order::PickUp),
        Some(Command::Consume) => HeroIntent::ChooseItem,
        None => HeroIntent::Act(Order::None),
    }
}
