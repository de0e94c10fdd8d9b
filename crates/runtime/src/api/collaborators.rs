//! Abstractions over the I/O shell.
//!
//! The runtime never touches a terminal. It reads raw hero commands from a
//! [`CommandSource`] and pushes read-only projections to a [`Renderer`], so the
//! simulation can run with a real terminal, scripted fixtures, or nothing at all.
use std::io;

use game_core::{InventoryEntry, Snapshot};

/// Source of raw hero commands.
pub trait CommandSource {
    /// Blocks until the next raw command is available.
    fn next_command(&mut self) -> io::Result<char>;

    /// Waits for the player to dismiss a message. Any key counts.
    fn acknowledge(&mut self) -> io::Result<()> {
        self.next_command().map(|_| ())
    }
}

/// Receiver of everything the player may see.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;

    /// Lists the hero's inventory while a consume selection is pending.
    fn show_inventory(&mut self, entries: &[InventoryEntry]) -> io::Result<()>;

    /// Shows an end-of-session screen. The runtime reads one acknowledgment afterwards.
    fn show_outcome(&mut self, outcome: Outcome) -> io::Result<()>;
}

/// Why the session is ending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// The player asked to leave.
    Quit,
    /// The hero died.
    Lost,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Quit => "Leaving the dungeon. Press any key to exit!",
            Outcome::Lost => "You Lost! Press any key to exit the game!",
        }
    }
}
