//! Terminal shell for the dungeon.
//!
//! Implements the runtime's collaborator traits on top of crossterm and
//! ratatui. The binary in `main.rs` is the composition root that wires them
//! into a [`runtime::Runtime`].

pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use config::CliConfig;
pub use input::KeyboardInput;
pub use presentation::{TerminalGuard, TuiRenderer};
