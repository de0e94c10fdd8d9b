//! Terminal presentation: setup/teardown and the ratatui renderer.
mod terminal;
mod theme;
mod ui;

pub use terminal::{TerminalGuard, Tui};
pub use ui::TuiRenderer;
