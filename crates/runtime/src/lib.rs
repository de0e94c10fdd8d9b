//! Runtime orchestration for the dungeon simulation.
//!
//! This crate drives `game-core` turn by turn: it asks the input collaborator
//! for the hero's command, resolves and executes every actor's order through
//! [`game_core::GameEngine`], runs cleanup, and hands snapshots to the render
//! collaborator. Consumers embed [`Runtime`] and plug in their own
//! [`CommandSource`] and [`Renderer`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the turn driver, its builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`providers`] turns raw input into hero orders
//! - [`oracle`] and [`scenario`] provide the level the session starts from
pub mod api;
pub mod oracle;
pub mod providers;
pub mod runtime;
pub mod scenario;

pub use api::{CollaboratorKind, CommandSource, Outcome, Renderer, Result, RuntimeError};
pub use oracle::RoomMap;
pub use providers::HeroProvider;
pub use runtime::{RenderCadence, Runtime, RuntimeBuilder, RuntimeConfig};
pub use scenario::{ActorPlacement, ItemPlacement, Scenario, ScenarioError};
