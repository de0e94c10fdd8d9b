//! Sources of actor orders that need I/O.
//!
//! Hostile orders are pure and come straight from
//! [`game_core::resolve_hostile`]; only the hero needs a provider because its
//! orders come from the player.
pub mod hero;

pub use hero::HeroProvider;
