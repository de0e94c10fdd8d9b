//! Read-only environment consulted by the simulation.
//!
//! The static layout (walls, floor) is supplied through [`MapOracle`] so the
//! engine never reads terrain from a rendered buffer.
mod map;

pub use map::{MapDimensions, MapOracle, StaticTile, TerrainKind};
