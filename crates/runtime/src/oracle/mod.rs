//! Static map adapters implementing [`game_core::MapOracle`].
mod map;

pub use map::RoomMap;
