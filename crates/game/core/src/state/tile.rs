//! Tile classification.
//!
//! Answers "what is in this cell" from the entity store and the static map.
//! Movement and bump attacks consult this before doing anything.

use crate::env::MapOracle;
use crate::state::{EntitiesState, Position};

/// Semantic category of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TileKind {
    Empty,
    Item,
    Obstacle,
    Actor,
}

/// Classifies `position`.
///
/// Precedence: impassable or out-of-bounds terrain, then an actor (a dead one
/// still counts until cleanup), then a ground item.
pub fn classify<M>(entities: &EntitiesState, map: &M, position: Position) -> TileKind
where
    M: MapOracle + ?Sized,
{
    if !map.is_passable(position) {
        TileKind::Obstacle
    } else if entities.actor_at(position).is_some() {
        TileKind::Actor
    } else if entities.item_at(position).is_some() {
        TileKind::Item
    } else {
        TileKind::Empty
    }
}
