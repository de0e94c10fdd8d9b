//! Shared fixtures for unit tests.

use crate::env::{MapDimensions, MapOracle, StaticTile, TerrainKind};
use crate::state::{ActorTemplate, EntityId, GameState, Position};

/// Rectangular room whose outermost ring is wall.
#[derive(Debug)]
pub(crate) struct StubRoom {
    dimensions: MapDimensions,
}

impl StubRoom {
    pub(crate) fn new(rows: u32, cols: u32) -> Self {
        Self {
            dimensions: MapDimensions::new(rows, cols),
        }
    }
}

impl MapOracle for StubRoom {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        if !self.dimensions.contains(position) {
            return None;
        }
        let last_row = self.dimensions.rows as i32 - 1;
        let last_col = self.dimensions.cols as i32 - 1;
        let edge = position.row == 0
            || position.col == 0
            || position.row == last_row
            || position.col == last_col;
        Some(StaticTile::new(if edge {
            TerrainKind::Wall
        } else {
            TerrainKind::Floor
        }))
    }
}

/// State holding only a full-health hero (damage 2) at `position`.
pub(crate) fn hero_at(position: Position) -> GameState {
    let mut state = GameState::empty();
    let id = state
        .entities
        .add_actor(&ActorTemplate::hero(20, 2), position)
        .expect("empty store accepts a hero");
    assert_eq!(id, EntityId::HERO);
    state
}
