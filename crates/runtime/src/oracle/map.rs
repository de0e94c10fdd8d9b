//! Static dungeon layout served through [`game_core::MapOracle`].
use game_core::{MapDimensions, MapOracle, Position, StaticTile, TerrainKind};
use serde::{Deserialize, Serialize};

/// A single rectangular room on an otherwise empty grid.
///
/// Cells on the room's border are walls, cells strictly inside are floor, and
/// everything else on the grid is void.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMap {
    pub dimensions: MapDimensions,
    /// Top-left wall corner.
    pub top_left: Position,
    /// Bottom-right wall corner, inclusive.
    pub bottom_right: Position,
}

impl RoomMap {
    pub fn new(dimensions: MapDimensions, top_left: Position, bottom_right: Position) -> Self {
        Self {
            dimensions,
            top_left,
            bottom_right,
        }
    }

    /// The classic level: a 15×40 room (rows 5..=19, cols 15..=54) on a 25×80 grid.
    pub fn default_room() -> Self {
        Self::new(
            MapDimensions::new(25, 80),
            Position::new(5, 15),
            Position::new(19, 54),
        )
    }

    /// Floor cells, row-major.
    pub fn interior(&self) -> impl Iterator<Item = Position> + '_ {
        let rows = (self.top_left.row + 1)..self.bottom_right.row;
        rows.flat_map(move |row| {
            ((self.top_left.col + 1)..self.bottom_right.col).map(move |col| Position::new(row, col))
        })
        .filter(|position| self.dimensions.contains(*position))
    }

    fn terrain(&self, position: Position) -> TerrainKind {
        let Position { row, col } = position;
        let (top, left) = (self.top_left.row, self.top_left.col);
        let (bottom, right) = (self.bottom_right.row, self.bottom_right.col);

        if row < top || row > bottom || col < left || col > right {
            TerrainKind::Void
        } else if row == top || row == bottom || col == left || col == right {
            TerrainKind::Wall
        } else {
            TerrainKind::Floor
        }
    }
}

impl Default for RoomMap {
    fn default() -> Self {
        Self::default_room()
    }
}

impl MapOracle for RoomMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.dimensions
            .contains(position)
            .then(|| StaticTile::new(self.terrain(position)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_room_layout() {
        let map = RoomMap::default_room();

        assert_eq!(map.tile(Position::new(5, 15)), Some(StaticTile::new(TerrainKind::Wall)));
        assert_eq!(map.tile(Position::new(19, 54)), Some(StaticTile::new(TerrainKind::Wall)));
        assert_eq!(map.tile(Position::new(12, 54)), Some(StaticTile::new(TerrainKind::Wall)));
        assert_eq!(map.tile(Position::new(15, 20)), Some(StaticTile::new(TerrainKind::Floor)));
        assert_eq!(map.tile(Position::new(0, 0)), Some(StaticTile::new(TerrainKind::Void)));
        assert_eq!(map.tile(Position::new(25, 0)), None);
        assert!(!map.is_passable(Position::new(-1, 20)));
    }

    #[test]
    fn interior_is_all_floor() {
        let map = RoomMap::default_room();
        let cells: Vec<_> = map.interior().collect();

        assert_eq!(cells.len(), 13 * 38);
        assert!(cells.iter().all(|cell| map.is_passable(*cell)));
        assert_eq!(cells.first(), Some(&Position::new(6, 16)));
        assert_eq!(cells.last(), Some(&Position::new(18, 53)));
    }
}
