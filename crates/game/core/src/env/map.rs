use crate::state::Position;

/// Static map oracle exposing the immutable dungeon layout.
pub trait MapOracle {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: Position) -> Option<StaticTile>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Terrain passability; positions outside the map are never passable.
    fn is_passable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(StaticTile::is_passable)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl MapDimensions {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < self.rows as i32
            && position.col < self.cols as i32
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_passable(self) -> bool {
        self.terrain.is_passable()
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Wall,
    /// Outside any room. Impassable and drawn blank.
    Void,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}
