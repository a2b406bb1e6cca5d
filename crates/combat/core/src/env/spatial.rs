use std::collections::HashSet;

use crate::state::Position;

/// Read-only view of tile geometry.
///
/// The wave optimizer consults this when scanning candidate caster tiles;
/// everything else the engine needs about the world arrives in the per-tick
/// snapshot.
pub trait SpatialOracle {
    /// Returns true if the player could stand on the given tile.
    fn is_walkable(&self, position: Position) -> bool;
}

/// Spatial oracle with no obstacles; every tile is walkable.
///
/// The usual choice in unit tests and offline evaluation.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenField;

impl SpatialOracle for OpenField {
    fn is_walkable(&self, _position: Position) -> bool {
        true
    }
}

/// Spatial oracle backed by an explicit set of blocked tiles.
#[derive(Clone, Debug, Default)]
pub struct TileSet {
    blocked: HashSet<Position>,
}

impl TileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks tiles as blocked (builder pattern).
    #[must_use]
    pub fn with_blocked(mut self, tiles: impl IntoIterator<Item = Position>) -> Self {
        self.blocked.extend(tiles);
        self
    }

    pub fn block(&mut self, tile: Position) {
        self.blocked.insert(tile);
    }
}

impl SpatialOracle for TileSet {
    fn is_walkable(&self, position: Position) -> bool {
        !self.blocked.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_set_blocks_listed_tiles() {
        let map = TileSet::new().with_blocked([Position::new(1, 1, 0)]);
        assert!(!map.is_walkable(Position::new(1, 1, 0)));
        assert!(map.is_walkable(Position::new(1, 2, 0)));
        // Floors are distinct tiles.
        assert!(map.is_walkable(Position::new(1, 1, 1)));
    }
}
