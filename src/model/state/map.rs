//! The hex-to-tile world map and the generator-facing input triple.

use crate::model::error::WorldError;
use crate::model::hex::{Hex, HexDirection};
use crate::model::state::biome::Biome;
use crate::model::state::tile::Tile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What the terrain producer hands the simulation: one value per hex in
/// each map, all three keyed identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldData {
    pub heights: HashMap<Hex, f32>,
    pub biomes: HashMap<Hex, Biome>,
    pub water_distance: HashMap<Hex, f32>,
}

impl WorldData {
    /// Refuse inconsistent input: every map must cover exactly the same
    /// coordinates, and there must be at least one tile.
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.heights.is_empty() {
            return Err(WorldError::EmptyWorld);
        }
        if self.biomes.len() != self.heights.len()
            || !self.heights.keys().all(|h| self.biomes.contains_key(h))
        {
            return Err(WorldError::InconsistentMaps("biome map"));
        }
        if self.water_distance.len() != self.heights.len()
            || !self
                .heights
                .keys()
                .all(|h| self.water_distance.contains_key(h))
        {
            return Err(WorldError::InconsistentMaps("water-distance map"));
        }
        Ok(())
    }

    /// Coordinates in deterministic (row, column) order, so any RNG draws
    /// made while building tiles are reproducible.
    pub fn sorted_coords(&self) -> Vec<Hex> {
        let mut coords: Vec<Hex> = self.heights.keys().copied().collect();
        coords.sort_by_key(|h| {
            let (col, row) = h.to_offset();
            (row, col)
        });
        coords
    }

    /// How many of a hex's six neighbors are water tiles.
    pub fn water_neighbor_count(&self, hex: Hex) -> u32 {
        hex.neighbors()
            .iter()
            .filter(|n| matches!(self.biomes.get(*n), Some(b) if b.is_water()))
            .count() as u32
    }
}

/// Tile storage and neighborhood queries. Neighborhood is always derived
/// from the coordinate algebra, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldMap {
    tiles: HashMap<Hex, Tile>,
    rows: i32,
    cols: i32,
}

impl WorldMap {
    pub fn new(tiles: HashMap<Hex, Tile>) -> Self {
        let mut rows = 0;
        let mut cols = 0;
        for hex in tiles.keys() {
            let (col, row) = hex.to_offset();
            rows = rows.max(row + 1);
            cols = cols.max(col + 1);
        }
        Self { tiles, rows, cols }
    }

    pub fn get(&self, hex: Hex) -> Option<&Tile> {
        self.tiles.get(&hex)
    }

    pub fn get_mut(&mut self, hex: Hex) -> Option<&mut Tile> {
        self.tiles.get_mut(&hex)
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.tiles.contains_key(&hex)
    }

    /// The neighboring tile in one direction, if the map extends there.
    pub fn neighbor(&self, hex: Hex, direction: HexDirection) -> Option<&Tile> {
        self.tiles.get(&hex.neighbor(direction))
    }

    /// Coordinates of all existing neighbors, in canonical direction order.
    /// Map-edge gaps are silently skipped.
    pub fn neighbor_coords(&self, hex: Hex) -> Vec<Hex> {
        hex.neighbors()
            .into_iter()
            .filter(|n| self.tiles.contains_key(n))
            .collect()
    }

    /// Coordinates of every tile within `radius` of `hex`.
    pub fn coords_in_range(&self, hex: Hex, radius: i32) -> Vec<Hex> {
        hex.range(radius)
            .into_iter()
            .filter(|h| self.tiles.contains_key(h))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Hex, &Tile)> {
        self.tiles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Hex, &mut Tile)> {
        self.tiles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Offset-row count, used for latitude and spawn sampling.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Widest offset-column count.
    pub fn cols(&self) -> i32 {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::state::biome::Biome;

    fn tiny_data() -> WorldData {
        let mut data = WorldData::default();
        for row in 0..3 {
            for col in 0..3 {
                let hex = Hex::from_offset(col, row);
                data.heights.insert(hex, 0.5);
                let biome = if row == 0 {
                    Biome::Water
                } else {
                    Biome::TemperateGrassland
                };
                data.biomes.insert(hex, biome);
                data.water_distance.insert(hex, row as f32);
            }
        }
        data
    }

    #[test]
    fn validation_catches_mismatched_keys() {
        let mut data = tiny_data();
        assert!(data.validate().is_ok());
        data.biomes.remove(&Hex::from_offset(1, 1));
        assert_eq!(
            data.validate(),
            Err(WorldError::InconsistentMaps("biome map"))
        );
    }

    #[test]
    fn empty_world_is_refused() {
        let data = WorldData::default();
        assert_eq!(data.validate(), Err(WorldError::EmptyWorld));
    }

    #[test]
    fn water_neighbors_counted_from_labels() {
        let data = tiny_data();
        // (1, 1) in odd-r offset touches two water tiles on row 0.
        let count = data.water_neighbor_count(Hex::from_offset(1, 1));
        assert_eq!(count, 2);
    }

    #[test]
    fn neighbor_lookups_tolerate_map_edges() {
        let data = tiny_data();
        let mut tiles = HashMap::new();
        for hex in data.sorted_coords() {
            tiles.insert(
                hex,
                Tile::new(hex, 0.5, 10.0, 100.0, data.biomes[&hex], 2.0),
            );
        }
        let map = WorldMap::new(tiles);
        assert_eq!(map.rows(), 3);
        let corner = Hex::from_offset(0, 0);
        assert!(map.neighbor(corner, HexDirection::West).is_none());
        assert!(map.neighbor_coords(corner).len() < 6);
    }
}
