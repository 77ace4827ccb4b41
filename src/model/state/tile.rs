//! One hex cell of the world: climate, biome and resource state.

use crate::model::hex::Hex;
use crate::model::state::biome::Biome;
use crate::model::state::resources::TileResources;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub coord: Hex,
    pub elevation: f32,
    /// Degrees C.
    pub temperature: f32,
    /// mm per year.
    pub precipitation: f32,
    pub biome: Biome,
    pub resources: TileResources,
}

impl Tile {
    pub fn new(
        coord: Hex,
        elevation: f32,
        temperature: f32,
        precipitation: f32,
        biome: Biome,
        water_distance: f32,
    ) -> Self {
        Self {
            coord,
            elevation,
            temperature,
            precipitation,
            biome,
            resources: TileResources::for_biome(biome, water_distance),
        }
    }

    pub fn is_water(&self) -> bool {
        self.biome.is_water()
    }
}
