//! Whittaker-style biome classification and per-biome resource profiles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Water,
    TropicalRainforest,
    TropicalSavanna,
    TemperateRainforest,
    TemperateDeciduousForest,
    TemperateGrassland,
    Taiga,
    Desert,
    Tundra,
    Polar,
}

impl Biome {
    /// Classify a land tile from its climate. Evaluated top-down; the first
    /// matching band wins. Water tiles bypass this entirely.
    pub fn classify(temperature: f32, precipitation: f32) -> Biome {
        if temperature >= 20.0 {
            if precipitation >= 300.0 {
                Biome::TropicalRainforest
            } else if precipitation > 50.0 {
                Biome::TropicalSavanna
            } else {
                Biome::Desert
            }
        } else if temperature >= 5.0 {
            if precipitation > 200.0 {
                Biome::TemperateRainforest
            } else if precipitation >= 100.0 {
                Biome::TemperateDeciduousForest
            } else if precipitation >= 25.0 {
                Biome::TemperateGrassland
            } else {
                Biome::Desert
            }
        } else if temperature >= -5.0 {
            if precipitation >= 50.0 {
                Biome::Taiga
            } else {
                Biome::Desert
            }
        } else if temperature >= -30.0 {
            Biome::Tundra
        } else {
            Biome::Polar
        }
    }

    /// Maximum plant food a tile of this biome can hold.
    pub fn plant_capacity(&self) -> f32 {
        match self {
            Biome::Water => 0.0,
            Biome::TropicalRainforest => 200.0,
            Biome::TropicalSavanna => 100.0,
            Biome::TemperateRainforest => 140.0,
            Biome::TemperateDeciduousForest => 120.0,
            Biome::TemperateGrassland => 100.0,
            Biome::Taiga => 80.0,
            Biome::Desert => 25.0,
            Biome::Tundra => 40.0,
            Biome::Polar => 10.0,
        }
    }

    /// Plant food regrowth per turn.
    pub fn plant_growth_rate(&self) -> f32 {
        match self {
            Biome::Water => 0.0,
            Biome::TropicalRainforest => 10.0,
            Biome::TropicalSavanna => 6.0,
            Biome::TemperateRainforest => 7.0,
            Biome::TemperateDeciduousForest => 6.0,
            Biome::TemperateGrassland => 7.0,
            Biome::Taiga => 3.0,
            Biome::Desert => 1.0,
            Biome::Tundra => 2.0,
            Biome::Polar => 0.5,
        }
    }

    pub fn is_water(&self) -> bool {
        matches!(self, Biome::Water)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Biome::Water => "Water",
            Biome::TropicalRainforest => "Tropical Rainforest",
            Biome::TropicalSavanna => "Tropical Savanna",
            Biome::TemperateRainforest => "Temperate Rainforest",
            Biome::TemperateDeciduousForest => "Temperate Deciduous Forest",
            Biome::TemperateGrassland => "Temperate Grassland",
            Biome::Taiga => "Taiga",
            Biome::Desert => "Desert",
            Biome::Tundra => "Tundra",
            Biome::Polar => "Polar",
        }
    }
}
