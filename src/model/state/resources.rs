//! Per-tile consumable resources: plant food, carrion and water.

use crate::model::state::biome::Biome;
use serde::{Deserialize, Serialize};

/// Fraction of carrion lost to rot each turn.
pub const MEAT_DECAY_RATE: f32 = 0.1;

/// Amounts below this are treated as exhausted.
const RESOURCE_FLOOR: f32 = 0.01;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TileResources {
    pub plant_food: f32,
    pub meat: f32,
    /// Water availability. `f32::INFINITY` marks a source tile (river or
    /// open water) that never depletes.
    pub water: f32,
    pub plant_capacity: f32,
    pub plant_growth_rate: f32,
    pub meat_decay_rate: f32,
}

impl TileResources {
    /// Resources for a freshly classified tile. Plant food starts at half
    /// capacity; water availability falls off with distance to the nearest
    /// river.
    pub fn for_biome(biome: Biome, water_distance: f32) -> Self {
        let capacity = biome.plant_capacity();
        let water = if biome.is_water() {
            f32::INFINITY
        } else {
            water_availability(water_distance)
        };
        Self {
            plant_food: capacity * 0.5,
            meat: 0.0,
            water,
            plant_capacity: capacity,
            plant_growth_rate: biome.plant_growth_rate(),
            meat_decay_rate: MEAT_DECAY_RATE,
        }
    }

    /// One turn of regrowth, clamped to capacity.
    pub fn grow_plants(&mut self) {
        if self.plant_food < self.plant_capacity {
            self.plant_food = (self.plant_food + self.plant_growth_rate).min(self.plant_capacity);
        }
    }

    /// One turn of carrion rot.
    pub fn decay_meat(&mut self) {
        if self.meat > 0.0 {
            self.meat *= 1.0 - self.meat_decay_rate;
            if self.meat < RESOURCE_FLOOR {
                self.meat = 0.0;
            }
        }
    }

    /// Consume up to `amount` of plant food; returns what was granted.
    pub fn consume_plant(&mut self, amount: f32) -> f32 {
        let granted = amount.min(self.plant_food);
        self.plant_food -= granted;
        granted
    }

    /// Consume up to `amount` of carrion; returns what was granted.
    pub fn consume_meat(&mut self, amount: f32) -> f32 {
        let granted = amount.min(self.meat);
        self.meat -= granted;
        granted
    }

    /// Consume up to `amount` of water; source tiles grant the full request
    /// without depleting.
    pub fn consume_water(&mut self, amount: f32) -> f32 {
        if self.water.is_infinite() {
            return amount;
        }
        let granted = amount.min(self.water);
        self.water -= granted;
        granted
    }

    pub fn add_meat(&mut self, amount: f32) {
        self.meat += amount;
    }

    pub fn has_plant_food(&self) -> bool {
        self.plant_food > RESOURCE_FLOOR
    }

    pub fn has_meat(&self) -> bool {
        self.meat > RESOURCE_FLOOR
    }

    pub fn has_water(&self) -> bool {
        self.water.is_infinite() || self.water > RESOURCE_FLOOR
    }
}

/// Water availability by hex distance to the nearest river: a source when
/// on one, then a steep monotone falloff.
pub fn water_availability(distance: f32) -> f32 {
    if distance == 0.0 {
        f32::INFINITY
    } else if distance <= 1.0 {
        100.0
    } else if distance <= 3.0 {
        50.0
    } else if distance <= 5.0 {
        20.0
    } else {
        5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_clamps_to_capacity() {
        let mut r = TileResources::for_biome(Biome::Desert, 10.0);
        assert_eq!(r.plant_capacity, 25.0);
        assert_eq!(r.plant_food, 12.5);
        for _ in 0..100 {
            r.grow_plants();
        }
        assert_eq!(r.plant_food, 25.0);
    }

    #[test]
    fn meat_decays_to_zero() {
        let mut r = TileResources::for_biome(Biome::TemperateGrassland, 2.0);
        r.add_meat(24.0);
        r.decay_meat();
        assert!((r.meat - 21.6).abs() < 1e-4);
        for _ in 0..200 {
            r.decay_meat();
        }
        assert_eq!(r.meat, 0.0);
    }

    #[test]
    fn consumption_grants_at_most_available() {
        let mut r = TileResources::for_biome(Biome::Taiga, 2.0);
        let available = r.plant_food;
        assert_eq!(r.consume_plant(1000.0), available);
        assert_eq!(r.plant_food, 0.0);
        assert_eq!(r.consume_meat(5.0), 0.0);
    }

    #[test]
    fn infinite_water_never_depletes() {
        let mut r = TileResources::for_biome(Biome::Water, 0.0);
        assert_eq!(r.consume_water(40.0), 40.0);
        assert!(r.water.is_infinite());

        let mut dry = TileResources::for_biome(Biome::Desert, 4.0);
        assert_eq!(dry.water, 20.0);
        assert_eq!(dry.consume_water(15.0), 15.0);
        assert_eq!(dry.water, 5.0);
    }

    #[test]
    fn water_falloff_is_monotone() {
        assert!(water_availability(0.0).is_infinite());
        assert_eq!(water_availability(1.0), 100.0);
        assert_eq!(water_availability(3.0), 50.0);
        assert_eq!(water_availability(5.0), 20.0);
        assert_eq!(water_availability(9.0), 5.0);
    }
}
