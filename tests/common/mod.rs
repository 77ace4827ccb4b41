pub mod macros;

use std::collections::HashMap;
use veldt::model::config::SimConfig;
use veldt::model::hex::Hex;
use veldt::model::state::biome::Biome;
use veldt::model::state::creature::Stats;
use veldt::model::state::map::WorldData;
use veldt::World;

/// Builds a small uniform world for focused scenario tests.
///
/// Defaults: an empty population, extinction relief disabled, and a single
/// temperate-grassland tile at the origin. Creature ids are handed out in
/// insertion order starting at 0.
#[allow(dead_code)]
pub struct SimBuilder {
    config: SimConfig,
    grid: i32,
    biome: Biome,
    elevation: f32,
    water_distance: f32,
    creatures: Vec<(Hex, Stats, bool)>,
}

#[allow(dead_code)]
impl SimBuilder {
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.herbivores = 0;
        config.world.carnivores = 0;
        config.world.omnivores = 0;
        // Focused scenarios control their own populations.
        config.lifecycle.extinction_threshold = 0;
        Self {
            config,
            grid: 1,
            biome: Biome::TemperateGrassland,
            elevation: 0.5,
            water_distance: 9.0,
            creatures: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = seed;
        self
    }

    /// Use an `n x n` uniform grid instead of a single tile.
    pub fn with_grid(mut self, n: i32) -> Self {
        self.grid = n;
        self
    }

    pub fn with_biome(mut self, biome: Biome) -> Self {
        self.biome = biome;
        self
    }

    pub fn with_water_distance(mut self, distance: f32) -> Self {
        self.water_distance = distance;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Spawn a newborn creature at `position`.
    pub fn with_creature(mut self, position: Hex, stats: Stats) -> Self {
        self.creatures.push((position, stats, false));
        self
    }

    /// Spawn a creature already past maturity.
    pub fn with_mature_creature(mut self, position: Hex, stats: Stats) -> Self {
        self.creatures.push((position, stats, true));
        self
    }

    pub fn build(self) -> World {
        let mut data = WorldData {
            heights: HashMap::new(),
            biomes: HashMap::new(),
            water_distance: HashMap::new(),
        };
        for row in 0..self.grid {
            for col in 0..self.grid {
                let hex = Hex::from_offset(col, row);
                data.heights.insert(hex, self.elevation);
                data.biomes.insert(hex, self.biome);
                data.water_distance.insert(hex, self.water_distance);
            }
        }

        let maturity_age = self.config.lifecycle.maturity_age;
        let mut world = World::new(self.config, data).expect("builder world data is valid");
        for (position, stats, mature) in self.creatures {
            let id = world
                .spawn_creature(position, stats)
                .expect("builder creature position exists");
            if mature {
                world
                    .creature_mut(id)
                    .expect("freshly spawned creature exists")
                    .age = maturity_age;
            }
        }
        world
    }
}

/// Herbivore stats that two builder creatures can always breed on.
#[allow(dead_code)]
pub fn grazer_stats() -> Stats {
    Stats {
        size: 10.0,
        speed: 10.0,
        reproduction_rate: 10.0,
        diet: -50,
        stealth: 10.0,
        perception: 10.0,
    }
}
