//! World construction: input validation, tile building and initial spawn.

use crate::model::config::SimConfig;
use crate::model::error::WorldError;
use crate::model::history::EventLog;
use crate::model::state::climate;
use crate::model::state::map::{WorldData, WorldMap};
use crate::model::state::scent::ScentField;
use crate::model::state::tile::Tile;
use crate::model::systems::population;
use crate::model::world::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// How many journal entries are kept before the oldest are dropped.
const EVENT_LOG_CAPACITY: usize = 4096;

impl World {
    /// Build a world from generator output and spawn the configured
    /// populations. Nothing is constructed when the input is inconsistent.
    pub fn new(config: SimConfig, data: WorldData) -> Result<Self, WorldError> {
        data.validate()?;
        let mut world = Self::from_validated(config, data);
        world.spawn_initial()?;
        tracing::info!(
            tiles = world.map.len(),
            creatures = world.creatures.len(),
            seed = world.config.world.seed,
            "world initialized"
        );
        Ok(world)
    }

    /// Throw the world away and rebuild it from the retained input, with a
    /// freshly seeded RNG. The validated data cannot fail a second time.
    pub fn reset(&mut self) -> Result<(), WorldError> {
        let mut fresh = Self::from_validated(self.config.clone(), self.initial_data.clone());
        fresh.spawn_initial()?;
        *self = fresh;
        Ok(())
    }

    fn from_validated(config: SimConfig, data: WorldData) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.world.seed);
        let map = build_map(&data, &config, &mut rng);
        Self {
            config,
            turn: 0,
            map,
            creatures: Vec::new(),
            scents: ScentField::new(),
            rng,
            next_creature_id: 0,
            paused: false,
            events: EventLog::new(EVENT_LOG_CAPACITY),
            initial_data: data,
        }
    }

    fn spawn_initial(&mut self) -> Result<(), WorldError> {
        let world_cfg = self.config.world.clone();
        for _ in 0..world_cfg.herbivores {
            let stats = population::herbivore_stats(&mut self.rng);
            let position = population::find_spawn_position(&self.map, &mut self.rng);
            self.spawn_creature(position, stats)?;
        }
        for _ in 0..world_cfg.carnivores {
            let stats = population::carnivore_stats(&mut self.rng);
            let position = population::find_spawn_position(&self.map, &mut self.rng);
            self.spawn_creature(position, stats)?;
        }
        for _ in 0..world_cfg.omnivores {
            let stats = population::omnivore_stats(&mut self.rng);
            let position = population::find_spawn_position(&self.map, &mut self.rng);
            self.spawn_creature(position, stats)?;
        }
        Ok(())
    }
}

/// Turn the input triple into tiles. Climate is derived per tile from its
/// latitude, elevation and water neighborhood; the jitter draws from the
/// world RNG in deterministic coordinate order.
fn build_map(data: &WorldData, config: &SimConfig, rng: &mut ChaCha8Rng) -> WorldMap {
    let coords = data.sorted_coords();
    let rows = coords
        .last()
        .map(|h| h.to_offset().1 + 1)
        .unwrap_or(1)
        .max(1);

    let mut tiles = HashMap::with_capacity(coords.len());
    for hex in coords {
        let elevation = data.heights[&hex];
        let biome = data.biomes[&hex];
        let water_distance = data.water_distance[&hex];
        let water_neighbors = data.water_neighbor_count(hex);

        let (_, row) = hex.to_offset();
        let lat = climate::latitude(row, rows);
        let temperature =
            climate::temperature(lat, elevation, water_neighbors, &config.climate, rng);
        let precipitation =
            climate::precipitation(lat, elevation, temperature, water_neighbors, &config.climate);

        tiles.insert(
            hex,
            Tile::new(
                hex,
                elevation,
                temperature,
                precipitation,
                biome,
                water_distance,
            ),
        );
    }
    WorldMap::new(tiles)
}
