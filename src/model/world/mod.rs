//! The simulation aggregate.
//!
//! `World` owns every piece of mutable state (the tile map, the creature
//! vector, the scent field, the id allocator and the seeded RNG) and is
//! only mutated through the turn pipeline in [`update`]. Everything else
//! gets read-only views. Determinism is a contract: the same seed and the
//! same input data produce the same turn sequence.

use crate::model::config::SimConfig;
use crate::model::error::WorldError;
use crate::model::hex::Hex;
use crate::model::history::EventLog;
use crate::model::state::creature::{Creature, Stats};
use crate::model::state::map::{WorldData, WorldMap};
use crate::model::state::scent::{Scent, ScentField};
use crate::model::state::tile::Tile;
use rand_chacha::ChaCha8Rng;

pub mod init;
pub mod stats;
pub mod update;

pub use stats::{ActivityStats, PopulationStats, ResourceStats, SimStats};

pub struct World {
    pub config: SimConfig,
    pub turn: u64,
    map: WorldMap,
    creatures: Vec<Creature>,
    scents: ScentField,
    rng: ChaCha8Rng,
    next_creature_id: u64,
    paused: bool,
    events: EventLog,
    /// Retained so `reset` can rebuild the exact initial world.
    initial_data: WorldData,
}

impl World {
    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    /// Alive creatures plus any that died this turn and have not yet been
    /// swept by cleanup.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn scents(&self) -> &[Scent] {
        self.scents.as_slice()
    }

    pub fn scent_field(&self) -> &ScentField {
        &self.scents
    }

    /// Journal of recent births, deaths, escapes and relief spawns.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn alive_count(&self) -> usize {
        self.creatures.iter().filter(|c| c.is_alive).count()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Place a creature on the map. Refused when the tile does not exist.
    pub fn spawn_creature(&mut self, position: Hex, stats: Stats) -> Result<u64, WorldError> {
        if !self.map.contains(position) {
            return Err(WorldError::MissingTile(position));
        }
        let id = self.allocate_id();
        self.creatures.push(Creature::new(
            id,
            position,
            stats,
            0,
            self.config.lifecycle.maturity_age,
        ));
        Ok(id)
    }

    /// Mutable tile access for tooling and test setup; the turn pipeline
    /// itself goes through the systems.
    pub fn tile_mut(&mut self, hex: Hex) -> Option<&mut Tile> {
        self.map.get_mut(hex)
    }

    /// Mutable creature access for tooling and test setup.
    pub fn creature_mut(&mut self, id: u64) -> Option<&mut Creature> {
        self.creatures.iter_mut().find(|c| c.id == id)
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_creature_id;
        self.next_creature_id += 1;
        id
    }
}
