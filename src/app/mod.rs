//! Headless application shell: build a world from the demo producer and
//! drive it turn by turn.

pub mod worldgen;

use crate::model::config::SimConfig;
use crate::model::world::World;
use anyhow::Result;

/// Turn interval between progress log lines.
const LOG_INTERVAL: u64 = 100;

pub struct App {
    pub world: World,
    pub running: bool,
}

impl App {
    pub fn new(config: SimConfig) -> Result<Self> {
        let data = worldgen::generate(&config);
        let world = World::new(config, data)?;
        Ok(Self {
            world,
            running: true,
        })
    }

    /// Step the simulation `turns` times, logging a summary as it goes.
    pub fn run(&mut self, turns: u64) -> Result<()> {
        for _ in 0..turns {
            if !self.running {
                break;
            }
            self.world.step();

            if self.world.turn % LOG_INTERVAL == 0 {
                let stats = self.world.stats();
                tracing::info!(
                    turn = stats.turn,
                    population = stats.population.total,
                    herbivores = stats.population.herbivores,
                    carnivores = stats.population.carnivores,
                    omnivores = stats.population.omnivores,
                    max_generation = stats.population.max_generation,
                    average_health = stats.needs.average_health as f64,
                    scents = stats.total_scents,
                    events = self.world.events().len(),
                    "progress"
                );
            }
        }
        Ok(())
    }
}
