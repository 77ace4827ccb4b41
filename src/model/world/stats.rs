//! Aggregated counters exposed to the renderer, stats panels and the CLI.

use crate::model::state::creature::Priority;
use crate::model::world::World;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationStats {
    pub total: usize,
    pub herbivores: usize,
    pub carnivores: usize,
    pub omnivores: usize,
    /// Age < 50.
    pub young: usize,
    /// Age 50..500.
    pub adults: usize,
    /// Age >= 500.
    pub old: usize,
    pub average_age: f32,
    pub max_generation: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityStats {
    pub moving: usize,
    pub hungry: usize,
    pub thirsty: usize,
    pub mating: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceStats {
    pub average_plant_food: f32,
    pub average_meat: f32,
    pub tiles_with_water: usize,
}

/// Condition of the living population.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeedStats {
    pub average_hunger: f32,
    pub average_thirst: f32,
    pub average_health: f32,
    /// Creatures one bad turn from dying.
    pub critical: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimStats {
    pub turn: u64,
    pub population: PopulationStats,
    pub activity: ActivityStats,
    pub resources: ResourceStats,
    pub needs: NeedStats,
    pub total_scents: usize,
}

impl World {
    /// Snapshot of the whole simulation, cheap enough to call every turn.
    pub fn stats(&self) -> SimStats {
        let mut population = PopulationStats::default();
        let mut activity = ActivityStats::default();
        let mut needs = NeedStats::default();
        let mut total_age: u64 = 0;

        for creature in self.creatures().iter().filter(|c| c.is_alive) {
            population.total += 1;
            total_age += creature.age as u64;

            needs.average_hunger += creature.needs.hunger;
            needs.average_thirst += creature.needs.thirst;
            needs.average_health += creature.needs.health_score();
            if creature.needs.is_critical() {
                needs.critical += 1;
            }
            population.max_generation = population.max_generation.max(creature.generation);

            if creature.stats.is_herbivore() {
                population.herbivores += 1;
            } else if creature.stats.is_carnivore() {
                population.carnivores += 1;
            } else {
                population.omnivores += 1;
            }

            match creature.age {
                0..=49 => population.young += 1,
                50..=499 => population.adults += 1,
                _ => population.old += 1,
            }

            if creature.is_moving {
                activity.moving += 1;
            }
            match creature.current_priority() {
                Priority::Hunger => activity.hungry += 1,
                Priority::Thirst => activity.thirsty += 1,
                Priority::Love => activity.mating += 1,
                Priority::None => {}
            }
        }
        if population.total > 0 {
            population.average_age = total_age as f32 / population.total as f32;
            needs.average_hunger /= population.total as f32;
            needs.average_thirst /= population.total as f32;
            needs.average_health /= population.total as f32;
        }

        let mut resources = ResourceStats::default();
        let mut plant_total = 0.0;
        let mut meat_total = 0.0;
        for (_, tile) in self.map().iter() {
            plant_total += tile.resources.plant_food;
            meat_total += tile.resources.meat;
            if tile.resources.has_water() {
                resources.tiles_with_water += 1;
            }
        }
        let tile_count = self.map().len();
        if tile_count > 0 {
            resources.average_plant_food = plant_total / tile_count as f32;
            resources.average_meat = meat_total / tile_count as f32;
        }

        SimStats {
            turn: self.turn,
            population,
            activity,
            resources,
            needs,
            total_scents: self.scents().len(),
        }
    }
}
