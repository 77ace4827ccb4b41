//! Need growth, death by need and end-of-turn corpse handling.

use crate::model::state::creature::{Creature, Priority};
use crate::model::state::map::WorldMap;

/// Per-turn need growth for one creature. Moving creatures are handled by
/// the pipeline and never reach this; their needs are frozen in transit.
pub fn update_creature(creature: &mut Creature) {
    if !creature.is_alive || creature.is_moving {
        return;
    }

    let rate = creature.stats.base_metabolic_rate();
    let activity = activity_level(creature.current_priority());
    let perception_cost = creature.stats.perception * 0.05;

    let burn = rate * activity + perception_cost;
    creature.needs.hunger = (creature.needs.hunger + burn).min(100.0);
    creature.needs.thirst = (creature.needs.thirst + burn * 0.5).min(100.0);

    if creature.is_mature() {
        creature
            .needs
            .increase_love(creature.stats.reproduction_rate * 0.1);
    }

    if creature.needs.should_die() {
        creature.die();
    }
}

/// Searching burns more than idling; courting sits in between.
fn activity_level(priority: Priority) -> f32 {
    match priority {
        Priority::Hunger | Priority::Thirst => 1.2,
        Priority::Love => 1.0,
        Priority::None => 0.8,
    }
}

/// Drop dead creatures from the live set, leaving each carcass as meat on
/// the tile it died on. Devoured prey was already eaten and leaves nothing
/// beyond the residual carrion the kill deposited. Returns how many were
/// removed.
pub fn cleanup_dead(creatures: &mut Vec<Creature>, map: &mut WorldMap) -> usize {
    let before = creatures.len();
    for creature in creatures.iter() {
        if creature.is_alive || creature.devoured {
            continue;
        }
        if let Some(tile) = map.get_mut(creature.position) {
            tile.resources.add_meat(creature.meat_yield());
        }
    }
    creatures.retain(|c| c.is_alive);
    before - creatures.len()
}
