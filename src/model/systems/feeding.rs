//! Diet-conditioned food search and consumption.
//!
//! Each call either consumes from the creature's own tile or nominates an
//! adjacent tile worth walking to; the turn pipeline turns the latter into
//! an actual move.

use crate::model::hex::Hex;
use crate::model::state::creature::Creature;
use crate::model::state::map::WorldMap;
use rand::seq::SliceRandom;
use rand::Rng;

/// Fraction of body size a creature can eat in one bite.
const BITE_FRACTION: f32 = 0.5;
/// Herbivores only nibble at carrion.
const RELUCTANT_BITE_FRACTION: f32 = 0.3;
/// Fraction of body size drunk in one go.
const DRINK_FRACTION: f32 = 0.3;
/// Score bonus for a candidate tile that also offers water.
const WATER_BONUS: f32 = 10.0;

/// Outcome of one feeding or drinking attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedingOutcome {
    /// Something was actually consumed.
    pub success: bool,
    /// Nothing here, but `target` looks better.
    pub needs_to_move: bool,
    pub target: Option<Hex>,
}

impl FeedingOutcome {
    fn nothing() -> Self {
        Self {
            success: false,
            needs_to_move: false,
            target: None,
        }
    }

    fn consumed() -> Self {
        Self {
            success: true,
            needs_to_move: false,
            target: None,
        }
    }

    fn move_to(target: Hex) -> Self {
        Self {
            success: false,
            needs_to_move: true,
            target: Some(target),
        }
    }
}

/// Try to satisfy hunger, dispatching on the sign of the diet.
pub fn try_feed<R: Rng>(creature: &mut Creature, map: &mut WorldMap, rng: &mut R) -> FeedingOutcome {
    if creature.stats.is_carnivore() {
        feed_carnivore(creature, map, rng)
    } else if creature.stats.is_herbivore() {
        feed_herbivore(creature, map, rng)
    } else {
        feed_omnivore(creature, map, rng)
    }
}

fn feed_carnivore<R: Rng>(creature: &mut Creature, map: &mut WorldMap, rng: &mut R) -> FeedingOutcome {
    let bite = creature.stats.size * BITE_FRACTION;
    let Some(tile) = map.get_mut(creature.position) else {
        return FeedingOutcome::nothing();
    };

    if tile.resources.has_meat() {
        let consumed = tile.resources.consume_meat(bite);
        creature.eat_meat(consumed);
        return FeedingOutcome::consumed();
    }

    // A committed carnivore keeps hunting for meat; a marginal one will
    // settle for plants when the roll comes up short of its diet value.
    let roll = rng.gen_range(0..100);
    if roll >= creature.stats.diet {
        search_adjacent(creature, map, true, rng)
    } else if tile.resources.has_plant_food() {
        let consumed = tile.resources.consume_plant(bite);
        creature.eat_plant(consumed);
        FeedingOutcome::consumed()
    } else {
        search_adjacent(creature, map, false, rng)
    }
}

fn feed_herbivore<R: Rng>(creature: &mut Creature, map: &mut WorldMap, rng: &mut R) -> FeedingOutcome {
    let bite = creature.stats.size * BITE_FRACTION;
    let Some(tile) = map.get_mut(creature.position) else {
        return FeedingOutcome::nothing();
    };

    if tile.resources.has_plant_food() {
        let consumed = tile.resources.consume_plant(bite);
        creature.eat_plant(consumed);
        return FeedingOutcome::consumed();
    }

    let roll = rng.gen_range(0..100);
    let threshold = -creature.stats.diet;
    if roll >= threshold {
        search_adjacent(creature, map, false, rng)
    } else if tile.resources.has_meat() {
        let consumed = tile
            .resources
            .consume_meat(creature.stats.size * RELUCTANT_BITE_FRACTION);
        creature.eat_meat(consumed);
        FeedingOutcome::consumed()
    } else {
        search_adjacent(creature, map, false, rng)
    }
}

fn feed_omnivore<R: Rng>(creature: &mut Creature, map: &mut WorldMap, rng: &mut R) -> FeedingOutcome {
    let bite = creature.stats.size * BITE_FRACTION;
    let prefers_meat = creature.stats.diet > 0;
    let Some(tile) = map.get_mut(creature.position) else {
        return FeedingOutcome::nothing();
    };

    let order = if prefers_meat {
        [true, false]
    } else {
        [false, true]
    };
    for want_meat in order {
        if want_meat && tile.resources.has_meat() {
            let consumed = tile.resources.consume_meat(bite);
            creature.eat_meat(consumed);
            return FeedingOutcome::consumed();
        }
        if !want_meat && tile.resources.has_plant_food() {
            let consumed = tile.resources.consume_plant(bite);
            creature.eat_plant(consumed);
            return FeedingOutcome::consumed();
        }
    }

    search_adjacent(creature, map, prefers_meat, rng)
}

/// Score the six neighbors for the preferred resource and nominate the
/// best one. Neighbors are shuffled first so equal scores do not bias one
/// direction.
fn search_adjacent<R: Rng>(
    creature: &Creature,
    map: &WorldMap,
    prefer_meat: bool,
    rng: &mut R,
) -> FeedingOutcome {
    let mut neighbors = creature.position.neighbors();
    neighbors.shuffle(rng);

    let mut best_tile = None;
    let mut best_score = 0.0;

    for coord in neighbors {
        let Some(tile) = map.get(coord) else { continue };
        let mut score = if prefer_meat {
            tile.resources.meat
        } else {
            tile.resources.plant_food
        };
        if tile.resources.has_water() {
            score += WATER_BONUS;
        }
        if score > best_score {
            best_score = score;
            best_tile = Some(coord);
        }
    }

    match best_tile {
        Some(target) => FeedingOutcome::move_to(target),
        None => FeedingOutcome::nothing(),
    }
}

/// Drink here if possible, otherwise nominate the wettest neighbor.
pub fn seek_water(creature: &mut Creature, map: &mut WorldMap) -> FeedingOutcome {
    if let Some(tile) = map.get_mut(creature.position) {
        if tile.resources.has_water() {
            let consumed = tile
                .resources
                .consume_water(creature.stats.size * DRINK_FRACTION);
            creature.drink(consumed);
            return FeedingOutcome::consumed();
        }
    }

    let mut best_tile = None;
    let mut best_water = 0.0;
    for coord in creature.position.neighbors() {
        let Some(tile) = map.get(coord) else { continue };
        if tile.resources.has_water() && tile.resources.water > best_water {
            best_water = tile.resources.water;
            best_tile = Some(coord);
        }
    }

    match best_tile {
        Some(target) => FeedingOutcome::move_to(target),
        None => FeedingOutcome::nothing(),
    }
}
