//! Population management: species presets, spawn placement and the
//! extinction-relief safety valve.

use crate::model::hex::Hex;
use crate::model::state::creature::Stats;
use crate::model::state::map::WorldMap;
use rand::Rng;

/// How many placements are attempted before falling back to the origin.
const SPAWN_ATTEMPTS: usize = 100;

/// Elevation band considered comfortable for spawning: dry land below the
/// high ground.
const SPAWN_ELEVATION: std::ops::Range<f32> = 0.4..0.8;

pub fn herbivore_stats<R: Rng>(rng: &mut R) -> Stats {
    let mut stats = Stats {
        size: rng.gen_range(8.0..15.0),
        speed: rng.gen_range(8.0..15.0),
        reproduction_rate: rng.gen_range(8.0..15.0),
        diet: rng.gen_range(-99..=-40),
        stealth: rng.gen_range(5.0..20.0),
        perception: rng.gen_range(8.0..15.0),
    };
    stats.clamp_values();
    stats
}

/// Carnivores start bigger and faster, but breed slowly.
pub fn carnivore_stats<R: Rng>(rng: &mut R) -> Stats {
    let mut stats = Stats {
        size: rng.gen_range(10.0..20.0),
        speed: rng.gen_range(12.0..18.0),
        reproduction_rate: rng.gen_range(5.0..10.0),
        diet: rng.gen_range(40..=99),
        stealth: rng.gen_range(10.0..25.0),
        perception: rng.gen_range(12.0..20.0),
    };
    stats.clamp_values();
    stats
}

pub fn omnivore_stats<R: Rng>(rng: &mut R) -> Stats {
    let mut stats = Stats {
        size: rng.gen_range(8.0..15.0),
        speed: rng.gen_range(10.0..15.0),
        reproduction_rate: rng.gen_range(8.0..12.0),
        diet: rng.gen_range(-20..=20),
        stealth: rng.gen_range(8.0..18.0),
        perception: rng.gen_range(10.0..18.0),
    };
    stats.clamp_values();
    stats
}

/// Preset used by extinction relief, cycling through the three diets.
pub fn relief_stats<R: Rng>(index: usize, rng: &mut R) -> Stats {
    match index % 3 {
        0 => herbivore_stats(rng),
        1 => carnivore_stats(rng),
        _ => omnivore_stats(rng),
    }
}

/// Rejection-sample a comfortable terrestrial tile; when the map refuses to
/// cooperate, fall back to the origin.
pub fn find_spawn_position<R: Rng>(map: &WorldMap, rng: &mut R) -> Hex {
    let rows = map.rows().max(1);
    let cols = map.cols().max(1);

    for _ in 0..SPAWN_ATTEMPTS {
        let col = rng.gen_range(0..cols);
        let row = rng.gen_range(0..rows);
        let hex = Hex::from_offset(col, row);
        let Some(tile) = map.get(hex) else { continue };
        if SPAWN_ELEVATION.contains(&tile.elevation) {
            return hex;
        }
    }
    Hex::new(0, 0)
}
