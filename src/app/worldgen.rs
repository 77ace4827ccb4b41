//! A deliberately small world producer for the CLI and tests.
//!
//! Real terrain generation (noise layers, erosion, river carving) is an
//! external concern; the simulation only ever sees the resulting
//! `WorldData` triple. This producer makes a plausible one: smoothed
//! random heights, a water mask under the configured threshold, BFS
//! water distances over the hex graph, and biome labels from the core
//! classifier.

use crate::model::config::SimConfig;
use crate::model::hex::Hex;
use crate::model::state::biome::Biome;
use crate::model::state::climate;
use crate::model::state::map::WorldData;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, VecDeque};

/// Tiles with no water anywhere in reach are effectively arid.
const DRY_DISTANCE: f32 = 99.0;

/// Build a `WorldData` triple from the world section of the config. The
/// same seed always produces the same world.
pub fn generate(config: &SimConfig) -> WorldData {
    let map_size = config.world.map_size.max(1);
    let mut rng = ChaCha8Rng::seed_from_u64(config.world.seed);

    let coords = grid_coords(map_size);

    // Raw noise, then a couple of neighborhood smoothing passes so height
    // varies gradually enough to form coherent coastlines. Smoothing pulls
    // everything toward the mean, so stretch back onto [0, 1] afterwards
    // or the water threshold would never be reached.
    let mut heights: HashMap<Hex, f32> = coords
        .iter()
        .map(|&hex| (hex, rng.gen_range(0.0..1.0)))
        .collect();
    for _ in 0..2 {
        heights = smooth(&coords, &heights);
    }
    normalize(&mut heights);

    let water_distance = water_distances(&coords, &heights, config.world.water_threshold);

    let mut biomes = HashMap::with_capacity(coords.len());
    for &hex in &coords {
        let elevation = heights[&hex];
        if elevation < config.world.water_threshold {
            biomes.insert(hex, Biome::Water);
            continue;
        }
        let water_neighbors = hex
            .neighbors()
            .iter()
            .filter(|n| matches!(heights.get(*n), Some(&h) if h < config.world.water_threshold))
            .count() as u32;
        let (_, row) = hex.to_offset();
        let lat = climate::latitude(row, map_size);
        let temperature =
            climate::temperature(lat, elevation, water_neighbors, &config.climate, &mut rng);
        let precipitation =
            climate::precipitation(lat, elevation, temperature, water_neighbors, &config.climate);
        biomes.insert(hex, Biome::classify(temperature, precipitation));
    }

    WorldData {
        heights,
        biomes,
        water_distance,
    }
}

/// Offset layout with odd rows one column short, matching the hex packing
/// of the renderer this world was built for.
fn grid_coords(map_size: i32) -> Vec<Hex> {
    let mut coords = Vec::new();
    for row in 0..map_size {
        let cols = if row % 2 == 0 { map_size } else { map_size - 1 };
        for col in 0..cols {
            coords.push(Hex::from_offset(col, row));
        }
    }
    coords
}

/// Min-max rescale onto [0, 1].
fn normalize(heights: &mut HashMap<Hex, f32>) {
    let mut lo = f32::MAX;
    let mut hi = f32::MIN;
    for &h in heights.values() {
        lo = lo.min(h);
        hi = hi.max(h);
    }
    let span = hi - lo;
    if span <= f32::EPSILON {
        return;
    }
    for h in heights.values_mut() {
        *h = (*h - lo) / span;
    }
}

fn smooth(coords: &[Hex], heights: &HashMap<Hex, f32>) -> HashMap<Hex, f32> {
    let mut smoothed = HashMap::with_capacity(heights.len());
    for &hex in coords {
        let mut sum = heights[&hex];
        let mut count = 1.0;
        for neighbor in hex.neighbors() {
            if let Some(h) = heights.get(&neighbor) {
                sum += h;
                count += 1.0;
            }
        }
        smoothed.insert(hex, sum / count);
    }
    smoothed
}

/// Multi-source BFS over the hex graph from every water tile.
fn water_distances(
    coords: &[Hex],
    heights: &HashMap<Hex, f32>,
    water_threshold: f32,
) -> HashMap<Hex, f32> {
    let mut distance: HashMap<Hex, f32> = HashMap::with_capacity(coords.len());
    let mut queue = VecDeque::new();

    for &hex in coords {
        if heights[&hex] < water_threshold {
            distance.insert(hex, 0.0);
            queue.push_back(hex);
        }
    }

    while let Some(hex) = queue.pop_front() {
        let next = distance[&hex] + 1.0;
        for neighbor in hex.neighbors() {
            if !heights.contains_key(&neighbor) || distance.contains_key(&neighbor) {
                continue;
            }
            distance.insert(neighbor, next);
            queue.push_back(neighbor);
        }
    }

    for &hex in coords {
        distance.entry(hex).or_insert(DRY_DISTANCE);
    }
    distance
}
