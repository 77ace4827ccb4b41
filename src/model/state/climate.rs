//! Per-tile climate model: latitude bands, oceanic moderation, rainfall.

use crate::model::config::ClimateConfig;
use rand::Rng;

/// Normalized latitude for an offset row: 0 at the equator (map center),
/// 1 at either pole.
pub fn latitude(row: i32, rows: i32) -> f32 {
    if rows <= 1 {
        return 0.0;
    }
    let normalized = row as f32 / rows as f32;
    (normalized - 0.5).abs() * 2.0
}

/// Temperature in degrees C for a tile, including a small random local
/// variation drawn from the simulation RNG so seeded worlds stay
/// reproducible. Clamped to the configured pole/equator range.
pub fn temperature<R: Rng>(
    lat: f32,
    elevation: f32,
    water_neighbors: u32,
    config: &ClimateConfig,
    rng: &mut R,
) -> f32 {
    let latitude_temp = config.equator_temp - (config.equator_temp - config.pole_temp) * lat;
    let altitude_effect = -elevation * config.altitude_lapse * 5.0;
    let local_variation = rng.gen_range(-5.0..5.0);

    let current = latitude_temp + altitude_effect + local_variation;

    // Oceans pull neighboring tiles toward a mild 15 C, up to 30% with all
    // six neighbors underwater.
    let moderation = if water_neighbors > 0 {
        let strength = (water_neighbors as f32 / 6.0) * 0.3;
        (15.0 - current) * strength
    } else {
        0.0
    };

    (current + moderation).clamp(config.pole_temp, config.equator_temp)
}

/// Yearly precipitation in mm, from a piecewise latitudinal profile scaled
/// by elevation, cold-air attenuation and coastal humidity.
pub fn precipitation(
    lat: f32,
    elevation: f32,
    temperature: f32,
    water_neighbors: u32,
    config: &ClimateConfig,
) -> f32 {
    let latitude_rainfall = if lat < 0.2 {
        0.9 + (1.0 - lat / 0.2) * 0.1
    } else if lat < 0.4 {
        let t = (lat - 0.2) / 0.2;
        0.9 - t * 0.4
    } else if lat < 0.6 {
        let t = (lat - 0.4) / 0.2;
        0.5 - t * 0.4
    } else if lat < 0.8 {
        let t = (lat - 0.6) / 0.2;
        0.1 + t * 0.5
    } else {
        0.6 - (lat - 0.8) / 0.2 * 0.3
    };

    let altitude_effect = 1.0 - elevation * 0.3;

    // Below freezing there is little evaporation to rain back out.
    let temperature_effect = if temperature < 0.0 {
        (0.3 + 0.7 * (temperature + 40.0) / 40.0).max(0.1)
    } else {
        1.0
    };

    let coastal_bonus = 1.0 + (water_neighbors as f32 / 6.0) * 0.5;

    let normalized = latitude_rainfall * altitude_effect * temperature_effect * coastal_bonus;
    (normalized * config.max_rainfall).clamp(0.0, config.max_rainfall)
}
