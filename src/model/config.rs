use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    pub map_size: i32,
    pub seed: u64,
    pub herbivores: usize,
    pub carnivores: usize,
    pub omnivores: usize,
    /// Elevation below which the demo producer marks a tile as water.
    pub water_threshold: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClimateConfig {
    pub equator_temp: f32,
    pub pole_temp: f32,
    /// Temperature drop per unit of elevation (degrees C).
    pub altitude_lapse: f32,
    /// Cap on yearly precipitation (mm).
    pub max_rainfall: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LifecycleConfig {
    pub maturity_age: u32,
    pub max_age: u32,
    /// Alive count below which extinction relief fires.
    pub extinction_threshold: usize,
    /// How many preset creatures relief injects.
    pub relief_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub climate: ClimateConfig,
    pub lifecycle: LifecycleConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                map_size: 35,
                seed: 54,
                herbivores: 30,
                carnivores: 8,
                omnivores: 12,
                water_threshold: 0.25,
            },
            climate: ClimateConfig {
                equator_temp: 30.0,
                pole_temp: -40.0,
                altitude_lapse: 6.5,
                max_rainfall: 325.0,
            },
            lifecycle: LifecycleConfig {
                maturity_age: 10,
                max_age: 1000,
                extinction_threshold: 5,
                relief_count: 10,
            },
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file, writing the defaults out when
    /// the file is missing.
    pub fn load(path: &str) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
        let default = Self::default();
        if !Path::new(path).exists() {
            if let Ok(toml_str) = toml::to_string(&default) {
                let _ = fs::write(path, toml_str);
            }
        }
        default
    }
}
