//! Simulation systems.
//!
//! Each system is a set of free functions over narrow borrows of world
//! state; the turn pipeline in `model::world` decides when they run:
//!
//! - `feeding`: diet-conditioned food search and consumption
//! - `combat`: predator/prey detection, evasion and resolution
//! - `reproduction`: mate search, compatibility and offspring creation
//! - `metabolism`: need growth, death by need, corpse cleanup
//! - `population`: stat presets, spawn placement, extinction relief

pub mod combat;
pub mod feeding;
pub mod metabolism;
pub mod population;
pub mod reproduction;
