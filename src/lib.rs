//! veldt: a turn-based ecological simulation on a hexagonal grid.
//!
//! Creatures with heritable statistics roam a biome-classified hex world,
//! forage, hunt, flee, reproduce, age and die; the population evolves
//! under scarcity, predation and climate. The whole simulation is
//! sequential and deterministic for a given seed.

pub mod app;
pub mod model;

pub use model::config::SimConfig;
pub use model::world::World;
