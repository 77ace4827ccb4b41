//! Time-decaying scent trails for inter-creature tracking.

use crate::model::hex::Hex;
use serde::{Deserialize, Serialize};

/// Default search radius for observer-driven detection queries.
pub const DETECTION_RADIUS: u32 = 2;
/// Default search radius for type-scoped queries.
pub const TYPE_QUERY_RADIUS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScentType {
    /// Ordinary travel.
    Movement,
    /// A fleeing creature; short-lived but strong.
    Fear,
    /// Advertising for a mate; long-lived.
    Mating,
}

impl ScentType {
    pub fn base_intensity(&self) -> f32 {
        match self {
            ScentType::Movement => 100.0,
            ScentType::Fear => 120.0,
            ScentType::Mating => 150.0,
        }
    }

    pub fn max_age(&self) -> u32 {
        match self {
            ScentType::Movement => 5,
            ScentType::Fear => 3,
            ScentType::Mating => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scent {
    pub position: Hex,
    pub creature_id: u64,
    pub scent_type: ScentType,
    pub intensity: f32,
    pub age: u32,
    pub max_age: u32,
}

impl Scent {
    pub fn new(position: Hex, creature_id: u64, scent_type: ScentType) -> Self {
        Self {
            position,
            creature_id,
            scent_type,
            intensity: scent_type.base_intensity(),
            age: 0,
            max_age: scent_type.max_age(),
        }
    }

    /// One turn of fading: geometric decay at rate `1 / max_age`.
    pub fn decay(&mut self) {
        self.age += 1;
        self.intensity -= self.intensity / self.max_age as f32;
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.max_age || self.intensity < 1.0
    }

    /// Intensity as perceived by an observer at the given hex distance.
    pub fn effective_intensity(&self, perception: f32, distance: u32) -> f32 {
        self.intensity * (1.0 + 0.5 * perception / 100.0) - 10.0 * distance as f32
    }

    pub fn detectable_by(&self, perception: f32, distance: u32) -> bool {
        !self.is_expired() && self.effective_intensity(perception, distance) > 20.0
    }
}

/// All active scents in the world. Append-only within a turn; the decay
/// pass ages everything and drops what expired.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScentField {
    scents: Vec<Scent>,
}

impl ScentField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposit(&mut self, position: Hex, creature_id: u64, scent_type: ScentType) {
        self.scents.push(Scent::new(position, creature_id, scent_type));
    }

    /// Age every scent and drop the expired ones.
    pub fn update(&mut self) {
        for scent in &mut self.scents {
            scent.decay();
        }
        self.scents.retain(|s| !s.is_expired());
    }

    /// Scents an observer at `position` can pick up within `radius`,
    /// strongest first.
    pub fn detectable_from(&self, position: Hex, perception: f32, radius: u32) -> Vec<Scent> {
        let mut detected: Vec<Scent> = self
            .scents
            .iter()
            .filter(|s| {
                let distance = position.distance(s.position);
                distance <= radius && s.detectable_by(perception, distance)
            })
            .copied()
            .collect();
        detected.sort_by(|a, b| {
            b.intensity
                .partial_cmp(&a.intensity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        detected
    }

    /// Unsorted scents of one type within `radius` of `position`.
    pub fn of_type(&self, position: Hex, scent_type: ScentType, radius: u32) -> Vec<Scent> {
        self.scents
            .iter()
            .filter(|s| s.scent_type == scent_type && position.distance(s.position) <= radius)
            .copied()
            .collect()
    }

    /// Every trail laid by one creature.
    pub fn of_creature(&self, creature_id: u64) -> Vec<Scent> {
        self.scents
            .iter()
            .filter(|s| s.creature_id == creature_id)
            .copied()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scent> {
        self.scents.iter()
    }

    pub fn as_slice(&self) -> &[Scent] {
        &self.scents
    }

    pub fn len(&self) -> usize {
        self.scents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scents.is_empty()
    }

    pub fn clear(&mut self) {
        self.scents.clear();
    }
}
