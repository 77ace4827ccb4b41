//! Mate search, compatibility and offspring creation.

use crate::model::state::creature::{Creature, Stats};
use crate::model::state::scent::{ScentField, ScentType};
use rand::Rng;

/// How far a creature looks for a partner directly.
pub const MATE_SEARCH_RADIUS: u32 = 3;
/// How far mating scents extend the search.
pub const SCENT_SEARCH_RADIUS: u32 = 5;

/// Two creatures can breed when their diets are close and their sizes are
/// within about 30% of each other.
pub fn compatible(a: &Stats, b: &Stats) -> bool {
    if (a.diet - b.diet).abs() > 40 {
        return false;
    }
    let size_ratio = a.size / b.size;
    (0.7..=1.43).contains(&size_ratio)
}

/// Find the index of the best partner for `creatures[seeker]`: the nearest
/// compatible candidate within range, falling back to a mating-scent search
/// when nobody is close. Ties go to enumeration order.
pub fn find_mate(seeker: usize, creatures: &[Creature], scents: &ScentField) -> Option<usize> {
    let me = &creatures[seeker];

    let mut best: Option<(u32, usize)> = None;
    for (idx, other) in creatures.iter().enumerate() {
        if idx == seeker || !other.can_reproduce() {
            continue;
        }
        let distance = me.position.distance(other.position);
        if distance > MATE_SEARCH_RADIUS || !compatible(&me.stats, &other.stats) {
            continue;
        }
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, idx));
        }
    }
    if best.is_some() {
        return best.map(|(_, idx)| idx);
    }

    // Nobody nearby: follow mating trails instead.
    for scent in scents.of_type(me.position, ScentType::Mating, SCENT_SEARCH_RADIUS) {
        if !scent.detectable_by(me.stats.perception, 0) {
            continue;
        }
        let Some(idx) = creatures
            .iter()
            .position(|c| c.id == scent.creature_id && c.is_alive)
        else {
            continue;
        };
        if idx == seeker || !compatible(&me.stats, &creatures[idx].stats) {
            continue;
        }
        let distance = me.position.distance(creatures[idx].position);
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, idx));
        }
    }
    best.map(|(_, idx)| idx)
}

/// Build the offspring of two parents: averaged stats with a one-in-three
/// chance of a single mutation, newborn needs, and a generation one past
/// the older lineage. Born on the acting parent's tile.
pub fn make_offspring<R: Rng>(
    id: u64,
    parent_a: &Creature,
    parent_b: &Creature,
    rng: &mut R,
) -> Creature {
    let mut stats = Stats::inherit(&parent_a.stats, &parent_b.stats);
    stats.try_mutate(rng);

    let generation = parent_a.generation.max(parent_b.generation) + 1;
    Creature::new(
        id,
        parent_a.position,
        stats,
        generation,
        parent_a.maturity_age,
    )
}
