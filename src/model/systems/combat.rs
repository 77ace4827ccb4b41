//! Predation: a three-stage detect / evade / resolve state machine.

use crate::model::state::creature::Creature;
use crate::model::state::resources::TileResources;
use rand::Rng;

/// Share of a kill left on the tile as carrion.
const CARRION_FRACTION: f32 = 0.2;

/// How the attack opens, decided by the two detection rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackState {
    /// The predator never saw the prey; nothing happens.
    NoAction,
    /// The prey never saw the predator; attack power doubles.
    Ambush,
    /// Both sides aware.
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatResult {
    PredatorWins,
    PreyWins,
    NoAction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatOutcome {
    pub result: CombatResult,
    pub attack_state: AttackState,
    pub prey_escaped: bool,
}

impl CombatOutcome {
    fn no_action() -> Self {
        Self {
            result: CombatResult::NoAction,
            attack_state: AttackState::NoAction,
            prey_escaped: false,
        }
    }
}

/// Chance (0-100) that `observer` spots `target`. Stealth counts for more
/// against prey smaller than the observer and for less against bigger prey.
pub fn detection_chance(observer: &Creature, target: &Creature) -> f32 {
    let size_ratio = target.stats.size / observer.stats.size;
    let chance = observer.stats.perception - target.stats.stealth * (2.0 - size_ratio);
    chance.clamp(10.0, 90.0)
}

/// Chance (0-100) that the prey breaks away before the fight, from relative
/// speed plus a bonus for having seen the predator coming.
pub fn evasion_chance(prey: &Creature, predator: &Creature, prey_detected_predator: bool) -> f32 {
    let total_speed = prey.stats.speed + predator.stats.speed;
    let mut chance = (prey.stats.speed / total_speed) * 100.0;
    if prey_detected_predator {
        chance += 10.0;
    }
    chance.clamp(10.0, 80.0)
}

/// Precomputed odds for a matchup, for observers and tooling. Uses the
/// no-awareness evasion figure; the live state machine adds the bonus when
/// the prey actually spots the attacker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatPreview {
    pub attack_power: f32,
    pub defense_power: f32,
    pub detection_chance: f32,
    pub evasion_chance: f32,
}

pub fn preview(predator: &Creature, prey: &Creature) -> CombatPreview {
    CombatPreview {
        attack_power: predator.stats.attack_power(),
        defense_power: prey.stats.size * prey.stats.diet_modifier(),
        detection_chance: detection_chance(predator, prey),
        evasion_chance: evasion_chance(prey, predator, false),
    }
}

/// Attack power brought into the resolution roll; an ambush doubles it,
/// once.
pub fn effective_attack(predator: &Creature, attack_state: AttackState) -> f32 {
    let attack = predator.stats.attack_power();
    if attack_state == AttackState::Ambush {
        attack * 2.0
    } else {
        attack
    }
}

fn detect<R: Rng>(observer: &Creature, target: &Creature, rng: &mut R) -> bool {
    rng.gen_range(0.0..100.0) < detection_chance(observer, target)
}

/// Run the full hunt state machine. Pure decision: mutations happen in
/// [`apply_outcome`].
pub fn attempt_hunt<R: Rng>(predator: &Creature, prey: &Creature, rng: &mut R) -> CombatOutcome {
    if predator.stats.diet <= 0 || !prey.can_be_eaten_by(predator) {
        return CombatOutcome::no_action();
    }

    // S0: the predator has to find the prey at all.
    if !detect(predator, prey, rng) {
        return CombatOutcome::no_action();
    }

    // S1: whether the prey saw it coming decides ambush vs. a fair fight.
    let prey_detected = detect(prey, predator, rng);
    let attack_state = if prey_detected {
        AttackState::Normal
    } else {
        AttackState::Ambush
    };

    // S2: a fast prey may simply outrun the whole encounter.
    if rng.gen_range(0.0..100.0) < evasion_chance(prey, predator, prey_detected) {
        return CombatOutcome {
            result: CombatResult::NoAction,
            attack_state,
            prey_escaped: true,
        };
    }

    // S3: weighted roll over attack vs. defense power.
    let attack = effective_attack(predator, attack_state);
    let defense = prey.stats.size * prey.stats.diet_modifier();

    let roll = rng.gen_range(0.0..attack + defense);
    let result = if roll > attack {
        CombatResult::PreyWins
    } else {
        CombatResult::PredatorWins
    };

    CombatOutcome {
        result,
        attack_state,
        prey_escaped: false,
    }
}

/// Apply a kill: the prey dies and is devoured, the predator eats the full
/// yield, and a fifth of it is left on the tile as carrion. Anything other
/// than a predator win changes nothing.
pub fn apply_outcome(
    predator: &mut Creature,
    prey: &mut Creature,
    outcome: &CombatOutcome,
    prey_tile: &mut TileResources,
) {
    if outcome.result != CombatResult::PredatorWins {
        return;
    }
    let meat_yield = prey.meat_yield();
    predator.eat_meat(meat_yield);
    prey.die();
    prey.devoured = true;
    prey_tile.add_meat(meat_yield * CARRION_FRACTION);
}
