//! Creature state: heritable stats, needs, lifecycle and movement.

use crate::model::hex::Hex;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Reference speed: a creature this fast crosses one hex in
/// [`BASE_MOVEMENT_TURNS`] turns.
pub const BASE_SPEED: f32 = 10.0;
pub const BASE_MOVEMENT_TURNS: f32 = 3.0;

/// Heritable, mutable statistics. Everything selection acts on lives here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// [1, 100]. Drives attack power, meat yield and metabolic cost.
    pub size: f32,
    /// [1, 100]. Drives evasion and movement time.
    pub speed: f32,
    /// [1, 100]. Drives how fast the urge to mate builds.
    pub reproduction_rate: f32,
    /// [-99, 99]: negative herbivore, positive carnivore, |d| < 20 omnivore.
    pub diet: i32,
    /// [0, 100]. Harder to detect, but slower to move.
    pub stealth: f32,
    /// [0, 100]. Better detection at a metabolic cost.
    pub perception: f32,
}

/// The stats a mutation can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutableStat {
    Size,
    Speed,
    ReproductionRate,
    Diet,
    Stealth,
    Perception,
}

impl MutableStat {
    const ALL: [MutableStat; 6] = [
        MutableStat::Size,
        MutableStat::Speed,
        MutableStat::ReproductionRate,
        MutableStat::Diet,
        MutableStat::Stealth,
        MutableStat::Perception,
    ];
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            size: 10.0,
            speed: 10.0,
            reproduction_rate: 10.0,
            diet: 0,
            stealth: 10.0,
            perception: 10.0,
        }
    }
}

impl Stats {
    /// Force every field back into its valid range.
    pub fn clamp_values(&mut self) {
        self.size = self.size.clamp(1.0, 100.0);
        self.speed = self.speed.clamp(1.0, 100.0);
        self.reproduction_rate = self.reproduction_rate.clamp(1.0, 100.0);
        self.diet = self.diet.clamp(-99, 99);
        self.stealth = self.stealth.clamp(0.0, 100.0);
        self.perception = self.perception.clamp(0.0, 100.0);
    }

    /// Diet mapped onto [0, 1]: 0 pure herbivore, 1 pure carnivore.
    pub fn diet_modifier(&self) -> f32 {
        (self.diet as f32 + 99.0) / 198.0
    }

    pub fn is_herbivore(&self) -> bool {
        self.diet < 0
    }

    pub fn is_carnivore(&self) -> bool {
        self.diet > 0
    }

    pub fn is_omnivore(&self) -> bool {
        self.diet.abs() < 20
    }

    pub fn attack_power(&self) -> f32 {
        self.size * self.diet_modifier()
    }

    /// Largest prey this creature can take on; herbivores do not hunt.
    /// Scales from 1.5x size for a barely-carnivorous diet up to 2x.
    pub fn max_prey_size(&self) -> f32 {
        if self.diet <= 0 {
            return 0.0;
        }
        self.size * (1.0 + self.diet_modifier())
    }

    /// Baseline need growth per turn.
    pub fn base_metabolic_rate(&self) -> f32 {
        self.size * 0.1 + self.perception * 0.05
    }

    /// Multiplier on movement time; full stealth is 50% slower.
    pub fn movement_penalty(&self) -> f32 {
        1.0 + (self.stealth / 100.0) * 0.5
    }

    /// Offspring stats: the per-field arithmetic mean of both parents.
    pub fn inherit(a: &Stats, b: &Stats) -> Stats {
        let mut offspring = Stats {
            size: (a.size + b.size) / 2.0,
            speed: (a.speed + b.speed) / 2.0,
            reproduction_rate: (a.reproduction_rate + b.reproduction_rate) / 2.0,
            diet: (a.diet + b.diet) / 2,
            stealth: (a.stealth + b.stealth) / 2.0,
            perception: (a.perception + b.perception) / 2.0,
        };
        offspring.clamp_values();
        offspring
    }

    /// Perturb one stat: float stats scale by U(0.7, 1.3), diet shifts by
    /// an integer in [-30, 30].
    pub fn mutate<R: Rng>(&mut self, stat: MutableStat, rng: &mut R) {
        let factor = rng.gen_range(0.7..1.3);
        match stat {
            MutableStat::Size => self.size *= factor,
            MutableStat::Speed => self.speed *= factor,
            MutableStat::ReproductionRate => self.reproduction_rate *= factor,
            MutableStat::Diet => self.diet += rng.gen_range(-30..=30),
            MutableStat::Stealth => self.stealth *= factor,
            MutableStat::Perception => self.perception *= factor,
        }
        self.clamp_values();
    }

    /// With probability 1/3, mutate one uniformly chosen stat.
    pub fn try_mutate<R: Rng>(&mut self, rng: &mut R) -> bool {
        if rng.gen_bool(1.0 / 3.0) {
            let stat = MutableStat::ALL[rng.gen_range(0..MutableStat::ALL.len())];
            self.mutate(stat, rng);
            return true;
        }
        false
    }
}

/// The need currently dominating a creature's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Hunger,
    Thirst,
    Love,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Needs {
    /// 0 sated, 100 starving.
    pub hunger: f32,
    /// 0 hydrated, 100 parched.
    pub thirst: f32,
    /// 0 uninterested, 100 seeking a mate.
    pub love: f32,
}

impl Needs {
    /// Starting needs for every freshly created creature.
    pub fn newborn() -> Self {
        Self {
            hunger: 20.0,
            thirst: 20.0,
            love: 0.0,
        }
    }

    /// Plant food sates hunger at double the amount eaten.
    pub fn satisfy_hunger_plant(&mut self, amount: f32) {
        self.hunger = (self.hunger - amount * 2.0).max(0.0);
    }

    /// Meat sates hunger at triple the amount eaten.
    pub fn satisfy_hunger_meat(&mut self, amount: f32) {
        self.hunger = (self.hunger - amount * 3.0).max(0.0);
    }

    /// Water sates thirst at double the amount drunk.
    pub fn satisfy_thirst(&mut self, amount: f32) {
        self.thirst = (self.thirst - amount * 2.0).max(0.0);
    }

    pub fn increase_love(&mut self, amount: f32) {
        self.love = (self.love + amount).min(100.0);
    }

    pub fn reduce_love(&mut self, amount: f32) {
        self.love = (self.love - amount).max(0.0);
    }

    /// Mating is expensive: both parents pay in hunger and thirst.
    pub fn pay_reproduction_cost(&mut self) {
        self.hunger = (self.hunger + 30.0).min(100.0);
        self.thirst = (self.thirst + 20.0).min(100.0);
    }

    pub fn should_die(&self) -> bool {
        self.hunger >= 100.0 || self.thirst >= 100.0
    }

    /// One more bad turn away from dying.
    pub fn is_critical(&self) -> bool {
        self.hunger >= 95.0 || self.thirst >= 95.0
    }

    /// Condition score on [0, 100], 100 being fully sated and hydrated.
    pub fn health_score(&self) -> f32 {
        ((100.0 - self.hunger) + (100.0 - self.thirst)) / 2.0
    }

    /// Pick the dominant need. Immature creatures only weigh survival;
    /// mature ones let a strong urge to mate win when neither hunger nor
    /// thirst is critical.
    pub fn priority(&self, mature: bool) -> Priority {
        if !mature {
            if self.hunger > 50.0 && self.hunger >= self.thirst {
                return Priority::Hunger;
            } else if self.thirst > 50.0 {
                return Priority::Thirst;
            }
            return Priority::None;
        }

        const CRITICAL: f32 = 70.0;
        const LOVE_THRESHOLD: f32 = 60.0;

        if self.hunger >= CRITICAL || self.thirst >= CRITICAL {
            return if self.hunger >= self.thirst {
                Priority::Hunger
            } else {
                Priority::Thirst
            };
        }

        if self.love >= LOVE_THRESHOLD {
            return Priority::Love;
        }

        if self.hunger >= self.thirst && self.hunger >= self.love && self.hunger > 40.0 {
            Priority::Hunger
        } else if self.thirst >= self.hunger && self.thirst >= self.love && self.thirst > 40.0 {
            Priority::Thirst
        } else if self.love > 40.0 {
            Priority::Love
        } else {
            Priority::None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub id: u64,
    pub position: Hex,
    pub stats: Stats,
    pub needs: Needs,
    /// Turns lived.
    pub age: u32,
    pub maturity_age: u32,
    pub generation: u32,
    pub is_moving: bool,
    pub movement_cooldown: u32,
    pub target_position: Hex,
    pub is_alive: bool,
    /// Set when a predator eats the body, so cleanup does not deposit a
    /// second carcass on top of the residual carrion.
    #[serde(default)]
    pub devoured: bool,
}

impl Creature {
    pub fn new(id: u64, position: Hex, stats: Stats, generation: u32, maturity_age: u32) -> Self {
        Self {
            id,
            position,
            stats,
            needs: Needs::newborn(),
            age: 0,
            maturity_age,
            generation,
            is_moving: false,
            movement_cooldown: 0,
            target_position: position,
            is_alive: true,
            devoured: false,
        }
    }

    pub fn is_mature(&self) -> bool {
        self.age >= self.maturity_age
    }

    pub fn can_reproduce(&self) -> bool {
        self.is_mature() && self.is_alive && !self.is_moving
    }

    pub fn current_priority(&self) -> Priority {
        self.needs.priority(self.is_mature())
    }

    /// Begin moving toward an adjacent tile. The cooldown scales base
    /// travel time by speed, then by the stealth penalty, each rounded up,
    /// with a floor of one turn.
    pub fn start_move(&mut self, target: Hex) -> bool {
        if self.is_moving || self.position.distance(target) != 1 {
            return false;
        }
        self.target_position = target;
        self.is_moving = true;

        let base = (BASE_MOVEMENT_TURNS * BASE_SPEED / self.stats.speed).ceil();
        let with_penalty = (base * self.stats.movement_penalty()).ceil() as u32;
        self.movement_cooldown = with_penalty.max(1);
        true
    }

    pub fn eat_plant(&mut self, amount: f32) {
        self.needs.satisfy_hunger_plant(amount);
    }

    pub fn eat_meat(&mut self, amount: f32) {
        self.needs.satisfy_hunger_meat(amount);
    }

    pub fn drink(&mut self, amount: f32) {
        self.needs.satisfy_thirst(amount);
    }

    pub fn die(&mut self) {
        self.is_alive = false;
    }

    /// Meat left behind when this creature dies.
    pub fn meat_yield(&self) -> f32 {
        self.stats.size * 2.0
    }

    /// Whether `predator` is able to take this creature as prey.
    pub fn can_be_eaten_by(&self, predator: &Creature) -> bool {
        self.is_alive && predator.stats.diet > 0 && self.stats.size <= predator.stats.max_prey_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn creature_with(stats: Stats) -> Creature {
        Creature::new(0, Hex::new(0, 0), stats, 0, 10)
    }

    #[test]
    fn clamp_respects_ranges() {
        let mut stats = Stats {
            size: 500.0,
            speed: 0.0,
            reproduction_rate: -3.0,
            diet: 150,
            stealth: -10.0,
            perception: 130.0,
        };
        stats.clamp_values();
        assert_eq!(stats.size, 100.0);
        assert_eq!(stats.speed, 1.0);
        assert_eq!(stats.reproduction_rate, 1.0);
        assert_eq!(stats.diet, 99);
        assert_eq!(stats.stealth, 0.0);
        assert_eq!(stats.perception, 100.0);
    }

    #[test]
    fn diet_modifier_endpoints() {
        let herb = Stats {
            diet: -99,
            ..Stats::default()
        };
        let carn = Stats {
            diet: 99,
            ..Stats::default()
        };
        assert_eq!(herb.diet_modifier(), 0.0);
        assert_eq!(carn.diet_modifier(), 1.0);
        assert_eq!(Stats::default().diet_modifier(), 0.5);
    }

    #[test]
    fn max_prey_size_is_zero_for_herbivores() {
        let herb = Stats {
            diet: -50,
            size: 40.0,
            ..Stats::default()
        };
        assert_eq!(herb.max_prey_size(), 0.0);

        let carn = Stats {
            diet: 99,
            size: 40.0,
            ..Stats::default()
        };
        assert_eq!(carn.max_prey_size(), 80.0);
    }

    #[test]
    fn movement_cooldown_boundaries() {
        let mut c = creature_with(Stats {
            speed: 10.0,
            stealth: 0.0,
            ..Stats::default()
        });
        assert!(c.start_move(Hex::new(1, 0)));
        assert_eq!(c.movement_cooldown, 3);

        let mut c = creature_with(Stats {
            speed: 20.0,
            stealth: 0.0,
            ..Stats::default()
        });
        c.start_move(Hex::new(1, 0));
        assert_eq!(c.movement_cooldown, 2);

        let mut c = creature_with(Stats {
            speed: 10.0,
            stealth: 100.0,
            ..Stats::default()
        });
        c.start_move(Hex::new(1, 0));
        assert_eq!(c.movement_cooldown, 5);

        let mut c = creature_with(Stats {
            speed: 100.0,
            stealth: 0.0,
            ..Stats::default()
        });
        c.start_move(Hex::new(1, 0));
        assert_eq!(c.movement_cooldown, 1);
    }

    #[test]
    fn moving_creatures_cannot_start_again() {
        let mut c = creature_with(Stats::default());
        assert!(c.start_move(Hex::new(1, 0)));
        assert!(!c.start_move(Hex::new(0, 1)));
        assert!(!creature_with(Stats::default()).start_move(Hex::new(2, 0)));
    }

    #[test]
    fn immature_priority_ignores_love() {
        let needs = Needs {
            hunger: 10.0,
            thirst: 10.0,
            love: 95.0,
        };
        assert_eq!(needs.priority(false), Priority::None);
        assert_eq!(needs.priority(true), Priority::Love);
    }

    #[test]
    fn critical_needs_beat_love() {
        let needs = Needs {
            hunger: 75.0,
            thirst: 30.0,
            love: 100.0,
        };
        assert_eq!(needs.priority(true), Priority::Hunger);

        let needs = Needs {
            hunger: 70.0,
            thirst: 71.0,
            love: 100.0,
        };
        assert_eq!(needs.priority(true), Priority::Thirst);
    }

    #[test]
    fn moderate_needs_pick_the_largest_above_forty() {
        let needs = Needs {
            hunger: 45.0,
            thirst: 42.0,
            love: 10.0,
        };
        assert_eq!(needs.priority(true), Priority::Hunger);

        let needs = Needs {
            hunger: 30.0,
            thirst: 30.0,
            love: 30.0,
        };
        assert_eq!(needs.priority(true), Priority::None);
    }

    #[test]
    fn inheritance_averages_parents() {
        let a = Stats {
            size: 10.0,
            speed: 20.0,
            reproduction_rate: 10.0,
            diet: -60,
            stealth: 10.0,
            perception: 10.0,
        };
        let b = Stats {
            size: 20.0,
            speed: 10.0,
            reproduction_rate: 14.0,
            diet: -41,
            stealth: 20.0,
            perception: 16.0,
        };
        let child = Stats::inherit(&a, &b);
        assert_eq!(child.size, 15.0);
        assert_eq!(child.speed, 15.0);
        assert_eq!(child.reproduction_rate, 12.0);
        assert_eq!(child.diet, -50);
        assert_eq!(child.stealth, 15.0);
        assert_eq!(child.perception, 13.0);
    }

    #[test]
    fn mutation_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..200 {
            let mut stats = Stats {
                size: 95.0,
                diet: 90,
                ..Stats::default()
            };
            stats.mutate(MutableStat::Size, &mut rng);
            assert!((1.0..=100.0).contains(&stats.size));
            let mut stats = Stats {
                diet: 90,
                ..Stats::default()
            };
            stats.mutate(MutableStat::Diet, &mut rng);
            assert!((-99..=99).contains(&stats.diet));
        }
    }

    #[test]
    fn newborn_needs_and_costs() {
        let mut needs = Needs::newborn();
        assert_eq!((needs.hunger, needs.thirst, needs.love), (20.0, 20.0, 0.0));
        needs.pay_reproduction_cost();
        assert_eq!((needs.hunger, needs.thirst), (50.0, 40.0));
        needs.satisfy_hunger_meat(10.0);
        assert_eq!(needs.hunger, 20.0);
        needs.satisfy_hunger_plant(20.0);
        assert_eq!(needs.hunger, 0.0);
    }
}
