//! The per-turn pipeline. The pass order here is normative: resources,
//! scents, creature bookkeeping, actions, newborns, metabolism, deaths,
//! cleanup, extinction relief.

use crate::model::hex::Hex;
use crate::model::history::{DeathCause, SimEvent};
use crate::model::state::creature::{Creature, Priority};
use crate::model::state::scent::ScentType;
use crate::model::systems::{combat, feeding, metabolism, population, reproduction};
use crate::model::world::World;
use rand::seq::SliceRandom;

impl World {
    /// Run one atomic turn. A paused world ignores the call.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }
        self.turn += 1;

        self.pass_resources();
        self.scents.update();
        let can_act = self.pass_creature_update();
        let newborns = self.pass_actions(&can_act);
        self.creatures.extend(newborns);
        self.pass_metabolism();
        self.pass_age_deaths();
        let removed = metabolism::cleanup_dead(&mut self.creatures, &mut self.map);
        self.pass_extinction_relief();

        tracing::debug!(
            turn = self.turn,
            alive = self.creatures.len(),
            deaths = removed,
            scents = self.scents.len(),
            "turn complete"
        );
    }

    /// Run `n` turns back to back.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    fn pass_resources(&mut self) {
        for (_, tile) in self.map.iter_mut() {
            tile.resources.grow_plants();
            tile.resources.decay_meat();
        }
    }

    /// Age everyone and advance movement. Returns, per index, whether the
    /// creature may act this turn: creatures in transit sit out, and so
    /// does anyone arriving right now.
    fn pass_creature_update(&mut self) -> Vec<bool> {
        let mut can_act = vec![false; self.creatures.len()];
        for (idx, creature) in self.creatures.iter_mut().enumerate() {
            if !creature.is_alive {
                continue;
            }
            creature.age += 1;

            if creature.is_moving {
                creature.movement_cooldown = creature.movement_cooldown.saturating_sub(1);
                if creature.movement_cooldown == 0 {
                    creature.position = creature.target_position;
                    creature.is_moving = false;
                }
                continue;
            }
            can_act[idx] = true;
        }
        can_act
    }

    /// Dispatch one action per eligible creature, in a fresh random order
    /// each turn so same-tile conflicts carry no iteration bias. Newborns
    /// are returned for deferred insertion.
    fn pass_actions(&mut self, can_act: &[bool]) -> Vec<Creature> {
        let mut order: Vec<usize> = (0..self.creatures.len()).collect();
        order.shuffle(&mut self.rng);

        let mut newborns = Vec::new();
        for idx in order {
            if !can_act[idx] || !self.creatures[idx].is_alive {
                continue;
            }
            match self.creatures[idx].current_priority() {
                Priority::Hunger => self.act_on_hunger(idx),
                Priority::Thirst => self.act_on_thirst(idx),
                Priority::Love => self.act_on_love(idx, &mut newborns),
                Priority::None => {}
            }
        }
        newborns
    }

    fn act_on_hunger(&mut self, idx: usize) {
        // Carnivores try live prey on their own tile before scavenging.
        if self.creatures[idx].stats.is_carnivore() {
            if let Some(prey_idx) = self.find_local_prey(idx) {
                let outcome = combat::attempt_hunt(
                    &self.creatures[idx],
                    &self.creatures[prey_idx],
                    &mut self.rng,
                );
                if outcome.result == combat::CombatResult::PredatorWins {
                    let prey_position = self.creatures[prey_idx].position;
                    if let Some(tile) = self.map.get_mut(prey_position) {
                        let (predator, prey) = pair_mut(&mut self.creatures, idx, prey_idx);
                        combat::apply_outcome(predator, prey, &outcome, &mut tile.resources);
                    }
                    let prey = &self.creatures[prey_idx];
                    if !prey.is_alive {
                        self.events.record(SimEvent::Death {
                            id: prey.id,
                            cause: DeathCause::Predation,
                            age: prey.age,
                            turn: self.turn,
                        });
                    }
                    return;
                }
                if outcome.prey_escaped {
                    let predator_id = self.creatures[idx].id;
                    let prey = &self.creatures[prey_idx];
                    self.events.record(SimEvent::PreyEscaped {
                        predator: predator_id,
                        prey: prey.id,
                        turn: self.turn,
                    });
                    self.scents
                        .deposit(prey.position, prey.id, ScentType::Fear);
                }
            }
        }

        let outcome = feeding::try_feed(&mut self.creatures[idx], &mut self.map, &mut self.rng);
        if outcome.needs_to_move {
            if let Some(target) = outcome.target {
                self.initiate_movement(idx, target);
            }
        }
    }

    fn act_on_thirst(&mut self, idx: usize) {
        let outcome = feeding::seek_water(&mut self.creatures[idx], &mut self.map);
        if outcome.needs_to_move {
            if let Some(target) = outcome.target {
                self.initiate_movement(idx, target);
            }
        }
    }

    fn act_on_love(&mut self, idx: usize, newborns: &mut Vec<Creature>) {
        let position = self.creatures[idx].position;
        let id = self.creatures[idx].id;

        // Advertise first; scent-range courting depends on the trail.
        self.scents.deposit(position, id, ScentType::Mating);

        let Some(mate_idx) = reproduction::find_mate(idx, &self.creatures, &self.scents) else {
            return;
        };
        let mate_position = self.creatures[mate_idx].position;

        if mate_position == position {
            if !self.creatures[idx].can_reproduce() || !self.creatures[mate_idx].can_reproduce() {
                return;
            }
            let child_id = self.allocate_id();
            let child = reproduction::make_offspring(
                child_id,
                &self.creatures[idx],
                &self.creatures[mate_idx],
                &mut self.rng,
            );
            self.events.record(SimEvent::Birth {
                id: child_id,
                parents: (id, self.creatures[mate_idx].id),
                generation: child.generation,
                turn: self.turn,
            });
            newborns.push(child);

            let (parent, partner) = pair_mut(&mut self.creatures, idx, mate_idx);
            parent.needs.pay_reproduction_cost();
            parent.needs.reduce_love(80.0);
            partner.needs.pay_reproduction_cost();
            partner.needs.reduce_love(80.0);

            self.scents.deposit(position, id, ScentType::Mating);
        } else {
            self.initiate_movement(idx, mate_position);
        }
    }

    /// First prey candidate sharing the predator's tile, in enumeration
    /// order.
    fn find_local_prey(&self, predator_idx: usize) -> Option<usize> {
        let predator = &self.creatures[predator_idx];
        self.creatures.iter().position(|c| {
            c.id != predator.id && c.position == predator.position && c.can_be_eaten_by(predator)
        })
    }

    /// Start moving toward `target`. A non-adjacent target becomes a greedy
    /// single step: the existing neighbor that closes the most distance,
    /// ties broken by direction order. A Movement scent marks the origin.
    fn initiate_movement(&mut self, idx: usize, target: Hex) {
        let position = self.creatures[idx].position;
        if target == position {
            return;
        }

        let step = if position.distance(target) == 1 {
            self.map.contains(target).then_some(target)
        } else {
            let mut best = None;
            let mut best_distance = position.distance(target);
            for neighbor in position.neighbors() {
                if !self.map.contains(neighbor) {
                    continue;
                }
                let d = neighbor.distance(target);
                if d < best_distance {
                    best_distance = d;
                    best = Some(neighbor);
                }
            }
            best
        };

        if let Some(next) = step {
            let id = self.creatures[idx].id;
            if self.creatures[idx].start_move(next) {
                self.scents.deposit(position, id, ScentType::Movement);
            }
        }
    }

    fn pass_metabolism(&mut self) {
        let turn = self.turn;
        for creature in &mut self.creatures {
            let was_alive = creature.is_alive;
            metabolism::update_creature(creature);
            if was_alive && !creature.is_alive {
                let cause = if creature.needs.hunger >= 100.0 {
                    DeathCause::Starvation
                } else {
                    DeathCause::Dehydration
                };
                self.events.record(SimEvent::Death {
                    id: creature.id,
                    cause,
                    age: creature.age,
                    turn,
                });
            }
        }
    }

    fn pass_age_deaths(&mut self) {
        let turn = self.turn;
        let max_age = self.config.lifecycle.max_age;
        for creature in &mut self.creatures {
            if creature.is_alive && creature.age >= max_age {
                creature.die();
                self.events.record(SimEvent::Death {
                    id: creature.id,
                    cause: DeathCause::OldAge,
                    age: creature.age,
                    turn,
                });
            }
        }
    }

    /// Keep the world inhabited: when almost everyone is gone, inject a
    /// balanced batch of preset creatures.
    fn pass_extinction_relief(&mut self) {
        let alive = self.alive_count();
        if alive >= self.config.lifecycle.extinction_threshold {
            return;
        }
        let count = self.config.lifecycle.relief_count;
        tracing::info!(
            turn = self.turn,
            alive,
            spawning = count,
            "population collapsed, spawning relief batch"
        );
        for i in 0..count {
            let stats = population::relief_stats(i, &mut self.rng);
            let position = population::find_spawn_position(&self.map, &mut self.rng);
            let _ = self.spawn_creature(position, stats);
        }
        self.events.record(SimEvent::ExtinctionRelief {
            spawned: count,
            turn: self.turn,
        });
    }
}

/// Disjoint mutable references to two creatures in the live vector.
fn pair_mut(creatures: &mut [Creature], a: usize, b: usize) -> (&mut Creature, &mut Creature) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = creatures.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = creatures.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
