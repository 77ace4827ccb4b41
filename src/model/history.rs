//! In-memory event journal: what happened, to whom, on which turn.
//!
//! Observers read it between turns; the simulation itself never looks
//! back. Bounded, so a long-running world cannot grow it without limit.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Starvation,
    Dehydration,
    OldAge,
    Predation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum SimEvent {
    Birth {
        id: u64,
        parents: (u64, u64),
        generation: u32,
        turn: u64,
    },
    Death {
        id: u64,
        cause: DeathCause,
        age: u32,
        turn: u64,
    },
    PreyEscaped {
        predator: u64,
        prey: u64,
        turn: u64,
    },
    ExtinctionRelief {
        spawned: usize,
        turn: u64,
    },
}

/// Bounded journal; the oldest entries fall off first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    events: VecDeque<SimEvent>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, event: SimEvent) {
        while self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimEvent> {
        self.events.iter()
    }

    /// The latest `n` events, oldest of them first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &SimEvent> {
        let skip = self.events.len().saturating_sub(n);
        self.events.iter().skip(skip)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
