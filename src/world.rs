//! Per-(agent, instance) telemetry storage.
//!
//! The host addresses everything by `agent_id`; routing across an agent's
//! `agent_multiplicity` instance slots is driven by two per-agent cursors:
//!
//! - the ship cursor names the slot the next `update_ship` writes, advancing
//!   (mod multiplicity) after each write;
//! - the association slot names the slot shots and scores attach to: the slot
//!   of the last ship write this tick, or slot 0 before any ship write.
//!
//! Both cursors reset on the per-tick clear. Shot collections are fixed-size
//! rings that evict their oldest entry when full, so the hot path never
//! allocates. Telemetry floats are sanitized at write time; nothing stored
//! here is ever non-finite.

use serde::Serialize;

use crate::constants::SHOT_RING_CAPACITY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ShipState {
    pub hp: i32,
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ShotState {
    pub lifetime: i32,
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

/// Fixed-capacity shot storage. Push beyond capacity overwrites the oldest
/// entry (insertion order), never reallocates.
#[derive(Clone, Debug, Default)]
pub struct ShotRing {
    entries: Vec<ShotState>,
    oldest: usize,
}

impl ShotRing {
    fn with_capacity() -> Self {
        Self {
            entries: Vec::with_capacity(SHOT_RING_CAPACITY),
            oldest: 0,
        }
    }

    pub fn push(&mut self, shot: ShotState) {
        if self.entries.len() < SHOT_RING_CAPACITY {
            self.entries.push(shot);
        } else {
            self.entries[self.oldest] = shot;
            self.oldest = (self.oldest + 1) % SHOT_RING_CAPACITY;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.oldest = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShotState> {
        self.entries.iter()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Instance {
    pub ship: ShipState,
    pub shots: ShotRing,
    pub score: i32,
}

#[derive(Clone, Debug)]
pub struct AgentSlot {
    instances: Vec<Instance>,
    ship_cursor: usize,
    assoc_slot: usize,
}

impl AgentSlot {
    fn new(multiplicity: usize) -> Self {
        let mut instances = Vec::with_capacity(multiplicity);
        for _ in 0..multiplicity {
            instances.push(Instance {
                ship: ShipState::default(),
                shots: ShotRing::with_capacity(),
                score: 0,
            });
        }
        Self {
            instances,
            ship_cursor: 0,
            assoc_slot: 0,
        }
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }
}

pub struct WorldTable {
    agents: Vec<AgentSlot>,
    multiplicity: usize,
}

impl WorldTable {
    pub fn new(n_agents: usize, multiplicity: usize) -> Self {
        let mut agents = Vec::with_capacity(n_agents);
        for _ in 0..n_agents {
            agents.push(AgentSlot::new(multiplicity));
        }
        Self {
            agents,
            multiplicity,
        }
    }

    /// Per-tick reset: shot rings emptied, cursors rewound. Ship pose and
    /// score persist — pose is overwritten by the next update, score is
    /// cumulative.
    pub fn clear_tick(&mut self) {
        for agent in &mut self.agents {
            for instance in &mut agent.instances {
                instance.shots.clear();
            }
            agent.ship_cursor = 0;
            agent.assoc_slot = 0;
        }
    }

    pub fn update_ship(&mut self, agent_id: u32, hp: i32, x: f32, y: f32, heading: f32) {
        let multiplicity = self.multiplicity;
        let Some(agent) = self.agent_mut(agent_id) else {
            return;
        };
        let slot = agent.ship_cursor;
        agent.instances[slot].ship = ShipState {
            hp,
            x: sanitize(x),
            y: sanitize(y),
            heading: sanitize(heading),
        };
        agent.assoc_slot = slot;
        agent.ship_cursor = (slot + 1) % multiplicity;
    }

    pub fn update_shot(&mut self, agent_id: u32, lifetime: i32, x: f32, y: f32, heading: f32) {
        let Some(agent) = self.agent_mut(agent_id) else {
            return;
        };
        let slot = agent.assoc_slot;
        agent.instances[slot].shots.push(ShotState {
            lifetime,
            x: sanitize(x),
            y: sanitize(y),
            heading: sanitize(heading),
        });
    }

    pub fn update_score(&mut self, agent_id: u32, score: i32) {
        let Some(agent) = self.agent_mut(agent_id) else {
            return;
        };
        let slot = agent.assoc_slot;
        agent.instances[slot].score = score;
    }

    pub fn agent(&self, agent_id: u32) -> Option<&AgentSlot> {
        self.agents.get(agent_id as usize)
    }

    fn agent_mut(&mut self, agent_id: u32) -> Option<&mut AgentSlot> {
        let slot = self.agents.get_mut(agent_id as usize);
        if slot.is_none() {
            log::debug!("agent_id {agent_id} out of range, update ignored");
        }
        slot
    }
}

/// Non-finite telemetry is clamped to the origin/zero heading at write time so
/// it can never leak into decision arithmetic.
fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests;
