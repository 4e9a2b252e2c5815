//! Owned per-population state: telemetry table, config, RNG, decision entry.
//!
//! One `Context` serves one simulated population, driven sequentially by its
//! host (clear → updates → one `make_action` per agent, every tick). There is
//! no process-wide state; independent contexts on separate threads never
//! interact.

use crate::action::{ActionSet, ACTION_NONE};
use crate::config::{ConfigParam, ConfigTable};
use crate::decision::decide_agent;
use crate::rng::SeededRng;
use crate::world::WorldTable;

pub struct Context {
    n_agents: u32,
    multiplicity: u32,
    config: ConfigTable,
    rng: SeededRng,
    world: WorldTable,
}

impl Context {
    /// Fully initializes or fails: `None` on zero sizing, never a partially
    /// constructed context. All telemetry starts zeroed, config at defaults,
    /// RNG seeded once.
    pub fn new(n_agents: u32, agent_multiplicity: u32, seed: u32) -> Option<Self> {
        if n_agents == 0 || agent_multiplicity == 0 {
            log::debug!(
                "rejecting context sizing n_agents={n_agents} multiplicity={agent_multiplicity}"
            );
            return None;
        }
        Some(Self {
            n_agents,
            multiplicity: agent_multiplicity,
            config: ConfigTable::default(),
            rng: SeededRng::new(seed),
            world: WorldTable::new(n_agents as usize, agent_multiplicity as usize),
        })
    }

    pub fn n_agents(&self) -> u32 {
        self.n_agents
    }

    pub fn agent_multiplicity(&self) -> u32 {
        self.multiplicity
    }

    /// RNG state, exposed so hosts and tests can audit draw consumption.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    pub fn config(&self) -> &ConfigTable {
        &self.config
    }

    pub fn set_config_parameter(&mut self, param: ConfigParam, value: f32) {
        self.config.set(param, value);
    }

    /// Host calls this exactly once per tick before streaming updates.
    pub fn clear_world_state(&mut self) {
        self.world.clear_tick();
    }

    pub fn update_ship(&mut self, agent_id: u32, hp: i32, x: f32, y: f32, heading: f32) {
        self.world.update_ship(agent_id, hp, x, y, heading);
    }

    pub fn update_shot(&mut self, agent_id: u32, lifetime: i32, x: f32, y: f32, heading: f32) {
        self.world.update_shot(agent_id, lifetime, x, y, heading);
    }

    pub fn update_score(&mut self, agent_id: u32, score: i32) {
        self.world.update_score(agent_id, score);
    }

    /// Aggregated action bitmask for one agent at the given host tick.
    ///
    /// Out-of-range ids and fully dead agents return `ACTION_NONE` without
    /// advancing the RNG, so misdirected queries cannot desync a replay.
    pub fn make_action(&mut self, agent_id: u32, tick: u32) -> u32 {
        let Some(agent) = self.world.agent(agent_id) else {
            log::debug!("agent_id {agent_id} out of range, returning ACTION_NONE");
            return ACTION_NONE;
        };
        decide_agent(agent, &self.config, tick, &mut self.rng).encode()
    }

    /// Same as [`make_action`](Self::make_action) but keeps the structured
    /// form, for hosts that stay on the Rust side of the boundary.
    pub fn make_action_set(&mut self, agent_id: u32, tick: u32) -> ActionSet {
        ActionSet::decode(self.make_action(agent_id, tick))
    }
}
