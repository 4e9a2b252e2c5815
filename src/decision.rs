//! Per-instance heuristic and cross-instance vote aggregation.
//!
//! Each live instance produces an independent candidate action from its own
//! telemetry; the agent's result sets each flag iff a strict majority of live
//! instances set it, with exact-half ties resolved by an RNG coin so neither
//! outcome is silently favored.
//!
//! RNG draw budget per `decide_agent` call: one jitter draw per live
//! instance, plus one draw when an evading instance has the threat dead
//! ahead, plus one draw per tied vote flag. A fully dead agent draws nothing.

use crate::action::ActionSet;
use crate::config::ConfigTable;
use crate::constants::{
    CRUISE_PULSE_TICKS, DEAD_AHEAD_EPSILON, FIRE_CADENCE_DIVISOR, THREAT_HORIZON_TICKS,
    WANDER_TURN_MAX_PCT,
};
use crate::rng::SeededRng;
use crate::world::{AgentSlot, Instance};

pub fn decide_agent(
    agent: &AgentSlot,
    cfg: &ConfigTable,
    tick: u32,
    rng: &mut SeededRng,
) -> ActionSet {
    let mut live = 0u32;
    let mut votes = [0u32; 4];

    for instance in agent.instances() {
        if instance.ship.hp <= 0 {
            continue;
        }
        live += 1;
        let candidate = decide_instance(instance, cfg, tick, rng);
        for (tally, flag) in votes.iter_mut().zip(flags(candidate)) {
            *tally += u32::from(flag);
        }
    }

    if live == 0 {
        return ActionSet::NONE;
    }

    let mut result = [false; 4];
    for (bit, tally) in result.iter_mut().zip(votes) {
        *bit = if tally * 2 == live {
            rng.coin()
        } else {
            tally * 2 > live
        };
    }
    ActionSet {
        thrust: result[0],
        turn_left: result[1],
        turn_right: result[2],
        fire: result[3],
    }
}

fn flags(set: ActionSet) -> [bool; 4] {
    [set.thrust, set.turn_left, set.turn_right, set.fire]
}

fn decide_instance(
    instance: &Instance,
    cfg: &ConfigTable,
    tick: u32,
    rng: &mut SeededRng,
) -> ActionSet {
    // Drawn unconditionally so the stream shape per live instance is stable.
    let jitter = rng.next();

    match nearest_threat(instance, cfg) {
        Some(threat) => evade(threat, cfg, rng),
        None => cruise(cfg, tick, jitter),
    }
}

/// Relative bearing (radians, wrapped to ±π) from the ship's nose to the
/// nearest live shot that is both inside the threat radius and closing.
struct Threat {
    relative_bearing: f32,
}

fn nearest_threat(instance: &Instance, cfg: &ConfigTable) -> Option<Threat> {
    let ship = instance.ship;
    let threat_radius = cfg.ship_hit_radius + cfg.shot_velocity * THREAT_HORIZON_TICKS;
    let mut nearest: Option<(f32, f32)> = None;

    for shot in instance.shots.iter() {
        if shot.lifetime <= 0 {
            continue;
        }
        let dx = shot.x - ship.x;
        let dy = shot.y - ship.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > threat_radius {
            continue;
        }
        // Closing test: the shot's velocity must point toward the ship.
        let closing = shot.heading.cos() * -dx + shot.heading.sin() * -dy;
        if closing <= 0.0 {
            continue;
        }
        if nearest.map_or(true, |(best, _)| distance < best) {
            let bearing = dy.atan2(dx);
            nearest = Some((distance, wrap_angle(bearing - ship.heading)));
        }
    }

    nearest.map(|(_, relative_bearing)| Threat { relative_bearing })
}

fn evade(threat: Threat, cfg: &ConfigTable, rng: &mut SeededRng) -> ActionSet {
    let rel = threat.relative_bearing;

    // Turn away from the threat side; dead ahead is genuinely ambiguous, so
    // the side is drawn rather than biased.
    let turn_right = if rel > DEAD_AHEAD_EPSILON {
        true
    } else if rel < -DEAD_AHEAD_EPSILON {
        false
    } else {
        rng.coin()
    };

    // Outrunnable shots (or anything already behind) get flight thrust; a
    // faster shot ahead is dodged by turning alone.
    let thrust = cfg.shot_velocity <= cfg.ship_max_velocity || rel.cos() < 0.0;

    ActionSet {
        thrust,
        turn_left: !turn_right,
        turn_right,
        fire: false,
    }
}

fn cruise(cfg: &ConfigTable, tick: u32, jitter: u32) -> ActionSet {
    let thrust = (tick / CRUISE_PULSE_TICKS) % 2 == 0;

    // Slower shots mean longer time-on-target, so the trigger cadence scales
    // with the configured shot lifetime.
    let cadence = (cfg.shot_lifetime / FIRE_CADENCE_DIVISOR).max(1.0) as u32;
    let fire = tick % cadence == 0;

    // Wander: occasional random turn, likelier for nimbler ships.
    let wander_pct = (cfg.ship_max_turn_rate * 100.0)
        .clamp(0.0, WANDER_TURN_MAX_PCT as f32) as u32;
    let wander = jitter % 100 < wander_pct;
    let turn_right = wander && (jitter >> 16) & 1 == 1;
    let turn_left = wander && !turn_right;

    ActionSet {
        thrust,
        turn_left,
        turn_right,
        fire,
    }
}

fn wrap_angle(angle: f32) -> f32 {
    let mut wrapped = angle % core::f32::consts::TAU;
    if wrapped > core::f32::consts::PI {
        wrapped -= core::f32::consts::TAU;
    } else if wrapped < -core::f32::consts::PI {
        wrapped += core::f32::consts::TAU;
    }
    wrapped
}
