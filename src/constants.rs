//! Tuning constants for the decision heuristic and telemetry storage.

/// Ticks of shot travel folded into the effective threat radius.
pub const THREAT_HORIZON_TICKS: f32 = 3.0;

/// Shots retained per instance per tick; the oldest entry is evicted when full.
pub const SHOT_RING_CAPACITY: usize = 32;

/// Cruise thrust duty cycle: thrust for this many ticks, then coast as long.
pub const CRUISE_PULSE_TICKS: u32 = 8;

/// Maps the configured shot lifetime to a trigger cadence in ticks.
pub const FIRE_CADENCE_DIVISOR: f32 = 16.0;

/// Ceiling on the wander-turn probability, in percent.
pub const WANDER_TURN_MAX_PCT: u32 = 45;

/// Relative bearings closer to the nose than this are treated as dead ahead.
pub const DEAD_AHEAD_EPSILON: f32 = 1e-3;

// Configuration defaults, single-precision in host units.
pub const DEFAULT_SHIP_MAX_TURN_RATE: f32 = 0.1;
pub const DEFAULT_SHIP_MAX_VELOCITY: f32 = 4.0;
pub const DEFAULT_SHIP_HIT_RADIUS: f32 = 12.0;
pub const DEFAULT_SHOT_VELOCITY: f32 = 6.0;
pub const DEFAULT_SHOT_LIFETIME: f32 = 60.0;
