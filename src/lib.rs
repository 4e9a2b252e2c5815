//! Deterministic multi-instance autopilot decision core.
//!
//! A host simulation owns physics, rendering and the tick loop. Each tick it
//! clears this crate's world table, streams ship/shot/score telemetry for
//! every agent instance, then asks for one four-flag action bitmask (thrust,
//! turn-left, turn-right, fire) per agent. Each of an agent's simulated
//! instances votes independently from its own telemetry; flags pass by strict
//! majority, with exact-half ties resolved by the context's seeded RNG so a
//! fixed seed and call script replay bit for bit.
//!
//! The crate builds as both `rlib` (Rust hosts, tests) and `cdylib`
//! ([`ffi`] exposes the flat C surface an embedding host links against).
//! A single [`Context`] assumes strictly sequential use; independent
//! contexts share nothing and may live on separate threads.

pub mod action;
pub mod config;
pub mod constants;
pub mod context;
pub mod decision;
pub mod ffi;
pub mod rng;
pub mod world;

pub use action::{
    ActionSet, ACTION_FIRE, ACTION_NONE, ACTION_THRUST, ACTION_TURN_LEFT, ACTION_TURN_RIGHT,
};
pub use config::{ConfigParam, ConfigTable};
pub use context::Context;
pub use world::{ShipState, ShotState};
