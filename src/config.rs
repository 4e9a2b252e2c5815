//! Tunable parameter table consulted by the decision engine.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SHIP_HIT_RADIUS, DEFAULT_SHIP_MAX_TURN_RATE, DEFAULT_SHIP_MAX_VELOCITY,
    DEFAULT_SHOT_LIFETIME, DEFAULT_SHOT_VELOCITY,
};

/// The five recognized parameters. Discriminants match the host ABI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum ConfigParam {
    ShipMaxTurnRate = 0,
    ShipMaxVelocity = 1,
    ShipHitRadius = 2,
    ShotVelocity = 3,
    ShotLifetime = 4,
}

impl ConfigParam {
    /// Checked conversion from a raw ABI discriminant. Unknown values map to
    /// `None`; callers treat that as a no-op rather than trusting the integer.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::ShipMaxTurnRate),
            1 => Some(Self::ShipMaxVelocity),
            2 => Some(Self::ShipHitRadius),
            3 => Some(Self::ShotVelocity),
            4 => Some(Self::ShotLifetime),
            _ => None,
        }
    }
}

/// Fully populated at construction so the decision engine never reads an
/// unset value. Updates take effect on the next decision, never retroactively.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigTable {
    pub ship_max_turn_rate: f32,
    pub ship_max_velocity: f32,
    pub ship_hit_radius: f32,
    pub shot_velocity: f32,
    pub shot_lifetime: f32,
}

impl Default for ConfigTable {
    fn default() -> Self {
        Self {
            ship_max_turn_rate: DEFAULT_SHIP_MAX_TURN_RATE,
            ship_max_velocity: DEFAULT_SHIP_MAX_VELOCITY,
            ship_hit_radius: DEFAULT_SHIP_HIT_RADIUS,
            shot_velocity: DEFAULT_SHOT_VELOCITY,
            shot_lifetime: DEFAULT_SHOT_LIFETIME,
        }
    }
}

impl ConfigTable {
    /// Overwrites one entry. Non-finite values are replaced by the parameter's
    /// default so downstream arithmetic never sees NaN or infinity.
    pub fn set(&mut self, param: ConfigParam, value: f32) {
        let value = if value.is_finite() {
            value
        } else {
            log::debug!("non-finite config value for {param:?}, restoring default");
            Self::default_for(param)
        };
        match param {
            ConfigParam::ShipMaxTurnRate => self.ship_max_turn_rate = value,
            ConfigParam::ShipMaxVelocity => self.ship_max_velocity = value,
            ConfigParam::ShipHitRadius => self.ship_hit_radius = value,
            ConfigParam::ShotVelocity => self.shot_velocity = value,
            ConfigParam::ShotLifetime => self.shot_lifetime = value,
        }
    }

    fn default_for(param: ConfigParam) -> f32 {
        match param {
            ConfigParam::ShipMaxTurnRate => DEFAULT_SHIP_MAX_TURN_RATE,
            ConfigParam::ShipMaxVelocity => DEFAULT_SHIP_MAX_VELOCITY,
            ConfigParam::ShipHitRadius => DEFAULT_SHIP_HIT_RADIUS,
            ConfigParam::ShotVelocity => DEFAULT_SHOT_VELOCITY,
            ConfigParam::ShotLifetime => DEFAULT_SHOT_LIFETIME,
        }
    }
}
