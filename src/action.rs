//! Action bitmask shared with the embedding host.
//!
//! The flat ABI speaks `u32` bitmasks; inside the crate decisions are the
//! four-flag [`ActionSet`], with checked encode/decode at the boundary.

use serde::{Deserialize, Serialize};

pub const ACTION_NONE: u32 = 0;
pub const ACTION_THRUST: u32 = 1;
pub const ACTION_TURN_LEFT: u32 = 2;
pub const ACTION_TURN_RIGHT: u32 = 4;
pub const ACTION_FIRE: u32 = 8;

const ACTION_MASK: u32 = ACTION_THRUST | ACTION_TURN_LEFT | ACTION_TURN_RIGHT | ACTION_FIRE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    pub thrust: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub fire: bool,
}

impl ActionSet {
    pub const NONE: Self = Self {
        thrust: false,
        turn_left: false,
        turn_right: false,
        fire: false,
    };

    #[inline]
    pub fn encode(self) -> u32 {
        (if self.thrust { ACTION_THRUST } else { 0 })
            | (if self.turn_left { ACTION_TURN_LEFT } else { 0 })
            | (if self.turn_right { ACTION_TURN_RIGHT } else { 0 })
            | (if self.fire { ACTION_FIRE } else { 0 })
    }

    /// Bits outside the four known flags are dropped rather than trusted.
    #[inline]
    pub fn decode(bits: u32) -> Self {
        let bits = bits & ACTION_MASK;
        Self {
            thrust: (bits & ACTION_THRUST) != 0,
            turn_left: (bits & ACTION_TURN_LEFT) != 0,
            turn_right: (bits & ACTION_TURN_RIGHT) != 0,
            fire: (bits & ACTION_FIRE) != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        for bits in 0..=ACTION_MASK {
            assert_eq!(ActionSet::decode(bits).encode(), bits);
        }
    }

    #[test]
    fn decode_masks_unknown_bits() {
        let set = ActionSet::decode(0xFFFF_FFF0 | ACTION_FIRE);
        assert_eq!(set.encode(), ACTION_FIRE);
    }

    #[test]
    fn none_encodes_to_zero() {
        assert_eq!(ActionSet::NONE.encode(), ACTION_NONE);
    }
}
