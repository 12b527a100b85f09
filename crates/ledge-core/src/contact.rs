//! Per-tick contact state.
//!
//! [`ContactState`] is the snapshot a caller reads after every move: which
//! sides are blocked and how the actor is interacting with slopes. It is reset
//! at the start of every move, except for the previous slope angle, which is
//! carried over so the next tick can tell a new slope from the one it is on.

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Contact flags set during one move.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ContactFlags: u8 {
        /// Blocked above (ceiling).
        const ABOVE = 1 << 0;
        /// Standing on something (ground or a slope being climbed/descended).
        const BELOW = 1 << 1;
        /// Blocked on the left.
        const LEFT = 1 << 2;
        /// Blocked on the right.
        const RIGHT = 1 << 3;
        /// Walking up a slope this tick.
        const CLIMBING_SLOPE = 1 << 4;
        /// Following a slope downward this tick.
        const DESCENDING_SLOPE = 1 << 5;
    }
}

/// Contact snapshot produced by one move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactState {
    pub(crate) flags: ContactFlags,
    pub(crate) slope_angle: f32,
    pub(crate) slope_angle_old: f32,
    pub(crate) displacement_old: Vec2,
}

impl ContactState {
    /// Clear all flags and roll the current slope angle into the previous one.
    pub(crate) fn reset(&mut self) {
        self.flags = ContactFlags::empty();
        self.slope_angle_old = self.slope_angle;
        self.slope_angle = 0.0;
    }

    /// All flags.
    #[must_use]
    pub fn flags(&self) -> ContactFlags {
        self.flags
    }

    /// Blocked above.
    #[must_use]
    pub fn above(&self) -> bool {
        self.flags.contains(ContactFlags::ABOVE)
    }

    /// Blocked below.
    #[must_use]
    pub fn below(&self) -> bool {
        self.flags.contains(ContactFlags::BELOW)
    }

    /// Blocked on the left.
    #[must_use]
    pub fn left(&self) -> bool {
        self.flags.contains(ContactFlags::LEFT)
    }

    /// Blocked on the right.
    #[must_use]
    pub fn right(&self) -> bool {
        self.flags.contains(ContactFlags::RIGHT)
    }

    /// Walking up a slope.
    #[must_use]
    pub fn climbing_slope(&self) -> bool {
        self.flags.contains(ContactFlags::CLIMBING_SLOPE)
    }

    /// Following a slope downward.
    #[must_use]
    pub fn descending_slope(&self) -> bool {
        self.flags.contains(ContactFlags::DESCENDING_SLOPE)
    }

    /// Alias for [`below`](Self::below), for jump eligibility checks.
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.below()
    }

    /// Any side is blocked.
    #[must_use]
    pub fn any_collision(&self) -> bool {
        self.flags
            .intersects(ContactFlags::ABOVE | ContactFlags::BELOW | ContactFlags::LEFT | ContactFlags::RIGHT)
    }

    /// Slope angle (degrees) recorded this tick; 0 when not on a slope.
    #[must_use]
    pub fn slope_angle(&self) -> f32 {
        self.slope_angle
    }

    /// Slope angle recorded on the previous tick.
    #[must_use]
    pub fn slope_angle_old(&self) -> f32 {
        self.slope_angle_old
    }

    /// Displacement requested this tick, before any correction.
    #[must_use]
    pub fn requested_displacement(&self) -> Vec2 {
        self.displacement_old
    }
}
