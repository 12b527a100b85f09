//! Collision layers for query filtering.
//!
//! Every collider carries a layer set; every ray query carries a mask. A
//! collider takes part in a query when the two intersect.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Layer bits describing what a piece of geometry is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CollisionLayers: u32 {
        /// Walkable floors and ramps.
        const GROUND = 1 << 0;
        /// Vertical walls and ceilings.
        const WALLS = 1 << 1;
        /// Floating platforms.
        const PLATFORMS = 1 << 2;
        /// Damaging volumes (spikes, lava).
        const HAZARDS = 1 << 3;
        /// Non-solid trigger regions.
        const TRIGGERS = 1 << 4;

        /// Standard mask for character movement probes.
        const MASK_SOLID = Self::GROUND.bits() | Self::WALLS.bits() | Self::PLATFORMS.bits();
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::GROUND
    }
}
