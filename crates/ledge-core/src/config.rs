//! Controller configuration.
//!
//! All slope limits are in degrees, all lengths in world units.

use scree::CollisionLayers;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimum number of rays per box edge: one per extreme corner.
pub const MIN_RAY_COUNT: usize = 2;

/// Raise a ray count to at least [`MIN_RAY_COUNT`].
#[must_use]
pub fn clamp_ray_count(count: usize) -> usize {
    count.max(MIN_RAY_COUNT)
}

/// Configuration for a kinematic character controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // ========================================================================
    // Slopes
    // ========================================================================
    /// Steepest slope the actor walks up (degrees). Anything steeper is a wall.
    pub max_climb_angle: f32,

    /// Steepest slope the actor sticks to while walking down (degrees).
    /// 0 disables descent handling entirely.
    pub max_descend_angle: f32,

    /// Tolerance (degrees) when deciding whether two slope angles are the same
    /// surface.
    pub slope_epsilon: f32,

    // ========================================================================
    // Probing
    // ========================================================================
    /// Rays cast along each vertical box edge (clamped to at least 2).
    pub horizontal_ray_count: usize,

    /// Rays cast along each horizontal box edge (clamped to at least 2).
    pub vertical_ray_count: usize,

    /// Inward margin applied to the box before casting rays (world units).
    pub skin_width: f32,

    /// Layers the probes collide with.
    pub collision_mask: CollisionLayers,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_climb_angle: 80.0,
            max_descend_angle: 75.0,
            slope_epsilon: 0.01,
            horizontal_ray_count: 4,
            vertical_ray_count: 4,
            skin_width: 0.001,
            collision_mask: CollisionLayers::MASK_SOLID,
        }
    }
}

impl ControllerConfig {
    /// Config without slope descent: walking off a downward slope falls off
    /// it instead of following the surface.
    #[must_use]
    pub fn without_descent() -> Self {
        Self {
            max_descend_angle: 0.0,
            ..Default::default()
        }
    }

    /// Load and validate a config from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON, or a validation error
    /// from [`ControllerConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable.
    ///
    /// Ray counts are not checked here; they are clamped when spacing is
    /// computed.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.skin_width.is_finite() || self.skin_width <= 0.0 {
            return Err(ConfigError::InvalidSkinWidth(self.skin_width));
        }
        for (name, value) in [
            ("max_climb_angle", self.max_climb_angle),
            ("max_descend_angle", self.max_descend_angle),
        ] {
            if !(0.0..=90.0).contains(&value) {
                return Err(ConfigError::AngleOutOfRange { name, value });
            }
        }
        if !self.slope_epsilon.is_finite() || self.slope_epsilon < 0.0 {
            return Err(ConfigError::InvalidSlopeEpsilon(self.slope_epsilon));
        }
        Ok(())
    }

    /// Whether slope descent is active.
    #[must_use]
    pub fn descent_enabled(&self) -> bool {
        self.max_descend_angle > 0.0
    }

    /// Whether two slope angles describe the same surface.
    #[must_use]
    pub fn same_slope(&self, a: f32, b: f32) -> bool {
        (a - b).abs() <= self.slope_epsilon
    }

    /// Ray counts after clamping to [`MIN_RAY_COUNT`].
    #[must_use]
    pub fn clamped_ray_counts(&self) -> (usize, usize) {
        (
            clamp_ray_count(self.horizontal_ray_count),
            clamp_ray_count(self.vertical_ray_count),
        )
    }
}
