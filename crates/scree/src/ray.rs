//! Ray hit results.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::world::ColliderId;

/// Nearest intersection reported by a ray query.
///
/// A query that misses returns `None` instead of a hit, so a `RayHit` always
/// describes an actual contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Distance from the ray origin along the normalized direction.
    pub distance: f32,

    /// World-space contact point.
    pub point: Vec2,

    /// Unit surface normal at the contact, facing back toward the ray origin.
    pub normal: Vec2,

    /// Collider that was hit.
    pub collider: ColliderId,
}

impl RayHit {
    /// Angle in degrees between the surface normal and `up`.
    ///
    /// 0° is flat ground, 90° is a vertical wall, 180° is a ceiling.
    #[must_use]
    pub fn slope_angle(&self, up: Vec2) -> f32 {
        angle_between_degrees(self.normal, up)
    }
}

/// Unsigned angle between two vectors in degrees.
///
/// Returns 0 if either vector is zero-length.
#[must_use]
pub fn angle_between_degrees(a: Vec2, b: Vec2) -> f32 {
    let (Some(a), Some(b)) = (a.try_normalize(), b.try_normalize()) else {
        return 0.0;
    };
    a.dot(b).clamp(-1.0, 1.0).acos().to_degrees()
}
