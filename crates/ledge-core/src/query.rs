//! Environment ray query seam.
//!
//! The resolver never talks to level geometry directly. It consumes a
//! [`RayQuery`], which any static environment can implement. The in-repo
//! implementation is [`scree::CollisionWorld`].

use glam::Vec2;
use scree::{CollisionLayers, CollisionWorld, RayHit};

/// A static environment that can answer ray casts.
///
/// # Invariants
///
/// - Queries are pure: casting must not change the environment
/// - The environment must not change while a move is being resolved
/// - `None` means nothing was hit within `max_distance`; it is not an error
pub trait RayQuery {
    /// Cast a ray and return the nearest hit.
    ///
    /// # Arguments
    ///
    /// * `origin` - Ray starting point
    /// * `direction` - Unit ray direction
    /// * `max_distance` - Maximum distance, possibly `f32::INFINITY`
    /// * `mask` - Which geometry participates
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionLayers,
    ) -> Option<RayHit>;
}

impl RayQuery for CollisionWorld {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionLayers,
    ) -> Option<RayHit> {
        self.raycast(origin, direction, max_distance, mask)
    }
}

impl<T: RayQuery + ?Sized> RayQuery for &T {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionLayers,
    ) -> Option<RayHit> {
        (**self).cast(origin, direction, max_distance, mask)
    }
}
