//! Shape probe: ray origins and spacing around the actor's box.
//!
//! The probe shrinks the actor's box by the skin width and fires rays from
//! its edges. Horizontal rays start on the bottom corner of the side being
//! moved toward and step upward; vertical rays start on the left corner of the
//! bottom or top edge and step rightward.
//!
//! # Lifecycle
//!
//! 1. [`ShapeProbe::new`] computes ray spacing once from the box size
//! 2. Every tick, [`ShapeProbe::recompute_origins`] refreshes the corners from
//!    the box's current position, before any cast
//! 3. [`ShapeProbe::translate`] commits the tick's movement to the box; the
//!    corners are stale until the next recompute
//! 4. Spacing is only recomputed when ray counts or box size change

use glam::Vec2;
use scree::{Aabb, CollisionLayers, RayHit};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{clamp_ray_count, ControllerConfig, MIN_RAY_COUNT};
use crate::query::RayQuery;

/// Corners of the skin-shrunk box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeOrigins {
    /// Bottom-left corner
    pub bottom_left: Vec2,
    /// Bottom-right corner
    pub bottom_right: Vec2,
    /// Top-left corner
    pub top_left: Vec2,
    /// Top-right corner
    pub top_right: Vec2,
}

/// Distance between neighbouring rays on each edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RaySpacing {
    /// Spacing of horizontal rays along the vertical edges
    pub horizontal: f32,
    /// Spacing of vertical rays along the horizontal edges
    pub vertical: f32,
}

/// Ray-casting probe around one actor's box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeProbe {
    bounds: Aabb,
    skin_width: f32,
    horizontal_ray_count: usize,
    vertical_ray_count: usize,
    origins: ProbeOrigins,
    spacing: RaySpacing,
}

impl ShapeProbe {
    /// Create a probe for a box, computing spacing and initial origins.
    #[must_use]
    pub fn new(bounds: Aabb, config: &ControllerConfig) -> Self {
        let mut probe = Self {
            bounds,
            skin_width: config.skin_width,
            horizontal_ray_count: MIN_RAY_COUNT,
            vertical_ray_count: MIN_RAY_COUNT,
            origins: ProbeOrigins::default(),
            spacing: RaySpacing::default(),
        };
        probe.compute_spacing(config.horizontal_ray_count, config.vertical_ray_count);
        probe.recompute_origins(bounds);
        probe
    }

    /// World-space box the probe is attached to.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Refresh the corner points from the box's current world position.
    pub fn recompute_origins(&mut self, bounds: Aabb) {
        self.bounds = bounds;
        let inner = bounds.shrunk(self.skin_width);
        self.origins = ProbeOrigins {
            bottom_left: Vec2::new(inner.min.x, inner.min.y),
            bottom_right: Vec2::new(inner.max.x, inner.min.y),
            top_left: Vec2::new(inner.min.x, inner.max.y),
            top_right: Vec2::new(inner.max.x, inner.max.y),
        };
    }

    /// Move the box by a committed displacement.
    pub fn translate(&mut self, delta: Vec2) {
        self.bounds = self.bounds.translated(delta);
    }

    /// Replace the box with one of a different size and recompute spacing.
    pub fn resize(&mut self, bounds: Aabb) {
        self.bounds = bounds;
        self.compute_spacing(self.horizontal_ray_count, self.vertical_ray_count);
        self.recompute_origins(bounds);
    }

    /// Compute ray spacing from ray counts and the box size.
    ///
    /// Counts below 2 are clamped to 2 so each extreme corner always has a
    /// ray and the spacing never divides by zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute_spacing(&mut self, horizontal_rays: usize, vertical_rays: usize) {
        if horizontal_rays < MIN_RAY_COUNT || vertical_rays < MIN_RAY_COUNT {
            warn!(
                horizontal_rays,
                vertical_rays, "ray counts below {MIN_RAY_COUNT} clamped"
            );
        }
        self.horizontal_ray_count = clamp_ray_count(horizontal_rays);
        self.vertical_ray_count = clamp_ray_count(vertical_rays);

        let size = self.bounds.shrunk(self.skin_width).size();
        self.spacing = RaySpacing {
            horizontal: size.y / (self.horizontal_ray_count - 1) as f32,
            vertical: size.x / (self.vertical_ray_count - 1) as f32,
        };
    }

    /// Current corner points.
    #[must_use]
    pub fn origins(&self) -> ProbeOrigins {
        self.origins
    }

    /// Current ray spacing.
    #[must_use]
    pub fn spacing(&self) -> RaySpacing {
        self.spacing
    }

    /// Skin width used to shrink the box.
    #[must_use]
    pub fn skin_width(&self) -> f32 {
        self.skin_width
    }

    /// Number of horizontal rays (after clamping).
    #[must_use]
    pub fn horizontal_ray_count(&self) -> usize {
        self.horizontal_ray_count
    }

    /// Number of vertical rays (after clamping).
    #[must_use]
    pub fn vertical_ray_count(&self) -> usize {
        self.vertical_ray_count
    }

    /// Origin of horizontal ray `index` for a move in `direction_x` (±1).
    ///
    /// Rays start at the bottom corner on the leading side and step upward.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn horizontal_ray_origin(&self, direction_x: f32, index: usize) -> Vec2 {
        let corner = if direction_x < 0.0 {
            self.origins.bottom_left
        } else {
            self.origins.bottom_right
        };
        corner + Vec2::Y * (self.spacing.horizontal * index as f32)
    }

    /// Origin of vertical ray `index` for a move in `direction_y` (±1).
    ///
    /// Rays start at the left corner of the leading edge, step rightward, and
    /// are shifted by `offset_x` so they probe where the actor will be after
    /// this tick's horizontal movement.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn vertical_ray_origin(&self, direction_y: f32, index: usize, offset_x: f32) -> Vec2 {
        let corner = if direction_y < 0.0 {
            self.origins.bottom_left
        } else {
            self.origins.top_left
        };
        corner + Vec2::X * (self.spacing.vertical * index as f32 + offset_x)
    }

    /// Cast one ray against the environment. Pure query.
    pub fn cast<Q: RayQuery + ?Sized>(
        &self,
        query: &Q,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionLayers,
    ) -> Option<RayHit> {
        query.cast(origin, direction, max_distance, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scree::CollisionWorld;

    fn unit_box_at(min: Vec2) -> Aabb {
        Aabb::from_min_max(min, min + Vec2::ONE)
    }

    #[test]
    fn test_origins_are_shrunk_corners() {
        let config = ControllerConfig {
            skin_width: 0.1,
            ..Default::default()
        };
        let probe = ShapeProbe::new(unit_box_at(Vec2::ZERO), &config);
        let origins = probe.origins();
        assert!((origins.bottom_left - Vec2::new(0.1, 0.1)).length() < 1e-6);
        assert!((origins.bottom_right - Vec2::new(0.9, 0.1)).length() < 1e-6);
        assert!((origins.top_left - Vec2::new(0.1, 0.9)).length() < 1e-6);
        assert!((origins.top_right - Vec2::new(0.9, 0.9)).length() < 1e-6);
    }

    #[test]
    fn test_origins_follow_position() {
        let config = ControllerConfig::default();
        let mut probe = ShapeProbe::new(unit_box_at(Vec2::ZERO), &config);
        probe.recompute_origins(unit_box_at(Vec2::new(5.0, 2.0)));
        assert!(probe.origins().bottom_left.x > 5.0);
        assert!(probe.origins().bottom_left.y > 2.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let config = ControllerConfig::default();
        let bounds = unit_box_at(Vec2::new(3.0, 4.0));
        let mut probe = ShapeProbe::new(bounds, &config);
        probe.recompute_origins(bounds);
        let first = probe.origins();
        probe.recompute_origins(bounds);
        assert_eq!(probe.origins(), first);
    }

    #[test]
    fn test_translate_leaves_origins_until_recompute() {
        let config = ControllerConfig::default();
        let mut probe = ShapeProbe::new(unit_box_at(Vec2::ZERO), &config);
        let before = probe.origins();
        probe.translate(Vec2::new(2.0, 0.0));
        assert_eq!(probe.origins(), before);
        assert_eq!(probe.bounds().min, Vec2::new(2.0, 0.0));

        probe.recompute_origins(probe.bounds());
        assert!((probe.origins().bottom_left.x - before.bottom_left.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_resize_recomputes_spacing() {
        let config = ControllerConfig {
            skin_width: 0.5,
            horizontal_ray_count: 3,
            vertical_ray_count: 3,
            ..Default::default()
        };
        let mut probe = ShapeProbe::new(Aabb::from_min_max(Vec2::ZERO, Vec2::new(3.0, 3.0)), &config);
        assert!((probe.spacing().horizontal - 1.0).abs() < 1e-6);

        probe.resize(Aabb::from_min_max(Vec2::ZERO, Vec2::new(5.0, 5.0)));
        assert!((probe.spacing().horizontal - 2.0).abs() < 1e-6);
        assert!((probe.spacing().vertical - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_spacing_matches_edge_over_gaps() {
        let config = ControllerConfig {
            skin_width: 0.5,
            horizontal_ray_count: 3,
            vertical_ray_count: 5,
            ..Default::default()
        };
        let bounds = Aabb::from_min_max(Vec2::ZERO, Vec2::new(5.0, 3.0));
        let probe = ShapeProbe::new(bounds, &config);
        // Shrunk size is 4 x 2
        assert!((probe.spacing().horizontal - 1.0).abs() < 1e-6);
        assert!((probe.spacing().vertical - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_count_of_one_clamps_to_two() {
        let config = ControllerConfig {
            horizontal_ray_count: 1,
            vertical_ray_count: 0,
            skin_width: 0.5,
            ..Default::default()
        };
        let bounds = Aabb::from_min_max(Vec2::ZERO, Vec2::new(3.0, 3.0));
        let probe = ShapeProbe::new(bounds, &config);
        assert_eq!(probe.horizontal_ray_count(), 2);
        assert_eq!(probe.vertical_ray_count(), 2);
        assert!(probe.spacing().horizontal.is_finite());
        assert!((probe.spacing().horizontal - 2.0).abs() < 1e-6);
        assert!((probe.spacing().vertical - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_last_ray_reaches_far_corner() {
        let config = ControllerConfig::default();
        let probe = ShapeProbe::new(unit_box_at(Vec2::ZERO), &config);
        let origins = probe.origins();

        let last_h = probe.horizontal_ray_origin(1.0, probe.horizontal_ray_count() - 1);
        assert!((last_h - origins.top_right).length() < 1e-5);

        let last_v = probe.vertical_ray_origin(-1.0, probe.vertical_ray_count() - 1, 0.0);
        assert!((last_v - origins.bottom_right).length() < 1e-5);
    }

    #[test]
    fn test_ray_origins_pick_leading_side() {
        let config = ControllerConfig::default();
        let probe = ShapeProbe::new(unit_box_at(Vec2::ZERO), &config);
        let origins = probe.origins();
        assert_eq!(probe.horizontal_ray_origin(-1.0, 0), origins.bottom_left);
        assert_eq!(probe.horizontal_ray_origin(1.0, 0), origins.bottom_right);
        assert_eq!(probe.vertical_ray_origin(1.0, 0, 0.0), origins.top_left);
        let shifted = probe.vertical_ray_origin(-1.0, 0, 0.25);
        assert!((shifted - (origins.bottom_left + Vec2::new(0.25, 0.0))).length() < 1e-6);
    }

    #[test]
    fn test_cast_goes_through_query() {
        let mut world = CollisionWorld::new();
        world.add_rect(
            Aabb::from_min_max(Vec2::new(-10.0, -1.0), Vec2::new(10.0, 0.0)),
            CollisionLayers::GROUND,
        );
        let config = ControllerConfig::default();
        let probe = ShapeProbe::new(unit_box_at(Vec2::new(0.0, 1.0)), &config);
        let hit = probe
            .cast(
                &world,
                probe.origins().bottom_left,
                Vec2::NEG_Y,
                5.0,
                CollisionLayers::MASK_SOLID,
            )
            .unwrap();
        assert!((hit.distance - (1.0 + config.skin_width)).abs() < 1e-5);
    }
}
