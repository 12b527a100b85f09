//! Collision world containing all static level geometry.
//!
//! The world stores colliders in insertion order and answers masked ray
//! queries against them. It is never mutated while a tick is being resolved,
//! so it can be shared across threads for parallel probing.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::GeometryError;
use crate::layers::CollisionLayers;
use crate::ray::RayHit;
use crate::shape::{ConvexPolygon, Segment, Shape};
use crate::Aabb;

/// Unique identifier for a collider within one world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColliderId(u32);

impl ColliderId {
    /// Create an id from a raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// A piece of static geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Identifier assigned by the world.
    pub id: ColliderId,
    /// World-space shape.
    pub shape: Shape,
    /// Layers this collider belongs to.
    pub layers: CollisionLayers,
}

/// The collision world containing all geometry.
///
/// # Thread Safety
///
/// Queries take `&self` only; a world can be shared by reference between
/// threads once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionWorld {
    /// Colliders in insertion order
    colliders: Vec<Collider>,
    /// Next id to assign
    next_id: u32,
}

impl CollisionWorld {
    /// Create an empty collision world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
            next_id: 0,
        }
    }

    /// Load a world from a JSON level description.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Parse`] if the text is not a valid level,
    /// including polygons that fail convexity validation.
    pub fn from_json(json: &str) -> Result<Self, GeometryError> {
        let mut world: Self = serde_json::from_str(json)?;
        // Never hand out an id already present in the file
        let max_id = world.colliders.iter().map(|c| c.id.0 + 1).max().unwrap_or(0);
        world.next_id = world.next_id.max(max_id);
        debug!(colliders = world.colliders.len(), "loaded collision world");
        Ok(world)
    }

    /// Serialize the world to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GeometryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn insert(&mut self, shape: Shape, layers: CollisionLayers) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id += 1;
        self.colliders.push(Collider { id, shape, layers });
        id
    }

    /// Add an axis-aligned box.
    pub fn add_rect(&mut self, bounds: Aabb, layers: CollisionLayers) -> ColliderId {
        self.insert(Shape::Rect(bounds), layers)
    }

    /// Add a two-sided segment.
    pub fn add_segment(&mut self, a: Vec2, b: Vec2, layers: CollisionLayers) -> ColliderId {
        self.insert(Shape::Segment(Segment::new(a, b)), layers)
    }

    /// Add a convex polygon.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the vertices are not a valid convex,
    /// counter-clockwise loop.
    pub fn add_polygon(
        &mut self,
        vertices: Vec<Vec2>,
        layers: CollisionLayers,
    ) -> Result<ColliderId, GeometryError> {
        let polygon = ConvexPolygon::new(vertices)?;
        Ok(self.insert(Shape::Polygon(polygon), layers))
    }

    /// Add a right-triangle ramp.
    ///
    /// # Arguments
    ///
    /// * `foot` - Low end of the slope, on the base line
    /// * `run` - Horizontal extent; positive rises to the right, negative to the left
    /// * `rise` - Height of the high end above `foot`
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotConvex`] when `run` or `rise` is zero or
    /// `rise` is negative.
    pub fn add_ramp(
        &mut self,
        foot: Vec2,
        run: f32,
        rise: f32,
        layers: CollisionLayers,
    ) -> Result<ColliderId, GeometryError> {
        let vertices = if run > 0.0 {
            vec![foot, foot + Vec2::new(run, 0.0), foot + Vec2::new(run, rise)]
        } else {
            vec![foot, foot + Vec2::new(run, rise), foot + Vec2::new(run, 0.0)]
        };
        self.add_polygon(vertices, layers)
    }

    /// Remove a collider.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnknownCollider`] if no collider has this id.
    pub fn remove(&mut self, id: ColliderId) -> Result<Collider, GeometryError> {
        let index = self
            .colliders
            .iter()
            .position(|c| c.id == id)
            .ok_or(GeometryError::UnknownCollider(id))?;
        Ok(self.colliders.remove(index))
    }

    /// Remove all collision geometry.
    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    /// Get a collider by id.
    #[must_use]
    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.iter().find(|c| c.id == id)
    }

    /// All colliders in insertion order.
    #[must_use]
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Number of colliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the world has no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Cast a ray and return the nearest hit.
    ///
    /// # Arguments
    ///
    /// * `origin` - Ray starting point
    /// * `direction` - Ray direction (normalized here; zero never hits)
    /// * `max_distance` - Maximum distance; may be `f32::INFINITY`
    /// * `mask` - Only colliders whose layers intersect this mask are tested
    ///
    /// Ties on distance go to the collider inserted first. A contact at exactly
    /// `max_distance` counts as a hit.
    #[must_use]
    pub fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionLayers,
    ) -> Option<RayHit> {
        let dir = direction.try_normalize()?;
        if max_distance < 0.0 || max_distance.is_nan() {
            return None;
        }

        // Cheap rejection box around the whole ray when it is bounded
        let ray_bounds = max_distance.is_finite().then(|| {
            let end = origin + dir * max_distance;
            Aabb::from_min_max(origin.min(end), origin.max(end))
        });

        let mut nearest: Option<RayHit> = None;
        for collider in &self.colliders {
            if !mask.intersects(collider.layers) {
                continue;
            }
            if let Some(bounds) = &ray_bounds {
                if !bounds.intersects(&collider.shape.bounds()) {
                    continue;
                }
            }
            let Some((distance, normal)) = collider.shape.cast_ray(origin, dir, max_distance)
            else {
                continue;
            };
            if nearest.map_or(true, |best| distance < best.distance) {
                nearest = Some(RayHit {
                    distance,
                    point: origin + dir * distance,
                    normal,
                    collider: collider.id,
                });
            }
        }

        if let Some(hit) = &nearest {
            trace!(?origin, ?dir, distance = hit.distance, collider = hit.collider.0, "ray hit");
        }
        nearest
    }
}
