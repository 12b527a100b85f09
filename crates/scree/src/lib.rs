//! # Scree
//!
//! Static 2D collision layer for kinematic ray probing.
//!
//! Scree stores the level geometry a character controller walks on (floors,
//! walls, ramps, one-off segments) and answers masked ray queries against it.
//! The geometry is read-only while a simulation tick runs, so a single
//! [`CollisionWorld`] can be shared by any number of actors.
//!
//! - **Shapes**: boxes, two-sided segments, convex polygons
//! - **Layers**: bit masks choosing which geometry participates in a query
//! - **Ray casts**: nearest hit with distance, point and surface normal
//! - **Level files**: JSON (de)serialization of whole worlds
//!
//! ## Quick Start
//!
//! ```
//! use glam::Vec2;
//! use scree::{Aabb, CollisionLayers, CollisionWorld};
//!
//! let mut world = CollisionWorld::new();
//! world.add_rect(
//!     Aabb::from_min_max(Vec2::new(-50.0, -1.0), Vec2::new(50.0, 0.0)),
//!     CollisionLayers::GROUND,
//! );
//!
//! let hit = world
//!     .raycast(Vec2::new(0.0, 2.0), Vec2::NEG_Y, 10.0, CollisionLayers::MASK_SOLID)
//!     .expect("ground below");
//! assert!((hit.distance - 2.0).abs() < 1e-5);
//! assert_eq!(hit.normal, Vec2::Y);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod hash;
pub mod layers;
pub mod ray;
pub mod shape;
pub mod world;

// Re-exports for convenience
pub use error::GeometryError;
pub use hash::hash_world;
pub use layers::CollisionLayers;
pub use ray::RayHit;
pub use shape::{ConvexPolygon, Segment, Shape};
pub use world::{Collider, ColliderId, CollisionWorld};

use glam::Vec2;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Aabb {
    /// Minimum corner (bottom-left)
    pub min: Vec2,
    /// Maximum corner (top-right)
    pub max: Vec2,
}

impl Aabb {
    /// Create a box from dimensions (centered at origin).
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(-width / 2.0, -height / 2.0),
            max: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Create a box from min/max corners.
    #[must_use]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a box from a center point and full size.
    #[must_use]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Get the center of the box.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the size of the box.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if a point is inside the box (edges included).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if two boxes overlap (touching edges count).
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Return this box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Return this box with every side pulled inward by `margin`.
    ///
    /// The total size shrinks by `2 * margin` on each axis.
    #[must_use]
    pub fn shrunk(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            max: self.max - Vec2::splat(margin),
        }
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
