//! Geometry hashing for determinism verification.
//!
//! Two worlds built from the same operations must produce identical hashes.
//! Replays compare this hash to make sure they run against the same level.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::Vec2;

use crate::shape::Shape;
use crate::world::CollisionWorld;
use crate::Aabb;

/// Compute a deterministic hash of all geometry in a world.
///
/// This hash includes every collider's id, layers and shape, in insertion
/// order. Floats are hashed as bits.
#[must_use]
pub fn hash_world(world: &CollisionWorld) -> u64 {
    let mut hasher = DefaultHasher::new();

    world.len().hash(&mut hasher);
    for collider in world.colliders() {
        collider.id.hash(&mut hasher);
        collider.layers.bits().hash(&mut hasher);
        hash_shape(&collider.shape, &mut hasher);
    }

    hasher.finish()
}

/// Hash a shape with a discriminant per variant.
fn hash_shape<H: Hasher>(shape: &Shape, hasher: &mut H) {
    match shape {
        Shape::Rect(aabb) => {
            0u8.hash(hasher);
            hash_aabb(aabb, hasher);
        }
        Shape::Segment(segment) => {
            1u8.hash(hasher);
            hash_vec2(segment.a, hasher);
            hash_vec2(segment.b, hasher);
        }
        Shape::Polygon(polygon) => {
            2u8.hash(hasher);
            polygon.vertices().len().hash(hasher);
            for &vertex in polygon.vertices() {
                hash_vec2(vertex, hasher);
            }
        }
    }
}

/// Hash a box by converting floats to bits.
fn hash_aabb<H: Hasher>(aabb: &Aabb, hasher: &mut H) {
    hash_vec2(aabb.min, hasher);
    hash_vec2(aabb.max, hasher);
}

fn hash_vec2<H: Hasher>(v: Vec2, hasher: &mut H) {
    v.x.to_bits().hash(hasher);
    v.y.to_bits().hash(hasher);
}
