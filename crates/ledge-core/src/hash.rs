//! State hashing for replay verification.
//!
//! Two bodies driven by identical displacements through the same environment
//! must hash identically after every tick.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::Vec2;

use crate::body::KinematicBody;
use crate::contact::ContactState;

/// Compute a deterministic hash of a body's position and contact state.
///
/// Floats are hashed by their bit patterns.
#[must_use]
pub fn hash_body(body: &KinematicBody) -> u64 {
    let mut hasher = DefaultHasher::new();
    let bounds = body.bounds();
    hash_vec2(bounds.min, &mut hasher);
    hash_vec2(bounds.max, &mut hasher);
    hash_contacts(body.contacts(), &mut hasher);
    hasher.finish()
}

/// Compute a deterministic hash over a sequence of bodies, in order.
#[must_use]
pub fn hash_bodies(bodies: &[KinematicBody]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bodies.len().hash(&mut hasher);
    for body in bodies {
        hash_body(body).hash(&mut hasher);
    }
    hasher.finish()
}

fn hash_contacts<H: Hasher>(contacts: &ContactState, hasher: &mut H) {
    contacts.flags().bits().hash(hasher);
    contacts.slope_angle().to_bits().hash(hasher);
    contacts.slope_angle_old().to_bits().hash(hasher);
}

fn hash_vec2<H: Hasher>(v: Vec2, hasher: &mut H) {
    v.x.to_bits().hash(hasher);
    v.y.to_bits().hash(hasher);
}
