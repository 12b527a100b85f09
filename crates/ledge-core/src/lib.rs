//! # Ledge Core
//!
//! Kinematic 2D character movement with slope-aware ray probing.
//!
//! Given the displacement an actor wants to make this tick, the resolver
//! casts rays from the actor's box against a static environment and returns
//! the displacement it can actually make, plus a snapshot of what it touched.
//!
//! ## Architecture
//!
//! - **[`ShapeProbe`]**: ray origins and spacing around the actor's box
//! - **[`CollisionResolver`]**: the per-tick pipeline (descend, horizontal,
//!   vertical) and the actor's [`ContactState`]
//! - **[`KinematicBody`]**: box, probe and resolver bundled for callers
//! - **[`RayQuery`]**: the environment seam, implemented by
//!   [`scree::CollisionWorld`]
//!
//! Input mapping, gravity and jumping are left to the caller. A typical loop
//! feeds `velocity * dt` into [`KinematicBody::move_and_commit`] and zeroes
//! vertical velocity when the returned contacts report above or below.
//!
//! ## Usage
//!
//! ```
//! use glam::Vec2;
//! use ledge_core::{ControllerConfig, KinematicBody};
//! use scree::{Aabb, CollisionLayers, CollisionWorld};
//!
//! let mut world = CollisionWorld::new();
//! world.add_rect(
//!     Aabb::from_min_max(Vec2::new(-50.0, -1.0), Vec2::new(50.0, 0.0)),
//!     CollisionLayers::GROUND,
//! );
//!
//! let mut body = KinematicBody::new(
//!     Aabb::from_min_max(Vec2::new(0.0, 1.0), Vec2::new(1.0, 2.0)),
//!     ControllerConfig::default(),
//! )?;
//! let outcome = body.move_and_commit(&world, Vec2::new(0.0, -2.0));
//! assert!(outcome.contacts.below());
//! assert!((outcome.displacement.y + 1.0).abs() < 1e-2);
//! # Ok::<(), ledge_core::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export scree for environment setup
pub use scree;

pub mod batch;
pub mod body;
pub mod config;
pub mod contact;
pub mod error;
pub mod hash;
pub mod probe;
pub mod query;
pub mod resolver;

pub use batch::step_bodies;
pub use body::KinematicBody;
pub use config::{clamp_ray_count, ControllerConfig, MIN_RAY_COUNT};
pub use contact::{ContactFlags, ContactState};
pub use error::{ConfigError, StepError};
pub use hash::{hash_bodies, hash_body};
pub use probe::{ProbeOrigins, RaySpacing, ShapeProbe};
pub use query::RayQuery;
pub use resolver::{CollisionResolver, MoveOutcome};

#[cfg(test)]
mod tests;
