//! Collision resolver: one tick of kinematic movement.
//!
//! The resolver takes a desired displacement, probes the environment along
//! each axis, and returns the corrected displacement together with a
//! [`ContactState`] snapshot.
//!
//! # Tick Order
//!
//! Each stage runs only when its displacement component is non-zero:
//!
//! ```text
//! recompute origins -> reset contacts
//!   -> descend   (y < 0)
//!   -> horizontal (x != 0)
//!   -> vertical   (y != 0)
//!   -> return corrected displacement
//! ```
//!
//! Descent runs first because it can turn a flat walk into a diagonal one.
//! Horizontal runs before vertical so slope-climb corrections to `y` are in
//! place when vertical obstructions are checked.
//!
//! # Displacement Threading
//!
//! Every stage takes the current displacement by value and returns the updated
//! one. Nothing mutates the caller's vector through a reference.

mod horizontal;
mod slope;
mod vertical;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug_span, trace};

use crate::config::ControllerConfig;
use crate::contact::{ContactFlags, ContactState};
use crate::probe::ShapeProbe;
use crate::query::RayQuery;

/// Result of resolving one move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Corrected displacement to apply to the actor's position
    pub displacement: Vec2,
    /// Contact snapshot for this tick
    pub contacts: ContactState,
}

/// Per-actor collision resolver.
///
/// Owns the actor's [`ContactState`], which persists between ticks only
/// through the previous slope angle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionResolver {
    config: ControllerConfig,
    contacts: ContactState,
}

impl CollisionResolver {
    /// Create a resolver with the given configuration.
    ///
    /// Ray counts are stored clamped, matching what a [`ShapeProbe`] built from
    /// the same config casts.
    #[must_use]
    pub fn new(mut config: ControllerConfig) -> Self {
        (config.horizontal_ray_count, config.vertical_ray_count) = config.clamped_ray_counts();
        Self {
            config,
            contacts: ContactState::default(),
        }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Contact state from the most recent move.
    #[must_use]
    pub fn contacts(&self) -> &ContactState {
        &self.contacts
    }

    /// Change ray counts and recompute the probe's spacing.
    ///
    /// The config stores the counts the probe actually casts, after clamping.
    pub fn set_ray_counts(&mut self, probe: &mut ShapeProbe, horizontal: usize, vertical: usize) {
        probe.compute_spacing(horizontal, vertical);
        self.config.horizontal_ray_count = probe.horizontal_ray_count();
        self.config.vertical_ray_count = probe.vertical_ray_count();
    }

    /// Resolve one tick of movement.
    ///
    /// # Arguments
    ///
    /// * `probe` - The actor's probe; its origins are refreshed from its
    ///   current bounds before any cast
    /// * `query` - Static environment, read-only for the whole move
    /// * `displacement` - Desired movement this tick
    ///
    /// # Returns
    ///
    /// The corrected displacement and the contact snapshot. The caller is
    /// responsible for applying the displacement to the actor's position.
    pub fn move_by<Q: RayQuery + ?Sized>(
        &mut self,
        probe: &mut ShapeProbe,
        query: &Q,
        displacement: Vec2,
    ) -> MoveOutcome {
        let _span = debug_span!("move_by", dx = displacement.x, dy = displacement.y).entered();

        probe.recompute_origins(probe.bounds());
        self.contacts.reset();
        self.contacts.displacement_old = displacement;

        let mut pass = Pass {
            probe,
            query,
            config: &self.config,
            contacts: &mut self.contacts,
        };

        let mut corrected = displacement;
        if corrected.y < 0.0 && pass.config.descent_enabled() {
            corrected = pass.descend_slope(corrected);
        }
        if corrected.x != 0.0 {
            corrected = pass.horizontal(corrected);
        }
        if corrected.y != 0.0 {
            corrected = pass.vertical(corrected);
        }

        trace!(
            ?displacement,
            ?corrected,
            flags = self.contacts.flags.bits(),
            "move resolved"
        );
        MoveOutcome {
            displacement: corrected,
            contacts: self.contacts,
        }
    }
}

// ============================================================================
// Per-move working set
// ============================================================================

/// Borrowed state for a single move. Stage methods live in the submodules.
struct Pass<'a, Q: ?Sized> {
    probe: &'a ShapeProbe,
    query: &'a Q,
    config: &'a ControllerConfig,
    contacts: &'a mut ContactState,
}

impl<Q: RayQuery + ?Sized> Pass<'_, Q> {
    fn cast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<scree::RayHit> {
        self.probe.cast(
            self.query,
            origin,
            direction,
            max_distance,
            self.config.collision_mask,
        )
    }

    fn skin(&self) -> f32 {
        self.probe.skin_width()
    }

    fn set_side(&mut self, direction_x: f32) {
        self.contacts.flags.insert(if direction_x < 0.0 {
            ContactFlags::LEFT
        } else {
            ContactFlags::RIGHT
        });
    }

    fn set_vertical(&mut self, direction_y: f32) {
        self.contacts.flags.insert(if direction_y < 0.0 {
            ContactFlags::BELOW
        } else {
            ContactFlags::ABOVE
        });
    }
}
