//! Kinematic body: an actor's box, probe and resolver in one place.
//!
//! [`KinematicBody`] is the usual entry point for callers that do not need to
//! manage the probe and resolver separately. One call to
//! [`KinematicBody::move_and_commit`] per simulation tick resolves the move
//! and applies the corrected displacement to the box.

use glam::Vec2;
use scree::Aabb;
use serde::{Deserialize, Serialize};

use crate::config::ControllerConfig;
use crate::contact::ContactState;
use crate::error::ConfigError;
use crate::probe::ShapeProbe;
use crate::query::RayQuery;
use crate::resolver::{CollisionResolver, MoveOutcome};

/// A box-shaped actor moved by kinematic collision resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    probe: ShapeProbe,
    resolver: CollisionResolver,
}

impl KinematicBody {
    /// Create a body with the given world-space box.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn new(bounds: Aabb, config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            probe: ShapeProbe::new(bounds, &config),
            resolver: CollisionResolver::new(config),
        })
    }

    /// Resolve one tick and move the box by the corrected displacement.
    pub fn move_and_commit<Q: RayQuery + ?Sized>(
        &mut self,
        query: &Q,
        displacement: Vec2,
    ) -> MoveOutcome {
        let outcome = self.resolver.move_by(&mut self.probe, query, displacement);
        self.probe.translate(outcome.displacement);
        outcome
    }

    /// Resolve one tick without moving the box.
    pub fn preview_move<Q: RayQuery + ?Sized>(
        &mut self,
        query: &Q,
        displacement: Vec2,
    ) -> MoveOutcome {
        self.resolver.move_by(&mut self.probe, query, displacement)
    }

    /// Current world-space box.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.probe.bounds()
    }

    /// Centre of the box.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.probe.bounds().center()
    }

    /// Teleport the box so its minimum corner is at `min`.
    pub fn set_position(&mut self, min: Vec2) {
        let size = self.probe.bounds().size();
        self.probe.recompute_origins(Aabb::from_min_max(min, min + size));
    }

    /// Change the box size, keeping the minimum corner in place.
    pub fn resize(&mut self, size: Vec2) {
        let min = self.probe.bounds().min;
        self.probe.resize(Aabb::from_min_max(min, min + size));
    }

    /// Change ray counts. Counts below 2 are clamped.
    pub fn set_ray_counts(&mut self, horizontal: usize, vertical: usize) {
        self.resolver
            .set_ray_counts(&mut self.probe, horizontal, vertical);
    }

    /// Contact state from the most recent move.
    #[must_use]
    pub fn contacts(&self) -> &ContactState {
        self.resolver.contacts()
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        self.resolver.config()
    }

    /// The body's probe.
    #[must_use]
    pub fn probe(&self) -> &ShapeProbe {
        &self.probe
    }
}
