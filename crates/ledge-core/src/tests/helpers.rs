//! Test helpers for building levels and driving bodies.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scree::{Aabb, CollisionLayers, CollisionWorld};

use crate::body::KinematicBody;
use crate::config::ControllerConfig;
use crate::resolver::MoveOutcome;

/// Fixed tick used by the walker.
pub const DT: f32 = 1.0 / 60.0;

/// Downward acceleration used by the walker.
pub const GRAVITY: f32 = -30.0;

/// Install a test-writer subscriber so `RUST_LOG=trace` shows resolver
/// decisions. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

// =============================================================================
// Levels
// =============================================================================

/// Flat ground whose top surface is at y = 0.
pub fn flat_ground() -> CollisionWorld {
    let mut world = CollisionWorld::new();
    add_ground(&mut world, -100.0, 100.0, 0.0);
    world
}

/// Add a ground slab spanning `x0..x1` with its top at `top`.
pub fn add_ground(world: &mut CollisionWorld, x0: f32, x1: f32, top: f32) {
    world.add_rect(
        Aabb::from_min_max(Vec2::new(x0, top - 1.0), Vec2::new(x1, top)),
        CollisionLayers::GROUND,
    );
}

/// Add a tall wall whose left face is at `x`.
pub fn add_wall(world: &mut CollisionWorld, x: f32) {
    world.add_rect(
        Aabb::from_min_max(Vec2::new(x, -50.0), Vec2::new(x + 1.0, 50.0)),
        CollisionLayers::WALLS,
    );
}

/// Add a ramp rising to the right at `angle` degrees, starting at `foot`.
pub fn add_rising_ramp(world: &mut CollisionWorld, foot: Vec2, run: f32, angle: f32) {
    world
        .add_ramp(foot, run, run * angle.to_radians().tan(), CollisionLayers::GROUND)
        .expect("valid ramp");
}

/// Add a ramp falling to the right at `angle` degrees, ending at `foot`.
pub fn add_falling_ramp(world: &mut CollisionWorld, foot: Vec2, run: f32, angle: f32) {
    world
        .add_ramp(foot, -run, run * angle.to_radians().tan(), CollisionLayers::GROUND)
        .expect("valid ramp");
}

/// Random staircase terrain of flat steps and gentle ramps, seeded.
pub fn random_terrain(seed: u64) -> CollisionWorld {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut world = CollisionWorld::new();
    let mut x = -20.0_f32;
    let mut height = 0.0_f32;
    add_ground(&mut world, -40.0, x, height);

    for _ in 0..12 {
        let width: f32 = rng.gen_range(2.0..6.0);
        if rng.gen_bool(0.5) {
            let angle: f32 = rng.gen_range(10.0..40.0);
            add_rising_ramp(&mut world, Vec2::new(x, height), width, angle);
            height += width * angle.to_radians().tan();
        } else {
            add_ground(&mut world, x, x + width, height);
        }
        x += width;
    }
    add_ground(&mut world, x, x + 40.0, height);
    world
}

// =============================================================================
// Bodies
// =============================================================================

/// Unit box body with its minimum corner at `min`.
pub fn body_at(min: Vec2) -> KinematicBody {
    body_with(min, ControllerConfig::default())
}

/// Unit box body with a custom config.
pub fn body_with(min: Vec2, config: ControllerConfig) -> KinematicBody {
    KinematicBody::new(Aabb::from_min_max(min, min + Vec2::ONE), config).expect("valid config")
}

/// Minimal gravity policy standing in for an input layer.
///
/// Integrates gravity, feeds `velocity * DT` into the body, and zeroes
/// vertical velocity on floor or ceiling contact.
#[derive(Debug, Clone)]
pub struct Walker {
    /// Driven body
    pub body: KinematicBody,
    /// Current velocity
    pub velocity: Vec2,
}

impl Walker {
    /// Walker at rest.
    pub fn new(body: KinematicBody) -> Self {
        Self {
            body,
            velocity: Vec2::ZERO,
        }
    }

    /// Run one tick with the given horizontal speed.
    pub fn step<Q: crate::RayQuery + ?Sized>(&mut self, world: &Q, speed_x: f32) -> MoveOutcome {
        let contacts = self.body.contacts();
        if contacts.above() || contacts.below() {
            self.velocity.y = 0.0;
        }
        self.velocity.x = speed_x;
        self.velocity.y += GRAVITY * DT;
        self.body.move_and_commit(world, self.velocity * DT)
    }

    /// Run `ticks` ticks and return the last outcome.
    pub fn run<Q: crate::RayQuery + ?Sized>(
        &mut self,
        world: &Q,
        speed_x: f32,
        ticks: usize,
    ) -> Option<MoveOutcome> {
        (0..ticks).map(|_| self.step(world, speed_x)).last()
    }
}
