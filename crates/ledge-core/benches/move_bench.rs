use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use ledge_core::{step_bodies, ControllerConfig, KinematicBody};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scree::{Aabb, CollisionLayers, CollisionWorld};

/// Flat floor with a run of ramps and a few walls.
fn build_level(seed: u64) -> CollisionWorld {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut world = CollisionWorld::new();
    world.add_rect(
        Aabb::from_min_max(Vec2::new(-200.0, -1.0), Vec2::new(200.0, 0.0)),
        CollisionLayers::GROUND,
    );
    for i in 0..40 {
        let x = (i as f32 - 20.0) * 9.0;
        let angle: f32 = rng.gen_range(10.0..50.0);
        let run: f32 = rng.gen_range(2.0..5.0);
        world
            .add_ramp(
                Vec2::new(x, 0.0),
                run,
                run * angle.to_radians().tan(),
                CollisionLayers::GROUND,
            )
            .expect("valid ramp");
        if i % 5 == 0 {
            world.add_rect(
                Aabb::from_min_max(Vec2::new(x + 6.0, 0.0), Vec2::new(x + 7.0, 8.0)),
                CollisionLayers::WALLS,
            );
        }
    }
    world
}

fn body_at(x: f32) -> KinematicBody {
    KinematicBody::new(
        Aabb::from_min_max(Vec2::new(x, 0.0), Vec2::new(x + 1.0, 2.0)),
        ControllerConfig::default(),
    )
    .expect("valid config")
}

fn bench_single_move(c: &mut Criterion) {
    let world = build_level(1);
    let body = body_at(-150.0);

    c.bench_function("single_move", |b| {
        b.iter(|| {
            let mut body = body.clone();
            black_box(body.move_and_commit(&world, black_box(Vec2::new(0.1, -0.01))))
        })
    });
}

fn bench_walk_across_level(c: &mut Criterion) {
    let world = build_level(2);

    c.bench_function("walk_600_ticks", |b| {
        b.iter(|| {
            let mut body = body_at(-150.0);
            let mut velocity = Vec2::ZERO;
            for _ in 0..600 {
                let contacts = body.contacts();
                if contacts.below() || contacts.above() {
                    velocity.y = 0.0;
                }
                velocity.x = 6.0;
                velocity.y -= 30.0 / 60.0;
                body.move_and_commit(&world, velocity / 60.0);
            }
            black_box(body.bounds())
        })
    });
}

fn bench_batch_step(c: &mut Criterion) {
    // Larger batch to exercise rayon
    let world = build_level(3);
    let bodies: Vec<KinematicBody> = (0..256).map(|i| body_at(i as f32 - 128.0)).collect();
    let displacements = vec![Vec2::new(0.1, -0.01); bodies.len()];

    c.bench_function("batch_step_256", |b| {
        b.iter(|| {
            let mut bodies = bodies.clone();
            black_box(step_bodies(&mut bodies, &displacements, &world).expect("matching lengths"))
        })
    });
}

criterion_group!(benches, bench_single_move, bench_walk_across_level, bench_batch_step);
criterion_main!(benches);
