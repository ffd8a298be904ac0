//! Benchmarks for easing, the interpolator and whole presentations.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rotunda::animation::{EasingFunction, Interpolator};
use rotunda::engine::{PresentationCommand, PresentationEngine};
use rotunda::options::Options;
use rotunda::physics::{KinematicWorld, PhysicsBackend};
use rotunda::stage::Node;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::HalfSine;
    let _ = c.bench_function("half_sine_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))));
    });
}

fn interpolator_cycle_benchmark(c: &mut Criterion) {
    let mut interp = Interpolator::new(40).unwrap();
    let _ = c.bench_function("interpolator_cycle_40", |b| {
        b.iter(|| {
            let mut total = 0.0;
            while interp.interpolation() <= 1.0 {
                total += interp.delta();
                interp.next();
            }
            interp.reset();
            black_box(total)
        });
    });
}

fn click_through<P: PhysicsBackend>(engine: &mut PresentationEngine<P>) {
    while !engine.is_finished() {
        if engine.state().accepts_click() {
            engine.execute(PresentationCommand::Advance);
        }
        engine.frame(1.0 / 60.0).unwrap();
    }
}

fn presentation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_presentation");

    for count in [6, 24, 96] {
        let mut options = Options::default();
        options.nodes = (0..count)
            .map(|i| Node::new(format!("Subject {i}"), "Content", i % 3 == 0))
            .collect();

        let _ = group.bench_function(format!("{count}_nodes"), |b| {
            b.iter(|| {
                let physics = KinematicWorld::new(&options.physics);
                let mut engine =
                    PresentationEngine::with_physics(options.clone(), physics)
                        .unwrap();
                click_through(&mut engine);
                black_box(engine.frame_count())
            });
        });
    }

    // Same sequence with full rigid-body contacts.
    let _ = group.bench_function("6_nodes_default_physics", |b| {
        b.iter(|| {
            let mut engine =
                PresentationEngine::new(Options::default()).unwrap();
            click_through(&mut engine);
            black_box(engine.frame_count())
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    interpolator_cycle_benchmark,
    presentation_benchmark
);
criterion_main!(benches);
