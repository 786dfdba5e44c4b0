//! Criterion benchmarks for orbit-framing.
#![allow(missing_docs, unused_results)]

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use orbit_framing::animation::{
    AnimationEngine, CameraProperty, TransitionTemplate, TweenValue, Tweener,
};
use orbit_framing::camera::CameraState;
use orbit_framing::framing::{framing_radius, frustum_slope, FramingMode};
use orbit_framing::util::clock::ManualClock;
use orbit_framing::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::DEFAULT;
    c.bench_function("exponential_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))));
    });
}

fn framing_radius_benchmark(c: &mut Criterion) {
    let slope = frustum_slope(0.8, 720.0 / 1280.0);
    c.bench_function("framing_radius", |b| {
        b.iter(|| {
            black_box(framing_radius(
                black_box(3.46),
                1.0,
                slope,
                Some(1.0),
                Some(100.0),
                FramingMode::FitFrustumSides,
            ))
        });
    });
}

fn tweener_advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tweener_advance");

    for count in [1_usize, 4, 16] {
        let clock = Rc::new(ManualClock::new(0.0));
        let tweener = Tweener::new(clock.clone());
        let mut camera = CameraState::new(0.0, 1.0, 10.0, Vec3::ZERO);
        for i in 0..count {
            let _ = tweener.transition_to(
                &camera,
                CameraProperty::Radius,
                TweenValue::Scalar(5.0 + i as f32),
                &TransitionTemplate::DEFAULT,
                1.0e12,
                None,
            );
        }

        group.bench_function(format!("{count}_transitions"), |b| {
            b.iter(|| {
                clock.advance(16.0);
                tweener.advance(black_box(&mut camera));
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    framing_radius_benchmark,
    tweener_advance_benchmark
);
criterion_main!(benches);
