//! Per-frame tick hot path at a realistic task count

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drift_core::RoundedRect;
use drift_motion::{MotionScheduler, ScrollDirection};

fn bench_tick(c: &mut Criterion) {
    let scheduler = MotionScheduler::new();
    let outline = Arc::new(RoundedRect::new(240.0, 80.0, 24.0));

    let _followers: Vec<_> = (0..32)
        .map(|i| {
            scheduler
                .follower(outline.clone(), 2000.0 + i as f32 * 100.0)
                .unwrap()
        })
        .collect();
    let _scrollers: Vec<_> = (0..32)
        .map(|i| {
            scheduler
                .scroller(480.0 + i as f32, 24000.0, ScrollDirection::Up)
                .unwrap()
        })
        .collect();

    let mut now = 0.0;
    c.bench_function("tick_64_tasks", |b| {
        b.iter(|| {
            now += 16.0;
            black_box(scheduler.tick(black_box(now)))
        })
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
