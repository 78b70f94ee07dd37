#![allow(unused_imports)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tickwrap::prelude::*;

fn benchmark_elapsed(c: &mut Criterion) {
    let mut group = c.benchmark_group("elapsed");

    group.bench_function("u32", |b| {
        b.iter(|| elapsed(black_box(50u32), black_box(100u32)));
    });

    group.bench_function("u32_const", |b| {
        b.iter(|| elapsed_u32(black_box(50), black_box(100)));
    });

    group.bench_function("narrow_24", |b| {
        let previous = NarrowCounter::<24>::truncate(0x00FF_FFF0);
        let current = NarrowCounter::<24>::truncate(0x0000_0010);
        b.iter(|| elapsed(black_box(current), black_box(previous)));
    });

    for bits in [8u32, 24, 32, 64].iter() {
        group.bench_with_input(BenchmarkId::new("runtime_width", bits), bits, |b, &bits| {
            b.iter(|| elapsed_bits(black_box(3), black_box(7), black_box(bits)));
        });
    }
    group.finish();
}

fn benchmark_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("ElapsedTracker");

    for polls in [1u32, 16, 256].iter() {
        group.bench_with_input(BenchmarkId::new("poll", polls), polls, |b, &polls| {
            b.iter(|| {
                let mut tracker = ElapsedTracker::<Micros32>::new();
                let mut now = u32::MAX - 1000;
                for _ in 0..polls {
                    now = now.wrapping_add(37);
                    tracker.poll(TickSample::new(black_box(now)));
                }
                black_box(tracker.total_ticks());
            });
        });
    }
    group.finish();
}

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    group.bench_function("ticks_to_duration_rtc", |b| {
        b.iter(|| Rtc24::ticks_to_duration(black_box(123_456_789)));
    });

    group.bench_function("ticks_to_micros_dwt", |b| {
        b.iter(|| DwtCycles168MHz::ticks_to_micros(black_box(123_456_789)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_elapsed,
    benchmark_tracker,
    benchmark_conversion
);
criterion_main!(benches);
