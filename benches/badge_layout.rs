// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for badge layout computation.
//!
//! Measures the performance of:
//! - Building a badge from its configuration
//! - Changing values (with and without a width change)
//! - The demo's "Change Values" cycle over all five badges

use criterion::{criterion_group, criterion_main, Criterion};
use iced_badges::app::Demo;
use iced_badges::badge::{Badge, BadgeConfig};
use iced_badges::domain::badge::{BadgeColor, BadgeShape, BadgeSize, Platform};
use std::hint::black_box;

fn sample_config() -> BadgeConfig {
    BadgeConfig::new()
        .value(17)
        .size(BadgeSize::App)
        .shape(BadgeShape::Square)
        .color(BadgeColor::Green)
        .top(5)
        .right(5)
}

/// Benchmark badge construction.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("badge_layout");

    for platform in Platform::ALL {
        group.bench_function(format!("build_{platform}"), |b| {
            b.iter(|| black_box(Badge::new(sample_config(), black_box(platform))));
        });
    }

    group.finish();
}

/// Benchmark value changes.
///
/// `same_width` never crosses a digit boundary, so no dimension write
/// happens; `growing_width` crosses one on every call.
fn bench_set_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("badge_layout");

    group.bench_function("set_value_same_width", |b| {
        let mut badge = Badge::new(sample_config(), Platform::Ios);
        let mut value = 10_u64;
        b.iter(|| {
            value = if value == 99 { 10 } else { value + 1 };
            badge.set_value(black_box(value));
        });
    });

    group.bench_function("set_value_growing_width", |b| {
        let mut badge = Badge::new(sample_config(), Platform::Android);
        let values = [7_u64, 42, 300, 4_096, 65_536, 349_876, 1_000_000, 12_345_678];
        let mut index = 0;
        b.iter(|| {
            index = (index + 1) % values.len();
            badge.set_value(black_box(values[index]));
        });
    });

    group.bench_function("clear", |b| {
        let mut badge = Badge::new(sample_config(), Platform::Ios);
        b.iter(|| {
            badge.set_value(black_box(3_u64));
            badge.clear();
        });
    });

    group.finish();
}

/// Benchmark the full demo value cycle.
fn bench_demo_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("badge_layout");

    group.bench_function("demo_change_values", |b| {
        let mut demo = Demo::new(Platform::Ios, 400);
        let mut clicks = 0_usize;
        b.iter(|| {
            clicks += 1;
            demo.apply_cycle(black_box(clicks));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_set_value, bench_demo_cycle);
criterion_main!(benches);
