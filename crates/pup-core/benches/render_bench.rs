//! Criterion benchmarks for rendering a [`Config`] in both output profiles.
//!
//! Run with:
//! ```bash
//! cargo bench --package pup-core --bench render_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pup_core::format::{render, Style};
use pup_core::Config;

/// Creates a config with `sections` sections of `keys` entries each.
fn build_config(sections: usize, keys: usize) -> Config {
    (0..sections)
        .flat_map(|s| {
            (0..keys).map(move |k| (format!("section_{s}"), format!("key_{k}"), format!("{k}")))
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let cfg = build_config(100, 50);

    for style in [Style::File, Style::Display] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{style:?}")),
            &style,
            |b, &style| b.iter(|| render(black_box(&cfg), style)),
        );
    }

    group.finish();
}

fn bench_typed_get(c: &mut Criterion) {
    let cfg = build_config(100, 50);

    c.bench_function("get_i32_hit", |b| {
        b.iter(|| cfg.get(black_box("section_50"), black_box("key_25"), 0_i32))
    });
    c.bench_function("get_i32_miss", |b| {
        b.iter(|| cfg.get(black_box("nosuch"), black_box("key_25"), 0_i32))
    });
}

criterion_group!(benches, bench_render, bench_typed_get);
criterion_main!(benches);
