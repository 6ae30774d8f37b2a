// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashSet;

use canopy_quadtree::{Entry, Tree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

const DOMAIN: f64 = 1024.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_grid_entries(n: usize) -> Vec<Entry<u32>> {
    let cell = DOMAIN / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Entry::new(
                Point::new((x as f64 + 0.5) * cell, (y as f64 + 0.5) * cell),
                (y * n + x) as u32,
            ));
        }
    }
    out
}

/// Pseudo-random entries snapped to a quarter-unit lattice, deduplicated so
/// capacity-1 splits always terminate.
fn gen_random_entries(count: usize) -> Vec<Entry<u32>> {
    let mut rng = Rng::new(0x9e37_79b9);
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let x = (rng.next_f64() * DOMAIN * 4.0).floor() / 4.0;
        let y = (rng.next_f64() * DOMAIN * 4.0).floor() / 4.0;
        if seen.insert((x.to_bits(), y.to_bits())) {
            out.push(Entry::new(Point::new(x, y), out.len() as u32));
        }
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &count in &[256_usize, 1024] {
        let random = gen_random_entries(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("random_{count}"), |b| {
            b.iter_batched(
                || random.clone(),
                |entries| Tree::build(DOMAIN, DOMAIN, entries).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    let grid = gen_grid_entries(32);
    group.throughput(Throughput::Elements(grid.len() as u64));
    group.bench_function("grid_1024", |b| {
        b.iter_batched(
            || grid.clone(),
            |entries| Tree::build(DOMAIN, DOMAIN, entries).unwrap(),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &count in &[256_usize, 1024] {
        let tree = Tree::build(DOMAIN, DOMAIN, gen_random_entries(count)).unwrap();
        // Off the quarter-unit lattice, so it never collides with a resident.
        let probe = Entry::new(Point::new(511.1, 513.9), u32::MAX);
        group.bench_function(format!("into_{count}"), |b| {
            b.iter(|| tree.insert(black_box(probe.clone())).unwrap());
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    for &count in &[256_usize, 1024] {
        let tree = Tree::build(DOMAIN, DOMAIN, gen_random_entries(count)).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("shift_wrap_{count}"), |b| {
            b.iter(|| {
                tree.update(|mut entry| {
                    entry.position.x = (entry.position.x + 7.25) % DOMAIN;
                    entry
                })
                .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_insert, bench_update);
criterion_main!(benches);
