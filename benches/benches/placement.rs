// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{
    Align, Floating, PlacementOptions, PlacementRequest, compute_placement,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self, upper: f64) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX) * upper
    }
}

fn requests(len: usize, align: Align, seed: u64) -> Vec<PlacementRequest> {
    let mut rng = Lcg::new(seed);
    let viewport = Size::new(1280.0, 800.0);
    let options = PlacementOptions::default().with_align(align);
    (0..len)
        .map(|_| {
            let x = rng.next_f64(viewport.width);
            let y = rng.next_f64(viewport.height);
            let trigger = Rect::new(x, y, x + 20.0 + rng.next_f64(200.0), y + 32.0);
            let panel = Rect::new(0.0, 0.0, 80.0 + rng.next_f64(400.0), rng.next_f64(500.0));
            PlacementRequest::new(trigger, panel, viewport).with_options(options)
        })
        .collect()
}

fn bench_compute_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/compute");

    for align in [Align::Start, Align::Center, Align::End] {
        let reqs = requests(4_096, align, 0x5eed);
        group.throughput(Throughput::Elements(reqs.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_placement", format!("{align:?}")),
            &reqs,
            |b, reqs| {
                b.iter(|| {
                    for req in reqs {
                        black_box(compute_placement(black_box(req)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_floating_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/floating");
    let reqs = requests(1_024, Align::Start, 0xf10a7);
    group.throughput(Throughput::Elements(reqs.len() as u64));

    // Includes CSS string formatting for every update.
    group.bench_function("update_with_style", |b| {
        let mut floating = Floating::new(PlacementOptions::default());
        b.iter(|| {
            for req in &reqs {
                black_box(floating.update(&req.trigger, &req.panel, req.viewport));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute_placement, bench_floating_update);
criterion_main!(benches);
