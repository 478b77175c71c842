// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_scroll_lock::{ScrollLock, ScrollSurface};

#[derive(Default)]
struct Body {
    overflow: String,
    padding_right: String,
}

impl ScrollSurface for Body {
    fn overflow(&self) -> String {
        self.overflow.clone()
    }
    fn set_overflow(&mut self, value: &str) {
        value.clone_into(&mut self.overflow);
    }
    fn padding_right(&self) -> String {
        self.padding_right.clone()
    }
    fn set_padding_right(&mut self, value: &str) {
        value.clone_into(&mut self.padding_right);
    }
    fn scrollbar_width(&self) -> f64 {
        15.0
    }
}

fn bench_lock_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_lock");

    // Every acquire opens a window: snapshot, format, restore.
    group.bench_function("open_close_window", |b| {
        let mut lock = ScrollLock::new(Body::default());
        b.iter(|| {
            lock.acquire();
            lock.release();
            black_box(lock.count());
        });
    });

    // Nested holders only touch the counter.
    group.bench_function("nested_holders", |b| {
        let mut lock = ScrollLock::new(Body::default());
        lock.acquire();
        b.iter(|| {
            for _ in 0..16 {
                lock.acquire();
            }
            for _ in 0..16 {
                lock.release();
            }
            black_box(lock.count());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_lock_windows);
criterion_main!(benches);
