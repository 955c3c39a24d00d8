// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use satnum_core::num::{
    kind::NumericKind,
    ops::{
        saturating_arithmetic::{saturate_add, saturate_multiply},
        saturating_cast::saturate_cast,
    },
    range::range_union,
    scalar::Scalar,
};
use std::hint::black_box;

const SAMPLES: usize = 4096;

/// Seeded spread of values covering both signs and the full magnitude range.
fn inputs() -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..SAMPLES)
        .map(|_| rng.random::<i64>() >> rng.random_range(0..64u32))
        .collect()
}

fn bench_saturate_cast(c: &mut Criterion) {
    let values = inputs();
    let floats: Vec<f64> = values.iter().map(|v| *v as f64 * 1.5).collect();

    let mut group = c.benchmark_group("saturate_cast");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    group.bench_function(BenchmarkId::new("i64_to_i16", SAMPLES), |b| {
        b.iter(|| {
            values
                .iter()
                .map(|v| saturate_cast::<i16, i64>(black_box(*v)) as i64)
                .sum::<i64>()
        })
    });

    group.bench_function(BenchmarkId::new("f64_to_u32", SAMPLES), |b| {
        b.iter(|| {
            floats
                .iter()
                .map(|v| saturate_cast::<u32, f64>(black_box(*v)) as u64)
                .sum::<u64>()
        })
    });

    group.bench_function(BenchmarkId::new("native_as_i64_to_i16", SAMPLES), |b| {
        b.iter(|| {
            values
                .iter()
                .map(|v| black_box(*v) as i16 as i64)
                .sum::<i64>()
        })
    });

    group.finish();
}

fn bench_saturating_arithmetic(c: &mut Criterion) {
    let values = inputs();

    let mut group = c.benchmark_group("saturating_arithmetic");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    group.bench_function(BenchmarkId::new("i32_add_i64", SAMPLES), |b| {
        b.iter(|| {
            let mut acc: i32 = 0;
            for v in &values {
                saturate_add(&mut acc, black_box(*v));
            }
            acc
        })
    });

    group.bench_function(BenchmarkId::new("u16_mul_f32", SAMPLES), |b| {
        b.iter(|| {
            let mut acc: u16 = 1;
            for v in &values {
                let mut x: u16 = 3;
                saturate_multiply(&mut x, black_box(*v as f32));
                acc = acc.wrapping_add(x);
            }
            acc
        })
    });

    group.bench_function(BenchmarkId::new("scalar_dispatch", SAMPLES), |b| {
        b.iter(|| {
            let mut acc = Scalar::I16(0);
            for v in &values {
                acc.saturating_add(Scalar::I64(black_box(*v)));
            }
            acc
        })
    });

    group.finish();
}

fn bench_range_union_lookup(c: &mut Criterion) {
    c.bench_function("range_union_cached", |b| {
        b.iter(|| black_box(range_union::<f32, u64>()))
    });

    c.bench_function("range_union_dynamic_all_pairs", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for lhs in NumericKind::ALL {
                for rhs in NumericKind::ALL {
                    let (lo, hi) = lhs.range_union(black_box(rhs));
                    hits += (lo <= hi) as usize;
                }
            }
            hits
        })
    });
}

criterion_group!(
    benches,
    bench_saturate_cast,
    bench_saturating_arithmetic,
    bench_range_union_lookup
);
criterion_main!(benches);
