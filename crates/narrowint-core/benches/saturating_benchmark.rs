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

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use narrowint_core::bounds::{Bounds, Signedness};
use narrowint_core::ops;
use std::hint::black_box;

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds");
    for bits in [8u32, 32, 63] {
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| Bounds::new(black_box(bits), Signedness::Signed));
        });
    }
    group.finish();
}

fn bench_saturating_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("saturating_ops");
    for bits in [8u32, 32, 63] {
        group.bench_with_input(BenchmarkId::new("add", bits), &bits, |b, &bits| {
            b.iter(|| {
                ops::saturating_add(
                    black_box(i64::MAX / 2),
                    black_box(i64::MAX / 2),
                    bits,
                    Signedness::Signed,
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("mul", bits), &bits, |b, &bits| {
            b.iter(|| {
                ops::saturating_mul(
                    black_box((1i64 << 62) - 1),
                    black_box((1i64 << 62) - 1),
                    bits,
                    Signedness::Signed,
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("div", bits), &bits, |b, &bits| {
            b.iter(|| {
                ops::saturating_div(black_box(i64::MIN / 2), black_box(-3i64), bits, Signedness::Signed)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bounds, bench_saturating_ops);
criterion_main!(benches);
