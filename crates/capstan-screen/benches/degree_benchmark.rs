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

use capstan_model::cover::CoverSequence;
use capstan_model::index::RowIndex;
use capstan_screen::degree::directed_degree;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const NUM_ROWS: usize = 1_000;
const NUM_REFERENCES: usize = 256;

fn random_cover(rng: &mut StdRng, len: usize) -> CoverSequence {
    CoverSequence::from_rows((0..len).map(|_| RowIndex::new(rng.gen_range(0..NUM_ROWS))))
}

fn bench_directed_degree(c: &mut Criterion) {
    // Seeded for deterministic benchmark inputs across runs.
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("directed_degree");
    for &len in &[4usize, 8, 16, 32] {
        let subject = random_cover(&mut rng, len);
        let references: Vec<CoverSequence> =
            (0..NUM_REFERENCES).map(|_| random_cover(&mut rng, len)).collect();

        group.throughput(Throughput::Elements(references.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &references, |b, refs| {
            b.iter(|| {
                refs.iter()
                    .map(|reference| directed_degree(black_box(&subject), black_box(reference)))
                    .sum::<u64>()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_directed_degree);
criterion_main!(benches);
