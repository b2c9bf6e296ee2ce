use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use schedcop_core::schedule::Interleavings;
use schedcop_core::{analyze_operations, Operation, TransactionId};

const OBJECTS: [&str; 4] = ["X", "Y", "Z", "W"];

/// Alternating read/write operations cycling over `OBJECTS`, so every
/// pair of transactions built here has conflicts.
fn build_transaction(transaction: TransactionId, len: usize) -> Vec<Operation<&'static str>> {
    (0..len)
        .map(|i| {
            let object = OBJECTS[(i / 2) % OBJECTS.len()];
            if i % 2 == 0 {
                Operation::read(transaction, object)
            } else {
                Operation::write(transaction, object)
            }
        })
        .collect()
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    for (n, m) in [(3, 3), (5, 4), (7, 7)] {
        let t1 = build_transaction(TransactionId::T1, n);
        let t2 = build_transaction(TransactionId::T2, m);

        group.bench_function(format!("interleave_{n}x{m}"), |b| {
            b.iter(|| Interleavings::new(black_box(&t1), black_box(&t2)).count());
        });

        group.bench_function(format!("analyze_{n}x{m}"), |b| {
            b.iter(|| analyze_operations(black_box(&t1), black_box(&t2)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
