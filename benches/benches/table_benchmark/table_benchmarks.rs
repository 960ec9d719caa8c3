use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dynhash::{DynamicHashTable, ExpansionPolicy};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

const KEY_LENGTH: usize = 6;

fn filled(
    policy: ExpansionPolicy,
    n: u64,
) -> DynamicHashTable {
    let mut t = DynamicHashTable::new(4, KEY_LENGTH, policy).unwrap();
    for v in 0..n {
        t.insert_value(v).unwrap();
    }
    t
}

fn shuffled_values(n: u64) -> Vec<u64> {
    let mut values: Vec<u64> = (0..n).collect();
    values.shuffle(&mut SmallRng::seed_from_u64(42));
    values
}

/// Вставка с автоматическими расширениями: total против partial.
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in [1_000u64, 10_000] {
        let values = shuffled_values(n);
        for policy in [ExpansionPolicy::Total, ExpansionPolicy::Partial] {
            group.bench_with_input(BenchmarkId::new(policy.as_str(), n), &values, |b, values| {
                b.iter(|| {
                    let mut t = DynamicHashTable::new(4, KEY_LENGTH, policy).unwrap();
                    for &v in values {
                        t.insert_value(black_box(v)).unwrap();
                    }
                    black_box(t.level())
                });
            });
        }
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for policy in [ExpansionPolicy::Total, ExpansionPolicy::Partial] {
        let t = filled(policy, 10_000);
        let keys: Vec<String> = t.keys().map(|k| k.to_string()).collect();
        group.bench_function(policy.as_str(), |b| {
            b.iter(|| {
                for k in &keys {
                    black_box(t.search(k));
                }
            });
        });
    }
    group.finish();
}

/// Принудительное расширение таблицы с 10 000 элементами (полный rehash).
fn bench_force_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_expansion");
    for policy in [ExpansionPolicy::Total, ExpansionPolicy::Partial] {
        let t = filled(policy, 10_000);
        group.bench_function(policy.as_str(), |b| {
            b.iter_batched(
                || t.clone(),
                |mut t| black_box(t.force_expansion()),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_insert_remove(c: &mut Criterion) {
    c.bench_function("insert + remove 10_000 (total)", |b| {
        b.iter(|| {
            let mut t = DynamicHashTable::new(4, KEY_LENGTH, ExpansionPolicy::Total).unwrap();
            for v in 0..10_000u64 {
                t.insert_value(v).unwrap();
            }
            for v in 0..10_000u64 {
                black_box(t.remove(&format!("{v:06}")));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_search,
    bench_force_expansion,
    bench_insert_remove
);
criterion_main!(benches);
