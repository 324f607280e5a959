use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;
use subset_trie::{BitSet, SubsetIndex};

const CAPACITY: usize = 32;

/// Deterministic sparse sets: each stored set holds three or four elements
fn stored_sets(count: usize) -> Vec<BitSet> {
    (0..count)
        .map(|i| {
            let seed = i.wrapping_mul(0x9E37_79B9);
            let elements = (0..3 + i % 2).map(|k| (seed >> (k * 5)) % CAPACITY);
            BitSet::from_elements(CAPACITY, elements).unwrap()
        })
        .collect()
}

fn populated(sets: &[BitSet]) -> SubsetIndex<u32> {
    let mut index = SubsetIndex::new(CAPACITY);
    for (id, bs) in sets.iter().enumerate() {
        index.add(id as u32, bs).unwrap();
    }
    index
}

fn bench_add_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset_index_mutation");

    for &count in &[1_000, 10_000] {
        let sets = stored_sets(count);

        group.bench_with_input(BenchmarkId::new("add", count), &count, |b, _| {
            b.iter_batched(
                || SubsetIndex::<u32>::new(CAPACITY),
                |mut index| {
                    for (id, bs) in sets.iter().enumerate() {
                        index.add(id as u32, bs).unwrap();
                    }
                    index
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("remove_all", count), &count, |b, _| {
            b.iter_batched(
                || populated(&sets),
                |mut index| {
                    for (id, bs) in sets.iter().enumerate() {
                        black_box(index.remove(&(id as u32), bs).unwrap());
                    }
                    index
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_find_subsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset_index_query");

    for &count in &[1_000, 10_000] {
        let sets = stored_sets(count);
        let index = populated(&sets);

        let half = BitSet::from_elements(CAPACITY, (0..CAPACITY).step_by(2)).unwrap();
        let full = BitSet::filled(CAPACITY).unwrap();

        group.bench_with_input(BenchmarkId::new("half_query", count), &count, |b, _| {
            b.iter(|| black_box(index.find_subsets(&half).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("full_query", count), &count, |b, _| {
            b.iter(|| black_box(index.find_subsets(&full).unwrap()))
        });

        // Linear scan baseline the trie is meant to beat
        group.bench_with_input(BenchmarkId::new("linear_scan", count), &count, |b, _| {
            b.iter(|| {
                let hits: Vec<u32> = sets
                    .iter()
                    .enumerate()
                    .filter(|(_, bs)| half.contains_set(bs).unwrap())
                    .map(|(id, _)| id as u32)
                    .collect();
                black_box(hits)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_remove, bench_find_subsets);
criterion_main!(benches);
