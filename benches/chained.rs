#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chainmap::{ChainedHashMap, find_mode, hash_function_1, hash_function_2};
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items =
        vec(any::<(String, String)>(), ITEMS_AMOUNT).new_tree(&mut runner).unwrap().current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut additive_map = ChainedHashMap::with_capacity_and_hasher(11, hash_function_1);
    let mut weighted_map = ChainedHashMap::with_capacity_and_hasher(11, hash_function_2);
    let mut rust_map = HashMap::new();
    group.bench_function("chained hash_function_1 put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                additive_map.put(key, value);
            }
        });
    });
    group.bench_function("chained hash_function_2 put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                weighted_map.put(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("chained hash_function_1 get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = additive_map.get(key);
            }
        });
    });
    group.bench_function("chained hash_function_2 get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = weighted_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.bench_function("find_mode", |b| {
        b.iter(|| find_mode(items.iter().map(|(_, value)| value)));
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
