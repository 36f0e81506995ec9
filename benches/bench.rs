use models::*;
use rand::seq::SliceRandom;

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sorted_flat_map::FlatMap;

const COUNTS: [usize; 2] = [1000, 10000];

fn benchmark_flat_map<K: TestKey>(c: &mut Criterion) {
    for count in COUNTS {
        let name = K::name();

        c.bench_function(format!("flat_map<{name}> insert {count}").as_str(), |b| {
            b.iter(|| {
                let mut map = FlatMap::new();
                for i in 0..count {
                    map.insert(K::from_i(i), Value::default());
                }
            });
        });

        c.bench_function(format!("flat_map<{name}> collect {count}").as_str(), |b| {
            let mut keys = (0..count).map(K::from_i).collect::<Vec<_>>();
            keys.shuffle(&mut rand::thread_rng());

            b.iter(|| {
                keys.iter()
                    .map(|k| (k.clone(), Value::default()))
                    .collect::<FlatMap<K, Value>>()
            });
        });

        c.bench_function(format!("flat_map<{name}> random_remove {count}").as_str(), |b| {
            let map = (0..count)
                .map(|i| (K::from_i(i), Value::default()))
                .collect::<FlatMap<K, Value>>();

            let mut keys = map.keys().cloned().collect::<Vec<_>>();
            keys.shuffle(&mut rand::thread_rng());

            b.iter(|| {
                let mut map = map.clone();
                for k in keys.iter() {
                    map.remove(k);
                }
            });
        });

        c.bench_function(format!("flat_map<{name}> random_get {count}").as_str(), |b| {
            let map = (0..count)
                .map(|i| (K::from_i(i), Value::default()))
                .collect::<FlatMap<K, Value>>();

            let mut keys = map.keys().cloned().collect::<Vec<_>>();
            keys.shuffle(&mut rand::thread_rng());

            b.iter(|| {
                for k in keys.iter() {
                    black_box(map.get(k));
                }
            });
        });

        c.bench_function(format!("flat_map<{name}> iter {count}").as_str(), |b| {
            let map = (0..count)
                .map(|i| (K::from_i(i), Value::default()))
                .collect::<FlatMap<K, Value>>();

            b.iter(|| {
                let c = map.iter().fold(0, |a, _i| a + black_box(1));
                assert_eq!(c, map.len());
            });
        });
    }
}

fn benchmark_btree<K: TestKey>(c: &mut Criterion) {
    for count in COUNTS {
        let name = K::name();

        c.bench_function(format!("btree<{name}> insert {count}").as_str(), |b| {
            b.iter(|| {
                let mut tree = BTreeMap::new();
                for i in 0..count {
                    tree.insert(K::from_i(i), Value::default());
                }
            });
        });

        c.bench_function(format!("btree<{name}> collect {count}").as_str(), |b| {
            let mut keys = (0..count).map(K::from_i).collect::<Vec<_>>();
            keys.shuffle(&mut rand::thread_rng());

            b.iter(|| {
                keys.iter()
                    .map(|k| (k.clone(), Value::default()))
                    .collect::<BTreeMap<K, Value>>()
            });
        });

        c.bench_function(format!("btree<{name}> random_remove {count}").as_str(), |b| {
            let tree = (0..count)
                .map(|i| (K::from_i(i), Value::default()))
                .collect::<BTreeMap<K, Value>>();

            let mut keys = tree.keys().cloned().collect::<Vec<_>>();
            keys.shuffle(&mut rand::thread_rng());

            b.iter(|| {
                let mut tree = tree.clone();
                for k in keys.iter() {
                    tree.remove(k);
                }
            });
        });

        c.bench_function(format!("btree<{name}> random_get {count}").as_str(), |b| {
            let tree = (0..count)
                .map(|i| (K::from_i(i), Value::default()))
                .collect::<BTreeMap<K, Value>>();

            let mut keys = tree.keys().cloned().collect::<Vec<_>>();
            keys.shuffle(&mut rand::thread_rng());

            b.iter(|| {
                for k in keys.iter() {
                    black_box(tree.get(k));
                }
            });
        });

        c.bench_function(format!("btree<{name}> iter {count}").as_str(), |b| {
            let tree = (0..count)
                .map(|i| (K::from_i(i), Value::default()))
                .collect::<BTreeMap<K, Value>>();

            b.iter(|| {
                let c = tree.iter().fold(0, |a, _i| a + black_box(1));
                assert_eq!(c, tree.len());
            });
        });
    }
}

criterion_group!(
    benches,
    benchmark_flat_map<Point>,
    benchmark_flat_map<String>,
    benchmark_btree<Point>,
    benchmark_btree<String>,
);
criterion_main!(benches);
