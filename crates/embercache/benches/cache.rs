use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use embercache::EmberCache;

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_cached", |b| {
        let mut cache: EmberCache<u64, Vec<u8>> = EmberCache::new(1000);
        let data = vec![b'x'; 1024];

        // Warm the cache
        for id in 0..100u64 {
            cache.put(id, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_put_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_churn");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_1kb_evicting", |b| {
        let mut cache: EmberCache<u64, Vec<u8>> = EmberCache::new(100);
        let data = vec![b'x'; 1024];

        let mut counter = 0u64;
        b.iter(|| {
            // Distinct keys so every put past capacity evicts
            cache.put(black_box(counter), data.clone());
            counter += 1;
        });
    });

    group.bench_function("put_1kb_dirty_writeback", |b| {
        let mut cache: EmberCache<u64, Vec<u8>> = EmberCache::new(100);
        cache.on_save(|_key, value| {
            black_box(value.len());
        });
        let first = vec![b'a'; 1024];
        let second = vec![b'b'; 1024];

        let mut counter = 0u64;
        b.iter(|| {
            // Insert then overwrite, so every eviction carries a dirty entry
            cache.put(black_box(counter), first.clone());
            cache.put(black_box(counter), second.clone());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_loaded_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("loaded_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_through_loader", |b| {
        let mut cache: EmberCache<u64, Vec<u8>> = EmberCache::new(10); // Small cache
        cache.on_load(|_key| Some(vec![b'x'; 1024]));

        let mut counter = 0u64;
        b.iter(|| {
            // Access pattern that guarantees misses
            black_box(cache.get(&(counter % 100)).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cached_get, bench_put_churn, bench_loaded_miss);
criterion_main!(benches);
