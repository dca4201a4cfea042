use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use reservoir_sampler::{reservoir_sampling_with_source, ReservoirSampler};

fn bench_offer(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservoir_offer");
    group.throughput(Throughput::Elements(1));

    for k in [1, 10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            let mut sampler = ReservoirSampler::with_seed(k, 42).unwrap();
            sampler.extend(0..k as u64);
            let mut i = k as u64;
            b.iter(|| {
                black_box(sampler.offer(i));
                i = i.wrapping_add(1);
            });
        });
    }

    group.finish();
}

fn bench_full_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservoir_stream");

    for n in [1_000u64, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let source = ChaCha20Rng::seed_from_u64(7);
                black_box(reservoir_sampling_with_source(0..n, 10, source).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_offer, bench_full_stream);
criterion_main!(benches);
