//! Benchmarks for K-means codebook training

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vq_benches::random_vectors;
use vq_transform::{KMeans, KMeansConfig};

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("K-means");
    group.sample_size(10);

    let vectors = random_vectors(4096, 4, 7);
    for k in [16usize, 64] {
        let trainer = KMeans::new(KMeansConfig::new(k));
        group.bench_with_input(BenchmarkId::new("4096x4", k), &k, |b, _| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                trainer.train(black_box(&vectors), &mut rng).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kmeans);
criterion_main!(benches);
