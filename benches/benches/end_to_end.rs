//! End-to-end codec benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vq_benches::{create_test_image, random_codebook};
use vq_codec::{ImageCodec, RgbCodec, YuvCodec};

fn bench_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codec Round Trip");

    let rgb = RgbCodec::new(
        random_codebook(256, 4, 1),
        random_codebook(256, 4, 2),
        random_codebook(256, 4, 3),
    );
    let yuv = YuvCodec::new(
        random_codebook(256, 4, 4),
        random_codebook(64, 4, 5),
        random_codebook(64, 4, 6),
    )
    .unwrap();

    for size in [64usize, 256] {
        let image = create_test_image(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("rgb", size), &size, |b, _| {
            b.iter(|| rgb.process(black_box(&image)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("yuv", size), &size, |b, _| {
            b.iter(|| yuv.process(black_box(&image)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);
