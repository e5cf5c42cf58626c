//! Benchmarks for block and scalar quantization
//!
//! Run with: cargo bench --bench quantization

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vq_benches::{create_test_image, random_codebook};
use vq_core::ScanOrder;
use vq_transform::{quantize_block, quantize_scalar, BlockQuantizer, Quantizer, ScalarQuantizer};

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("Nearest Centroid");

    for k in [16usize, 64, 256] {
        let codebook = random_codebook(k, 4, 1);
        let block = [12.0, 80.0, 140.0, 250.0];
        group.bench_with_input(BenchmarkId::new("block", k), &k, |b, _| {
            b.iter(|| quantize_block(black_box(&block), &codebook).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("scalar", k), &k, |b, _| {
            b.iter(|| quantize_scalar(black_box(137), &codebook));
        });
    }

    group.finish();
}

fn bench_channels(c: &mut Criterion) {
    let mut group = c.benchmark_group("Channel Quantization");
    let image = create_test_image(256, 256);
    let channel = image.channel(0);
    group.throughput(Throughput::Elements((256 * 256) as u64));

    let block_codebook = random_codebook(256, 4, 2);
    let block = BlockQuantizer::new(2, ScanOrder::ColumnMajor);
    group.bench_function("block_256x256_k256", |b| {
        b.iter(|| block.encode_channel(black_box(&channel), &block_codebook).unwrap());
    });

    let scalar_codebook = random_codebook(256, 4, 3);
    group.bench_function("scalar_256x256_k256", |b| {
        b.iter(|| {
            ScalarQuantizer
                .encode_channel(black_box(&channel), &scalar_codebook)
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_nearest, bench_channels);
criterion_main!(benches);
