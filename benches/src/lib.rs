//! Shared fixtures for the benchmarks

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vq_core::{Codebook, RgbImage};

/// Gradient test image
pub fn create_test_image(width: usize, height: usize) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        [
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
            ((x + y) * 255 / (width + height)) as u8,
        ]
    })
    .expect("benchmark images are non-empty")
}

/// Codebook of `k` random vectors of length `dim` in [0, 255]
pub fn random_codebook(k: usize, dim: usize, seed: u64) -> Codebook {
    let mut rng = StdRng::seed_from_u64(seed);
    Codebook::new(
        (0..k)
            .map(|_| (0..dim).map(|_| rng.gen_range(0.0..255.0)).collect())
            .collect(),
    )
    .expect("k and dim are positive")
}

/// `n` random training vectors of length `dim`
pub fn random_vectors(n: usize, dim: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dim).map(|_| rng.gen_range(0.0..255.0)).collect())
        .collect()
}
