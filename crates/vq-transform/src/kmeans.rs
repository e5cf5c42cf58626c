//! K-means codebook training
//!
//! Lloyd's algorithm with a fixed iteration count:
//! - centroids are seeded by drawing K input vectors uniformly with
//!   replacement, so duplicate seeds are possible;
//! - every round assigns each vector to its nearest centroid (lowest index on
//!   ties) and moves each centroid to the mean of its members;
//! - a centroid that attracts no members keeps its previous value.
//!
//! There is no convergence test. The random source is supplied by the caller
//! so training is reproducible under a fixed seed.

use crate::quantization::nearest_centroid;
use rand::Rng;
use vq_core::consts::{DEFAULT_KMEANS_ITERATIONS, DEFAULT_LUMA_CODEBOOK_SIZE};
use vq_core::{Codebook, VqError, VqResult};

/// K-means trainer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeansConfig {
    /// Number of centroids to produce
    pub k: usize,
    /// Number of assignment/update rounds
    pub iterations: usize,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_LUMA_CODEBOOK_SIZE,
            iterations: DEFAULT_KMEANS_ITERATIONS,
        }
    }
}

impl KMeansConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Statistics for one assignment/update round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStats {
    /// Mean squared distance of every vector to its assigned centroid
    pub distortion: f64,
    /// Centroids that received no members and kept their value
    pub empty_clusters: usize,
}

/// Per-round statistics collected while training
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingReport {
    pub iterations: Vec<IterationStats>,
}

impl TrainingReport {
    /// Distortion measured in the last round
    pub fn final_distortion(&self) -> Option<f64> {
        self.iterations.last().map(|s| s.distortion)
    }
}

/// K-means codebook trainer
#[derive(Debug, Clone, Copy, Default)]
pub struct KMeans {
    config: KMeansConfig,
}

impl KMeans {
    pub fn new(config: KMeansConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }

    /// Cluster `vectors` into a codebook of `config.k` centroids
    pub fn train<R: Rng + ?Sized>(&self, vectors: &[Vec<f64>], rng: &mut R) -> VqResult<Codebook> {
        self.train_with_report(vectors, rng).map(|(codebook, _)| codebook)
    }

    /// Like [`KMeans::train`], also returning per-round statistics
    pub fn train_with_report<R: Rng + ?Sized>(
        &self,
        vectors: &[Vec<f64>],
        rng: &mut R,
    ) -> VqResult<(Codebook, TrainingReport)> {
        let k = self.config.k;
        if k == 0 {
            return Err(VqError::InvalidCodebookSize(k));
        }
        if vectors.len() < k {
            return Err(VqError::InsufficientTrainingData {
                available: vectors.len(),
                requested: k,
            });
        }
        let dim = vectors[0].len();
        if let Some(bad) = vectors.iter().find(|v| v.len() != dim) {
            return Err(VqError::VectorLengthMismatch {
                expected: dim,
                actual: bad.len(),
            });
        }

        let mut centroids: Vec<Vec<f64>> = (0..k)
            .map(|_| vectors[rng.gen_range(0..vectors.len())].clone())
            .collect();

        tracing::debug!(
            vectors = vectors.len(),
            k,
            dim,
            iterations = self.config.iterations,
            "starting k-means"
        );

        let mut report = TrainingReport::default();
        let mut sums = vec![vec![0.0; dim]; k];
        let mut counts = vec![0usize; k];

        for iteration in 0..self.config.iterations {
            for sum in sums.iter_mut() {
                sum.iter_mut().for_each(|s| *s = 0.0);
            }
            counts.iter_mut().for_each(|c| *c = 0);

            // Assignment step
            let mut total_distance = 0.0;
            for vector in vectors {
                let (nearest, dist) =
                    nearest_centroid(vector, centroids.iter().map(Vec::as_slice));
                total_distance += dist;
                counts[nearest] += 1;
                for (s, &v) in sums[nearest].iter_mut().zip(vector) {
                    *s += v;
                }
            }

            // Update step, empty clusters keep their centroid
            let mut empty_clusters = 0;
            for ((centroid, sum), &count) in centroids.iter_mut().zip(&sums).zip(&counts) {
                if count == 0 {
                    empty_clusters += 1;
                    continue;
                }
                for (c, &s) in centroid.iter_mut().zip(sum) {
                    *c = s / count as f64;
                }
            }

            let stats = IterationStats {
                distortion: total_distance / vectors.len() as f64,
                empty_clusters,
            };
            tracing::trace!(
                iteration,
                distortion = stats.distortion,
                empty_clusters,
                "k-means round"
            );
            report.iterations.push(stats);
        }

        if let Some(last) = report.iterations.last() {
            tracing::debug!(
                distortion = last.distortion,
                empty_clusters = last.empty_clusters,
                "k-means finished"
            );
        }

        Ok((Codebook::new(centroids)?, report))
    }
}

/// Train a codebook of size `k` with the default iteration count
pub fn cluster<R: Rng + ?Sized>(vectors: &[Vec<f64>], k: usize, rng: &mut R) -> VqResult<Codebook> {
    KMeans::new(KMeansConfig::new(k)).train(vectors, rng)
}
