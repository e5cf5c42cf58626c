//! Quality and efficiency metrics

use vq_core::consts::{BITS_PER_SAMPLE, MAX_SAMPLE, SOURCE_CHANNELS};
use vq_core::{Channel, Dimensions, RgbImage, Sample, VqError, VqResult};

/// Mean squared error between two equally long sample sequences
pub fn mse<S: Sample>(original: &[S], reconstructed: &[S]) -> VqResult<f64> {
    if original.len() != reconstructed.len() {
        return Err(VqError::VectorLengthMismatch {
            expected: original.len(),
            actual: reconstructed.len(),
        });
    }
    if original.is_empty() {
        return Err(VqError::InvalidDimensions {
            width: 0,
            height: 0,
        });
    }
    let sum: f64 = original
        .iter()
        .zip(reconstructed)
        .map(|(&a, &b)| {
            let diff = a.to_f64_lossy() - b.to_f64_lossy();
            diff * diff
        })
        .sum();
    Ok(sum / original.len() as f64)
}

/// PSNR in dB for a given mean squared error; zero error gives infinity
pub fn psnr_from_mse(mse: f64) -> f64 {
    if mse == 0.0 {
        return f64::INFINITY;
    }
    let peak = MAX_SAMPLE as f64;
    10.0 * (peak * peak / mse).log10()
}

/// PSNR between two equally sized channels
pub fn psnr(original: &Channel, reconstructed: &Channel) -> VqResult<f64> {
    original.ensure_same_dimensions(reconstructed)?;
    Ok(psnr_from_mse(mse(original.samples(), reconstructed.samples())?))
}

/// PSNR of each RGB plane of two equally sized images
pub fn psnr_rgb(original: &RgbImage, reconstructed: &RgbImage) -> VqResult<[f64; 3]> {
    if original.dimensions() != reconstructed.dimensions() {
        return Err(VqError::DimensionMismatch {
            expected: original.dimensions(),
            actual: reconstructed.dimensions(),
        });
    }
    let mut out = [0.0; 3];
    for (plane, value) in out.iter_mut().enumerate() {
        *value = psnr(&original.channel(plane), &reconstructed.channel(plane))?;
    }
    Ok(out)
}

/// Ratio of uncompressed bits to index bits for one coded channel
///
/// The uncompressed size always assumes a full three-channel 8-bit source of
/// `width` x `height`, even though only one channel's indices are counted.
/// Callers average the three per-channel results with [`average_ratio`].
pub fn compression_ratio(
    width: usize,
    height: usize,
    block_size: usize,
    codebook_size: usize,
) -> f64 {
    let original_bits = (BITS_PER_SAMPLE * SOURCE_CHANNELS) as f64 * width as f64 * height as f64;
    let num_blocks = (width * height) as f64 / (block_size * block_size) as f64;
    let bits_per_index = (codebook_size as f64).log2();
    original_bits / (num_blocks * bits_per_index)
}

/// Compression ratio for a channel of the given extent
pub fn channel_compression_ratio(
    dimensions: Dimensions,
    block_size: usize,
    codebook_size: usize,
) -> f64 {
    compression_ratio(
        dimensions.width,
        dimensions.height,
        block_size,
        codebook_size,
    )
}

/// Mean of three per-channel ratios
pub fn average_ratio(ratios: [f64; 3]) -> f64 {
    ratios.iter().sum::<f64>() / 3.0
}

/// Which codec variant compressed an image better
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Rgb,
    Yuv,
    Tie,
}

/// Side-by-side comparison of the two variants' overall ratios
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub rgb_ratio: f64,
    pub yuv_ratio: f64,
}

impl Comparison {
    pub fn between(rgb_ratio: f64, yuv_ratio: f64) -> Self {
        Self {
            rgb_ratio,
            yuv_ratio,
        }
    }

    /// RGB ratio divided by YUV ratio
    pub fn relative(&self) -> f64 {
        self.rgb_ratio / self.yuv_ratio
    }

    pub fn winner(&self) -> Winner {
        if self.rgb_ratio > self.yuv_ratio {
            Winner::Rgb
        } else if self.yuv_ratio > self.rgb_ratio {
            Winner::Yuv
        } else {
            Winner::Tie
        }
    }

    /// How many times better the winner compresses (1.0 on a tie)
    pub fn factor(&self) -> f64 {
        match self.winner() {
            Winner::Rgb => self.relative(),
            Winner::Yuv => 1.0 / self.relative(),
            Winner::Tie => 1.0,
        }
    }
}
