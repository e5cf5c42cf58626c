//! # VQ - vector-quantization image codec
//!
//! This crate provides a high-level API for training codebooks and for
//! compressing images with them.
//!
//! ## Quick Start
//!
//! ### Training
//!
//! ```no_run
//! use rand::SeedableRng;
//! use vq::{io, ChannelSelector, KMeansConfig, TrainingSet};
//!
//! let image = io::load_image("training/forest/0001.png").unwrap();
//! let mut set = TrainingSet::new(ChannelSelector::Y);
//! set.add_image(&image).unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let (codebook, _report) = set.train(KMeansConfig::new(256), &mut rng).unwrap();
//! codebook.save("codebooks/yCB.txt").unwrap();
//! ```
//!
//! ### Compressing
//!
//! ```no_run
//! use vq::{io, Codebook, ImageCodec, YuvCodec};
//!
//! let codec = YuvCodec::new(
//!     Codebook::load("codebooks/yCB.txt").unwrap(),
//!     Codebook::load("codebooks/uCB.txt").unwrap(),
//!     Codebook::load("codebooks/vCB.txt").unwrap(),
//! )
//! .unwrap();
//!
//! let image = io::load_image("test/forest/0042.jpg").unwrap();
//! let output = codec.process(&image).unwrap();
//! println!("PSNR {:.2} dB, ratio {:.2}", output.mean_psnr(), output.compression_ratio());
//! io::save_image(&output.reconstructed, "decoded.png").unwrap();
//! ```
//!
//! ## Architecture
//!
//! - `vq-core`: sample grids, images, codebooks, errors
//! - `vq-color`: truncating RGB <-> YUV conversion
//! - `vq-transform`: tiling, chroma resampling, K-means, quantizers
//! - `vq-codec`: RGB and YUV codecs, metrics, training sets

pub mod io;

// Re-export core types
pub use vq_core::{
    consts, Channel, ChannelSelector, CodeMap, Codebook, Dimensions, RgbImage, Sample, ScanOrder,
    VqError, VqResult, YuvPlanes,
};

// Re-export color transforms
pub use vq_color::{rgb_to_yuv, yuv_planes_to_rgb, yuv_to_rgb};

// Re-export transforms
pub use vq_transform::{
    cluster, dequantize_block, dequantize_scalar, extract_blocks, quantize_block,
    quantize_scalar, sub_sample, upsample, BlockQuantizer, KMeans, KMeansConfig, Quantizer,
    ScalarQuantizer, TrainingReport,
};

// Re-export codecs
pub use vq_codec::{
    add_image_to_sets, average_ratio, compression_ratio, psnr, psnr_rgb, training_vectors,
    yuv_plane_vectors, CodecOutput, CodecVariant, Comparison, EncodedImage, ImageCodec, RgbCodec, TrainingSet, Winner, YuvCodec,
    YuvCodecOptions,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_image_creation() {
        let image = RgbImage::new(100, 100);
        assert!(image.is_ok());
        let img = image.unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 100);
    }
}
