//! VQ codec implementation
//!
//! Two variants share the [`ImageCodec`] interface:
//! - [`RgbCodec`] quantizes R, G and B per pixel against scalar codebooks.
//! - [`YuvCodec`] converts to YUV, subsamples chroma, and quantizes 2x2 tiles
//!   of every plane.
//!
//! Codecs only borrow their codebooks, so one set of codebooks can serve any
//! number of images concurrently.

pub mod metrics;
pub mod rgb;
pub mod training;
pub mod yuv;

pub use metrics::*;
pub use rgb::*;
pub use training::*;
pub use yuv::*;

use vq_core::{CodeMap, Dimensions, RgbImage, VqError, VqResult};

/// Which pipeline produced an encoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecVariant {
    Rgb,
    Yuv,
}

impl CodecVariant {
    pub fn name(self) -> &'static str {
        match self {
            CodecVariant::Rgb => "RGB",
            CodecVariant::Yuv => "YUV",
        }
    }
}

/// Code maps for the three coded channels of one image
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    pub variant: CodecVariant,
    /// Extent of the image that was coded, after any cropping
    pub dimensions: Dimensions,
    /// R, G, B or Y, U, V code maps in that order
    pub code_maps: [CodeMap; 3],
}

impl EncodedImage {
    /// Fail with `CodecMismatch` unless this image came from `expected`
    pub fn ensure_variant(&self, expected: CodecVariant) -> VqResult<()> {
        if self.variant != expected {
            return Err(VqError::CodecMismatch {
                expected: expected.name(),
                actual: self.variant.name(),
            });
        }
        Ok(())
    }
}

/// Result of a full encode/decode round trip
#[derive(Debug, Clone)]
pub struct CodecOutput {
    pub reconstructed: RgbImage,
    pub encoded: EncodedImage,
    /// PSNR of the R, G and B planes against the (cropped) original
    pub psnr: [f64; 3],
    /// Compression ratio of each coded channel
    pub ratios: [f64; 3],
}

impl CodecOutput {
    /// Mean PSNR over the three RGB planes
    pub fn mean_psnr(&self) -> f64 {
        self.psnr.iter().sum::<f64>() / 3.0
    }

    /// Average of the three per-channel compression ratios
    pub fn compression_ratio(&self) -> f64 {
        average_ratio(self.ratios)
    }
}

/// Encode/decode interface shared by both variants
pub trait ImageCodec {
    fn variant(&self) -> CodecVariant;

    /// Quantize an image into code maps
    fn encode(&self, image: &RgbImage) -> VqResult<EncodedImage>;

    /// Rebuild an image from code maps
    fn decode(&self, encoded: &EncodedImage) -> VqResult<RgbImage>;

    /// Per-channel compression ratios for a coded image of `dimensions`
    fn compression_ratios(&self, dimensions: Dimensions) -> [f64; 3];

    /// Encode, decode, and score one image
    fn process(&self, image: &RgbImage) -> VqResult<CodecOutput> {
        let encoded = self.encode(image)?;
        let reconstructed = self.decode(&encoded)?;
        let original = image.cropped(encoded.dimensions)?;
        let psnr = psnr_rgb(&original, &reconstructed)?;
        let ratios = self.compression_ratios(encoded.dimensions);
        tracing::debug!(
            variant = ?self.variant(),
            dimensions = %encoded.dimensions,
            psnr = ?psnr,
            ratio = average_ratio(ratios),
            "processed image"
        );
        Ok(CodecOutput {
            reconstructed,
            encoded,
            psnr,
            ratios,
        })
    }
}

/// Run three independent jobs on the rayon pool
pub(crate) fn join3<A, B, C, RA, RB, RC>(a: A, b: B, c: C) -> (RA, RB, RC)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    C: FnOnce() -> RC + Send,
    RA: Send,
    RB: Send,
    RC: Send,
{
    let (ra, (rb, rc)) = rayon::join(a, || rayon::join(b, c));
    (ra, rb, rc)
}
