//! Per-pixel RGB codec
//!
//! Each color plane is quantized sample by sample against its own codebook.
//! The codebooks are trained on 2x2 tiles, but only the first component of
//! each centroid takes part in matching and reconstruction.

use crate::{join3, CodecVariant, EncodedImage, ImageCodec};
use vq_core::{Codebook, Dimensions, RgbImage, VqResult};
use vq_transform::{Quantizer, ScalarQuantizer};

use crate::metrics::channel_compression_ratio;

/// RGB codec holding one codebook per color plane
#[derive(Debug, Clone)]
pub struct RgbCodec {
    codebooks: [Codebook; 3],
}

impl RgbCodec {
    pub fn new(red: Codebook, green: Codebook, blue: Codebook) -> Self {
        Self {
            codebooks: [red, green, blue],
        }
    }

    pub fn codebooks(&self) -> &[Codebook; 3] {
        &self.codebooks
    }
}

impl ImageCodec for RgbCodec {
    fn variant(&self) -> CodecVariant {
        CodecVariant::Rgb
    }

    fn encode(&self, image: &RgbImage) -> VqResult<EncodedImage> {
        let [cb_r, cb_g, cb_b] = &self.codebooks;
        tracing::trace!(dimensions = %image.dimensions(), "rgb: quantizing planes");
        let (r, g, b) = join3(
            || ScalarQuantizer.encode_channel(&image.channel(0), cb_r),
            || ScalarQuantizer.encode_channel(&image.channel(1), cb_g),
            || ScalarQuantizer.encode_channel(&image.channel(2), cb_b),
        );
        Ok(EncodedImage {
            variant: CodecVariant::Rgb,
            dimensions: image.dimensions(),
            code_maps: [r?, g?, b?],
        })
    }

    fn decode(&self, encoded: &EncodedImage) -> VqResult<RgbImage> {
        encoded.ensure_variant(CodecVariant::Rgb)?;
        let [cb_r, cb_g, cb_b] = &self.codebooks;
        let [map_r, map_g, map_b] = &encoded.code_maps;
        tracing::trace!(dimensions = %encoded.dimensions, "rgb: reconstructing planes");
        let (r, g, b) = join3(
            || ScalarQuantizer.decode_channel(map_r, cb_r),
            || ScalarQuantizer.decode_channel(map_g, cb_g),
            || ScalarQuantizer.decode_channel(map_b, cb_b),
        );
        RgbImage::from_channels(&r?, &g?, &b?)
    }

    fn compression_ratios(&self, dimensions: Dimensions) -> [f64; 3] {
        let block_size = ScalarQuantizer.block_size();
        let [r, g, b] = &self.codebooks;
        [
            channel_compression_ratio(dimensions, block_size, r.len()),
            channel_compression_ratio(dimensions, block_size, g.len()),
            channel_compression_ratio(dimensions, block_size, b.len()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn level_codebook(levels: &[f64]) -> Codebook {
        Codebook::new(levels.iter().map(|&l| vec![l, l, l, l]).collect()).unwrap()
    }

    #[test]
    fn test_reconstructs_nearest_levels() {
        let codebook = level_codebook(&[0.0, 128.0, 255.0]);
        let codec = RgbCodec::new(codebook.clone(), codebook.clone(), codebook);
        let image = RgbImage::from_fn(3, 2, |x, _| [200, (x * 60) as u8, 10]).unwrap();

        let output = codec.process(&image).unwrap();
        assert_eq!(output.reconstructed.dimensions(), image.dimensions());
        assert_eq!(output.reconstructed.pixel(0, 0), [255, 0, 0]);
        assert_eq!(output.reconstructed.pixel(1, 0), [255, 0, 0]);
        assert_eq!(output.reconstructed.pixel(2, 1), [255, 128, 0]);
    }

    #[test]
    fn test_one_index_per_pixel() {
        let codebook = level_codebook(&[0.0, 255.0]);
        let codec = RgbCodec::new(codebook.clone(), codebook.clone(), codebook);
        let image = RgbImage::new(5, 3).unwrap();
        let encoded = codec.encode(&image).unwrap();
        for map in &encoded.code_maps {
            assert_eq!((map.cols, map.rows, map.block_size), (5, 3, 1));
        }
    }

    #[test]
    fn test_exact_levels_lossless() {
        let codebook = level_codebook(&(0..256).map(|v| v as f64).collect::<Vec<_>>());
        let codec = RgbCodec::new(codebook.clone(), codebook.clone(), codebook);
        let image =
            RgbImage::from_fn(16, 16, |x, y| [(x * 16) as u8, (y * 16) as u8, (x ^ y) as u8])
                .unwrap();
        let output = codec.process(&image).unwrap();
        assert_eq!(output.reconstructed, image);
        assert!(output.psnr.iter().all(|p| p.is_infinite()));
    }

    #[test]
    fn test_ratio_uses_pixel_blocks() {
        let codebook = level_codebook(&(0..256).map(|v| v as f64).collect::<Vec<_>>());
        let codec = RgbCodec::new(codebook.clone(), codebook.clone(), codebook);
        let ratios = codec.compression_ratios(Dimensions::new(256, 256));
        for ratio in ratios {
            assert_relative_eq!(ratio, 3.0);
        }
    }

    #[test]
    fn test_decode_rejects_yuv_encoding() {
        let codebook = level_codebook(&[0.0, 255.0]);
        let codec = RgbCodec::new(codebook.clone(), codebook.clone(), codebook);
        let encoded = EncodedImage {
            variant: CodecVariant::Yuv,
            dimensions: Dimensions::new(4, 4),
            code_maps: [
                vq_core::CodeMap::new(2, 2, 2),
                vq_core::CodeMap::new(1, 1, 2),
                vq_core::CodeMap::new(1, 1, 2),
            ],
        };
        assert!(matches!(
            codec.decode(&encoded),
            Err(vq_core::VqError::CodecMismatch { expected: "RGB", actual: "YUV" })
        ));
    }
}
