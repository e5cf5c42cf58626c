//! YUV codec with 2x2 chroma subsampling
//!
//! Pipeline: crop to a multiple of 4, convert to YUV, subsample U and V,
//! quantize 2x2 tiles of every plane, then invert each step on decode.

use crate::metrics::channel_compression_ratio;
use crate::{join3, CodecVariant, EncodedImage, ImageCodec};
use vq_color::{rgb_to_yuv, yuv_to_rgb};
use vq_core::consts::{BLOCK_SIZE, SUBSAMPLE_FACTOR};
use vq_core::{Codebook, Dimensions, RgbImage, ScanOrder, VqError, VqResult};
use vq_transform::{sub_sample, upsample, BlockQuantizer, Quantizer};

/// YUV codec options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YuvCodecOptions {
    /// Tile edge length for every plane
    pub block_size: usize,
    /// Tile flattening order; must match the order the codebooks were trained with
    pub scan_order: ScanOrder,
}

impl Default for YuvCodecOptions {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
            scan_order: ScanOrder::ColumnMajor,
        }
    }
}

impl YuvCodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size.max(1);
        self
    }

    pub fn scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }

    /// Both image sides are cropped to a multiple of this
    pub fn crop_multiple(&self) -> usize {
        SUBSAMPLE_FACTOR * self.block_size
    }
}

/// YUV codec holding luma and chroma codebooks
#[derive(Debug, Clone)]
pub struct YuvCodec {
    codebooks: [Codebook; 3],
    quantizer: BlockQuantizer,
    options: YuvCodecOptions,
}

impl YuvCodec {
    /// Create a codec with default options
    pub fn new(y: Codebook, u: Codebook, v: Codebook) -> VqResult<Self> {
        Self::with_options(y, u, v, YuvCodecOptions::default())
    }

    /// Create a codec; every codebook must hold `block_size²`-long centroids
    pub fn with_options(
        y: Codebook,
        u: Codebook,
        v: Codebook,
        options: YuvCodecOptions,
    ) -> VqResult<Self> {
        let expected = options.block_size * options.block_size;
        for codebook in [&y, &u, &v] {
            if codebook.dimension() != expected {
                return Err(VqError::VectorLengthMismatch {
                    expected,
                    actual: codebook.dimension(),
                });
            }
        }
        Ok(Self {
            codebooks: [y, u, v],
            quantizer: BlockQuantizer::new(options.block_size, options.scan_order),
            options,
        })
    }

    pub fn codebooks(&self) -> &[Codebook; 3] {
        &self.codebooks
    }

    pub fn options(&self) -> &YuvCodecOptions {
        &self.options
    }

    /// Extent the codec actually processes for an input of `dimensions`
    pub fn coded_dimensions(&self, dimensions: Dimensions) -> Dimensions {
        dimensions.cropped_to_multiple(self.options.crop_multiple())
    }
}

impl ImageCodec for YuvCodec {
    fn variant(&self) -> CodecVariant {
        CodecVariant::Yuv
    }

    fn encode(&self, image: &RgbImage) -> VqResult<EncodedImage> {
        let dimensions = self.coded_dimensions(image.dimensions());
        if dimensions != image.dimensions() {
            tracing::debug!(
                from = %image.dimensions(),
                to = %dimensions,
                "yuv: cropped input"
            );
        }
        let image = image.cropped(dimensions)?;

        tracing::trace!("yuv: converting RGB to YUV");
        let planes = rgb_to_yuv(&image);

        tracing::trace!("yuv: subsampling chroma");
        let u = sub_sample(&planes.u);
        let v = sub_sample(&planes.v);

        let [cb_y, cb_u, cb_v] = &self.codebooks;
        let quantizer = &self.quantizer;
        let (map_y, map_u, map_v) = join3(
            || quantizer.encode_channel(&planes.y, cb_y),
            || quantizer.encode_channel(&u, cb_u),
            || quantizer.encode_channel(&v, cb_v),
        );

        Ok(EncodedImage {
            variant: CodecVariant::Yuv,
            dimensions,
            code_maps: [map_y?, map_u?, map_v?],
        })
    }

    fn decode(&self, encoded: &EncodedImage) -> VqResult<RgbImage> {
        encoded.ensure_variant(CodecVariant::Yuv)?;
        let [cb_y, cb_u, cb_v] = &self.codebooks;
        let [map_y, map_u, map_v] = &encoded.code_maps;
        let quantizer = &self.quantizer;

        let (y, u, v) = join3(
            || quantizer.decode_channel(map_y, cb_y),
            || quantizer.decode_channel(map_u, cb_u).map(|c| upsample(&c)),
            || quantizer.decode_channel(map_v, cb_v).map(|c| upsample(&c)),
        );

        tracing::trace!("yuv: converting YUV to RGB");
        yuv_to_rgb(&y?, &u?, &v?)
    }

    fn compression_ratios(&self, dimensions: Dimensions) -> [f64; 3] {
        let block_size = self.options.block_size;
        let chroma = dimensions.halved();
        let [y, u, v] = &self.codebooks;
        [
            channel_compression_ratio(dimensions, block_size, y.len()),
            channel_compression_ratio(chroma, block_size, u.len()),
            channel_compression_ratio(chroma, block_size, v.len()),
        ]
    }
}
