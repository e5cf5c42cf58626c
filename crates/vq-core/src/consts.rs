//! Constants used throughout the VQ codec

/// Edge length of the square tiles quantized by the block codecs
pub const BLOCK_SIZE: usize = 2;

/// Chroma subsampling factor along each axis
pub const SUBSAMPLE_FACTOR: usize = 2;

/// YUV input is cropped to a multiple of this so that subsampling followed
/// by 2x2 tiling divides evenly
pub const YUV_CROP_MULTIPLE: usize = SUBSAMPLE_FACTOR * BLOCK_SIZE;

/// Fixed number of Lloyd iterations run by the K-means trainer
pub const DEFAULT_KMEANS_ITERATIONS: usize = 20;

/// Default codebook sizes
pub const DEFAULT_RGB_CODEBOOK_SIZE: usize = 256;
pub const DEFAULT_LUMA_CODEBOOK_SIZE: usize = 256;
pub const DEFAULT_CHROMA_CODEBOOK_SIZE: usize = 64;

/// Number of images sampled from each category when training RGB codebooks
pub const DEFAULT_RGB_IMAGES_PER_CATEGORY: usize = 10;

/// Peak sample value for 8-bit channels
pub const MAX_SAMPLE: i32 = 255;

/// Bits used by one sample of the uncompressed source
pub const BITS_PER_SAMPLE: u32 = 8;

/// Channels in the uncompressed source
pub const SOURCE_CHANNELS: u32 = 3;
