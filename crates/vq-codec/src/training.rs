//! Training-set construction
//!
//! Turns decoded images into the vectors each codebook is trained on. The two
//! variants sample differently:
//! - RGB codebooks are trained on 2x2 row-major tiles of the full-resolution
//!   R, G or B plane.
//! - YUV codebooks are trained on 2x2 column-major tiles of the Y plane, or of
//!   the subsampled U or V plane.
//!
//! Which images reach a training set is up to the caller.

use rand::Rng;
use vq_color::rgb_to_yuv;
use vq_core::consts::BLOCK_SIZE;
use vq_core::{
    Channel, ChannelSelector, Codebook, RgbImage, ScanOrder, VqError, VqResult, YuvPlanes,
};
use vq_transform::{extract_blocks, sub_sample, KMeans, KMeansConfig, TrainingReport};

/// 2x2 row-major tiles of one RGB plane
pub fn rgb_training_vectors(
    image: &RgbImage,
    selector: ChannelSelector,
) -> VqResult<Vec<Vec<f64>>> {
    if !selector.is_rgb() {
        return Err(VqError::UnsupportedChannelSelector(selector.as_char()));
    }
    let channel = image.channel(selector.plane_index());
    Ok(extract_blocks(&channel, BLOCK_SIZE, ScanOrder::RowMajor))
}

/// 2x2 column-major tiles of one YUV plane, chroma subsampled first
pub fn yuv_training_vectors(
    image: &RgbImage,
    selector: ChannelSelector,
) -> VqResult<Vec<Vec<f64>>> {
    yuv_plane_vectors(&rgb_to_yuv(image), selector)
}

/// Like [`yuv_training_vectors`], for an image already converted to YUV
pub fn yuv_plane_vectors(
    planes: &YuvPlanes,
    selector: ChannelSelector,
) -> VqResult<Vec<Vec<f64>>> {
    let blocks = |channel: &Channel| extract_blocks(channel, BLOCK_SIZE, ScanOrder::ColumnMajor);
    match selector {
        ChannelSelector::Y => Ok(blocks(&planes.y)),
        ChannelSelector::U => Ok(blocks(&sub_sample(&planes.u))),
        ChannelSelector::V => Ok(blocks(&sub_sample(&planes.v))),
        other => Err(VqError::UnsupportedChannelSelector(other.as_char())),
    }
}

/// Training vectors for any channel, using that channel's variant
pub fn training_vectors(image: &RgbImage, selector: ChannelSelector) -> VqResult<Vec<Vec<f64>>> {
    if selector.is_rgb() {
        rgb_training_vectors(image, selector)
    } else {
        yuv_training_vectors(image, selector)
    }
}

/// Vectors accumulated for one channel's codebook
#[derive(Debug, Clone)]
pub struct TrainingSet {
    selector: ChannelSelector,
    vectors: Vec<Vec<f64>>,
    images: usize,
}

impl TrainingSet {
    pub fn new(selector: ChannelSelector) -> Self {
        Self {
            selector,
            vectors: Vec::new(),
            images: 0,
        }
    }

    pub fn selector(&self) -> ChannelSelector {
        self.selector
    }

    /// Add one image's tiles, returning how many vectors it contributed
    pub fn add_image(&mut self, image: &RgbImage) -> VqResult<usize> {
        let vectors = training_vectors(image, self.selector)?;
        Ok(self.push_image(vectors))
    }

    fn push_image(&mut self, vectors: Vec<Vec<f64>>) -> usize {
        let added = vectors.len();
        self.vectors.extend(vectors);
        self.images += 1;
        added
    }

    pub fn vectors(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of images added so far
    pub fn image_count(&self) -> usize {
        self.images
    }

    /// Cluster the accumulated vectors into a codebook
    pub fn train<R: Rng + ?Sized>(
        &self,
        config: KMeansConfig,
        rng: &mut R,
    ) -> VqResult<(Codebook, TrainingReport)> {
        tracing::info!(
            channel = %self.selector,
            images = self.images,
            vectors = self.vectors.len(),
            k = config.k,
            "training codebook"
        );
        KMeans::new(config).train_with_report(&self.vectors, rng)
    }
}

/// Add one image to several training sets, converting it to YUV at most once
pub fn add_image_to_sets(image: &RgbImage, sets: &mut [TrainingSet]) -> VqResult<()> {
    let mut planes: Option<YuvPlanes> = None;
    for set in sets.iter_mut() {
        let vectors = if set.selector.is_rgb() {
            rgb_training_vectors(image, set.selector)?
        } else {
            let planes = planes.get_or_insert_with(|| rgb_to_yuv(image));
            yuv_plane_vectors(planes, set.selector)?
        };
        set.push_image(vectors);
    }
    Ok(())
}
