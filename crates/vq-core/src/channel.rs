//! Single-channel sample grids and code maps

use crate::{Dimensions, VqError, VqResult};

/// A 2D grid of integer samples stored row-major
///
/// Samples are `i32` so that chroma planes can hold their signed range before
/// clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    dimensions: Dimensions,
    data: Vec<i32>,
}

impl Channel {
    /// Create a zero-filled channel
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            dimensions: Dimensions::new(width, height),
            data: vec![0; width * height],
        }
    }

    /// Wrap existing row-major samples
    pub fn from_vec(width: usize, height: usize, data: Vec<i32>) -> VqResult<Self> {
        if data.len() != width * height {
            return Err(VqError::VectorLengthMismatch {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            dimensions: Dimensions::new(width, height),
            data,
        })
    }

    /// Build a channel by evaluating `f(x, y)` for every position
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> i32) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            dimensions: Dimensions::new(width, height),
            data,
        }
    }

    /// A channel holding the same value everywhere
    pub fn filled(width: usize, height: usize, value: i32) -> Self {
        Self {
            dimensions: Dimensions::new(width, height),
            data: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[y * self.dimensions.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: i32) {
        let width = self.dimensions.width;
        self.data[y * width + x] = value;
    }

    /// Row-major view of all samples
    pub fn samples(&self) -> &[i32] {
        &self.data
    }

    pub fn into_samples(self) -> Vec<i32> {
        self.data
    }

    /// Copy of the top-left `dimensions` region
    pub fn cropped(&self, dimensions: Dimensions) -> VqResult<Self> {
        if dimensions.width > self.width() || dimensions.height > self.height() {
            return Err(VqError::DimensionMismatch {
                expected: self.dimensions,
                actual: dimensions,
            });
        }
        Ok(Self::from_fn(dimensions.width, dimensions.height, |x, y| {
            self.get(x, y)
        }))
    }

    /// Fail with `DimensionMismatch` unless `other` has the same extent
    pub fn ensure_same_dimensions(&self, other: &Channel) -> VqResult<()> {
        if self.dimensions != other.dimensions {
            return Err(VqError::DimensionMismatch {
                expected: self.dimensions,
                actual: other.dimensions,
            });
        }
        Ok(())
    }
}

/// A 2D grid of codebook indices, one per tile, addressed by tile coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeMap {
    /// Number of tiles along x
    pub cols: usize,
    /// Number of tiles along y
    pub rows: usize,
    /// Edge length in samples of the tile each index stands for
    pub block_size: usize,
    indices: Vec<u32>,
}

impl CodeMap {
    pub fn new(cols: usize, rows: usize, block_size: usize) -> Self {
        Self {
            cols,
            rows,
            block_size,
            indices: vec![0; cols * rows],
        }
    }

    #[inline]
    pub fn get(&self, bx: usize, by: usize) -> u32 {
        self.indices[by * self.cols + bx]
    }

    #[inline]
    pub fn set(&mut self, bx: usize, by: usize, index: u32) {
        self.indices[by * self.cols + bx] = index;
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Extent in samples of the channel this map tiles
    pub fn channel_dimensions(&self) -> Dimensions {
        Dimensions::new(self.cols * self.block_size, self.rows * self.block_size)
    }
}
