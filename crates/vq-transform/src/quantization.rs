//! Vector quantization against a trained codebook
//!
//! Two strategies share the [`Quantizer`] interface:
//! - [`BlockQuantizer`] matches whole tiles by squared Euclidean distance.
//! - [`ScalarQuantizer`] matches single samples against component 0 of each
//!   centroid by absolute difference. Centroids keep their full trained
//!   dimensionality; the remaining components are ignored in this mode.
//!
//! Both break ties in favour of the lowest index.

use crate::blocks::{tile_grid, tile_vector, write_tile};
use vq_core::{Channel, CodeMap, Codebook, ScanOrder, VqError, VqResult};

/// Squared Euclidean distance over the common prefix of `a` and `b`
#[inline]
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Index and distance of the nearest centroid, lowest index on ties
pub fn nearest_centroid<'a, I>(vector: &[f64], centroids: I) -> (usize, f64)
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut best = 0;
    let mut best_dist = f64::MAX;
    for (i, centroid) in centroids.into_iter().enumerate() {
        let dist = squared_distance(vector, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    (best, best_dist)
}

/// Block mode: index of the centroid nearest to `vector`
pub fn quantize_block(vector: &[f64], codebook: &Codebook) -> VqResult<usize> {
    if vector.len() != codebook.dimension() {
        return Err(VqError::VectorLengthMismatch {
            expected: codebook.dimension(),
            actual: vector.len(),
        });
    }
    Ok(nearest_centroid(vector, codebook.iter()).0)
}

/// Block mode: the centroid stored at `index`
pub fn dequantize_block(index: usize, codebook: &Codebook) -> VqResult<&[f64]> {
    codebook.get(index)
}

/// Scalar mode: index of the centroid whose first component is nearest to `value`
pub fn quantize_scalar(value: i32, codebook: &Codebook) -> usize {
    let value = value as f64;
    let mut best = 0;
    let mut best_dist = f64::MAX;
    for (i, centroid) in codebook.iter().enumerate() {
        let dist = (value - centroid[0]).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Scalar mode: first component of the centroid at `index`, truncated
pub fn dequantize_scalar(index: usize, codebook: &Codebook) -> VqResult<i32> {
    Ok(codebook.get(index)?[0] as i32)
}

/// A strategy for mapping whole channels to code maps and back
pub trait Quantizer {
    /// Edge length of the tile each index covers
    fn block_size(&self) -> usize;

    /// Quantize every whole tile of `channel`
    fn encode_channel(&self, channel: &Channel, codebook: &Codebook) -> VqResult<CodeMap>;

    /// Rebuild a channel from a code map
    fn decode_channel(&self, code_map: &CodeMap, codebook: &Codebook) -> VqResult<Channel>;
}

/// Tile-wise quantization over the full centroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockQuantizer {
    block_size: usize,
    order: ScanOrder,
}

impl BlockQuantizer {
    /// A block size of zero is raised to 1
    pub fn new(block_size: usize, order: ScanOrder) -> Self {
        Self {
            block_size: block_size.max(1),
            order,
        }
    }

    pub fn order(&self) -> ScanOrder {
        self.order
    }

    fn check_codebook(&self, codebook: &Codebook) -> VqResult<()> {
        let expected = self.block_size * self.block_size;
        if codebook.dimension() != expected {
            return Err(VqError::VectorLengthMismatch {
                expected,
                actual: codebook.dimension(),
            });
        }
        Ok(())
    }
}

fn check_block_size(code_map: &CodeMap, expected: usize) -> VqResult<()> {
    if code_map.block_size != expected {
        return Err(VqError::BlockSizeMismatch {
            expected,
            actual: code_map.block_size,
        });
    }
    Ok(())
}

impl Quantizer for BlockQuantizer {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn encode_channel(&self, channel: &Channel, codebook: &Codebook) -> VqResult<CodeMap> {
        self.check_codebook(codebook)?;
        let (cols, rows) = tile_grid(channel, self.block_size);
        let mut code_map = CodeMap::new(cols, rows, self.block_size);
        for by in 0..rows {
            for bx in 0..cols {
                let vector = tile_vector(channel, bx, by, self.block_size, self.order);
                let (index, _) = nearest_centroid(&vector, codebook.iter());
                code_map.set(bx, by, index as u32);
            }
        }
        Ok(code_map)
    }

    fn decode_channel(&self, code_map: &CodeMap, codebook: &Codebook) -> VqResult<Channel> {
        self.check_codebook(codebook)?;
        check_block_size(code_map, self.block_size)?;
        let dims = code_map.channel_dimensions();
        let mut channel = Channel::new(dims.width, dims.height);
        for by in 0..code_map.rows {
            for bx in 0..code_map.cols {
                let centroid = dequantize_block(code_map.get(bx, by) as usize, codebook)?;
                write_tile(&mut channel, bx, by, self.block_size, self.order, centroid);
            }
        }
        Ok(channel)
    }
}

/// Per-sample quantization against the first centroid component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarQuantizer;

impl Quantizer for ScalarQuantizer {
    fn block_size(&self) -> usize {
        1
    }

    fn encode_channel(&self, channel: &Channel, codebook: &Codebook) -> VqResult<CodeMap> {
        let mut code_map = CodeMap::new(channel.width(), channel.height(), 1);
        for y in 0..channel.height() {
            for x in 0..channel.width() {
                code_map.set(x, y, quantize_scalar(channel.get(x, y), codebook) as u32);
            }
        }
        Ok(code_map)
    }

    fn decode_channel(&self, code_map: &CodeMap, codebook: &Codebook) -> VqResult<Channel> {
        check_block_size(code_map, 1)?;
        let mut channel = Channel::new(code_map.cols, code_map.rows);
        for y in 0..code_map.rows {
            for x in 0..code_map.cols {
                channel.set(x, y, dequantize_scalar(code_map.get(x, y) as usize, codebook)?);
            }
        }
        Ok(channel)
    }
}
