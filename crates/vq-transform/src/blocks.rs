//! Block tiling and 2x2 chroma resampling
//!
//! Channels are split into non-overlapping square tiles. Trailing rows and
//! columns that do not fill a whole tile are dropped, never padded.

use vq_core::{consts::SUBSAMPLE_FACTOR, Channel, ScanOrder};

/// Number of whole tiles along x and y, none for a zero block size
pub fn tile_grid(channel: &Channel, block_size: usize) -> (usize, usize) {
    match block_size {
        0 => (0, 0),
        n => (channel.width() / n, channel.height() / n),
    }
}

/// Flatten the tile at tile coordinates (bx, by)
pub fn tile_vector(
    channel: &Channel,
    bx: usize,
    by: usize,
    block_size: usize,
    order: ScanOrder,
) -> Vec<f64> {
    let (x0, y0) = (bx * block_size, by * block_size);
    let mut vector = Vec::with_capacity(block_size * block_size);
    for i in 0..block_size {
        for j in 0..block_size {
            let (x, y) = match order {
                ScanOrder::RowMajor => (x0 + j, y0 + i),
                ScanOrder::ColumnMajor => (x0 + i, y0 + j),
            };
            vector.push(channel.get(x, y) as f64);
        }
    }
    vector
}

/// Write a flattened tile back, truncating components to integers
pub fn write_tile(
    channel: &mut Channel,
    bx: usize,
    by: usize,
    block_size: usize,
    order: ScanOrder,
    vector: &[f64],
) {
    let (x0, y0) = (bx * block_size, by * block_size);
    let mut components = vector.iter();
    for i in 0..block_size {
        for j in 0..block_size {
            let (x, y) = match order {
                ScanOrder::RowMajor => (x0 + j, y0 + i),
                ScanOrder::ColumnMajor => (x0 + i, y0 + j),
            };
            if let Some(&c) = components.next() {
                channel.set(x, y, c as i32);
            }
        }
    }
}

/// Split a channel into flattened tiles, enumerated in `order`
pub fn extract_blocks(channel: &Channel, block_size: usize, order: ScanOrder) -> Vec<Vec<f64>> {
    let (cols, rows) = tile_grid(channel, block_size);
    let mut blocks = Vec::with_capacity(cols * rows);
    match order {
        ScanOrder::RowMajor => {
            for by in 0..rows {
                for bx in 0..cols {
                    blocks.push(tile_vector(channel, bx, by, block_size, order));
                }
            }
        }
        ScanOrder::ColumnMajor => {
            for bx in 0..cols {
                for by in 0..rows {
                    blocks.push(tile_vector(channel, bx, by, block_size, order));
                }
            }
        }
    }
    blocks
}

/// Halve both dimensions by averaging each 2x2 tile (truncating division)
pub fn sub_sample(channel: &Channel) -> Channel {
    let f = SUBSAMPLE_FACTOR;
    let width = channel.width() / f;
    let height = channel.height() / f;
    Channel::from_fn(width, height, |x, y| {
        let mut sum = 0;
        for dy in 0..f {
            for dx in 0..f {
                sum += channel.get(x * f + dx, y * f + dy);
            }
        }
        sum / (f * f) as i32
    })
}

/// Double both dimensions by replicating each sample into a 2x2 tile
pub fn upsample(channel: &Channel) -> Channel {
    let f = SUBSAMPLE_FACTOR;
    Channel::from_fn(channel.width() * f, channel.height() * f, |x, y| {
        channel.get(x / f, y / f)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vq_core::Dimensions;

    fn ramp(width: usize, height: usize) -> Channel {
        Channel::from_fn(width, height, |x, y| (y * width + x) as i32)
    }

    #[test]
    fn test_row_major_blocks() {
        let channel = ramp(4, 2);
        let blocks = extract_blocks(&channel, 2, ScanOrder::RowMajor);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], vec![0.0, 1.0, 4.0, 5.0]);
        assert_eq!(blocks[1], vec![2.0, 3.0, 6.0, 7.0]);
    }

    #[test]
    fn test_column_major_blocks() {
        let channel = ramp(2, 4);
        let blocks = extract_blocks(&channel, 2, ScanOrder::ColumnMajor);
        assert_eq!(blocks.len(), 2);
        // tile flattened one column at a time: (0,0) (0,1) (1,0) (1,1)
        assert_eq!(blocks[0], vec![0.0, 2.0, 1.0, 3.0]);
        assert_eq!(blocks[1], vec![4.0, 6.0, 5.0, 7.0]);
    }

    #[test]
    fn test_column_major_enumerates_x_first() {
        let channel = ramp(4, 4);
        let blocks = extract_blocks(&channel, 2, ScanOrder::ColumnMajor);
        // second tile is below the first, not beside it
        assert_eq!(blocks[1][0], 8.0);
        assert_eq!(blocks[2][0], 2.0);
    }

    #[test]
    fn test_remainder_dropped() {
        let channel = ramp(5, 3);
        let blocks = extract_blocks(&channel, 2, ScanOrder::RowMajor);
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.len() == 4));
    }

    #[test]
    fn test_write_tile_inverts_tile_vector() {
        for order in [ScanOrder::RowMajor, ScanOrder::ColumnMajor] {
            let channel = ramp(4, 4);
            let mut rebuilt = Channel::new(4, 4);
            for by in 0..2 {
                for bx in 0..2 {
                    let v = tile_vector(&channel, bx, by, 2, order);
                    write_tile(&mut rebuilt, bx, by, 2, order, &v);
                }
            }
            assert_eq!(rebuilt, channel);
        }
    }

    #[test]
    fn test_zero_block_size_yields_no_tiles() {
        let channel = ramp(4, 4);
        assert_eq!(tile_grid(&channel, 0), (0, 0));
        assert!(extract_blocks(&channel, 0, ScanOrder::RowMajor).is_empty());
    }

    #[test]
    fn test_write_tile_truncates() {
        let mut channel = Channel::new(2, 2);
        write_tile(&mut channel, 0, 0, 2, ScanOrder::RowMajor, &[1.9, -1.9, 0.5, 254.99]);
        assert_eq!(channel.samples(), &[1, -1, 0, 254]);
    }

    #[test]
    fn test_sub_sample_averages() {
        let channel = Channel::from_vec(4, 2, vec![1, 2, 10, 10, 3, 5, 10, 11]).unwrap();
        let sub = sub_sample(&channel);
        assert_eq!(sub.dimensions(), Dimensions::new(2, 1));
        assert_eq!(sub.samples(), &[2, 10]); // 11/4 and 41/4 truncated
    }

    #[test]
    fn test_sub_sample_truncates_toward_zero() {
        let channel = Channel::from_vec(2, 2, vec![-1, -1, -1, -2]).unwrap();
        assert_eq!(sub_sample(&channel).samples(), &[-1]);
        let channel = Channel::from_vec(2, 2, vec![-1, 0, 0, -2]).unwrap();
        assert_eq!(sub_sample(&channel).samples(), &[0]);
    }

    #[test]
    fn test_upsample_replicates() {
        let channel = Channel::from_vec(2, 1, vec![7, 9]).unwrap();
        let up = upsample(&channel);
        assert_eq!(up.dimensions(), Dimensions::new(4, 2));
        assert_eq!(up.samples(), &[7, 7, 9, 9, 7, 7, 9, 9]);
    }

    #[test]
    fn test_resample_preserves_even_dimensions() {
        let channel = ramp(6, 4);
        let back = upsample(&sub_sample(&channel));
        assert_eq!(back.dimensions(), channel.dimensions());
        assert_ne!(back, channel);
    }
}
