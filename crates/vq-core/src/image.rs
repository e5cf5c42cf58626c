//! Image data structures

use crate::{Channel, Dimensions, VqError, VqResult};

/// An 8-bit RGB image with interleaved samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    dimensions: Dimensions,
    buffer: Vec<u8>,
}

impl RgbImage {
    /// Create a black image
    pub fn new(width: usize, height: usize) -> VqResult<Self> {
        if width == 0 || height == 0 {
            return Err(VqError::InvalidDimensions { width, height });
        }
        Ok(Self {
            dimensions: Dimensions::new(width, height),
            buffer: vec![0; width * height * 3],
        })
    }

    /// Wrap an interleaved RGB buffer
    pub fn from_raw(width: usize, height: usize, buffer: Vec<u8>) -> VqResult<Self> {
        if width == 0 || height == 0 {
            return Err(VqError::InvalidDimensions { width, height });
        }
        if buffer.len() != width * height * 3 {
            return Err(VqError::VectorLengthMismatch {
                expected: width * height * 3,
                actual: buffer.len(),
            });
        }
        Ok(Self {
            dimensions: Dimensions::new(width, height),
            buffer,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> [u8; 3],
    ) -> VqResult<Self> {
        let mut image = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                image.set_pixel(x, y, f(x, y));
            }
        }
        Ok(image)
    }

    /// Merge three full-resolution channels, clamping samples to [0, 255]
    pub fn from_channels(r: &Channel, g: &Channel, b: &Channel) -> VqResult<Self> {
        r.ensure_same_dimensions(g)?;
        r.ensure_same_dimensions(b)?;
        Self::from_fn(r.width(), r.height(), |x, y| {
            [
                r.get(x, y).clamp(0, 255) as u8,
                g.get(x, y).clamp(0, 255) as u8,
                b.get(x, y).clamp(0, 255) as u8,
            ]
        })
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
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.dimensions.width + x) * 3;
        [self.buffer[idx], self.buffer[idx + 1], self.buffer[idx + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let idx = (y * self.dimensions.width + x) * 3;
        self.buffer[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Extract one color plane (0 = R, 1 = G, 2 = B) at full resolution
    pub fn channel(&self, plane: usize) -> Channel {
        Channel::from_fn(self.width(), self.height(), |x, y| {
            self.pixel(x, y)[plane] as i32
        })
    }

    /// Copy of the top-left `dimensions` region
    pub fn cropped(&self, dimensions: Dimensions) -> VqResult<Self> {
        if dimensions.width > self.width() || dimensions.height > self.height() {
            return Err(VqError::DimensionMismatch {
                expected: self.dimensions,
                actual: dimensions,
            });
        }
        if dimensions == self.dimensions {
            return Ok(self.clone());
        }
        Self::from_fn(dimensions.width, dimensions.height, |x, y| self.pixel(x, y))
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.buffer
    }
}

/// Luma and chroma planes produced by the color transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YuvPlanes {
    pub y: Channel,
    pub u: Channel,
    pub v: Channel,
}

impl YuvPlanes {
    /// Group three planes of equal extent
    pub fn new(y: Channel, u: Channel, v: Channel) -> VqResult<Self> {
        y.ensure_same_dimensions(&u)?;
        y.ensure_same_dimensions(&v)?;
        Ok(Self { y, u, v })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.y.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            RgbImage::new(0, 10),
            Err(VqError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_channel_split_and_merge() {
        let image = RgbImage::from_fn(4, 3, |x, y| [x as u8, y as u8, 200]).unwrap();
        let r = image.channel(0);
        let g = image.channel(1);
        let b = image.channel(2);
        assert_eq!(r.get(3, 0), 3);
        assert_eq!(g.get(0, 2), 2);
        assert_eq!(b.get(1, 1), 200);

        let merged = RgbImage::from_channels(&r, &g, &b).unwrap();
        assert_eq!(merged, image);
    }

    #[test]
    fn test_merge_clamps() {
        let r = Channel::filled(2, 2, 300);
        let g = Channel::filled(2, 2, -5);
        let b = Channel::filled(2, 2, 17);
        let image = RgbImage::from_channels(&r, &g, &b).unwrap();
        assert_eq!(image.pixel(1, 1), [255, 0, 17]);
    }

    #[test]
    fn test_merge_rejects_unequal_channels() {
        let r = Channel::new(2, 2);
        let g = Channel::new(2, 3);
        assert!(matches!(
            RgbImage::from_channels(&r, &g, &r),
            Err(VqError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_cropped() {
        let image = RgbImage::from_fn(7, 5, |x, y| [x as u8, y as u8, 0]).unwrap();
        let cropped = image.cropped(Dimensions::new(4, 4)).unwrap();
        assert_eq!(cropped.dimensions(), Dimensions::new(4, 4));
        assert_eq!(cropped.pixel(3, 3), [3, 3, 0]);
    }
}
