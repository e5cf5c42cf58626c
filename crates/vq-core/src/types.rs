//! Core types for the VQ codec

use crate::{VqError, VqResult};
use num_traits::ToPrimitive;
use std::fmt;

/// Width and height of a sample grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Drop trailing rows and columns so both sides are multiples of `multiple`
    pub fn cropped_to_multiple(&self, multiple: usize) -> Self {
        Self {
            width: self.width - self.width % multiple,
            height: self.height - self.height % multiple,
        }
    }

    /// Dimensions halved along each axis, truncating odd sides
    pub fn halved(&self) -> Self {
        Self::new(self.width / 2, self.height / 2)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Names one of the six channels a codebook can be trained for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelSelector {
    R,
    G,
    B,
    Y,
    U,
    V,
}

impl ChannelSelector {
    pub const RGB: [ChannelSelector; 3] = [Self::R, Self::G, Self::B];
    pub const YUV: [ChannelSelector; 3] = [Self::Y, Self::U, Self::V];

    pub fn as_char(&self) -> char {
        match self {
            Self::R => 'R',
            Self::G => 'G',
            Self::B => 'B',
            Self::Y => 'Y',
            Self::U => 'U',
            Self::V => 'V',
        }
    }

    pub fn is_rgb(&self) -> bool {
        matches!(self, Self::R | Self::G | Self::B)
    }

    pub fn is_chroma(&self) -> bool {
        matches!(self, Self::U | Self::V)
    }

    /// Position of this channel within its color model (R/Y = 0, G/U = 1, B/V = 2)
    pub fn plane_index(&self) -> usize {
        match self {
            Self::R | Self::Y => 0,
            Self::G | Self::U => 1,
            Self::B | Self::V => 2,
        }
    }
}

impl TryFrom<char> for ChannelSelector {
    type Error = VqError;

    fn try_from(c: char) -> VqResult<Self> {
        match c.to_ascii_uppercase() {
            'R' => Ok(Self::R),
            'G' => Ok(Self::G),
            'B' => Ok(Self::B),
            'Y' => Ok(Self::Y),
            'U' => Ok(Self::U),
            'V' => Ok(Self::V),
            _ => Err(VqError::UnsupportedChannelSelector(c)),
        }
    }
}

impl fmt::Display for ChannelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Order in which tiles are enumerated and flattened
///
/// `RowMajor` walks tiles top-to-bottom then left-to-right and flattens each
/// tile one row at a time. `ColumnMajor` walks tiles left-to-right then
/// top-to-bottom and flattens each tile one column at a time. A codebook must
/// be applied with the order it was trained with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanOrder {
    #[default]
    RowMajor,
    ColumnMajor,
}

/// Sample types that can be scored by the distortion metrics
pub trait Sample: Copy + ToPrimitive {
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }
}

impl Sample for u8 {}
impl Sample for i32 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_to_multiple() {
        let dims = Dimensions::new(103, 66);
        assert_eq!(dims.cropped_to_multiple(4), Dimensions::new(100, 64));
        assert_eq!(dims.cropped_to_multiple(1), dims);
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!(ChannelSelector::try_from('y').unwrap(), ChannelSelector::Y);
        assert!(matches!(
            ChannelSelector::try_from('Q'),
            Err(VqError::UnsupportedChannelSelector('Q'))
        ));
    }

    #[test]
    fn test_plane_index() {
        assert_eq!(ChannelSelector::G.plane_index(), 1);
        assert_eq!(ChannelSelector::V.plane_index(), 2);
        assert!(ChannelSelector::U.is_chroma());
        assert!(!ChannelSelector::Y.is_rgb());
    }
}
