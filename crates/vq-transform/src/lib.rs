//! Transform operations for the VQ codec
//!
//! This crate implements block tiling and chroma resampling, K-means codebook
//! training, and the block and scalar quantization strategies.

pub mod blocks;
pub mod kmeans;
pub mod quantization;

pub use blocks::*;
pub use kmeans::*;
pub use quantization::*;
