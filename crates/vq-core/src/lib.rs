//! Core types and utilities for the VQ image codec
//!
//! This crate provides the fundamental data structures shared by every other
//! crate in the workspace: sample grids, RGB images, code maps, codebooks and
//! their plain-text exchange format, and the error type.

pub mod channel;
pub mod codebook;
pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use channel::*;
pub use codebook::*;
pub use error::{VqError, VqResult};
pub use image::*;
pub use types::*;
