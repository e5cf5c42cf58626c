//! Error types for VQ operations

use crate::Dimensions;
use thiserror::Error;

/// Result type for VQ operations
pub type VqResult<T> = Result<T, VqError>;

/// Errors that can occur while training, encoding or decoding
#[derive(Error, Debug)]
pub enum VqError {
    #[error("Insufficient training data: {available} vectors for a codebook of size {requested}")]
    InsufficientTrainingData { available: usize, requested: usize },

    #[error("Invalid codebook size: {0}")]
    InvalidCodebookSize(usize),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: Dimensions,
        actual: Dimensions,
    },

    #[error("Vector length mismatch: expected {expected}, got {actual}")]
    VectorLengthMismatch { expected: usize, actual: usize },

    #[error("Unsupported channel selector: {0:?}")]
    UnsupportedChannelSelector(char),

    #[error("Undecodable image: {0}")]
    UndecodableImage(String),

    #[error("Codebook index {index} out of range for codebook of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid codebook at line {line}: {reason}")]
    InvalidCodebook { line: usize, reason: String },

    #[error("Block size mismatch: expected {expected}, got {actual}")]
    BlockSizeMismatch { expected: usize, actual: usize },

    #[error("Codec mismatch: image was encoded by the {actual} codec, not {expected}")]
    CodecMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
