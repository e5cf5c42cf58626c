//! Codebooks and their plain-text exchange format
//!
//! A codebook is an ordered list of equal-length vectors; the position of a
//! vector is the index written into code maps. The text format stores one
//! vector per line with whitespace-separated components, so line N holds
//! index N.

use crate::{VqError, VqResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// An immutable, cheaply clonable set of centroids
///
/// Clones share one allocation, so a single trained codebook can be handed to
/// any number of concurrent encode calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Codebook {
    vectors: Arc<[Vec<f64>]>,
    dimension: usize,
}

impl Codebook {
    /// Build a codebook from centroids that all share one dimensionality
    pub fn new(vectors: Vec<Vec<f64>>) -> VqResult<Self> {
        let dimension = match vectors.first() {
            Some(first) => first.len(),
            None => return Err(VqError::InvalidCodebookSize(0)),
        };
        if dimension == 0 {
            return Err(VqError::VectorLengthMismatch {
                expected: 1,
                actual: 0,
            });
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
            return Err(VqError::VectorLengthMismatch {
                expected: dimension,
                actual: bad.len(),
            });
        }
        Ok(Self {
            vectors: vectors.into(),
            dimension,
        })
    }

    /// Number of centroids (K)
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Length of every centroid
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Centroid at `index`, or `IndexOutOfRange`
    pub fn get(&self, index: usize) -> VqResult<&[f64]> {
        self.vectors
            .get(index)
            .map(Vec::as_slice)
            .ok_or(VqError::IndexOutOfRange {
                index,
                len: self.vectors.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.vectors.iter().map(Vec::as_slice)
    }

    /// Write the text form, one centroid per line
    pub fn write_text<W: Write>(&self, mut writer: W) -> VqResult<()> {
        for vector in self.vectors.iter() {
            let line = vector
                .iter()
                .map(|c| format!("{c:?}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Parse the text form; blank lines are skipped
    pub fn read_text<R: BufRead>(reader: R) -> VqResult<Self> {
        let mut vectors = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let vector = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|e| VqError::InvalidCodebook {
                        line: line_no + 1,
                        reason: format!("{token:?}: {e}"),
                    })
                })
                .collect::<VqResult<Vec<f64>>>()?;
            vectors.push(vector);
        }
        Self::new(vectors)
    }

    /// Save to a text file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> VqResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_text(BufWriter::new(file))?;
        tracing::debug!(
            path = %path.display(),
            size = self.len(),
            dimension = self.dimension,
            "saved codebook"
        );
        Ok(())
    }

    /// Load from a text file
    pub fn load<P: AsRef<Path>>(path: P) -> VqResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let codebook = Self::read_text(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            size = codebook.len(),
            dimension = codebook.dimension,
            "loaded codebook"
        );
        Ok(codebook)
    }
}
