//! Training and test folder traversal
//!
//! Directory entries are visited in name order so runs are repeatable.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use vq::io::has_image_extension;

/// Entries of `dir` sorted by file name
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("listing directory {}", dir.display()))?;
    entries.sort();
    Ok(entries)
}

/// Top-level category folders of `root`
pub fn categories(root: &Path) -> Result<Vec<PathBuf>> {
    Ok(sorted_entries(root)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect())
}

/// Files sampled for RGB training: the first `per_category` entries of every
/// category folder, whatever their type
pub fn rgb_training_files(root: &Path, per_category: usize) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for category in categories(root)? {
        files.extend(
            sorted_entries(&category)?
                .into_iter()
                .filter(|p| p.is_file())
                .take(per_category),
        );
    }
    Ok(files)
}

/// Files sampled for YUV training: every image below `root`, breadth first
pub fn yuv_training_files(root: &Path) -> Result<Vec<PathBuf>> {
    anyhow::ensure!(root.is_dir(), "not a folder: {}", root.display());
    let mut files = Vec::new();
    let mut queue = VecDeque::from([root.to_path_buf()]);
    while let Some(path) = queue.pop_front() {
        if path.is_dir() {
            queue.extend(sorted_entries(&path)?);
        } else if has_image_extension(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Test files grouped by category folder
pub fn test_files(root: &Path) -> Result<Vec<(String, Vec<PathBuf>)>> {
    categories(root)?
        .into_iter()
        .map(|category| {
            let name = category
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let files: Vec<PathBuf> = sorted_entries(&category)?
                .into_iter()
                .filter(|p| p.is_file())
                .collect();
            Ok((name, files))
        })
        .collect()
}
