//! Dataset Directory Layout

use std::path::{Path, PathBuf};

/// Default split file, relative to the dataset root
pub const DEFAULT_SPLIT_FILE: &str = "splits/random_split.json";

/// Directory holding one annotation file per episode
pub const ANNOTATIONS_DIR: &str = "annotations";

/// Directory holding step screenshots
pub const SCREENSHOTS_DIR: &str = "screenshots";

/// Resolves paths inside a raw GUI Odyssey checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    root: PathBuf,
}

impl DatasetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open an existing checkout, resolving `root` to an absolute path so
    /// sample filepaths stay valid from any working directory
    pub fn open(root: impl AsRef<Path>) -> crate::Result<Self> {
        let root = std::fs::canonicalize(root.as_ref())?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of an annotation file given its name from the split file
    pub fn annotation_path(&self, file_name: &str) -> PathBuf {
        self.root.join(ANNOTATIONS_DIR).join(file_name)
    }

    /// Path of a screenshot referenced by a step
    pub fn screenshot_path(&self, file_name: &str) -> PathBuf {
        self.root.join(SCREENSHOTS_DIR).join(file_name)
    }

    /// Resolve a split file path; relative paths are taken from the root
    pub fn split_file_path(&self, split_file: impl AsRef<Path>) -> PathBuf {
        let split_file = split_file.as_ref();
        if split_file.is_absolute() {
            split_file.to_path_buf()
        } else {
            self.root.join(split_file)
        }
    }
}
