//! Dataset Conversion
//!
//! Split-level conversion of a raw checkout and persistence of the result.

pub mod converter;
pub mod export;

pub use converter::{DatasetConverter, SplitSamples};
pub use export::{DatasetManifest, DatasetWriter, ExportedDataset};

/// Default dataset name for a split
pub fn default_dataset_name(prefix: &str, split: &str) -> String {
    format!("{}-{}", prefix, split)
}
