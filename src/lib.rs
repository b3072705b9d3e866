//! # GUI Odyssey
//!
//! Tooling for the GUI Odyssey cross-app mobile navigation dataset.
//!
//! ## Overview
//!
//! A raw GUI Odyssey checkout holds one annotation file per episode, a
//! directory of screenshots and a split file assigning episodes to `train`
//! and `test`. This library turns those annotations into one [`Sample`] per
//! recorded step: task metadata, the action history so far, and the current
//! action expressed as normalized keypoints, scroll polylines or labels.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gui_odyssey::{DatasetConverter, DatasetLayout, DatasetWriter};
//!
//! let layout = DatasetLayout::new("GUI-Odyssey");
//! let converter = DatasetConverter::new(layout, "splits/random_split.json");
//!
//! let splits = converter.parse_splits(&["train".to_string()], Some(10))?;
//! let writer = DatasetWriter::new("datasets");
//! for (split, samples) in &splits {
//!     writer.write(&format!("gui-odyssey-{}", split), samples, true)?;
//! }
//! # Ok::<(), gui_odyssey::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`card`]: published dataset facts, hub identifiers and citation
//! - [`dataset`]: on-disk layout, split file and raw annotation parsing
//! - [`sample`]: action interpretation and per-step sample construction
//! - [`convert`]: split-level conversion and dataset export
//! - [`stats`]: dataset statistics and distributions
//! - [`app`]: CLI and configuration management
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │ Split file  │───▶│ Annotation  │───▶│  Episode    │───▶│  Dataset    │
//! │             │    │   parsing   │    │  builder    │    │  writer     │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//! ```

pub mod card;
pub mod dataset;
pub mod sample;
pub mod convert;
pub mod stats;
pub mod app;

// Re-export commonly used types
pub use convert::{DatasetConverter, DatasetWriter, ExportedDataset, SplitSamples};
pub use dataset::{DatasetLayout, EpisodeAnnotation, SplitFile};
pub use sample::{EpisodeBuilder, Sample};
pub use stats::DatasetStats;

/// Result type alias for GUI Odyssey operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for GUI Odyssey operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Split '{0}' not found in split file")]
    UnknownSplit(String),

    #[error("Failed to process episode {file}")]
    Episode {
        file: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Dataset already exists at {0} (enable overwrite to replace it)")]
    DatasetExists(std::path::PathBuf),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
