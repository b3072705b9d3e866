//! Dataset Export
//!
//! Persists converted splits as a directory holding a JSON manifest and a
//! JSON Lines file with one sample per line.

use super::converter::SplitSamples;
use crate::sample::Sample;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Current export format version
pub const CURRENT_FORMAT_VERSION: &str = "1.0";

pub const MANIFEST_FILE: &str = "manifest.json";
pub const SAMPLES_FILE: &str = "samples.jsonl";

/// Describes an exported dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub id: Uuid,
    pub name: String,
    pub split: String,
    pub created_at: DateTime<Utc>,
    pub format_version: String,
    pub sample_count: usize,
    pub episode_count: usize,
    #[serde(default)]
    pub skipped_count: usize,
}

/// Writes converted splits under an output directory
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    output_dir: PathBuf,
}

impl DatasetWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory a dataset named `name` is written to
    pub fn dataset_dir(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    /// Write `split` as dataset `name`.
    ///
    /// An existing dataset is replaced when `overwrite` is set and rejected
    /// otherwise.
    pub fn write(&self, name: &str, split: &SplitSamples, overwrite: bool) -> crate::Result<DatasetManifest> {
        validate_name(name)?;

        let dir = self.dataset_dir(name);
        if dir.exists() {
            if !overwrite {
                return Err(crate::Error::DatasetExists(dir));
            }
            info!(path = %dir.display(), "Replacing existing dataset");
            std::fs::remove_dir_all(&dir)?;
        }
        std::fs::create_dir_all(&dir)?;

        let manifest = DatasetManifest {
            id: Uuid::new_v4(),
            name: name.to_string(),
            split: split.split.clone(),
            created_at: Utc::now(),
            format_version: CURRENT_FORMAT_VERSION.to_string(),
            sample_count: split.samples.len(),
            episode_count: split.episodes,
            skipped_count: split.skipped,
        };

        let mut writer = BufWriter::new(std::fs::File::create(dir.join(SAMPLES_FILE))?);
        for sample in &split.samples {
            serde_json::to_writer(&mut writer, sample)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        // Manifest last so a partially written dataset has none
        std::fs::write(dir.join(MANIFEST_FILE), serde_json::to_string_pretty(&manifest)?)?;

        info!(
            name = %manifest.name,
            samples = manifest.sample_count,
            path = %dir.display(),
            "Wrote dataset"
        );

        Ok(manifest)
    }
}

fn validate_name(name: &str) -> crate::Result<()> {
    if name.trim().is_empty() {
        return Err(crate::Error::Export("dataset name must not be empty".to_string()));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(crate::Error::Export(format!(
            "dataset name must be a single path component, got '{}'",
            name
        )));
    }
    Ok(())
}

/// A dataset read back from disk
#[derive(Debug, Clone)]
pub struct ExportedDataset {
    pub manifest: DatasetManifest,
    pub samples: Vec<Sample>,
}

impl ExportedDataset {
    /// Load a dataset directory written by [`DatasetWriter`]
    pub fn load(dir: &Path) -> crate::Result<Self> {
        let manifest_path = dir.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            return Err(crate::Error::Export(format!(
                "no {} in {}",
                MANIFEST_FILE,
                dir.display()
            )));
        }
        let manifest: DatasetManifest = serde_json::from_str(&std::fs::read_to_string(&manifest_path)?)?;
        if manifest.format_version != CURRENT_FORMAT_VERSION {
            tracing::warn!(
                name = %manifest.name,
                found = %manifest.format_version,
                expected = CURRENT_FORMAT_VERSION,
                "Dataset has different format version"
            );
        }

        let reader = BufReader::new(std::fs::File::open(dir.join(SAMPLES_FILE))?);
        let mut samples = Vec::with_capacity(manifest.sample_count);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            samples.push(serde_json::from_str(&line)?);
        }

        if samples.len() != manifest.sample_count {
            return Err(crate::Error::Export(format!(
                "manifest lists {} samples but {} were read",
                manifest.sample_count,
                samples.len()
            )));
        }

        Ok(Self { manifest, samples })
    }
}
