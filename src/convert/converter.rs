//! Split Converter

use crate::dataset::{DatasetLayout, SplitFile};
use crate::sample::{EpisodeBuilder, Normalizer, Sample};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

/// All samples produced for one split
#[derive(Debug, Clone, Default)]
pub struct SplitSamples {
    pub split: String,
    /// Episodes processed
    pub episodes: usize,
    pub samples: Vec<Sample>,
    /// Steps dropped for missing screenshots
    pub skipped: usize,
}

impl SplitSamples {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Converts the splits of a raw dataset checkout into samples
#[derive(Debug, Clone)]
pub struct DatasetConverter {
    builder: EpisodeBuilder,
    split_file: PathBuf,
}

impl DatasetConverter {
    /// `split_file` is resolved against the layout root when relative
    pub fn new(layout: DatasetLayout, split_file: impl Into<PathBuf>) -> Self {
        Self {
            builder: EpisodeBuilder::new(layout),
            split_file: split_file.into(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.builder = self.builder.with_normalizer(normalizer);
        self
    }

    pub fn layout(&self) -> &DatasetLayout {
        self.builder.layout()
    }

    pub fn load_split_file(&self) -> crate::Result<SplitFile> {
        SplitFile::load(&self.layout().split_file_path(&self.split_file))
    }

    /// Convert each named split, processing at most `limit` episodes per split
    pub fn parse_splits(
        &self,
        split_names: &[String],
        limit: Option<usize>,
    ) -> crate::Result<BTreeMap<String, SplitSamples>> {
        let split_file = self.load_split_file()?;
        let mut results = BTreeMap::new();

        for split_name in split_names {
            let converted = self.convert_split(&split_file, split_name, limit)?;
            results.insert(split_name.clone(), converted);
        }

        Ok(results)
    }

    /// Convert a single split of an already loaded split file
    pub fn convert_split(
        &self,
        split_file: &SplitFile,
        split_name: &str,
        limit: Option<usize>,
    ) -> crate::Result<SplitSamples> {
        let episode_files = split_file.episodes(split_name, limit)?;
        info!(
            split = split_name,
            episodes = episode_files.len(),
            "Processing {} episodes",
            episode_files.len()
        );

        let mut out = SplitSamples {
            split: split_name.to_string(),
            ..Default::default()
        };

        for (index, file) in episode_files.iter().enumerate() {
            let path = self.layout().annotation_path(file);
            let built = self
                .builder
                .process_file(&path)
                .map_err(|e| crate::Error::Episode {
                    file: file.clone(),
                    source: Box::new(e),
                })?;

            tracing::debug!(
                episode = %file,
                samples = built.samples.len(),
                progress = index + 1,
                total = episode_files.len(),
                "Processed episode"
            );

            out.episodes += 1;
            out.skipped += built.skipped;
            out.samples.extend(built.samples);
        }

        info!(
            split = split_name,
            samples = out.samples.len(),
            skipped = out.skipped,
            "Created {} samples",
            out.samples.len()
        );

        Ok(out)
    }
}
