//! Split File
//!
//! Maps split names (`train`, `test`) to the annotation files they contain.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Parsed split assignment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitFile {
    splits: BTreeMap<String, Vec<String>>,
}

impl SplitFile {
    /// Load a split file from disk
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let split_file: SplitFile = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            splits = split_file.splits.len(),
            "Loaded split file"
        );
        Ok(split_file)
    }

    /// Build from an in-memory mapping
    pub fn from_map(splits: BTreeMap<String, Vec<String>>) -> Self {
        Self { splits }
    }

    /// Sorted split names
    pub fn split_names(&self) -> Vec<&str> {
        self.splits.keys().map(String::as_str).collect()
    }

    /// Annotation file names for `split`, truncated to `limit` when given.
    ///
    /// A limit of zero means no limit.
    pub fn episodes(&self, split: &str, limit: Option<usize>) -> crate::Result<&[String]> {
        let files = self
            .splits
            .get(split)
            .ok_or_else(|| crate::Error::UnknownSplit(split.to_string()))?;

        match limit {
            Some(n) if n > 0 => Ok(&files[..n.min(files.len())]),
            _ => Ok(files),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_split() -> SplitFile {
        let mut map = BTreeMap::new();
        map.insert(
            "train".to_string(),
            vec!["a.json".to_string(), "b.json".to_string(), "c.json".to_string()],
        );
        map.insert("test".to_string(), vec!["d.json".to_string()]);
        SplitFile::from_map(map)
    }

    #[test]
    fn test_episodes_without_limit() {
        let split = sample_split();
        assert_eq!(split.episodes("train", None).unwrap().len(), 3);
    }

    #[test]
    fn test_episodes_with_limit() {
        let split = sample_split();
        let files = split.episodes("train", Some(2)).unwrap();
        assert_eq!(files, &["a.json".to_string(), "b.json".to_string()]);
    }

    #[test]
    fn test_limit_larger_than_split() {
        let split = sample_split();
        assert_eq!(split.episodes("test", Some(10)).unwrap().len(), 1);
    }

    #[test]
    fn test_zero_limit_means_all() {
        let split = sample_split();
        assert_eq!(split.episodes("train", Some(0)).unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_split() {
        let split = sample_split();
        let err = split.episodes("validation", None).unwrap_err();
        assert!(matches!(err, crate::Error::UnknownSplit(ref name) if name == "validation"));
    }

    #[test]
    fn test_split_names_sorted() {
        let split = sample_split();
        assert_eq!(split.split_names(), vec!["test", "train"]);
    }

    #[test]
    fn test_load_from_disk() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("random_split.json");
        std::fs::write(&path, r#"{"train": ["x.json"], "test": []}"#).unwrap();

        let split = SplitFile::load(&path).expect("Failed to load split file");
        assert_eq!(split.episodes("train", None).unwrap(), &["x.json".to_string()]);
        assert!(split.episodes("test", None).unwrap().is_empty());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(SplitFile::load(&path), Err(crate::Error::Serialization(_))));
    }
}
