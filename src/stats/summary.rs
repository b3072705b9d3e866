//! Dataset Summary

use crate::card;
use crate::sample::Sample;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Counts gathered over a set of samples
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetStats {
    pub episode_count: usize,
    pub sample_count: usize,
    /// Episodes per task category
    pub categories: BTreeMap<String, usize>,
    /// Samples per recorded action
    pub actions: BTreeMap<String, usize>,
    /// Episodes per device
    pub devices: BTreeMap<String, usize>,
    /// Episodes each app appears in
    pub apps: BTreeMap<String, usize>,
}

impl DatasetStats {
    /// Gather statistics. Episode-level counts use the first sample seen of
    /// each episode.
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut stats = DatasetStats {
            sample_count: samples.len(),
            ..Default::default()
        };
        let mut seen: HashSet<&str> = HashSet::new();

        for sample in samples {
            if let Some(current) = sample.current_action() {
                *stats.actions.entry(current.action.clone()).or_default() += 1;
            }

            if !seen.insert(sample.episode_id.as_str()) {
                continue;
            }

            stats.episode_count += 1;
            *stats.categories.entry(sample.category.label.clone()).or_default() += 1;
            *stats.devices.entry(sample.device_name.label.clone()).or_default() += 1;
            for app in &sample.apps_used {
                *stats.apps.entry(app.label.clone()).or_default() += 1;
            }
        }

        stats
    }

    /// Percentage of episodes per category; sums to 100 unless empty
    pub fn category_distribution(&self) -> BTreeMap<String, f64> {
        if self.episode_count == 0 {
            return BTreeMap::new();
        }
        let total = self.episode_count as f64;
        self.categories
            .iter()
            .map(|(category, count)| (category.clone(), *count as f64 * 100.0 / total))
            .collect()
    }

    /// Categories that are not among the published task categories
    pub fn unknown_categories(&self) -> Vec<&str> {
        self.categories
            .keys()
            .map(String::as_str)
            .filter(|c| !card::is_known_category(c))
            .collect()
    }

    /// Render as a plain-text report
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Episodes: {}\n", self.episode_count));
        out.push_str(&format!("Samples:  {}\n", self.sample_count));

        out.push_str("\nCategories:\n");
        let distribution = self.category_distribution();
        for (category, count) in &self.categories {
            let pct = distribution.get(category).copied().unwrap_or(0.0);
            out.push_str(&format!("  {:<26} {:>6}  {:>6.2}%\n", category, count, pct));
        }

        out.push_str("\nActions:\n");
        for (action, count) in &self.actions {
            out.push_str(&format!("  {:<26} {:>6}\n", action, count));
        }

        out.push_str("\nDevices:\n");
        for (device, count) in &self.devices {
            out.push_str(&format!("  {:<26} {:>6}\n", device, count));
        }

        out.push_str("\nApps:\n");
        for (app, count) in &self.apps {
            out.push_str(&format!("  {:<26} {:>6}\n", app, count));
        }

        let unknown = self.unknown_categories();
        if !unknown.is_empty() {
            out.push_str(&format!("\nUnrecognized categories: {}\n", unknown.join(", ")));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ActionInfo;
    use crate::sample::{Classification, HistoryEntry};
    use std::path::PathBuf;

    fn make_sample(episode: &str, step: u32, category: &str, action: &str) -> Sample {
        Sample {
            filepath: PathBuf::from(format!("{}_{}.png", episode, step)),
            episode_id: episode.to_string(),
            device_name: Classification::new("Pixel 7 Pro"),
            step,
            category: Classification::new(category),
            meta_task: Classification::new("meta"),
            task: "task".to_string(),
            instruction: "instruction".to_string(),
            apps_used: vec![Classification::new("Chrome")],
            structured_history: vec![HistoryEntry {
                step,
                action: action.to_string(),
                info: ActionInfo::None,
            }],
            action_points: None,
            action_type: None,
            action_press: None,
            action_end: None,
            action_scroll: None,
        }
    }

    #[test]
    fn test_counts_episodes_once() {
        let samples = vec![
            make_sample("a", 0, "Web Shopping", "CLICK"),
            make_sample("a", 1, "Web Shopping", "COMPLETE"),
            make_sample("b", 0, "Multi-Apps", "CLICK"),
        ];
        let stats = DatasetStats::from_samples(&samples);

        assert_eq!(stats.episode_count, 2);
        assert_eq!(stats.sample_count, 3);
        assert_eq!(stats.categories["Web Shopping"], 1);
        assert_eq!(stats.categories["Multi-Apps"], 1);
        assert_eq!(stats.actions["CLICK"], 2);
        assert_eq!(stats.actions["COMPLETE"], 1);
        assert_eq!(stats.devices["Pixel 7 Pro"], 2);
        assert_eq!(stats.apps["Chrome"], 2);
    }

    #[test]
    fn test_distribution_sums_to_100() {
        let samples = vec![
            make_sample("a", 0, "Web Shopping", "CLICK"),
            make_sample("b", 0, "Multi-Apps", "CLICK"),
            make_sample("c", 0, "Multi-Apps", "CLICK"),
        ];
        let distribution = DatasetStats::from_samples(&samples).category_distribution();
        let total: f64 = distribution.values().sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!((distribution["Multi-Apps"] - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_samples() {
        let stats = DatasetStats::from_samples(&[]);
        assert_eq!(stats.episode_count, 0);
        assert!(stats.category_distribution().is_empty());
    }

    #[test]
    fn test_unknown_categories() {
        let samples = vec![
            make_sample("a", 0, "General Tool", "HOME"),
            make_sample("b", 0, "Gaming", "HOME"),
        ];
        let stats = DatasetStats::from_samples(&samples);
        assert_eq!(stats.unknown_categories(), vec!["Gaming"]);
        assert!(stats.render().contains("Unrecognized categories: Gaming"));
    }

    #[test]
    fn test_render_lists_sections() {
        let stats = DatasetStats::from_samples(&[make_sample("a", 0, "Social Sharing", "BACK")]);
        let report = stats.render();
        assert!(report.contains("Episodes: 1"));
        assert!(report.contains("Social Sharing"));
        assert!(report.contains("100.00%"));
        assert!(report.contains("BACK"));
    }
}
