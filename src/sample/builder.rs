//! Episode Builder
//!
//! Walks an episode's steps in order and emits one sample per step whose
//! screenshot is present on disk.

use super::action::{derive_fields, ActionKind, Normalizer};
use super::types::{Classification, HistoryEntry, Sample};
use crate::dataset::{DatasetLayout, EpisodeAnnotation};
use std::path::Path;
use tracing::warn;

/// Samples built from one episode
#[derive(Debug, Clone, Default)]
pub struct EpisodeSamples {
    pub samples: Vec<Sample>,
    /// Steps dropped because their screenshot was missing
    pub skipped: usize,
}

/// Builds samples for episodes of one dataset checkout
#[derive(Debug, Clone)]
pub struct EpisodeBuilder {
    layout: DatasetLayout,
    normalizer: Normalizer,
}

impl EpisodeBuilder {
    pub fn new(layout: DatasetLayout) -> Self {
        Self {
            layout,
            normalizer: Normalizer::default(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn layout(&self) -> &DatasetLayout {
        &self.layout
    }

    /// Build the samples of an already parsed episode
    pub fn build(&self, episode: &EpisodeAnnotation) -> EpisodeSamples {
        let mut out = EpisodeSamples::default();
        let mut history: Vec<HistoryEntry> = Vec::with_capacity(episode.steps.len());

        let device_name = Classification::new(&episode.device_info.device_name);
        let task = &episode.task_info;
        let apps_used: Vec<Classification> = task.app.iter().map(Classification::new).collect();

        for step in &episode.steps {
            let screenshot_path = self.layout.screenshot_path(&step.screenshot);
            if !screenshot_path.exists() {
                warn!(
                    episode = %episode.episode_id,
                    step = step.step,
                    path = %screenshot_path.display(),
                    "Screenshot not found, skipping sample"
                );
                out.skipped += 1;
                continue;
            }

            // Dropped steps never enter the history
            history.push(HistoryEntry {
                step: step.step,
                action: step.action.clone(),
                info: step.info.clone(),
            });

            let kind = ActionKind::parse(&step.action);
            let fields = derive_fields(&kind, &step.info, &self.normalizer);

            out.samples.push(Sample {
                filepath: screenshot_path,
                episode_id: episode.episode_id.clone(),
                device_name: device_name.clone(),
                step: step.step,
                category: Classification::new(&task.category),
                meta_task: Classification::new(&task.meta_task),
                task: task.task.clone(),
                instruction: task.instruction.clone(),
                apps_used: apps_used.clone(),
                structured_history: history.clone(),
                action_points: fields.action_points,
                action_type: fields.action_type,
                action_press: fields.action_press,
                action_end: fields.action_end,
                action_scroll: fields.action_scroll,
            });
        }

        out
    }

    /// Load an annotation file and build its samples
    pub fn process_file(&self, annotation_path: &Path) -> crate::Result<EpisodeSamples> {
        let episode = EpisodeAnnotation::load(annotation_path)?;
        Ok(self.build(&episode))
    }
}

/// Process a single annotation file with default normalization
pub fn process_episode(annotation_path: &Path, layout: &DatasetLayout) -> crate::Result<EpisodeSamples> {
    EpisodeBuilder::new(layout.clone()).process_file(annotation_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ActionInfo, DeviceInfo, StepAnnotation, TaskInfo};
    use tempfile::TempDir;

    fn make_episode(steps: Vec<StepAnnotation>) -> EpisodeAnnotation {
        EpisodeAnnotation {
            episode_id: "ep42".to_string(),
            device_info: DeviceInfo {
                device_name: "Pixel 8 Pro".to_string(),
            },
            task_info: TaskInfo {
                category: "Web Shopping".to_string(),
                meta_task: "Buy {item} on {app}".to_string(),
                task: "Buy headphones on Amazon".to_string(),
                instruction: "Find wireless headphones on Amazon and add them to the cart.".to_string(),
                app: vec!["Amazon".to_string(), "Chrome".to_string()],
            },
            steps,
        }
    }

    fn step(n: u32, action: &str, info: ActionInfo) -> StepAnnotation {
        StepAnnotation {
            step: n,
            screenshot: format!("ep42_{}.png", n),
            action: action.to_string(),
            info,
        }
    }

    fn layout_with_screenshots(steps: &[u32]) -> (TempDir, DatasetLayout) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let screenshots = temp_dir.path().join("screenshots");
        std::fs::create_dir_all(&screenshots).unwrap();
        for n in steps {
            std::fs::write(screenshots.join(format!("ep42_{}.png", n)), b"png").unwrap();
        }
        let layout = DatasetLayout::new(temp_dir.path());
        (temp_dir, layout)
    }

    #[test]
    fn test_one_sample_per_step() {
        let (_dir, layout) = layout_with_screenshots(&[0, 1, 2]);
        let episode = make_episode(vec![
            step(0, "CLICK", ActionInfo::Points(vec![[100.0, 200.0]])),
            step(1, "TEXT", ActionInfo::Text("headphones".to_string())),
            step(2, "COMPLETE", ActionInfo::None),
        ]);

        let built = EpisodeBuilder::new(layout).build(&episode);
        assert_eq!(built.samples.len(), 3);
        assert_eq!(built.skipped, 0);

        let first = &built.samples[0];
        assert_eq!(first.episode_id, "ep42");
        assert_eq!(first.device_name.label, "Pixel 8 Pro");
        assert_eq!(first.category.label, "Web Shopping");
        assert_eq!(first.apps_used.len(), 2);
        assert!(first.action_points.is_some());

        assert_eq!(built.samples[1].action_type, Some(Classification::new("headphones")));
        assert_eq!(built.samples[2].action_end, Some(Classification::new("COMPLETE")));
    }

    #[test]
    fn test_history_grows_with_each_step() {
        let (_dir, layout) = layout_with_screenshots(&[0, 1, 2]);
        let episode = make_episode(vec![
            step(0, "HOME", ActionInfo::None),
            step(1, "BACK", ActionInfo::None),
            step(2, "RECENT", ActionInfo::None),
        ]);

        let built = EpisodeBuilder::new(layout).build(&episode);
        let lengths: Vec<usize> = built.samples.iter().map(|s| s.structured_history.len()).collect();
        assert_eq!(lengths, vec![1, 2, 3]);

        let last = &built.samples[2];
        assert_eq!(last.current_action().unwrap().action, "RECENT");
        assert_eq!(last.structured_history[0].action, "HOME");
    }

    #[test]
    fn test_missing_screenshot_is_left_out_of_history() {
        let (_dir, layout) = layout_with_screenshots(&[0, 2]);
        let episode = make_episode(vec![
            step(0, "HOME", ActionInfo::None),
            step(1, "BACK", ActionInfo::None),
            step(2, "COMPLETE", ActionInfo::None),
        ]);

        let built = EpisodeBuilder::new(layout).build(&episode);
        assert_eq!(built.samples.len(), 2);
        assert_eq!(built.skipped, 1);

        let last = &built.samples[1];
        assert_eq!(last.step, 2);
        let actions: Vec<&str> = last.structured_history.iter().map(|h| h.action.as_str()).collect();
        assert_eq!(actions, vec!["HOME", "COMPLETE"]);
    }

    #[test]
    fn test_filepath_points_at_screenshot() {
        let (dir, layout) = layout_with_screenshots(&[0]);
        let episode = make_episode(vec![step(0, "HOME", ActionInfo::None)]);

        let built = EpisodeBuilder::new(layout).build(&episode);
        assert_eq!(
            built.samples[0].filepath,
            dir.path().join("screenshots").join("ep42_0.png")
        );
    }

    #[test]
    fn test_process_episode_from_file() {
        let (dir, layout) = layout_with_screenshots(&[0]);
        let annotations = dir.path().join("annotations");
        std::fs::create_dir_all(&annotations).unwrap();
        let episode = make_episode(vec![step(0, "SCROLL", ActionInfo::Points(vec![[500.0, 900.0], [500.0, 100.0]]))]);
        let path = annotations.join("ep42.json");
        std::fs::write(&path, serde_json::to_string(&episode).unwrap()).unwrap();

        let built = process_episode(&path, &layout).expect("Failed to process episode");
        assert_eq!(built.samples.len(), 1);
        let scroll = built.samples[0].action_scroll.as_ref().unwrap();
        assert_eq!(scroll[0].label, "SCROLL_DOWN");
    }

    #[test]
    fn test_process_episode_missing_file() {
        let (_dir, layout) = layout_with_screenshots(&[]);
        let missing = layout.annotation_path("nope.json");
        assert!(matches!(process_episode(&missing, &layout), Err(crate::Error::Io(_))));
    }
}
