//! Episode Annotation Format
//!
//! One JSON file per episode: device and task metadata plus the ordered
//! list of recorded steps.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Device the episode was recorded on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub device_name: String,
}

/// Task the episode was recorded for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInfo {
    /// One of the task categories
    pub category: String,
    /// Templated task pattern
    pub meta_task: String,
    /// Instantiated task
    pub task: String,
    /// Detailed rephrasing of the task
    pub instruction: String,
    /// Applications involved
    #[serde(default)]
    pub app: Vec<String>,
}

/// Payload attached to a step's action.
///
/// Point lists are raw screen coordinates on a 0..=1000 grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum ActionInfo {
    Points(Vec<[f64; 2]>),
    Text(String),
    #[default]
    None,
}

impl ActionInfo {
    pub fn as_points(&self) -> Option<&[[f64; 2]]> {
        match self {
            ActionInfo::Points(points) => Some(points),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ActionInfo::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A single recorded step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepAnnotation {
    /// Zero-indexed position within the episode
    pub step: u32,
    /// Screenshot file name, relative to the screenshots directory
    pub screenshot: String,
    /// Action name (CLICK, SCROLL, ...)
    pub action: String,
    /// Action payload
    #[serde(default)]
    pub info: ActionInfo,
}

/// A complete episode annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeAnnotation {
    pub episode_id: String,
    pub device_info: DeviceInfo,
    pub task_info: TaskInfo,
    pub steps: Vec<StepAnnotation>,
}

impl EpisodeAnnotation {
    /// Load an annotation file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let annotation: EpisodeAnnotation = serde_json::from_str(&content)?;
        Ok(annotation)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPISODE_JSON: &str = r#"{
        "episode_id": "1234567890",
        "device_info": {"device_name": "Pixel Tablet", "w": 1600, "h": 2560},
        "task_info": {
            "category": "Multi-Apps",
            "meta_task": "Search for {item} and share it via {app}",
            "task": "Search for a recipe and share it via Gmail",
            "instruction": "Open Chrome, find a pasta recipe and send the link using Gmail.",
            "app": ["Chrome", "Gmail"]
        },
        "steps": [
            {"step": 0, "screenshot": "1234567890_0.png", "action": "CLICK", "info": [[500, 250], [500, 250]]},
            {"step": 1, "screenshot": "1234567890_1.png", "action": "TEXT", "info": "pasta recipe"},
            {"step": 2, "screenshot": "1234567890_2.png", "action": "CLICK", "info": "KEY_HOME"},
            {"step": 3, "screenshot": "1234567890_3.png", "action": "COMPLETE", "info": null}
        ]
    }"#;

    #[test]
    fn test_parse_episode() {
        let episode: EpisodeAnnotation = serde_json::from_str(EPISODE_JSON).unwrap();
        assert_eq!(episode.episode_id, "1234567890");
        assert_eq!(episode.device_info.device_name, "Pixel Tablet");
        assert_eq!(episode.task_info.app, vec!["Chrome", "Gmail"]);
        assert_eq!(episode.len(), 4);
    }

    #[test]
    fn test_info_variants() {
        let episode: EpisodeAnnotation = serde_json::from_str(EPISODE_JSON).unwrap();
        assert_eq!(
            episode.steps[0].info.as_points(),
            Some(&[[500.0, 250.0], [500.0, 250.0]][..])
        );
        assert_eq!(episode.steps[1].info.as_text(), Some("pasta recipe"));
        assert_eq!(episode.steps[2].info.as_text(), Some("KEY_HOME"));
        assert_eq!(episode.steps[3].info, ActionInfo::None);
    }

    #[test]
    fn test_missing_info_defaults_to_none() {
        let step: StepAnnotation =
            serde_json::from_str(r#"{"step": 5, "screenshot": "s.png", "action": "BACK"}"#).unwrap();
        assert_eq!(step.info, ActionInfo::None);
    }

    #[test]
    fn test_missing_apps_defaults_to_empty() {
        let task: TaskInfo = serde_json::from_str(
            r#"{"category": "General Tool", "meta_task": "m", "task": "t", "instruction": "i"}"#,
        )
        .unwrap();
        assert!(task.app.is_empty());
    }
}
