//! Sample Types
//!
//! The record written for every recorded step of an episode.

use crate::dataset::ActionInfo;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single categorical label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
}

impl Classification {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// A point in normalized screen space.
///
/// Coordinates fall in `[0, 1]` for on-screen positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Labeled set of interaction points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub label: String,
    pub points: Vec<NormalizedPoint>,
}

/// Labeled set of point sequences, used for scroll trajectories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub label: String,
    pub points: Vec<Vec<NormalizedPoint>>,
    pub closed: bool,
    pub filled: bool,
}

/// One prior (or current) action of the episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub step: u32,
    pub action: String,
    pub info: ActionInfo,
}

/// Dataset record for one step of one episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Screenshot this record describes
    pub filepath: PathBuf,
    pub episode_id: String,
    pub device_name: Classification,
    /// Zero-indexed position within the episode
    pub step: u32,

    pub category: Classification,
    pub meta_task: Classification,
    pub task: String,
    pub instruction: String,
    pub apps_used: Vec<Classification>,

    /// Actions of the episode up to and including this step
    pub structured_history: Vec<HistoryEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_points: Option<Vec<Keypoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<Classification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_press: Option<Classification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_end: Option<Classification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_scroll: Option<Vec<Polyline>>,
}

impl Sample {
    /// The action recorded at this step
    pub fn current_action(&self) -> Option<&HistoryEntry> {
        self.structured_history.last()
    }
}
