//! Action Interpretation
//!
//! Maps a step's raw action name and payload onto the sample's action fields:
//! tap keypoints, scroll polylines, key presses, typed text and episode ends.

use super::types::{Classification, Keypoint, NormalizedPoint, Polyline};
use crate::dataset::ActionInfo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw coordinates are recorded on a 0..=1000 grid
pub const COORDINATE_SCALE: f64 = 1000.0;

/// Prefix marking a system key press carried in a click payload
const KEY_PREFIX: &str = "KEY_";

/// Recorded action name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Click,
    LongPress,
    Scroll,
    Text,
    Complete,
    Impossible,
    Incomplete,
    Home,
    Back,
    Recent,
    Other(String),
}

impl ActionKind {
    pub fn parse(action: &str) -> Self {
        match action {
            "CLICK" => ActionKind::Click,
            "LONG_PRESS" => ActionKind::LongPress,
            "SCROLL" => ActionKind::Scroll,
            "TEXT" => ActionKind::Text,
            "COMPLETE" => ActionKind::Complete,
            "IMPOSSIBLE" => ActionKind::Impossible,
            "INCOMPLETE" => ActionKind::Incomplete,
            "HOME" => ActionKind::Home,
            "BACK" => ActionKind::Back,
            "RECENT" => ActionKind::Recent,
            other => ActionKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Click => "CLICK",
            ActionKind::LongPress => "LONG_PRESS",
            ActionKind::Scroll => "SCROLL",
            ActionKind::Text => "TEXT",
            ActionKind::Complete => "COMPLETE",
            ActionKind::Impossible => "IMPOSSIBLE",
            ActionKind::Incomplete => "INCOMPLETE",
            ActionKind::Home => "HOME",
            ActionKind::Back => "BACK",
            ActionKind::Recent => "RECENT",
            ActionKind::Other(name) => name,
        }
    }

    /// Actions that end an episode
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ActionKind::Complete | ActionKind::Impossible | ActionKind::Incomplete
        )
    }

    /// System navigation buttons
    pub fn is_navigation(&self) -> bool {
        matches!(self, ActionKind::Home | ActionKind::Back | ActionKind::Recent)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dominant direction of a scroll gesture.
///
/// Named after the content motion, so a rightward swipe scrolls LEFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    /// Classify a swipe from `start` to `end`. Ties go to the vertical axis.
    pub fn classify(start: [f64; 2], end: [f64; 2]) -> Self {
        let dx = end[0] - start[0];
        let dy = end[1] - start[1];

        if dx.abs() > dy.abs() {
            if dx > 0.0 {
                ScrollDirection::Left
            } else {
                ScrollDirection::Right
            }
        } else if dy > 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Up => "UP",
            ScrollDirection::Down => "DOWN",
            ScrollDirection::Left => "LEFT",
            ScrollDirection::Right => "RIGHT",
        }
    }
}

/// Converts raw grid coordinates into normalized screen space
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    /// Size of the raw coordinate grid
    pub scale: f64,
    /// Log points that land outside the unit square
    pub warn_out_of_range: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            scale: COORDINATE_SCALE,
            warn_out_of_range: true,
        }
    }
}

impl Normalizer {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    pub fn normalize(&self, raw: [f64; 2]) -> NormalizedPoint {
        let point = NormalizedPoint::new(raw[0] / self.scale, raw[1] / self.scale);
        if self.warn_out_of_range && !point.is_in_unit_square() {
            tracing::warn!(
                x = raw[0],
                y = raw[1],
                scale = self.scale,
                "Action coordinate outside the screen grid"
            );
        }
        point
    }
}

/// Action-specific sample fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionFields {
    pub action_points: Option<Vec<Keypoint>>,
    pub action_type: Option<Classification>,
    pub action_press: Option<Classification>,
    pub action_end: Option<Classification>,
    pub action_scroll: Option<Vec<Polyline>>,
}

impl ActionFields {
    pub fn is_empty(&self) -> bool {
        self.action_points.is_none()
            && self.action_type.is_none()
            && self.action_press.is_none()
            && self.action_end.is_none()
            && self.action_scroll.is_none()
    }
}

/// Derive the action fields for one step
pub fn derive_fields(kind: &ActionKind, info: &ActionInfo, normalizer: &Normalizer) -> ActionFields {
    let mut fields = ActionFields::default();

    match kind {
        ActionKind::Click | ActionKind::LongPress => match info {
            // Payload repeats the tap location; only the first point matters
            ActionInfo::Points(points) => {
                if let Some(&first) = points.first() {
                    fields.action_points = Some(vec![Keypoint {
                        label: kind.as_str().to_string(),
                        points: vec![normalizer.normalize(first)],
                    }]);
                }
            }
            ActionInfo::Text(text) => {
                if let Some(key) = text.strip_prefix(KEY_PREFIX) {
                    fields.action_press = Some(Classification::new(key));
                }
            }
            ActionInfo::None => {}
        },
        ActionKind::Scroll => {
            if let Some(&[start, end, ..]) = info.as_points() {
                let direction = ScrollDirection::classify(start, end);
                fields.action_scroll = Some(vec![Polyline {
                    label: format!("{}_{}", kind.as_str(), direction.as_str()),
                    points: vec![vec![normalizer.normalize(start), normalizer.normalize(end)]],
                    closed: true,
                    filled: false,
                }]);
            }
        }
        ActionKind::Text => {
            if let Some(text) = info.as_text() {
                fields.action_type = Some(Classification::new(text));
            }
        }
        k if k.is_terminal() => {
            fields.action_end = Some(Classification::new(k.as_str()));
        }
        k if k.is_navigation() => {
            fields.action_press = Some(Classification::new(k.as_str()));
        }
        _ => {}
    }

    if fields.is_empty() {
        tracing::debug!(action = %kind, "Step produced no action fields");
    }

    fields
}
