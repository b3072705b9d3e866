//! Sample Construction
//!
//! Turns raw episode annotations into per-step dataset samples.

pub mod types;
pub mod action;
pub mod builder;

pub use types::{Classification, HistoryEntry, Keypoint, NormalizedPoint, Polyline, Sample};
pub use action::{ActionFields, ActionKind, Normalizer, ScrollDirection};
pub use builder::{process_episode, EpisodeBuilder, EpisodeSamples};
