//! Raw Dataset Access
//!
//! Locating and parsing the files of a GUI Odyssey checkout.

pub mod layout;
pub mod split;
pub mod annotation;

pub use layout::DatasetLayout;
pub use split::SplitFile;
pub use annotation::{ActionInfo, DeviceInfo, EpisodeAnnotation, StepAnnotation, TaskInfo};
