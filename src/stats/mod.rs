//! Dataset Statistics
//!
//! Episode and action distributions over a set of samples.

pub mod summary;

pub use summary::DatasetStats;
