//! Application Layer
//!
//! Command-line surface and persisted configuration.

pub mod cli;
pub mod config;

pub use cli::Cli;
pub use config::Config;
