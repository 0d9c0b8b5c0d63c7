//! Persistence, tooling and error handling
//!
//! The stream and file modules are the only persistence surface of the core;
//! the CLI and minimap export are tooling layered on top.

/// Command-line interface for the map tool
pub mod cli;
/// Map limits and tooling defaults
pub mod configuration;
/// Error types
pub mod error;
/// Whole-map save and load
pub mod file;
/// Minimap PNG export
pub mod image;
/// Ordered integer stream contract and serialization trait
pub mod stream;
