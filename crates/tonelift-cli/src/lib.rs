//! Shared utilities for tonelift-cli
//!
//! Argument parsing helpers and file handling kept out of `main` so they can
//! be unit tested.

pub mod parsers;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use parsers::parse_tile_grid;
pub use processing::{determine_output_path, process_single_image};
