//! Patch generation.
//!
//! Provides the pipeline that turns one sound file into one patch directory.

pub mod pipeline;

// Re-export commonly used items
pub use pipeline::PatchPipeline;
