//! PatchReport type summarizing a finished run.

use serde::Serialize;
use std::path::PathBuf;

use crate::types::{PatchLayout, ProjectName};

/// Everything a run produced, printed as JSON with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    /// Derived project name.
    pub name: ProjectName,

    /// Patch directory.
    pub output_dir: PathBuf,

    /// Resampled audio file.
    pub sound_path: PathBuf,

    /// Size of the resampled audio in bytes, the `sound_length` constant.
    pub sound_length: u64,

    /// Patched header.
    pub header_path: PathBuf,

    /// Patched README.
    pub readme_path: PathBuf,

    /// Renamed sketch.
    pub sketch_path: PathBuf,
}

impl PatchReport {
    /// Builds the report for a completed layout.
    pub fn new(layout: &PatchLayout, sound_length: u64) -> Self {
        Self {
            name: layout.name().clone(),
            output_dir: layout.dir().to_path_buf(),
            sound_path: layout.sound_path(),
            sound_length,
            header_path: layout.header_path(),
            readme_path: layout.readme_path(),
            sketch_path: layout.sketch_path(),
        }
    }
}
