//! PatchLayout type describing where a patch's artifacts live.

use std::path::{Path, PathBuf};

use crate::config::PatchConfig;
use crate::types::{ProjectName, SourceFile};

/// Paths of one patch directory and the artifacts inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchLayout {
    dir: PathBuf,
    name: ProjectName,
    placeholder_sketch: String,
    header_file: String,
    readme_file: String,
}

impl PatchLayout {
    /// Lays out `<patches_dir>/<name>` using the file names from `config`.
    pub fn new(config: &PatchConfig, name: &ProjectName) -> Self {
        Self {
            dir: config.patches_dir.join(name.as_str()),
            name: name.clone(),
            placeholder_sketch: config.placeholder_sketch.clone(),
            header_file: config.header_file.clone(),
            readme_file: config.readme_file.clone(),
        }
    }

    /// The patch directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The project name the patch is built for.
    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Resampled audio, `<dir>/<name>.wav`.
    pub fn sound_path(&self) -> PathBuf {
        self.dir.join(format!("{}.wav", self.name))
    }

    /// Generated header, `<dir>/sample.h`.
    pub fn header_path(&self) -> PathBuf {
        self.dir.join(&self.header_file)
    }

    /// README copied from the template.
    pub fn readme_path(&self) -> PathBuf {
        self.dir.join(&self.readme_file)
    }

    /// Placeholder sketch as copied from the template.
    pub fn placeholder_path(&self) -> PathBuf {
        self.dir.join(&self.placeholder_sketch)
    }

    /// Sketch after renaming, `<dir>/<name>.ino`.
    pub fn sketch_path(&self) -> PathBuf {
        let extension = Path::new(&self.placeholder_sketch)
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ino".to_string());
        self.dir.join(format!("{}.{}", self.name, extension))
    }

    /// Where the original source file is copied to.
    pub fn copied_source_path(&self, source: &SourceFile) -> PathBuf {
        self.dir.join(source.file_name())
    }
}
