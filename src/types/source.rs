//! SourceFile type representing the audio file a patch is built from.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{PatchError, Result};

/// The input audio file.
///
/// Only the path is held; the file itself is read by the resampler and
/// copied verbatim by the scaffold step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
}

impl SourceFile {
    /// Wraps an input path.
    ///
    /// Fails if the path is empty or has no file name component
    /// (e.g. `..` or `/`).
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() || path.file_name().is_none() {
            return Err(PatchError::invalid_source_name(&path));
        }
        Ok(Self { path })
    }

    /// Path as given on the command line.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including extension, used when copying into the patch.
    pub fn file_name(&self) -> &OsStr {
        // Checked non-empty in `new`.
        self.path.file_name().unwrap_or_default()
    }

    /// File name with its final extension removed.
    ///
    /// `kick.wav` gives `kick`, `loop.v2.wav` gives `loop.v2`, and a dotfile
    /// such as `.wav` is kept whole. `None` if the name is not valid UTF-8.
    pub fn base_name(&self) -> Option<&str> {
        self.path.file_stem().and_then(OsStr::to_str)
    }

    /// Returns true if the path points at an existing regular file.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}
