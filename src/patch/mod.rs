//! Rewriting of generated text files.
//!
//! Both the header and the README are patched the same way: read all lines,
//! replace line 0, write everything back.

pub mod header;
pub mod lines;
pub mod readme;

use std::fs;
use std::path::Path;

use crate::error::{PatchError, Result};

pub use header::{header_preamble, patch_header, SAMPLE_ARRAY_NAME};
pub use lines::{replace_first_line, split_lines};
pub use readme::patch_readme;

/// Replaces the first line of the file at `path` with `replacement`.
///
/// The file is read completely before it is truncated and rewritten. Bytes
/// after the first line are written back unchanged, whatever their encoding.
/// An empty file is an EMPTY_ARTIFACT error and is left as it is.
pub fn rewrite_first_line(path: &Path, replacement: &[&str]) -> Result<()> {
    let text = fs::read(path).map_err(|e| PatchError::patch_failed(path, e))?;
    let lines = split_lines(&text);
    let patched =
        replace_first_line(&lines, replacement).ok_or_else(|| PatchError::empty_artifact(path))?;
    fs::write(path, patched).map_err(|e| PatchError::patch_failed(path, e))
}
