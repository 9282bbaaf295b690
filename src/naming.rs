//! Project name derivation.
//!
//! Turns an input file path into the name used for the patch directory, the
//! resampled sound and the sketch.

use crate::error::{PatchError, Result};
use crate::types::{ProjectName, SourceFile};

/// Prepended to names starting with a digit so the sketch name stays a
/// valid identifier.
pub const DIGIT_PREFIX: char = 'a';

/// Derives the project name for a source file.
///
/// The name is the file name without its extension. If it starts with an
/// ASCII digit it is prefixed with [`DIGIT_PREFIX`]: `9kick.wav` becomes
/// `a9kick`, `snare.wav` stays `snare`.
///
/// The name becomes a directory under the patches directory, so `.`, `..`,
/// names with path separators and non-UTF-8 names are rejected.
pub fn derive_project_name(source: &SourceFile) -> Result<ProjectName> {
    let base = match source.base_name() {
        Some(base) if is_plain_component(base) => base,
        _ => return Err(PatchError::invalid_source_name(source.path())),
    };

    let name = if base.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{}{}", DIGIT_PREFIX, base)
    } else {
        base.to_string()
    };

    let name = ProjectName::from_derived(name);
    if !name.is_identifier() {
        log::warn!(
            "Project name '{}' is not a valid C identifier; the sketch may not compile",
            name
        );
    }
    Ok(name)
}

/// True if `name` joined onto a directory names a direct child of it.
fn is_plain_component(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
