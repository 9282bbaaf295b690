//! Renaming the template's placeholder sketch after the project.

use std::fs;

use crate::error::{PatchError, Result};
use crate::types::PatchLayout;

/// Renames `framen.ino` in the patch directory to `<name>.ino`.
///
/// Whether an existing `<name>.ino` is replaced is up to the platform's
/// rename; Unix replaces it, Windows refuses.
pub fn rename_sketch(layout: &PatchLayout) -> Result<()> {
    let from = layout.placeholder_path();
    let to = layout.sketch_path();

    if !from.is_file() {
        return Err(PatchError::placeholder_missing(&from));
    }
    if from == to {
        return Ok(());
    }

    fs::rename(&from, &to).map_err(|e| PatchError::rename_failed(&from, &to, e))?;
    log::info!("Renamed {} to {}", from.display(), to.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatchConfig;
    use crate::error::ErrorCode;
    use crate::naming::derive_project_name;
    use crate::types::SourceFile;

    fn layout_in(root: &std::path::Path, input: &str) -> PatchLayout {
        let config = PatchConfig {
            patches_dir: root.to_path_buf(),
            ..PatchConfig::default()
        };
        let name = derive_project_name(&SourceFile::new(input).unwrap()).unwrap();
        let layout = PatchLayout::new(&config, &name);
        fs::create_dir_all(layout.dir()).unwrap();
        layout
    }

    #[test]
    fn placeholder_becomes_project_sketch() {
        let root = tempfile::tempdir().unwrap();
        let layout = layout_in(root.path(), "kick.wav");
        fs::write(layout.placeholder_path(), "void loop() {}\n").unwrap();

        rename_sketch(&layout).unwrap();

        assert!(!layout.placeholder_path().exists());
        assert_eq!(
            fs::read_to_string(layout.sketch_path()).unwrap(),
            "void loop() {}\n"
        );
        assert_eq!(layout.sketch_path(), layout.dir().join("kick.ino"));
    }

    #[test]
    fn missing_placeholder_fails() {
        let root = tempfile::tempdir().unwrap();
        let layout = layout_in(root.path(), "kick.wav");

        let err = rename_sketch(&layout).unwrap_err();
        assert_eq!(err.code, ErrorCode::PlaceholderMissing);
    }

    #[test]
    fn project_named_like_placeholder_is_a_no_op() {
        let root = tempfile::tempdir().unwrap();
        let layout = layout_in(root.path(), "framen.wav");
        fs::write(layout.placeholder_path(), "sketch\n").unwrap();

        rename_sketch(&layout).unwrap();
        assert_eq!(fs::read_to_string(layout.sketch_path()).unwrap(), "sketch\n");
    }

    #[cfg(unix)]
    #[test]
    fn existing_sketch_is_replaced_on_unix() {
        let root = tempfile::tempdir().unwrap();
        let layout = layout_in(root.path(), "kick.wav");
        fs::write(layout.placeholder_path(), "new\n").unwrap();
        fs::write(layout.sketch_path(), "old\n").unwrap();

        rename_sketch(&layout).unwrap();
        assert_eq!(fs::read_to_string(layout.sketch_path()).unwrap(), "new\n");
    }
}
