//! README title patching.

use std::path::Path;

use crate::error::Result;
use crate::types::ProjectName;

use super::rewrite_first_line;

/// Replaces the README's first line with the uppercase project name.
pub fn patch_readme(readme: &Path, name: &ProjectName) -> Result<()> {
    let title = name.to_uppercase();
    rewrite_first_line(readme, &[title.as_str()])?;
    log::info!("Patched {} with title {}", readme.display(), title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::naming::derive_project_name;
    use crate::types::SourceFile;
    use std::fs;

    fn name(path: &str) -> ProjectName {
        derive_project_name(&SourceFile::new(path).unwrap()).unwrap()
    }

    #[test]
    fn title_is_uppercased_name() {
        let dir = tempfile::tempdir().unwrap();
        let readme = dir.path().join("README.md");
        let body = "usage notes\n\n- pin 9: speaker\n";
        fs::write(&readme, format!("TEMPLATE\n{}", body)).unwrap();

        patch_readme(&readme, &name("snare.wav")).unwrap();

        let patched = fs::read_to_string(&readme).unwrap();
        assert_eq!(patched, format!("SNARE\n{}", body));
    }

    #[test]
    fn prefixed_name_in_title() {
        let dir = tempfile::tempdir().unwrap();
        let readme = dir.path().join("README.md");
        fs::write(&readme, "# title\r\nbody\r\n").unwrap();

        patch_readme(&readme, &name("9kick.wav")).unwrap();
        assert_eq!(fs::read_to_string(&readme).unwrap(), "A9KICK\r\nbody\r\n");
    }

    #[test]
    fn latin1_readme_body_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let readme = dir.path().join("README.md");
        fs::write(&readme, b"TEMPLATE\nCaf\xe9 usage notes\n").unwrap();

        patch_readme(&readme, &name("kick.wav")).unwrap();
        assert_eq!(fs::read(&readme).unwrap(), b"KICK\nCaf\xe9 usage notes\n");
    }

    #[test]
    fn empty_readme_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let readme = dir.path().join("README.md");
        fs::write(&readme, "").unwrap();

        let err = patch_readme(&readme, &name("kick.wav")).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyArtifact);
    }
}
