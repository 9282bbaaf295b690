//! Patch directory scaffolding.
//!
//! Copies the template tree into `<patches_dir>/<name>` and drops the
//! original sound file next to it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::PatchConfig;
use crate::error::{PatchError, Result};
use crate::types::{PatchLayout, ProjectName, SourceFile};

/// Creates the patch directory for `name` and populates it.
///
/// The template's contents are merged into the patch directory, so running
/// twice with the same name overwrites files instead of failing. Nothing is
/// cleaned up when a copy fails halfway.
pub fn build_scaffold(
    config: &PatchConfig,
    source: &SourceFile,
    name: &ProjectName,
) -> Result<PatchLayout> {
    let template = config.template_dir.as_path();
    if !template.is_dir() {
        return Err(PatchError::template_not_found(template));
    }

    let layout = PatchLayout::new(config, name);
    let dir = layout.dir();

    // Copying the template into itself would overwrite or grow it.
    let template_real = resolve(template);
    let dir_real = resolve(dir);
    if dir_real.starts_with(&template_real) {
        return Err(PatchError::scaffold_failed(
            format!(
                "Patch directory {} is inside the template {}",
                dir.display(),
                template.display()
            ),
            io::Error::new(io::ErrorKind::InvalidInput, "patch directory inside template"),
        ));
    }

    if dir.exists() && !dir.is_dir() {
        return Err(PatchError::scaffold_failed(
            format!("{} exists and is not a directory", dir.display()),
            io::Error::new(io::ErrorKind::AlreadyExists, "not a directory"),
        ));
    }
    if dir.is_dir() {
        log::info!("Patch directory {} exists, overwriting", dir.display());
    }

    fs::create_dir_all(dir).map_err(|e| {
        PatchError::scaffold_failed(
            format!("Failed to create {}: {}", dir.display(), e),
            e,
        )
    })?;

    let copied = copy_dir_recursive(template, dir)?;
    log::debug!(
        "Copied {} template files from {} to {}",
        copied,
        template.display(),
        dir.display()
    );

    let copied_source = layout.copied_source_path(source);
    if is_same_file(source.path(), &copied_source) {
        log::debug!("{} is already in the patch directory", source.path().display());
    } else {
        copy_file(source.path(), &copied_source)?;
    }

    Ok(layout)
}

/// Copies the contents of `from` into `to`, creating sub-directories as
/// needed and overwriting existing files.
///
/// Symlinked directories are followed. A link back to a directory that is
/// already being copied is skipped with a warning.
///
/// Returns the number of files copied.
pub fn copy_dir_recursive(from: &Path, to: &Path) -> Result<usize> {
    let mut ancestors = Vec::new();
    copy_tree(from, to, &mut ancestors)
}

fn copy_tree(from: &Path, to: &Path, ancestors: &mut Vec<PathBuf>) -> Result<usize> {
    let real = fs::canonicalize(from).map_err(|e| {
        PatchError::scaffold_failed(format!("Failed to resolve {}: {}", from.display(), e), e)
    })?;
    if ancestors.contains(&real) {
        log::warn!("Skipping {}: symlink loop back to {}", from.display(), real.display());
        return Ok(0);
    }
    ancestors.push(real);

    let entries = fs::read_dir(from).map_err(|e| {
        PatchError::scaffold_failed(format!("Failed to read {}: {}", from.display(), e), e)
    })?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| {
            PatchError::scaffold_failed(format!("Failed to read {}: {}", from.display(), e), e)
        })?;
        let path = entry.path();
        let target = to.join(entry.file_name());

        // Follows symlinks, so a linked directory is copied as a directory.
        let metadata = fs::metadata(&path).map_err(|e| {
            PatchError::scaffold_failed(format!("Failed to stat {}: {}", path.display(), e), e)
        })?;

        if metadata.is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                PatchError::scaffold_failed(
                    format!("Failed to create {}: {}", target.display(), e),
                    e,
                )
            })?;
            copied += copy_tree(&path, &target, ancestors)?;
        } else {
            copy_file(&path, &target)?;
            copied += 1;
        }
    }

    ancestors.pop();
    Ok(copied)
}

/// Canonical form of `path`, resolving the longest existing prefix when the
/// path itself does not exist yet.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(real) = fs::canonicalize(path) {
        return real;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            resolve(parent).join(name)
        }
        _ => path.to_path_buf(),
    }
}

/// Copying a file onto itself truncates it, so that case is skipped.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(|e| {
        PatchError::scaffold_failed(
            format!("Failed to copy {} to {}: {}", from.display(), to.display(), e),
            e,
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::naming::derive_project_name;
    use tempfile::{tempdir, TempDir};

    /// Workspace with a template, a sound file and a config pointing at them.
    fn workspace() -> (TempDir, PatchConfig, SourceFile) {
        let root = tempdir().unwrap();
        let template = root.path().join("source");
        fs::create_dir_all(template.join("lib")).unwrap();
        fs::write(template.join("framen.ino"), "void setup() {}\n").unwrap();
        fs::write(template.join("README.md"), "TEMPLATE\nusage notes\n").unwrap();
        fs::write(template.join("lib").join("player.h"), "#pragma once\n").unwrap();

        let sound = root.path().join("kick.wav");
        fs::write(&sound, b"RIFF....WAVE").unwrap();

        let config = PatchConfig {
            template_dir: template,
            patches_dir: root.path().join("patches"),
            ..PatchConfig::default()
        };
        let source = SourceFile::new(sound).unwrap();
        (root, config, source)
    }

    #[test]
    fn copies_template_and_source() {
        let (_root, config, source) = workspace();
        let name = derive_project_name(&source).unwrap();

        let layout = build_scaffold(&config, &source, &name).unwrap();
        let dir = layout.dir();

        assert!(dir.is_dir());
        assert_eq!(
            fs::read_to_string(dir.join("framen.ino")).unwrap(),
            "void setup() {}\n"
        );
        assert_eq!(
            fs::read_to_string(dir.join("README.md")).unwrap(),
            "TEMPLATE\nusage notes\n"
        );
        assert_eq!(
            fs::read_to_string(dir.join("lib").join("player.h")).unwrap(),
            "#pragma once\n"
        );
        assert_eq!(fs::read(dir.join("kick.wav")).unwrap(), b"RIFF....WAVE");
    }

    #[test]
    fn second_run_overwrites() {
        let (_root, config, source) = workspace();
        let name = derive_project_name(&source).unwrap();

        let layout = build_scaffold(&config, &source, &name).unwrap();
        fs::write(layout.readme_path(), "edited\n").unwrap();
        fs::write(layout.dir().join("extra.txt"), "kept\n").unwrap();

        let again = build_scaffold(&config, &source, &name).unwrap();
        assert_eq!(again, layout);
        assert_eq!(
            fs::read_to_string(layout.readme_path()).unwrap(),
            "TEMPLATE\nusage notes\n"
        );
        // Merged, not replaced, and never nested as <dir>/source.
        assert!(layout.dir().join("extra.txt").exists());
        assert!(!layout.dir().join("source").exists());
    }

    #[test]
    fn missing_template_fails() {
        let (root, mut config, source) = workspace();
        config.template_dir = root.path().join("no-such-template");
        let name = derive_project_name(&source).unwrap();

        let err = build_scaffold(&config, &source, &name).unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateNotFound);
        assert!(!config.patches_dir.join("kick").exists());
    }

    #[test]
    fn file_in_the_way_fails() {
        let (_root, config, source) = workspace();
        fs::create_dir_all(&config.patches_dir).unwrap();
        fs::write(config.patches_dir.join("kick"), "not a dir").unwrap();
        let name = derive_project_name(&source).unwrap();

        let err = build_scaffold(&config, &source, &name).unwrap_err();
        assert_eq!(err.code, ErrorCode::ScaffoldFailed);
    }

    #[test]
    fn missing_source_fails_after_template_copy() {
        let (root, config, _) = workspace();
        let source = SourceFile::new(root.path().join("gone.wav")).unwrap();
        let name = derive_project_name(&source).unwrap();

        let err = build_scaffold(&config, &source, &name).unwrap_err();
        assert_eq!(err.code, ErrorCode::ScaffoldFailed);
        // No rollback of what was already copied.
        assert!(config.patches_dir.join("gone").join("framen.ino").exists());
    }

    #[test]
    fn source_inside_patch_dir_is_not_truncated() {
        let (_root, config, source) = workspace();
        let name = derive_project_name(&source).unwrap();
        let layout = build_scaffold(&config, &source, &name).unwrap();

        let inside = SourceFile::new(layout.copied_source_path(&source)).unwrap();
        build_scaffold(&config, &inside, &name).unwrap();

        assert_eq!(fs::read(inside.path()).unwrap(), b"RIFF....WAVE");
    }

    #[test]
    fn patch_dir_equal_to_template_is_rejected() {
        let (root, mut config, _) = workspace();
        // `--patches-dir <root>` with `source.wav` lands on the template itself.
        config.patches_dir = root.path().to_path_buf();
        let sound = root.path().join("source.wav");
        fs::write(&sound, b"RIFF....WAVE").unwrap();
        let source = SourceFile::new(sound).unwrap();
        let name = derive_project_name(&source).unwrap();

        let err = build_scaffold(&config, &source, &name).unwrap_err();
        assert_eq!(err.code, ErrorCode::ScaffoldFailed);
        assert_eq!(
            fs::read_to_string(config.template_dir.join("README.md")).unwrap(),
            "TEMPLATE\nusage notes\n"
        );
        assert!(!config.template_dir.join("source.wav").exists());
    }

    #[test]
    fn patch_dir_inside_template_is_rejected() {
        let (_root, mut config, source) = workspace();
        config.patches_dir = config.template_dir.join("patches");
        let name = derive_project_name(&source).unwrap();

        let err = build_scaffold(&config, &source, &name).unwrap_err();
        assert_eq!(err.code, ErrorCode::ScaffoldFailed);
        assert!(!config.patches_dir.exists());
    }

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let cwd = fs::canonicalize(".").unwrap();
        assert_eq!(
            resolve(Path::new("no-such-dir/kick")),
            cwd.join("no-such-dir").join("kick")
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_in_template_terminates() {
        let (root, config, _) = workspace();
        let link = config.template_dir.join("lib").join("loop");
        std::os::unix::fs::symlink(&config.template_dir, link).unwrap();
        let dest = root.path().join("copy");
        fs::create_dir_all(&dest).unwrap();

        assert_eq!(copy_dir_recursive(&config.template_dir, &dest).unwrap(), 3);
        assert!(dest.join("lib").join("player.h").exists());
        assert!(!dest.join("lib").join("loop").join("lib").exists());
    }

    #[test]
    fn copy_dir_recursive_counts_files() {
        let (root, config, _) = workspace();
        let dest = root.path().join("copy");
        fs::create_dir_all(&dest).unwrap();
        assert_eq!(copy_dir_recursive(&config.template_dir, &dest).unwrap(), 3);
    }
}
