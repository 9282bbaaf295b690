//! Error types for patchgen.
//!
//! Every failure in the pipeline is fatal, so there is a single error type
//! carrying a code, a message with context and the underlying cause.

use std::fmt;
use std::path::Path;

/// Error codes identifying what went wrong during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No project name could be derived from the input path.
    /// Trigger: empty path, or a path without a file name component.
    InvalidSourceName,

    /// The input audio file does not exist.
    SourceNotFound,

    /// The template directory is missing or is not a directory.
    TemplateNotFound,

    /// The output directory could not be created or populated.
    /// Trigger: permissions, a file sitting where the directory should go.
    ScaffoldFailed,

    /// An external tool could not be started.
    ToolNotFound,

    /// An external tool ran but exited with a failure status.
    ConversionFailed,

    /// A generated artifact that must have content has no lines.
    EmptyArtifact,

    /// Reading or rewriting a generated artifact failed.
    PatchFailed,

    /// The template's placeholder sketch is missing from the output directory.
    PlaceholderMissing,

    /// The placeholder sketch could not be renamed.
    RenameFailed,

    /// Configuration failed validation.
    InvalidConfig,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSourceName => "INVALID_SOURCE_NAME",
            ErrorCode::SourceNotFound => "SOURCE_NOT_FOUND",
            ErrorCode::TemplateNotFound => "TEMPLATE_NOT_FOUND",
            ErrorCode::ScaffoldFailed => "SCAFFOLD_FAILED",
            ErrorCode::ToolNotFound => "TOOL_NOT_FOUND",
            ErrorCode::ConversionFailed => "CONVERSION_FAILED",
            ErrorCode::EmptyArtifact => "EMPTY_ARTIFACT",
            ErrorCode::PatchFailed => "PATCH_FAILED",
            ErrorCode::PlaceholderMissing => "PLACEHOLDER_MISSING",
            ErrorCode::RenameFailed => "RENAME_FAILED",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSourceName => "No project name can be derived from the input path",
            ErrorCode::SourceNotFound => "Input sound file not found",
            ErrorCode::TemplateNotFound => "Template directory not found",
            ErrorCode::ScaffoldFailed => "Failed to create the patch directory",
            ErrorCode::ToolNotFound => "External tool could not be started",
            ErrorCode::ConversionFailed => "External tool exited with an error",
            ErrorCode::EmptyArtifact => "Generated file is unexpectedly empty",
            ErrorCode::PatchFailed => "Failed to rewrite a generated file",
            ErrorCode::PlaceholderMissing => "Template sketch placeholder is missing",
            ErrorCode::RenameFailed => "Failed to rename the sketch",
            ErrorCode::InvalidConfig => "Configuration is invalid",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSourceName => {
                "Pass the path of an audio file, e.g. `patchgen samples/kick.wav`"
            }
            ErrorCode::SourceNotFound => "Check the spelling of the sound file path",
            ErrorCode::TemplateNotFound => {
                "Run from the directory containing `source/`, or pass --template-dir"
            }
            ErrorCode::ScaffoldFailed => {
                "Check write permissions on the patches directory and that no file \
                 occupies the patch directory path"
            }
            ErrorCode::ToolNotFound => {
                "Install sox and xxd, pass --sox/--xxd with their locations, \
                 or use --hexdump native"
            }
            ErrorCode::ConversionFailed => {
                "Check that the input is an audio format sox can read; \
                 the tool output above has details"
            }
            ErrorCode::EmptyArtifact => {
                "Make sure the template README.md is not empty and the hex dump \
                 tool produced output"
            }
            ErrorCode::PatchFailed => "Check disk space and permissions on the patch directory",
            ErrorCode::PlaceholderMissing => {
                "Restore framen.ino in the template directory"
            }
            ErrorCode::RenameFailed => {
                "Remove the existing sketch from the patch directory and run again"
            }
            ErrorCode::InvalidConfig => "Fix the offending option or environment variable",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for patch generation.
#[derive(Debug)]
pub struct PatchError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PatchError {
    /// Creates a new PatchError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new PatchError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_SOURCE_NAME error.
    pub fn invalid_source_name(path: &Path) -> Self {
        Self::new(
            ErrorCode::InvalidSourceName,
            format!("Cannot derive a project name from '{}'", path.display()),
        )
    }

    /// Creates a SOURCE_NOT_FOUND error.
    pub fn source_not_found(path: &Path) -> Self {
        Self::new(
            ErrorCode::SourceNotFound,
            format!("Sound file not found: {}", path.display()),
        )
    }

    /// Creates a TEMPLATE_NOT_FOUND error.
    pub fn template_not_found(path: &Path) -> Self {
        Self::new(
            ErrorCode::TemplateNotFound,
            format!("Template directory not found: {}", path.display()),
        )
    }

    /// Creates a SCAFFOLD_FAILED error wrapping an I/O failure.
    pub fn scaffold_failed(context: impl Into<String>, err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::ScaffoldFailed, context, err)
    }

    /// Creates a TOOL_NOT_FOUND error.
    pub fn tool_not_found(program: &Path, err: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::ToolNotFound,
            format!("Failed to start '{}': {}", program.display(), err),
            err,
        )
    }

    /// Creates a CONVERSION_FAILED error.
    pub fn conversion_failed(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConversionFailed, reason)
    }

    /// Creates an EMPTY_ARTIFACT error.
    pub fn empty_artifact(path: &Path) -> Self {
        Self::new(
            ErrorCode::EmptyArtifact,
            format!("Generated file is empty: {}", path.display()),
        )
    }

    /// Creates a PATCH_FAILED error wrapping an I/O failure.
    pub fn patch_failed(path: &Path, err: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::PatchFailed,
            format!("Failed to rewrite {}: {}", path.display(), err),
            err,
        )
    }

    /// Creates a PLACEHOLDER_MISSING error.
    pub fn placeholder_missing(path: &Path) -> Self {
        Self::new(
            ErrorCode::PlaceholderMissing,
            format!("Placeholder sketch not found: {}", path.display()),
        )
    }

    /// Creates a RENAME_FAILED error.
    pub fn rename_failed(from: &Path, to: &Path, err: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::RenameFailed,
            format!(
                "Failed to rename {} to {}: {}",
                from.display(),
                to.display(),
                err
            ),
            err,
        )
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidConfig, reason)
    }
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for PatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using PatchError.
pub type Result<T> = std::result::Result<T, PatchError>;
