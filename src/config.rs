//! Runtime configuration.
//!
//! Holds the template and output locations, the external tool programs and
//! the fixed names the template is expected to use.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which hex dumper produces `sample.h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HexDumpKind {
    /// Run the external `xxd -i` tool.
    #[default]
    Xxd,

    /// Format the dump in-process, for hosts without `xxd`.
    Native,
}

impl HexDumpKind {
    /// Returns the string representation of the dumper.
    pub fn as_str(&self) -> &'static str {
        match self {
            HexDumpKind::Xxd => "xxd",
            HexDumpKind::Native => "native",
        }
    }

    /// Parses a dumper kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "xxd" => Some(HexDumpKind::Xxd),
            "native" | "builtin" => Some(HexDumpKind::Native),
            _ => None,
        }
    }
}

impl std::fmt::Display for HexDumpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// External tools and the audio format they are asked to produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Resampler executable.
    pub sox: PathBuf,

    /// Hex dump executable.
    pub xxd: PathBuf,

    /// Hex dumper used for the header.
    pub hexdump: HexDumpKind,

    /// Target sample rate in Hz. The firmware plays back at 8 kHz.
    pub sample_rate: u32,

    /// Target channel count.
    pub channels: u16,

    /// Target sox encoding type. Unsigned 8-bit samples.
    pub encoding: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            sox: PathBuf::from("sox"),
            xxd: PathBuf::from("xxd"),
            hexdump: HexDumpKind::default(),
            sample_rate: 8000,
            channels: 1,
            encoding: "u8".to_string(),
        }
    }
}

/// Runtime configuration for one patch run.
///
/// Loaded from defaults, then environment variables, then CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchConfig {
    /// Template directory copied into every patch.
    pub template_dir: PathBuf,

    /// Directory that receives one sub-directory per patch.
    pub patches_dir: PathBuf,

    /// Placeholder sketch inside the template, renamed per patch.
    pub placeholder_sketch: String,

    /// Generated header file name.
    pub header_file: String,

    /// README file name.
    pub readme_file: String,

    /// External tool configuration.
    pub tools: ToolConfig,
}

impl PatchConfig {
    /// Creates a new PatchConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a PatchConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `PATCHGEN_TEMPLATE_DIR` - Template directory
    /// - `PATCHGEN_PATCHES_DIR` - Output root directory
    /// - `PATCHGEN_SOX` - Resampler executable
    /// - `PATCHGEN_XXD` - Hex dump executable
    /// - `PATCHGEN_HEXDUMP` - Hex dumper (xxd, native)
    ///
    /// Falls back to defaults for unset or unparseable variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("PATCHGEN_TEMPLATE_DIR") {
            config.template_dir = PathBuf::from(path);
        }

        if let Some(path) = lookup("PATCHGEN_PATCHES_DIR") {
            config.patches_dir = PathBuf::from(path);
        }

        if let Some(program) = lookup("PATCHGEN_SOX") {
            config.tools.sox = PathBuf::from(program);
        }

        if let Some(program) = lookup("PATCHGEN_XXD") {
            config.tools.xxd = PathBuf::from(program);
        }

        if let Some(kind) = lookup("PATCHGEN_HEXDUMP") {
            match HexDumpKind::parse(&kind) {
                Some(kind) => config.tools.hexdump = kind,
                None => log::warn!("Ignoring unknown PATCHGEN_HEXDUMP value '{}'", kind),
            }
        }

        config
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.template_dir.as_os_str().is_empty() {
            return Some("template directory must not be empty".to_string());
        }
        if self.patches_dir.as_os_str().is_empty() {
            return Some("patches directory must not be empty".to_string());
        }
        if self.template_dir == self.patches_dir {
            return Some(format!(
                "template and patches directory are the same: {}",
                self.template_dir.display()
            ));
        }
        for (what, name) in [
            ("placeholder sketch", &self.placeholder_sketch),
            ("header file", &self.header_file),
            ("readme file", &self.readme_file),
        ] {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Some(format!("{} must be a plain file name, got '{}'", what, name));
            }
        }
        if self.tools.sample_rate == 0 {
            return Some("sample rate must be > 0".to_string());
        }
        if self.tools.channels == 0 {
            return Some("channel count must be > 0".to_string());
        }

        None
    }
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("source"),
            patches_dir: PathBuf::from("patches"),
            placeholder_sketch: "framen.ino".to_string(),
            header_file: "sample.h".to_string(),
            readme_file: "README.md".to_string(),
            tools: ToolConfig::default(),
        }
    }
}
