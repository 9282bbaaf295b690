//! Hex dumping through `xxd -i`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::ToolConfig;
use crate::error::{ErrorCode, PatchError, Result};

use super::command::run_tool;
use super::HexDumper;

/// Hex dumper running `xxd -i <in>` with stdout redirected to the header.
#[derive(Debug, Clone)]
pub struct XxdDumper {
    program: PathBuf,
}

impl XxdDumper {
    /// Creates a dumper using the program in `tools`.
    pub fn new(tools: &ToolConfig) -> Self {
        Self {
            program: tools.xxd.clone(),
        }
    }

    /// Builds the command line without redirecting or running it.
    pub fn command(&self, input: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("-i").arg(input);
        command
    }
}

impl HexDumper for XxdDumper {
    fn dump(&self, input: &Path, output: &Path) -> Result<()> {
        log::info!("Dumping {} to {}", input.display(), output.display());

        let file = File::create(output).map_err(|e| {
            PatchError::with_source(
                ErrorCode::ConversionFailed,
                format!("Failed to create {}: {}", output.display(), e),
                e,
            )
        })?;

        let mut command = self.command(input);
        command.stdout(Stdio::from(file));
        run_tool(command, &self.program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn command_line() {
        let xxd = XxdDumper::new(&ToolConfig::default());
        let command = xxd.command(Path::new("patches/kick/kick.wav"));

        assert_eq!(command.get_program(), OsStr::new("xxd"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, ["-i", "patches/kick/kick.wav"].map(OsStr::new));
    }

    #[test]
    fn missing_xxd_is_reported() {
        let tools = ToolConfig {
            xxd: PathBuf::from("/nonexistent/xxd"),
            ..ToolConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let err = XxdDumper::new(&tools)
            .dump(Path::new("kick.wav"), &dir.path().join("sample.h"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ToolNotFound);
    }

    #[cfg(unix)]
    #[test]
    fn stdout_lands_in_output_file() {
        // echo prints its arguments, standing in for xxd's array output.
        let dir = tempfile::tempdir().unwrap();
        let tools = ToolConfig {
            xxd: PathBuf::from("echo"),
            ..ToolConfig::default()
        };
        let output = dir.path().join("sample.h");
        XxdDumper::new(&tools)
            .dump(Path::new("kick.wav"), &output)
            .unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "-i kick.wav\n");
    }
}
