//! Resampling through the `sox` command line tool.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ToolConfig;
use crate::error::Result;

use super::command::run_tool;
use super::AudioResampler;

/// Resampler backed by `sox <in> -t <encoding> -c <channels> -r <rate> <out>`.
#[derive(Debug, Clone)]
pub struct SoxResampler {
    program: PathBuf,
    encoding: String,
    channels: u16,
    sample_rate: u32,
}

impl SoxResampler {
    /// Creates a resampler using the program and target format in `tools`.
    pub fn new(tools: &ToolConfig) -> Self {
        Self {
            program: tools.sox.clone(),
            encoding: tools.encoding.clone(),
            channels: tools.channels,
            sample_rate: tools.sample_rate,
        }
    }

    /// Builds the command line without running it.
    pub fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(input)
            .arg("-t")
            .arg(&self.encoding)
            .arg("-c")
            .arg(self.channels.to_string())
            .arg("-r")
            .arg(self.sample_rate.to_string())
            .arg(output);
        command
    }
}

impl AudioResampler for SoxResampler {
    fn resample(&self, input: &Path, output: &Path) -> Result<()> {
        log::info!(
            "Resampling {} to {} Hz, {} channel(s), {}",
            input.display(),
            self.sample_rate,
            self.channels,
            self.encoding
        );
        run_tool(self.command(input, output), &self.program)
    }
}
