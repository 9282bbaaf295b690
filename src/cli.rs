//! Command-line interface.
//!
//! One positional sound file plus flags overriding the configuration
//! loaded from the environment.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use crate::config::{HexDumpKind, PatchConfig};

/// Message printed when no sound file is given.
pub const NO_INPUT_MESSAGE: &str = "no sound file provided";

/// Exit status for a missing sound file under `--strict`.
pub const MISSING_INPUT_EXIT_CODE: i32 = 2;

/// Available hex dumpers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HexDumpArg {
    /// External `xxd -i`
    #[default]
    Xxd,
    /// Built-in formatter, no external tool needed
    Native,
}

impl From<HexDumpArg> for HexDumpKind {
    fn from(arg: HexDumpArg) -> Self {
        match arg {
            HexDumpArg::Xxd => HexDumpKind::Xxd,
            HexDumpArg::Native => HexDumpKind::Native,
        }
    }
}

/// patchgen: build a sample player patch from a sound file
#[derive(Parser, Debug)]
#[command(name = "patchgen")]
#[command(about = "Build a ready-to-flash sample player patch from a sound file")]
#[command(version)]
pub struct Cli {
    /// Sound file to build the patch from
    pub sound_file: Option<PathBuf>,

    /// Template directory copied into every patch [default: source]
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Directory receiving the patch directories [default: patches]
    #[arg(long, value_name = "DIR")]
    pub patches_dir: Option<PathBuf>,

    /// sox executable used for resampling
    #[arg(long, value_name = "PROGRAM")]
    pub sox: Option<PathBuf>,

    /// xxd executable used for hex dumping
    #[arg(long, value_name = "PROGRAM")]
    pub xxd: Option<PathBuf>,

    /// Hex dumper producing sample.h [default: xxd]
    #[arg(long, value_enum)]
    pub hexdump: Option<HexDumpArg>,

    /// Print a JSON report of the generated files to stdout
    #[arg(long)]
    pub json: bool,

    /// Exit with a non-zero status when no sound file is given
    #[arg(long)]
    pub strict: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the configuration from the environment with flags applied.
    pub fn config(&self) -> PatchConfig {
        let mut config = PatchConfig::from_env();
        self.apply_to(&mut config);
        config
    }

    /// Overrides `config` with every flag that was given.
    pub fn apply_to(&self, config: &mut PatchConfig) {
        if let Some(ref dir) = self.template_dir {
            config.template_dir = dir.clone();
        }
        if let Some(ref dir) = self.patches_dir {
            config.patches_dir = dir.clone();
        }
        if let Some(ref program) = self.sox {
            config.tools.sox = program.clone();
        }
        if let Some(ref program) = self.xxd {
            config.tools.xxd = program.clone();
        }
        if let Some(hexdump) = self.hexdump {
            config.tools.hexdump = hexdump.into();
        }
    }

    /// Exit status after printing [`NO_INPUT_MESSAGE`]: 0, or
    /// [`MISSING_INPUT_EXIT_CODE`] under `--strict`.
    pub fn missing_input_exit_code(&self) -> i32 {
        if self.strict {
            MISSING_INPUT_EXIT_CODE
        } else {
            0
        }
    }

    /// Log level selected by `-v` flags. `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
