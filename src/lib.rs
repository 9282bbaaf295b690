//! patchgen: scaffolds sample player patches from sound files.
//!
//! A patch is a copy of a template sketch directory where the sound has been
//! resampled to unsigned 8-bit mono 8 kHz, embedded in `sample.h` as a
//! `PROGMEM` byte array, and the sketch and README are named after it.
//!
//! # Modules
//!
//! - [`naming`]: project name derivation
//! - [`scaffold`]: template copying
//! - [`convert`]: resampler and hex dumper (external tools and fakes)
//! - [`patch`]: header and README rewriting
//! - [`rename`]: sketch renaming
//! - [`generation`]: the pipeline tying the steps together
//! - [`config`], [`cli`], [`error`]: configuration, arguments and errors
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use patchgen::{PatchConfig, PatchPipeline};
//!
//! let pipeline = PatchPipeline::from_config(PatchConfig::from_env())?;
//! let report = pipeline.run(Path::new("samples/kick.wav"))?;
//! println!("{} bytes of audio", report.sound_length);
//! # Ok::<(), patchgen::PatchError>(())
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod generation;
pub mod naming;
pub mod patch;
pub mod rename;
pub mod scaffold;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::{HexDumpKind, PatchConfig, ToolConfig};
pub use convert::{AudioResampler, HexDumper};
pub use error::{ErrorCode, PatchError, Result};
pub use generation::PatchPipeline;
pub use types::{PatchLayout, PatchReport, ProjectName, SourceFile};
