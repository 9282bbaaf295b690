//! Audio conversion and hex dumping.
//!
//! Both steps are delegated to external tools behind small traits so the
//! pipeline can run against in-memory fakes:
//! - [`AudioResampler`]: input audio to unsigned 8-bit mono 8 kHz
//! - [`HexDumper`]: binary file to a C byte array declaration

mod command;
pub mod fake;
pub mod native;
pub mod sox;
pub mod xxd;

use std::path::Path;

use crate::config::{HexDumpKind, ToolConfig};
use crate::error::Result;

pub use fake::{FakeHexDumper, FakeResampler};
pub use native::{c_array_name, render_c_array, NativeHexDumper};
pub use sox::SoxResampler;
pub use xxd::XxdDumper;

/// Converts an audio file into the format the firmware plays back.
pub trait AudioResampler {
    /// Writes a resampled rendition of `input` to `output`.
    fn resample(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Encodes a binary file as a C byte array declaration.
pub trait HexDumper {
    /// Writes the declaration for `input`'s bytes to `output`.
    fn dump(&self, input: &Path, output: &Path) -> Result<()>;
}

impl<T: AudioResampler + ?Sized> AudioResampler for Box<T> {
    fn resample(&self, input: &Path, output: &Path) -> Result<()> {
        (**self).resample(input, output)
    }
}

impl<T: HexDumper + ?Sized> HexDumper for Box<T> {
    fn dump(&self, input: &Path, output: &Path) -> Result<()> {
        (**self).dump(input, output)
    }
}

/// Returns the hex dumper selected in `tools`.
pub fn hex_dumper_for(tools: &ToolConfig) -> Box<dyn HexDumper> {
    match tools.hexdump {
        HexDumpKind::Xxd => Box::new(XxdDumper::new(tools)),
        HexDumpKind::Native => Box::new(NativeHexDumper),
    }
}
